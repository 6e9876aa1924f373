//! Pure conversions between pixel offsets, percent-of-track positions and domain values.

use super::bounds::PriceBounds;
use super::thumb::{ThumbKind, TrackRect};

/// `offset / view_size * 100`.
#[inline]
pub fn pixels_to_percent(offset: f32, view_size: f32) -> f32 {
    offset / view_size * 100.0
}

/// Number of value units covered by `percent` of the track, rounded up.
///
/// The sign of `percent` is ignored; callers apply the direction per thumb kind.
pub fn percent_to_value(percent: f32, bounds: PriceBounds) -> i64 {
    let units = f64::from(percent.abs()) * bounds.span() as f64 / 100.0;
    units.ceil() as i64
}

/// The domain value a thumb of `kind` would show at `percent` from its own edge.
pub fn value_at_percent(kind: ThumbKind, percent: f32, bounds: PriceBounds) -> i64 {
    let delta = percent_to_value(percent, bounds).min(bounds.span());
    match kind {
        ThumbKind::Min => bounds.min() + delta,
        ThumbKind::Max => bounds.max() - delta,
    }
}

/// Pointer x re-based against the track's left edge.
#[inline]
pub fn track_relative_x(pointer_x: f32, track: TrackRect) -> f32 {
    pointer_x - track.left
}

/// Pixels per value unit for a track of `track_width`.
#[inline]
pub fn step_size(track_width: f32, bounds: PriceBounds) -> f32 {
    track_width / bounds.span() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: i64, max: i64) -> PriceBounds {
        PriceBounds::new(min, max).unwrap()
    }

    #[test]
    fn percent_of_track() {
        assert_eq!(pixels_to_percent(150.0, 300.0), 50.0);
        assert_eq!(pixels_to_percent(-75.0, 300.0), -25.0);
    }

    #[test]
    fn value_mapping_rounds_up_and_mirrors_for_max() {
        let b = bounds(0, 1000);
        assert_eq!(percent_to_value(0.0, b), 0);
        assert_eq!(percent_to_value(0.05, b), 1);
        assert_eq!(percent_to_value(-12.5, b), 125);

        assert_eq!(value_at_percent(ThumbKind::Min, 25.0, b), 250);
        assert_eq!(value_at_percent(ThumbKind::Max, 25.0, b), 750);
        assert_eq!(value_at_percent(ThumbKind::Max, 250.0, b), 0);
    }

    #[test]
    fn step_size_is_pixels_per_unit() {
        assert_eq!(step_size(500.0, bounds(0, 1000)), 0.5);
        assert_eq!(step_size(300.0, bounds(0, 100)), 3.0);
    }

    #[test]
    fn pointer_is_rebased_on_track_left() {
        let track = TrackRect::new(40.0, 300.0);
        assert_eq!(track_relative_x(41.0, track), 1.0);
        assert_eq!(track_relative_x(30.0, track), -10.0);
    }
}
