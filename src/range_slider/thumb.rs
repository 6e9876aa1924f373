use egui::Rect;

use super::collision;
use super::geometry::pixels_to_percent;

/// Which of the two handles a piece of state belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ThumbKind {
    /// Anchored to the left edge; moves the lower bound upward from `min_price`.
    Min,
    /// Anchored to the right edge; moves the upper bound downward from `max_price`.
    Max,
}

impl ThumbKind {
    pub const ALL: [Self; 2] = [Self::Min, Self::Max];

    #[inline]
    pub fn other(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Max => Self::Min,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// Horizontal extent of the track, measured once per session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TrackRect {
    pub left: f32,
    pub width: f32,
}

impl TrackRect {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.left(), rect.width())
    }

    /// Percent math is undefined until the track has been laid out with a positive width.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}

/// Persistent per-thumb drag state.
///
/// `position` is signed: the min thumb grows rightwards (positive), the max thumb leftwards
/// (negative). Its magnitude is the thumb's pixel offset from its own edge of the track.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ThumbState {
    pub kind: ThumbKind,
    pub track: TrackRect,
    pub view_size: f32,
    pub position: f32,
    pub last_position: f32,
    pub session_start_x: f32,
    /// Pixels per unit of value ("split").
    pub step_size: f32,
    pub step_count: i64,
    pub current_value: i64,
}

impl ThumbState {
    pub(super) fn new(kind: ThumbKind, value: i64) -> Self {
        Self {
            kind,
            track: TrackRect::default(),
            view_size: 0.0,
            position: 0.0,
            last_position: 0.0,
            session_start_x: 0.0,
            step_size: 0.0,
            step_count: 0,
            current_value: value,
        }
    }

    /// Offset of the thumb from its own edge, in percent of the last measured track width.
    pub fn offset_percent(&self) -> f32 {
        if self.view_size > 0.0 {
            pixels_to_percent(self.position.abs(), self.view_size)
        } else {
            0.0
        }
    }
}

/// Last committed value and deadzone for each thumb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct PriceTracking {
    min_value: i64,
    max_value: i64,
    min_deadzone: f32,
    max_deadzone: f32,
}

impl PriceTracking {
    pub(super) fn new(min_value: i64, max_value: i64, thumb_size: f32) -> Self {
        Self {
            min_value,
            max_value,
            min_deadzone: thumb_size,
            max_deadzone: thumb_size,
        }
    }

    pub(super) fn value(&self, kind: ThumbKind) -> i64 {
        match kind {
            ThumbKind::Min => self.min_value,
            ThumbKind::Max => self.max_value,
        }
    }

    pub(super) fn deadzone(&self, kind: ThumbKind) -> f32 {
        match kind {
            ThumbKind::Min => self.min_deadzone,
            ThumbKind::Max => self.max_deadzone,
        }
    }

    pub(super) fn record(&mut self, state: &ThumbState, thumb_size: f32) {
        let deadzone = collision::deadzone(state.position, thumb_size);
        match state.kind {
            ThumbKind::Min => {
                self.min_value = state.current_value;
                self.min_deadzone = deadzone;
            }
            ThumbKind::Max => {
                self.max_value = state.current_value;
                self.max_deadzone = deadzone;
            }
        }
    }
}

/// The pair of persistent thumb states, owned by the controller.
#[derive(Clone, Debug)]
pub(super) struct ThumbStore {
    min: ThumbState,
    max: ThumbState,
}

impl ThumbStore {
    pub(super) fn new(min_value: i64, max_value: i64) -> Self {
        Self {
            min: ThumbState::new(ThumbKind::Min, min_value),
            max: ThumbState::new(ThumbKind::Max, max_value),
        }
    }

    pub(super) fn get(&self, kind: ThumbKind) -> &ThumbState {
        match kind {
            ThumbKind::Min => &self.min,
            ThumbKind::Max => &self.max,
        }
    }

    pub(super) fn commit(&mut self, state: ThumbState) {
        match state.kind {
            ThumbKind::Min => self.min = state,
            ThumbKind::Max => self.max = state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadzone_follows_committed_position() {
        let mut tracking = PriceTracking::new(0, 100, 20.0);
        assert_eq!(tracking.deadzone(ThumbKind::Max), 20.0);

        let mut max = ThumbState::new(ThumbKind::Max, 90);
        max.position = -45.0;
        tracking.record(&max, 20.0);

        assert_eq!(tracking.value(ThumbKind::Max), 90);
        assert_eq!(tracking.deadzone(ThumbKind::Max), 65.0);
        assert_eq!(tracking.deadzone(ThumbKind::Min), 20.0);
    }

    #[test]
    fn unmeasured_thumb_has_zero_offset() {
        let state = ThumbState::new(ThumbKind::Min, 3);
        assert_eq!(state.offset_percent(), 0.0);
        assert!(!state.track.is_ready());
    }
}
