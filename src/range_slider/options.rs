const MAX_SETTLE_DELAY: f64 = 60.0;

/// Options for [`super::RangeSlider`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RangeSliderOptions {
    /// Width (and height) of a thumb, in points.
    ///
    /// Also the initial deadzone of each thumb before it has ever been dragged.
    pub thumb_size: f32,

    /// Extra clearance granted to the dragged thumb when computing the safe zone.
    ///
    /// Larger values let the thumbs get visually closer before the drag is blocked.
    pub safe_zone_margin: f32,

    /// A drag ends as soon as the pointer is at most this far from the left edge of the track
    /// (or at/beyond the right edge).
    pub boundary_inset: f32,

    /// Seconds between the end of a drag and the point where a new drag may start.
    ///
    /// Absorbs trailing pointer events that arrive right after release.
    /// Clamped to `0.0..=60.0`; NaN counts as zero.
    pub settle_delay: f64,

    /// Starting value of the min thumb. `None` means the lower price bound.
    pub initial_min_value: Option<i64>,

    /// Starting value of the max thumb. `None` means the upper price bound.
    pub initial_max_value: Option<i64>,

    /// Preferred track width in points; clamped to the available width.
    pub desired_width: f32,

    /// Height of the painted track bar in points.
    pub track_height: f32,

    /// If true, show the two numeric read-outs below the track.
    pub show_inputs: bool,

    /// If true, hovering the idle track shows the value under the pointer.
    pub hover_readout: bool,

    /// If true, record session events in a small ring buffer (see [`super::RangeSlider::debug_log_text`]).
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,
}

impl Default for RangeSliderOptions {
    fn default() -> Self {
        Self {
            thumb_size: 20.0,
            safe_zone_margin: 5.0,
            boundary_inset: 1.0,
            settle_delay: 0.3,
            initial_min_value: None,
            initial_max_value: None,
            desired_width: 300.0,
            track_height: 6.0,
            show_inputs: true,
            hover_readout: true,
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}

impl RangeSliderOptions {
    pub(crate) fn debug_capacity(&self) -> usize {
        self.debug_event_log_capacity.clamp(1, 10_000)
    }

    pub(crate) fn settle_delay(&self) -> f64 {
        if self.settle_delay.is_nan() {
            return 0.0;
        }
        self.settle_delay.clamp(0.0, MAX_SETTLE_DELAY)
    }
}
