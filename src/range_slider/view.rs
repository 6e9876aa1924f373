use super::thumb::{ThumbKind, ThumbState};

/// Sink for the visual side of the slider: two thumb offsets and two numeric fields.
pub trait ThumbView {
    /// Offset of the thumb from its own edge (left for min, right for max), in percent of the track.
    fn set_thumb_offset(&mut self, kind: ThumbKind, percent: f32);

    fn set_input_value(&mut self, kind: ThumbKind, value: i64);
}

/// A computed projection of one thumb's state, ready to be applied to a [`ThumbView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewUpdate {
    pub kind: ThumbKind,
    pub offset_percent: f32,
    pub value: i64,
}

impl ViewUpdate {
    pub fn project(state: &ThumbState) -> Self {
        Self {
            kind: state.kind,
            offset_percent: state.offset_percent(),
            value: state.current_value,
        }
    }

    pub fn apply(&self, view: &mut dyn ThumbView) {
        view.set_thumb_offset(self.kind, self.offset_percent);
        view.set_input_value(self.kind, self.value);
    }
}

/// The view state the egui front-end paints from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliderView {
    pub min_offset: f32,
    pub max_offset: f32,
    pub min_text: String,
    pub max_text: String,
}

impl SliderView {
    pub fn offset(&self, kind: ThumbKind) -> f32 {
        match kind {
            ThumbKind::Min => self.min_offset,
            ThumbKind::Max => self.max_offset,
        }
    }

    pub fn text(&self, kind: ThumbKind) -> &str {
        match kind {
            ThumbKind::Min => &self.min_text,
            ThumbKind::Max => &self.max_text,
        }
    }
}

impl ThumbView for SliderView {
    fn set_thumb_offset(&mut self, kind: ThumbKind, percent: f32) {
        match kind {
            ThumbKind::Min => self.min_offset = percent,
            ThumbKind::Max => self.max_offset = percent,
        }
    }

    fn set_input_value(&mut self, kind: ThumbKind, value: i64) {
        let text = match kind {
            ThumbKind::Min => &mut self.min_text,
            ThumbKind::Max => &mut self.max_text,
        };
        text.clear();
        text.push_str(&value.to_string());
    }
}
