//! A dual-thumb range slider for [`egui`].
//!
//! Two thumbs ("min" and "max") are dragged along one track. Movement is applied in notched,
//! one-unit steps, the thumbs are kept from overlapping, and two numeric read-outs mirror the
//! current values.
//!
//! The interaction engine ([`RangeSlider`]) is headless: feed it pointer events and apply the
//! returned [`ViewUpdate`]s to any [`ThumbView`]. [`RangeSlider::ui`] does both for an `egui::Ui`.

#![forbid(unsafe_code)]

pub mod range_slider;

pub use range_slider::{
    Direction, DownOutcome, EndReason, MoveOutcome, PriceBounds, RangeSelection, RangeSlider,
    RangeSliderError, RangeSliderOptions, SessionEnd, SessionPhase, SliderView, ThumbKind,
    ThumbState, ThumbView, TrackRect, ViewUpdate,
};
pub use range_slider::geometry;
