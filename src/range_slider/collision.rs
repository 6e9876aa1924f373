use super::thumb::ThumbKind;

/// Distance a thumb occupies from its own edge: its offset plus its own width.
#[inline]
pub(super) fn deadzone(position: f32, thumb_size: f32) -> f32 {
    position.abs() + thumb_size
}

/// Clearance left between a thumb at `candidate` and the other thumb's deadzone.
///
/// Non-positive means the thumbs would overlap.
pub(super) fn safe_zone(
    candidate: f32,
    view_size: f32,
    other_deadzone: f32,
    thumb_size: f32,
    margin: f32,
) -> f32 {
    let remaining = view_size - candidate.abs();
    remaining - other_deadzone - thumb_size + margin
}

#[inline]
pub(super) fn is_colliding(safe_zone: f32) -> bool {
    safe_zone.floor() <= 0.0
}

/// Would `new_value` for `kind` pass the other thumb's committed value?
pub(super) fn crosses_other_value(kind: ThumbKind, new_value: i64, other_value: i64) -> bool {
    match kind {
        ThumbKind::Min => new_value > other_value,
        ThumbKind::Max => new_value < other_value,
    }
}

/// `area` is the pointer's track-relative x.
#[inline]
pub(super) fn boundary_breached(area: f32, view_size: f32, inset: f32) -> bool {
    area <= inset || area >= view_size
}
