use super::thumb::ThumbState;

/// Horizontal direction of a single pointer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// `None` for a move with no horizontal component.
    pub fn from_delta(dx: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(Self::Right)
        } else if dx < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }

    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// Pixel position the next step in `direction` has to reach.
pub(super) fn threshold(step_size: f32, step_count: i64, direction: Direction) -> f32 {
    step_size * (step_count + direction.sign()) as f32
}

pub(super) fn crosses(candidate: f32, state: &ThumbState, direction: Direction) -> bool {
    let target = threshold(state.step_size, state.step_count, direction);
    match direction {
        Direction::Right => candidate >= target,
        Direction::Left => candidate <= target,
    }
}

/// Commit exactly one step, however far past the threshold `candidate` is.
pub(super) fn apply_step(state: &mut ThumbState, candidate: f32, direction: Direction) {
    state.position = candidate;
    state.step_count += direction.sign();
    state.current_value += direction.sign();
}
