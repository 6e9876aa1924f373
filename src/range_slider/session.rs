use super::thumb::{ThumbKind, ThumbState};

/// Where the drag state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionPhase {
    Idle,
    Dragging,
    /// The drag has ended; session state is torn down once `until` (seconds) is reached.
    Settling { until: f64 },
}

#[derive(Debug)]
pub(super) struct DragSession {
    next_id: u64,
    phase: SessionPhase,
    active: Option<ActiveSession>,
}

/// Transient state of one drag, from pointer-down until the settle delay has passed.
#[derive(Debug)]
pub(super) struct ActiveSession {
    pub(super) id: u64,
    pub(super) started_at: f64,
    /// Working copy of the dragged thumb; only written back to the store on commit.
    pub(super) working: ThumbState,
    pub(super) last_pointer_x: f32,
    pub(super) has_moved: bool,
    pub(super) blocked: bool,
    pub(super) steps: u32,
}

impl Default for DragSession {
    fn default() -> Self {
        Self {
            next_id: 1,
            phase: SessionPhase::Idle,
            active: None,
        }
    }
}

impl DragSession {
    pub(super) fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub(super) fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    pub(super) fn active_kind(&self) -> Option<ThumbKind> {
        self.active.as_ref().map(|a| a.working.kind)
    }

    /// The session being dragged right now; `None` while idle or settling.
    pub(super) fn dragging_mut(&mut self) -> Option<&mut ActiveSession> {
        match self.phase {
            SessionPhase::Dragging => self.active.as_mut(),
            SessionPhase::Idle | SessionPhase::Settling { .. } => None,
        }
    }

    pub(super) fn start(&mut self, now: f64, working: ThumbState) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id.saturating_add(1);
        self.active = Some(ActiveSession {
            id,
            started_at: now,
            last_pointer_x: working.session_start_x,
            working,
            has_moved: false,
            blocked: false,
            steps: 0,
        });
        self.phase = SessionPhase::Dragging;
        id
    }

    /// Dragging → Settling. Returns the session so the caller can commit it.
    pub(super) fn finish(&mut self, now: f64, settle_delay: f64) -> Option<&ActiveSession> {
        if self.phase != SessionPhase::Dragging {
            return None;
        }
        self.phase = SessionPhase::Settling {
            until: now + settle_delay.max(0.0),
        };
        self.active.as_ref()
    }

    /// Settling → Idle once the deadline has passed. Returns the id of the torn-down session.
    pub(super) fn tick(&mut self, now: f64) -> Option<u64> {
        let SessionPhase::Settling { until } = self.phase else {
            return None;
        };
        if now < until {
            return None;
        }
        self.phase = SessionPhase::Idle;
        self.active.take().map(|ended| ended.id)
    }

    /// Seconds left before a settling session is torn down.
    pub(super) fn settle_remaining(&self, now: f64) -> Option<f64> {
        match self.phase {
            SessionPhase::Settling { until } => Some((until - now).max(0.0)),
            SessionPhase::Idle | SessionPhase::Dragging => None,
        }
    }

    pub(super) fn clear(&mut self) {
        self.phase = SessionPhase::Idle;
        self.active = None;
    }
}
