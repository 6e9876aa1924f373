use std::collections::VecDeque;

mod bounds;
mod collision;
mod debug;
mod error;
pub mod geometry;
mod options;
mod session;
mod stepper;
mod thumb;
mod view;
mod widget;

#[cfg(test)]
mod widget_tests;

pub use bounds::PriceBounds;
pub use error::RangeSliderError;
pub use options::RangeSliderOptions;
pub use session::SessionPhase;
pub use stepper::Direction;
pub use thumb::{ThumbKind, ThumbState, TrackRect};
pub use view::{SliderView, ThumbView, ViewUpdate};

use session::DragSession;
use thumb::{PriceTracking, ThumbStore};

/// Result of a pointer-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownOutcome {
    Started { session: u64 },
    /// A drag is already in progress; the press is ignored.
    AlreadyDragging,
    /// The previous drag is still settling; the press is ignored.
    Settling,
    /// The track has no measurable width yet.
    TrackNotReady,
}

impl DownOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    PointerUp,
    /// The pointer reached an edge of the track.
    Boundary,
    /// The min thumb was pushed left of the track origin and clamped back to it.
    Origin,
}

/// Summary of a finished drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionEnd {
    pub session: u64,
    pub kind: ThumbKind,
    pub reason: EndReason,
    /// False for a press without any step (a click): nothing was written back.
    pub committed: bool,
    pub steps: u32,
}

/// Result of a pointer-move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No drag in progress.
    Ignored,
    /// Below the next step threshold, or a move the thumb may not make.
    Held,
    /// The thumbs would collide; the value is held.
    Blocked,
    Stepped(ViewUpdate),
    Ended {
        end: SessionEnd,
        update: Option<ViewUpdate>,
    },
}

impl MoveOutcome {
    pub fn view_update(&self) -> Option<ViewUpdate> {
        match self {
            Self::Stepped(update) => Some(*update),
            Self::Ended { update, .. } => *update,
            Self::Ignored | Self::Held | Self::Blocked => None,
        }
    }
}

/// The selected `[min, max]` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RangeSelection {
    pub min: i64,
    pub max: i64,
}

impl RangeSelection {
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Dual-thumb range slider: the drag state machine plus both thumbs' persistent state.
///
/// Drive it headlessly with [`Self::pointer_down`], [`Self::pointer_move`], [`Self::pointer_up`]
/// and [`Self::tick`], applying the returned [`ViewUpdate`]s to a [`ThumbView`], or call
/// [`Self::ui`] to let egui do both.
#[derive(Debug)]
pub struct RangeSlider {
    bounds: PriceBounds,
    options: RangeSliderOptions,
    initial: RangeSelection,

    store: ThumbStore,
    tracking: PriceTracking,
    session: DragSession,
    view: SliderView,

    debug_log: VecDeque<String>,
    debug_seq: u64,
}

impl RangeSlider {
    /// # Errors
    /// If a configured initial value is outside `bounds`, or the initial values are out of order.
    pub fn new(bounds: PriceBounds, options: RangeSliderOptions) -> Result<Self, RangeSliderError> {
        let initial = RangeSelection {
            min: options.initial_min_value.unwrap_or(bounds.min()),
            max: options.initial_max_value.unwrap_or(bounds.max()),
        };
        for (kind, value) in [(ThumbKind::Min, initial.min), (ThumbKind::Max, initial.max)] {
            if !bounds.contains(value) {
                return Err(RangeSliderError::InitialValueOutOfRange {
                    kind,
                    value,
                    min: bounds.min(),
                    max: bounds.max(),
                });
            }
        }
        if initial.min > initial.max {
            return Err(RangeSliderError::InitialValuesOutOfOrder {
                min: initial.min,
                max: initial.max,
            });
        }

        let mut slider = Self {
            bounds,
            store: ThumbStore::new(initial.min, initial.max),
            tracking: PriceTracking::new(initial.min, initial.max, options.thumb_size),
            options,
            initial,
            session: DragSession::default(),
            view: SliderView::default(),
            debug_log: VecDeque::new(),
            debug_seq: 0,
        };
        slider.sync_view();
        Ok(slider)
    }

    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    pub fn options(&self) -> &RangeSliderOptions {
        &self.options
    }

    /// Committed state of one thumb.
    pub fn thumb(&self, kind: ThumbKind) -> &ThumbState {
        self.store.get(kind)
    }

    /// Committed values of both thumbs.
    pub fn selection(&self) -> RangeSelection {
        RangeSelection {
            min: self.store.get(ThumbKind::Min).current_value,
            max: self.store.get(ThumbKind::Max).current_value,
        }
    }

    /// Like [`Self::selection`], but reflecting uncommitted steps of the drag in progress.
    pub fn live_selection(&self) -> RangeSelection {
        let mut selection = self.selection();
        if let Some(active) = self.session.active() {
            match active.working.kind {
                ThumbKind::Min => selection.min = active.working.current_value,
                ThumbKind::Max => selection.max = active.working.current_value,
            }
        }
        selection
    }

    pub fn view(&self) -> &SliderView {
        &self.view
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.phase() == SessionPhase::Dragging
    }

    /// The thumb of the current (or still settling) drag.
    pub fn active_thumb(&self) -> Option<ThumbKind> {
        self.session.active_kind()
    }

    /// True while the dragged thumb is held back by a collision.
    pub fn is_blocked(&self) -> bool {
        self.is_dragging() && self.session.active().is_some_and(|a| a.blocked)
    }

    /// True once the current (or still settling) drag has made at least one step.
    pub fn has_moved(&self) -> bool {
        self.session.active().is_some_and(|a| a.has_moved)
    }

    /// How close the thumb of `kind` may get to the other one, measured from the far edge.
    pub fn other_thumb_deadzone(&self, kind: ThumbKind) -> f32 {
        self.tracking.deadzone(kind.other())
    }

    /// The value a thumb of `kind` would show at `percent` from its own edge.
    pub fn value_at_percent(&self, kind: ThumbKind, percent: f32) -> i64 {
        geometry::value_at_percent(kind, percent, self.bounds)
    }

    /// Projections of both committed thumbs.
    pub fn view_updates(&self) -> [ViewUpdate; 2] {
        ThumbKind::ALL.map(|kind| ViewUpdate::project(self.store.get(kind)))
    }

    /// Start dragging `kind` from `pointer_x`. `track` is the live bounding box of the track.
    pub fn pointer_down(
        &mut self,
        kind: ThumbKind,
        pointer_x: f32,
        track: TrackRect,
        now: f64,
    ) -> DownOutcome {
        self.tick(now);

        match self.session.phase() {
            SessionPhase::Dragging => return DownOutcome::AlreadyDragging,
            SessionPhase::Settling { .. } => {
                self.debug_log_event(format!("press ignored: settling kind={}", kind.as_str()));
                return DownOutcome::Settling;
            }
            SessionPhase::Idle => {}
        }

        if !track.is_ready() {
            log::debug!("range slider: track not ready ({track:?}); press ignored");
            self.debug_log_event(format!("press ignored: track not ready {track:?}"));
            return DownOutcome::TrackNotReady;
        }

        let mut working = self.store.get(kind).clone();
        if working.view_size > 0.0 && working.view_size != track.width {
            let scale = track.width / working.view_size;
            working.position *= scale;
            working.last_position *= scale;
        }
        working.track = track;
        working.view_size = track.width;
        working.step_size = geometry::step_size(track.width, self.bounds);
        working.session_start_x = pointer_x;
        let step_size = working.step_size;

        let session = self.session.start(now, working);
        log::debug!(
            "range slider: session START id={session} kind={} step_size={step_size}",
            kind.as_str()
        );
        self.debug_log_event(format!(
            "session START id={session} kind={} x={pointer_x} step_size={step_size}",
            kind.as_str()
        ));
        DownOutcome::Started { session }
    }

    /// Feed a pointer position while a drag is in progress.
    pub fn pointer_move(&mut self, pointer_x: f32, now: f64) -> MoveOutcome {
        let Some((kind, view_size)) = self
            .session
            .dragging_mut()
            .map(|a| (a.working.kind, a.working.view_size))
        else {
            return MoveOutcome::Ignored;
        };
        let other_deadzone = self.deadzone_on_track(kind.other(), view_size);
        let other_value = self.tracking.value(kind.other());
        let bounds = self.bounds;
        let thumb_size = self.options.thumb_size;
        let margin = self.options.safe_zone_margin;
        let inset = self.options.boundary_inset;

        let Some(active) = self.session.dragging_mut() else {
            return MoveOutcome::Ignored;
        };
        let dx = pointer_x - active.last_pointer_x;
        active.last_pointer_x = pointer_x;

        let state = &active.working;
        let candidate = pointer_x - state.session_start_x + state.last_position;
        let clearance =
            collision::safe_zone(candidate, state.view_size, other_deadzone, thumb_size, margin);
        let area = geometry::track_relative_x(pointer_x, state.track);
        let breached = collision::boundary_breached(area, state.view_size, inset);
        let was_blocked = active.blocked;
        active.blocked = collision::is_colliding(clearance);
        let blocked = active.blocked;

        if blocked != was_blocked {
            log::trace!("range slider: blocked={blocked} safe_zone={clearance}");
        }
        if breached {
            return self.end_drag_on_move(now, EndReason::Boundary);
        }
        if blocked {
            return MoveOutcome::Blocked;
        }
        if kind == ThumbKind::Max && candidate > 0.0 {
            return MoveOutcome::Held;
        }
        let Some(direction) = Direction::from_delta(dx) else {
            return MoveOutcome::Held;
        };

        let Some(active) = self.session.dragging_mut() else {
            return MoveOutcome::Ignored;
        };
        if !stepper::crosses(candidate, &active.working, direction) {
            return MoveOutcome::Held;
        }
        let next_value = active.working.current_value + direction.sign();
        if !bounds.contains(next_value) {
            return MoveOutcome::Held;
        }
        if collision::crosses_other_value(kind, next_value, other_value) {
            active.blocked = true;
            return MoveOutcome::Blocked;
        }

        stepper::apply_step(&mut active.working, candidate, direction);
        active.has_moved = true;
        active.steps += 1;

        if kind == ThumbKind::Min && active.working.position < 0.0 {
            // The origin becomes the new anchor for the stepped value.
            active.working.position = 0.0;
            active.working.step_count = 0;
            return self.end_drag_on_move(now, EndReason::Origin);
        }

        let update = ViewUpdate::project(&active.working);
        log::trace!(
            "range slider: step {} -> {} ({direction:?})",
            kind.as_str(),
            update.value
        );
        MoveOutcome::Stepped(update)
    }

    /// End the drag in progress, committing it if it made any step.
    pub fn pointer_up(&mut self, now: f64) -> Option<SessionEnd> {
        self.end_drag(now, EndReason::PointerUp)
    }

    /// Advance the settle timer. Returns true if a settled session was torn down.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(ended) = self.session.tick(now) else {
            return false;
        };
        self.debug_log_event(format!("session IDLE id={ended}"));
        true
    }

    /// Abort any drag and restore the initial values and positions.
    pub fn reset(&mut self) {
        self.session.clear();
        self.store = ThumbStore::new(self.initial.min, self.initial.max);
        self.tracking = PriceTracking::new(
            self.initial.min,
            self.initial.max,
            self.options.thumb_size,
        );
        self.sync_view();
        self.debug_log_event("reset");
    }

    /// Re-project both committed thumbs onto the built-in view.
    pub fn sync_view(&mut self) {
        for update in self.view_updates() {
            update.apply(&mut self.view);
        }
    }

    /// Deadzone of a committed thumb, rescaled if it was committed on a track of another width.
    fn deadzone_on_track(&self, kind: ThumbKind, view_size: f32) -> f32 {
        let state = self.store.get(kind);
        if state.view_size > 0.0 && state.view_size != view_size {
            let position = state.position * view_size / state.view_size;
            collision::deadzone(position, self.options.thumb_size)
        } else {
            self.tracking.deadzone(kind)
        }
    }

    fn end_drag_on_move(&mut self, now: f64, reason: EndReason) -> MoveOutcome {
        let Some(end) = self.end_drag(now, reason) else {
            return MoveOutcome::Ignored;
        };
        let update = (reason == EndReason::Origin && end.committed)
            .then(|| ViewUpdate::project(self.store.get(end.kind)));
        MoveOutcome::Ended { end, update }
    }

    /// Dragging → Settling, committing the working copy if the drag made any step.
    fn end_drag(&mut self, now: f64, reason: EndReason) -> Option<SessionEnd> {
        let active = self.session.finish(now, self.options.settle_delay())?;
        let end = SessionEnd {
            session: active.id,
            kind: active.working.kind,
            reason,
            committed: active.has_moved,
            steps: active.steps,
        };
        let duration = now - active.started_at;
        let committed = active.has_moved.then(|| active.working.clone());

        if let Some(mut state) = committed {
            state.last_position = state.position;
            self.tracking.record(&state, self.options.thumb_size);
            self.store.commit(state);
        }

        log::debug!(
            "range slider: session END id={} kind={} reason={reason:?} committed={} steps={}",
            end.session,
            end.kind.as_str(),
            end.committed,
            end.steps
        );
        self.debug_log_event(format!(
            "session END id={} kind={} reason={reason:?} committed={} steps={} value={} duration={duration:.3}s",
            end.session,
            end.kind.as_str(),
            end.committed,
            end.steps,
            self.store.get(end.kind).current_value,
        ));
        Some(end)
    }
}
