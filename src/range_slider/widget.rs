use std::time::Duration;

use egui::{Rect, Response, Sense, Stroke, TextEdit, Ui, pos2, vec2};

use super::RangeSlider;
use super::geometry::{pixels_to_percent, track_relative_x};
use super::thumb::{ThumbKind, TrackRect};

impl RangeSlider {
    /// Show the track, both thumbs and (optionally) the two numeric read-outs.
    ///
    /// The returned response covers the track; it is marked as changed on every committed step.
    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        let thumb = self.options.thumb_size;
        let width = self
            .options
            .desired_width
            .min(ui.available_width())
            .max(thumb * 2.0);
        let height = thumb.max(self.options.track_height);
        let (rect, mut response) =
            ui.allocate_exact_size(vec2(width, height), Sense::click_and_drag());

        if self.handle_input(ui, &response) {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect);
        }

        if self.options.hover_readout
            && !self.is_dragging()
            && let Some(hover) = response.hover_pos()
        {
            let percent = pixels_to_percent(
                track_relative_x(hover.x, TrackRect::from_rect(rect)),
                rect.width(),
            );
            let value = self.value_at_percent(ThumbKind::Min, percent);
            response = response.on_hover_text(value.to_string());
        }

        if self.options.show_inputs {
            self.inputs_ui(ui);
        }

        response
    }

    /// Screen rect of a thumb inside `track`, as last projected onto the view.
    pub fn thumb_rect(&self, track: Rect, kind: ThumbKind) -> Rect {
        let size = self.options.thumb_size;
        let offset = self.view.offset(kind) / 100.0 * track.width();
        let left = match kind {
            ThumbKind::Min => track.left() + offset,
            ThumbKind::Max => track.right() - offset - size,
        };
        Rect::from_min_size(pos2(left, track.center().y - size / 2.0), vec2(size, size))
    }

    fn thumb_at(&self, track: Rect, pos: egui::Pos2) -> Option<ThumbKind> {
        ThumbKind::ALL
            .into_iter()
            .map(|kind| (kind, self.thumb_rect(track, kind)))
            .filter(|(_, rect)| rect.contains(pos))
            .min_by(|a, b| {
                let da = a.1.center().distance(pos);
                let db = b.1.center().distance(pos);
                da.total_cmp(&db)
            })
            .map(|(kind, _)| kind)
    }

    /// Translate this frame's pointer state into controller events. Returns true on a step.
    ///
    /// Presses only count when they land on the track's own response, so anything layered
    /// above the slider keeps its clicks.
    fn handle_input(&mut self, ui: &Ui, response: &Response) -> bool {
        let rect = response.rect;
        let (pointer, pressed, released, now) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.time,
            )
        });

        self.tick(now);

        if pressed
            && response.contains_pointer()
            && let Some(pos) = pointer
            && rect.contains(pos)
            && let Some(kind) = self.thumb_at(rect, pos)
        {
            self.pointer_down(kind, pos.x, TrackRect::from_rect(rect), now);
        }

        let mut changed = false;
        if self.is_dragging()
            && let Some(pos) = pointer
        {
            let outcome = self.pointer_move(pos.x, now);
            if let Some(update) = outcome.view_update() {
                update.apply(&mut self.view);
                changed = true;
            }
        }

        if released {
            self.pointer_up(now);
        }

        if let Some(remaining) = self.session.settle_remaining(now)
            && let Ok(after) = Duration::try_from_secs_f64(remaining)
        {
            ui.ctx().request_repaint_after(after);
        }

        changed
    }

    fn paint(&self, ui: &Ui, rect: Rect) {
        let painter = ui.painter();
        let visuals = ui.visuals();
        let radius = self.options.track_height / 2.0;

        let bar_size = vec2(rect.width(), self.options.track_height);
        let bar = Rect::from_center_size(rect.center(), bar_size);
        painter.rect_filled(bar, radius, visuals.widgets.inactive.bg_fill);

        let min_rect = self.thumb_rect(rect, ThumbKind::Min);
        let max_rect = self.thumb_rect(rect, ThumbKind::Max);
        let fill = Rect::from_min_max(
            pos2(min_rect.center().x, bar.top()),
            pos2(max_rect.center().x, bar.bottom()),
        );
        if fill.width() > 0.0 {
            painter.rect_filled(fill, radius, visuals.selection.bg_fill);
        }

        let dragged = self.active_thumb().filter(|_| self.is_dragging());
        for (kind, thumb) in [(ThumbKind::Min, min_rect), (ThumbKind::Max, max_rect)] {
            let widget = if dragged == Some(kind) {
                &visuals.widgets.active
            } else {
                &visuals.widgets.inactive
            };
            let stroke = if dragged == Some(kind) && self.is_blocked() {
                Stroke::new(widget.fg_stroke.width, visuals.error_fg_color)
            } else {
                widget.fg_stroke
            };
            painter.circle(thumb.center(), thumb.width() / 2.0, widget.bg_fill, stroke);
        }
    }

    fn inputs_ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Min");
            ui.add(
                TextEdit::singleline(&mut self.view.min_text)
                    .desired_width(64.0)
                    .interactive(false),
            );
            ui.label("Max");
            ui.add(
                TextEdit::singleline(&mut self.view.max_text)
                    .desired_width(64.0)
                    .interactive(false),
            );
        });
    }
}
