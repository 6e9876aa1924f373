use egui::{Context, Event, Modifiers, PointerButton, Pos2, Rect, Vec2};

use super::{PriceBounds, RangeSlider, RangeSliderOptions, SessionPhase, ThumbKind};

fn new_slider() -> RangeSlider {
    RangeSlider::new(
        PriceBounds::new(0, 100).unwrap(),
        RangeSliderOptions::default(),
    )
    .unwrap()
}

/// Run one pass and return the track rect and whether the slider reported a change.
fn run_pass(
    ctx: &Context,
    slider: &mut RangeSlider,
    time: f64,
    events: Vec<Event>,
) -> (Rect, bool) {
    run_pass_covered(ctx, slider, time, events, None)
}

/// Like [`run_pass`], optionally with a foreground area covering `cover`.
fn run_pass_covered(
    ctx: &Context,
    slider: &mut RangeSlider,
    time: f64,
    events: Vec<Event>,
    cover: Option<Rect>,
) -> (Rect, bool) {
    let raw = egui::RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
        time: Some(time),
        events,
        ..Default::default()
    };

    ctx.begin_pass(raw);
    let mut track = Rect::NOTHING;
    let mut changed = false;
    egui::CentralPanel::default().show(ctx, |ui| {
        let response = slider.ui(ui);
        track = response.rect;
        changed = response.changed();
    });
    if let Some(cover) = cover {
        egui::Area::new(egui::Id::new("cover"))
            .order(egui::Order::Foreground)
            .fixed_pos(cover.min)
            .show(ctx, |ui| {
                ui.allocate_exact_size(cover.size(), egui::Sense::click());
            });
    }
    let _ = ctx.end_pass();

    (track, changed)
}

fn press(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    }
}

#[test]
fn first_pass_shows_the_bounds() {
    let ctx = Context::default();
    let mut slider = new_slider();
    let (track, changed) = run_pass(&ctx, &mut slider, 0.0, Vec::new());

    assert!(track.width() > 0.0);
    assert!(!changed);
    assert_eq!(slider.view().text(ThumbKind::Min), "0");
    assert_eq!(slider.view().text(ThumbKind::Max), "100");

    let min = slider.thumb_rect(track, ThumbKind::Min);
    let max = slider.thumb_rect(track, ThumbKind::Max);
    assert_eq!(min.left(), track.left());
    assert_eq!(max.right(), track.right());
}

#[test]
fn dragging_the_min_thumb_steps_the_read_out() {
    let ctx = Context::default();
    let mut slider = new_slider();
    let (track, _) = run_pass(&ctx, &mut slider, 0.0, Vec::new());
    assert_eq!(track.width(), 300.0);

    let grab = slider.thumb_rect(track, ThumbKind::Min).center();
    run_pass(
        &ctx,
        &mut slider,
        0.1,
        vec![Event::PointerMoved(grab), press(grab, true)],
    );
    assert!(slider.is_dragging());
    assert_eq!(slider.active_thumb(), Some(ThumbKind::Min));

    // 3px per unit on a 300px track.
    let (_, changed) = run_pass(
        &ctx,
        &mut slider,
        0.2,
        vec![Event::PointerMoved(grab + Vec2::new(4.0, 0.0))],
    );
    assert!(changed);
    let (_, changed) = run_pass(
        &ctx,
        &mut slider,
        0.3,
        vec![Event::PointerMoved(grab + Vec2::new(8.0, 0.0))],
    );
    assert!(changed);
    assert_eq!(slider.view().text(ThumbKind::Min), "2");

    let release = grab + Vec2::new(8.0, 0.0);
    run_pass(&ctx, &mut slider, 0.4, vec![press(release, false)]);
    assert!(matches!(slider.phase(), SessionPhase::Settling { .. }));
    assert_eq!(slider.selection().min, 2);

    run_pass(&ctx, &mut slider, 1.0, Vec::new());
    assert_eq!(slider.phase(), SessionPhase::Idle);

    let moved = slider.thumb_rect(track, ThumbKind::Min);
    assert!(moved.left() > track.left());
}

#[test]
fn press_on_the_bare_track_does_not_start_a_drag() {
    let ctx = Context::default();
    let mut slider = new_slider();
    let (track, _) = run_pass(&ctx, &mut slider, 0.0, Vec::new());

    let middle = track.center();
    run_pass(
        &ctx,
        &mut slider,
        0.1,
        vec![Event::PointerMoved(middle), press(middle, true)],
    );
    assert_eq!(slider.phase(), SessionPhase::Idle);
}

#[test]
fn press_under_a_covering_area_does_not_start_a_drag() {
    let ctx = Context::default();
    let mut slider = new_slider();
    let (track, _) = run_pass(&ctx, &mut slider, 0.0, Vec::new());
    let cover = Some(track.expand(8.0));

    run_pass_covered(&ctx, &mut slider, 0.05, Vec::new(), cover);
    run_pass_covered(&ctx, &mut slider, 0.06, Vec::new(), cover);

    let grab = slider.thumb_rect(track, ThumbKind::Min).center();
    run_pass_covered(
        &ctx,
        &mut slider,
        0.1,
        vec![Event::PointerMoved(grab), press(grab, true)],
        cover,
    );
    assert_eq!(slider.phase(), SessionPhase::Idle);
}

#[test]
fn unbounded_settle_delay_does_not_panic_on_release() {
    let ctx = Context::default();
    let mut slider = RangeSlider::new(
        PriceBounds::new(0, 100).unwrap(),
        RangeSliderOptions {
            settle_delay: f64::INFINITY,
            ..Default::default()
        },
    )
    .unwrap();
    let (track, _) = run_pass(&ctx, &mut slider, 0.0, Vec::new());

    let grab = slider.thumb_rect(track, ThumbKind::Min).center();
    run_pass(
        &ctx,
        &mut slider,
        0.1,
        vec![Event::PointerMoved(grab), press(grab, true)],
    );
    assert!(slider.is_dragging());

    run_pass(&ctx, &mut slider, 0.2, vec![press(grab, false)]);
    assert!(matches!(slider.phase(), SessionPhase::Settling { .. }));

    run_pass(&ctx, &mut slider, 61.0, Vec::new());
    assert_eq!(slider.phase(), SessionPhase::Idle);
}
