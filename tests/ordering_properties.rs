//! Property tests for the drag state machine, driven through the public API only.

use egui_range_slider::{PriceBounds, RangeSlider, RangeSliderOptions, ThumbKind, TrackRect};
use proptest::prelude::*;

#[derive(Clone, Debug)]
struct Drag {
    kind: ThumbKind,
    start_x: f32,
    moves: Vec<f32>,
}

fn arb_drag() -> impl Strategy<Value = Drag> {
    (
        prop::bool::ANY,
        5.0f32..395.0,
        prop::collection::vec(-40.0f32..40.0, 0..60),
    )
        .prop_map(|(is_min, start_x, moves)| Drag {
            kind: if is_min { ThumbKind::Min } else { ThumbKind::Max },
            start_x,
            moves,
        })
}

fn new_slider() -> RangeSlider {
    RangeSlider::new(
        PriceBounds::new(0, 200).unwrap(),
        RangeSliderOptions {
            initial_min_value: Some(40),
            initial_max_value: Some(160),
            ..Default::default()
        },
    )
    .unwrap()
}

fn value_of(slider: &RangeSlider, kind: ThumbKind) -> i64 {
    let selection = slider.live_selection();
    match kind {
        ThumbKind::Min => selection.min,
        ThumbKind::Max => selection.max,
    }
}

proptest! {
    /// The min value never exceeds the max value, during or after any drag.
    #[test]
    fn thumbs_never_cross(drags in prop::collection::vec(arb_drag(), 1..12)) {
        let mut slider = new_slider();
        let track = TrackRect::new(0.0, 400.0);
        let mut now = 0.0;

        for drag in drags {
            now += 1.0;
            slider.pointer_down(drag.kind, drag.start_x, track, now);

            let mut x = drag.start_x;
            for dx in drag.moves {
                x += dx;
                slider.pointer_move(x, now);
                let live = slider.live_selection();
                prop_assert!(live.min <= live.max, "live {live:?}");
            }

            slider.pointer_up(now);
            let committed = slider.selection();
            prop_assert!(committed.min <= committed.max, "committed {committed:?}");
            prop_assert!(committed.min >= 0 && committed.max <= 200);
        }
    }

    /// A single move event changes the dragged value by at most one unit.
    #[test]
    fn one_unit_per_event(drag in arb_drag()) {
        let mut slider = new_slider();
        slider.pointer_down(drag.kind, drag.start_x, TrackRect::new(0.0, 400.0), 1.0);

        let mut x = drag.start_x;
        let mut previous = value_of(&slider, drag.kind);
        for dx in drag.moves {
            x += dx;
            slider.pointer_move(x, 1.0);
            let current = value_of(&slider, drag.kind);
            prop_assert!((current - previous).abs() <= 1, "{previous} -> {current}");
            previous = current;
        }
    }

    /// The committed offsets are never negative, whatever the pointer does.
    #[test]
    fn committed_offsets_stay_on_the_track(drags in prop::collection::vec(arb_drag(), 1..8)) {
        let mut slider = new_slider();
        let track = TrackRect::new(0.0, 400.0);
        let mut now = 0.0;

        for drag in drags {
            now += 1.0;
            slider.pointer_down(drag.kind, drag.start_x, track, now);
            let mut x = drag.start_x;
            for dx in drag.moves {
                x += dx;
                slider.pointer_move(x, now);
            }
            slider.pointer_up(now);

            prop_assert!(slider.thumb(ThumbKind::Min).position >= 0.0);
            prop_assert!(slider.thumb(ThumbKind::Max).position <= 0.0);
            for update in slider.view_updates() {
                prop_assert!(update.offset_percent >= 0.0);
            }
        }
    }
}
