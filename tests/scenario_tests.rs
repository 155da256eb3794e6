//! End-to-end interaction scenarios against the public surface.
//!
//! Each test walks one complete user-visible flow through
//! `ScrollingSegmentedControl` and observes only public state and the
//! emitted effects, the way an embedding renderer would.

use scrolling_segments::config::Color;
use scrolling_segments::model::{
    ControlStateFlag, Effect, GesturePhase, HighlightTarget, Point, Rect, Size,
};
use scrolling_segments::{ScrollingSegmentedControl, NO_SEGMENT};

fn touch(x: f32) -> Point {
    Point::new(x, 16.0)
}

/// Two titles in a 160pt container; selecting the last segment lands on
/// offset 0 (reverse-order geometry).
#[test]
fn selecting_the_last_of_two_segments_scrolls_to_offset_zero() {
    let mut control = ScrollingSegmentedControl::with_titles(["First", "Second"]);
    control.relayout(Size::new(160.0, 32.0));
    control.set_selected_segment_index(0);
    assert_eq!(control.state().scroll_offset(), 80.0);

    let effects = control.set_selected_segment_index(1);

    assert_eq!(control.state().scroll_offset(), 0.0);
    assert!(effects.contains(&Effect::SetScrollOffset {
        x: 0.0,
        animated: true,
    }));
}

/// Four segments, selection set to 5: snaps to the sentinel and reports
/// the transition.
#[test]
fn out_of_range_selection_snaps_to_no_segment() {
    let mut control = ScrollingSegmentedControl::with_titles(["a", "b", "c", "d"]);
    control.relayout(Size::new(200.0, 32.0));
    control.set_selected_segment_index(2);

    let effects = control.set_selected_segment_index(5);

    assert_eq!(control.selected_segment_index(), NO_SEGMENT);
    assert!(effects.contains(&Effect::ValueChanged {
        previous: 2,
        current: NO_SEGMENT,
    }));
}

/// Drag ends at 1.5 page widths with 4 segments: the complement rounds
/// to 2, committing segment 1.
#[test]
fn drag_settling_mid_page_commits_the_nearest_segment() {
    let mut control = ScrollingSegmentedControl::with_titles(["a", "b", "c", "d"]);
    control.relayout(Size::new(200.0, 32.0));
    control.set_selected_segment_index(3);

    control.scroll_did_scroll(75.0);
    control.scroll_drag_ended(false);

    assert_eq!(control.selected_segment_index(), 1);
}

/// Press begins over segment 2, slides to 3, releases over 3: the
/// highlight walks [2 begin] → [2→3 change] → [3 end] and the release
/// commits 3.
#[test]
fn press_slide_release_highlights_then_commits() {
    let mut control = ScrollingSegmentedControl::with_titles(["a", "b", "c", "d"]);
    control.relayout(Size::new(200.0, 32.0));

    let began = control.handle_segment_press(GesturePhase::Began, touch(110.0));
    assert_eq!(
        began,
        vec![Effect::SetHighlighted {
            target: HighlightTarget::Segment(2),
            highlighted: true,
            duration_secs: 0.1,
        }]
    );

    let changed = control.handle_segment_press(GesturePhase::Changed, touch(160.0));
    assert_eq!(
        changed,
        vec![
            Effect::SetHighlighted {
                target: HighlightTarget::Segment(2),
                highlighted: false,
                duration_secs: 0.1,
            },
            Effect::SetHighlighted {
                target: HighlightTarget::Segment(3),
                highlighted: true,
                duration_secs: 0.1,
            },
        ]
    );

    let ended = control.handle_segment_press(GesturePhase::Ended, touch(160.0));
    assert_eq!(
        ended[0],
        Effect::SetHighlighted {
            target: HighlightTarget::Segment(3),
            highlighted: false,
            duration_secs: 0.25,
        }
    );
    assert_eq!(control.selected_segment_index(), 3);
    assert_eq!(control.highlighted_segment_index(), None);
}

/// Titles reassigned from two to zero while segment 1 is selected: the
/// selection empties and the indicator hides without animation.
#[test]
fn emptying_the_titles_hides_the_indicator_without_animation() {
    let mut control = ScrollingSegmentedControl::with_titles(["First", "Second"]);
    control.relayout(Size::new(160.0, 32.0));
    control.set_selected_segment_index(1);

    let effects = control.set_segment_titles(Vec::<String>::new());

    assert_eq!(control.selected_segment_index(), NO_SEGMENT);
    assert!(effects.contains(&Effect::SetIndicatorVisible {
        visible: false,
        animated: false,
    }));
    assert!(effects.contains(&Effect::ValueChanged {
        previous: 1,
        current: NO_SEGMENT,
    }));
}

/// A full indicator drag: control highlight on touch, per-frame mask
/// updates while panning, commit on settle, highlight off on release.
#[test]
fn indicator_drag_full_lifecycle() {
    let mut control = ScrollingSegmentedControl::with_titles(["a", "b", "c", "d"]);
    control.relayout(Size::new(200.0, 32.0));
    control.set_selected_segment_index(3); // offset 0

    let began = control.handle_slider_drag(GesturePhase::Began);
    assert!(began.contains(&Effect::SetHighlighted {
        target: HighlightTarget::Control,
        highlighted: true,
        duration_secs: 0.25,
    }));

    // The pan recognizes simultaneously and streams positions.
    for (frame, offset) in [(1, 20.0), (2, 40.0), (3, 60.0)] {
        let effects = control.scroll_did_scroll(offset);
        assert_eq!(effects.len(), 1, "frame {frame} must emit one mask update");
        assert_eq!(
            effects[0],
            Effect::SetMaskRect(Rect::new(150.0 - offset, 0.0, 50.0, 32.0))
        );
    }

    let released = control.handle_slider_drag(GesturePhase::Ended);
    assert!(released.contains(&Effect::SetHighlighted {
        target: HighlightTarget::Control,
        highlighted: false,
        duration_secs: 0.25,
    }));

    // Paging decelerates to the next boundary and settles.
    control.scroll_drag_ended(true);
    control.scroll_did_scroll(50.0);
    let settled = control.scroll_deceleration_ended();

    assert_eq!(control.selected_segment_index(), 2);
    assert!(settled.contains(&Effect::ValueChanged {
        previous: 3,
        current: 2,
    }));
    assert!(
        !settled
            .iter()
            .any(|effect| matches!(effect, Effect::SetScrollOffset { .. })),
        "settled commit must not bounce the scroll surface"
    );
}

/// First selection out of the no-selection state fades the indicator in
/// and positions it without animation.
#[test]
fn first_selection_fades_the_indicator_in() {
    let mut control = ScrollingSegmentedControl::with_titles(["a", "b", "c"]);
    control.relayout(Size::new(300.0, 32.0));

    let effects = control.set_selected_segment_index(0);

    assert!(effects.contains(&Effect::SetIndicatorVisible {
        visible: true,
        animated: true,
    }));
    assert!(effects.contains(&Effect::SetScrollOffset {
        x: 200.0,
        animated: false,
    }));
}

/// Resizing the container re-derives offset and mask from the committed
/// selection without animating.
#[test]
fn container_resize_keeps_offset_and_mask_consistent() {
    let mut control = ScrollingSegmentedControl::with_titles(["a", "b", "c", "d"]);
    control.relayout(Size::new(200.0, 32.0));
    control.set_selected_segment_index(0);
    assert_eq!(control.state().scroll_offset(), 150.0);

    let effects = control.relayout(Size::new(400.0, 40.0));

    assert!(effects.contains(&Effect::SetScrollOffset {
        x: 300.0,
        animated: false,
    }));
    assert_eq!(control.mask_rect(), Rect::new(0.0, 0.0, 100.0, 40.0));
}

/// Styling round-trips through the public surface.
#[test]
fn styling_surface_round_trips() {
    let mut control = ScrollingSegmentedControl::new();

    assert_eq!(
        control.background_color(ControlStateFlag::Normal),
        Some(Color::rgb(0xF1F2F2))
    );

    control.set_segment_color(Some(Color::rgb(0x336699)), ControlStateFlag::Selected);
    assert_eq!(
        control.segment_color(ControlStateFlag::Selected),
        Some(Color::rgb(0x336699))
    );

    let effects = control.set_corner_radius(4.0);
    assert_eq!(effects, vec![Effect::SetCornerRadius(4.0)]);
}
