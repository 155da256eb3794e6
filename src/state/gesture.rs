//! Gesture lifecycle handlers.
//!
//! Two logical gesture sources feed the state machine. The segment
//! press drives per-segment highlight and commits a selection on
//! release; the slider drag only toggles control-level highlight, since
//! its positional tracking is delegated to the paging scroll surface
//! (whose settle callbacks drive the actual commit, see
//! [`crate::state::scroll_sync`]).
//!
//! Arbitration between sources is data, not dispatch: see the rules
//! table in [`crate::model::gesture`].

use crate::config::HighlightDurations;
use crate::model::effect::{Effect, HighlightTarget};
use crate::model::geometry::Point;
use crate::model::gesture::GesturePhase;
use crate::model::segment::NO_SEGMENT;
use crate::state::control_state::ControlState;
use crate::state::selection;

/// Handle one lifecycle event of the background segment press.
///
/// Began/changed highlight the segment under the (bounds-clamped) touch
/// point. Ended and cancelled behave identically: clear the highlight,
/// then commit the segment under the touch, or [`NO_SEGMENT`] when the
/// touch resolves to none. With zero segments the hit test always
/// misses and every phase is a no-op.
pub fn handle_segment_press(
    state: &mut ControlState,
    phase: GesturePhase,
    location: Point,
    durations: &HighlightDurations,
) -> Vec<Effect> {
    let current_index = state.layout.segment_index_at(location.x);

    match phase {
        GesturePhase::Began | GesturePhase::Changed => {
            selection::set_highlighted_index(state, current_index, durations)
        }
        GesturePhase::Ended | GesturePhase::Cancelled => {
            tracing::debug!(?phase, ?current_index, "segment press finished");
            let mut effects = selection::set_highlighted_index(state, None, durations);
            let commit = current_index.map_or(NO_SEGMENT, |index| index as i32);
            effects.extend(selection::set_selected_index(state, commit));
            effects
        }
    }
}

/// Handle one lifecycle event of the indicator drag.
///
/// Began turns on control-level highlight; ended and cancelled turn it
/// off. Neither commits a selection; the commit for a drag comes from
/// the scroll surface's settle callbacks. Changed is ignored.
pub fn handle_slider_drag(phase: GesturePhase, durations: &HighlightDurations) -> Vec<Effect> {
    match phase {
        GesturePhase::Began => vec![Effect::SetHighlighted {
            target: HighlightTarget::Control,
            highlighted: true,
            duration_secs: durations.control_begin,
        }],
        GesturePhase::Ended | GesturePhase::Cancelled => vec![Effect::SetHighlighted {
            target: HighlightTarget::Control,
            highlighted: false,
            duration_secs: durations.control_end,
        }],
        GesturePhase::Changed => Vec::new(),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "gesture_tests.rs"]
mod tests;
