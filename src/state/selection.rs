//! Selection and highlight transitions.
//!
//! Pure functions that transform [`ControlState`] in response to
//! selection writes, emitting the effects the renderer applies.
//!
//! Out-of-range writes are not errors: they snap silently to
//! [`NO_SEGMENT`].

use crate::config::HighlightDurations;
use crate::model::effect::{Effect, HighlightTarget};
use crate::model::segment::NO_SEGMENT;
use crate::state::control_state::ControlState;
use crate::state::scroll_sync;

/// Set the committed selection, validating into `[-1, count - 1]`.
///
/// Invalid values snap to [`NO_SEGMENT`]. Emits, in order:
///
/// 1. `ValueChanged` when the validated value differs from the previous
///    one (same valid value twice fires it at most once);
/// 2. `SetIndicatorVisible` when the transition crosses the
///    no-selection boundary in either direction (non-animated hide on
///    entry, animated fade-in on exit), followed by a *non-animated*
///    offset push;
/// 3. otherwise an *animated* offset push.
///
/// The push is idempotent: it emits nothing when the scroll offset
/// already matches the target, so a selection committed from a settled
/// drag does not bounce the scroll surface.
pub fn set_selected_index(state: &mut ControlState, new_index: i32) -> Vec<Effect> {
    let validated = if state.segments.is_valid_selection(new_index) {
        new_index
    } else {
        NO_SEGMENT
    };
    let previous = state.selected_index;
    state.selected_index = validated;

    let mut effects = Vec::new();
    if previous != validated {
        tracing::debug!(previous, current = validated, "selection committed");
        effects.push(Effect::ValueChanged {
            previous,
            current: validated,
        });
    }

    if previous == NO_SEGMENT || validated == NO_SEGMENT {
        if previous != validated {
            let visible = validated != NO_SEGMENT;
            effects.push(Effect::SetIndicatorVisible {
                visible,
                animated: visible,
            });
        }
        effects.extend(scroll_sync::push_offset(state, false));
        return effects;
    }

    effects.extend(scroll_sync::push_offset(state, true));
    effects
}

/// Set the transient press highlight, diffing against the previous
/// value.
///
/// Three-way diff, each arm with its own duration tier:
///
/// - became-set → highlight the new segment (begin tier);
/// - changed between two segments → un-highlight the old and highlight
///   the new (change tier), so at most one segment is ever highlighted;
/// - became-unset → un-highlight the old segment (end tier).
///
/// No-op when the value is unchanged. An index outside the current
/// segment set is normalized to `None` (the element does not exist, so
/// there is nothing to restyle).
pub fn set_highlighted_index(
    state: &mut ControlState,
    new_index: Option<usize>,
    durations: &HighlightDurations,
) -> Vec<Effect> {
    let new_index = new_index.filter(|&i| i < state.segments.count());
    let previous = state.highlighted_index;
    if previous == new_index {
        return Vec::new();
    }
    state.highlighted_index = new_index;

    match (previous, new_index) {
        (None, Some(new)) => vec![Effect::SetHighlighted {
            target: HighlightTarget::Segment(new),
            highlighted: true,
            duration_secs: durations.segment_begin,
        }],
        (Some(old), Some(new)) => vec![
            Effect::SetHighlighted {
                target: HighlightTarget::Segment(old),
                highlighted: false,
                duration_secs: durations.segment_change,
            },
            Effect::SetHighlighted {
                target: HighlightTarget::Segment(new),
                highlighted: true,
                duration_secs: durations.segment_change,
            },
        ],
        (Some(old), None) => vec![Effect::SetHighlighted {
            target: HighlightTarget::Segment(old),
            highlighted: false,
            duration_secs: durations.segment_end,
        }],
        (None, None) => Vec::new(),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
