//! Reconciliation between the discrete selection and the continuous
//! scroll offset.
//!
//! Two directions:
//!
//! - **Push (index → offset)**: a selection change instructs the paging
//!   scroll surface to move to the selected segment's page.
//! - **Pull (offset → index)**: a completed drag or deceleration
//!   resolves the settled offset back into a selection commit.
//!
//! The continuous `did_scroll` stream only moves the mask; it never
//! touches the selection.

use crate::model::effect::Effect;
use crate::model::geometry::Size;
use crate::state::control_state::ControlState;
use crate::state::selection;
use crate::view_state::layout::TrackLayout;
use crate::view_state::{mapper, mask};

/// Offsets closer than this are treated as already in place, so the
/// pull path does not re-trigger the push it came from.
const OFFSET_EPSILON: f32 = 1e-3;

/// Push the selected segment's offset to the scroll surface.
///
/// Uses the origin delta between the target segment and the last
/// segment, which stays correct when real frame widths do not divide
/// the container evenly. Short-circuits with no effects when nothing is
/// selected, the segment set is empty, or the offset already matches
/// the target. A moved offset is followed by the matching mask update.
pub(crate) fn push_offset(state: &mut ControlState, animated: bool) -> Vec<Effect> {
    let Some(index) = state.selected_segment() else {
        return Vec::new();
    };
    let Some(target) = state.layout.offset_for_segment(index) else {
        return Vec::new();
    };
    if (target - state.scroll_offset).abs() <= OFFSET_EPSILON {
        return Vec::new();
    }
    state.scroll_offset = target;
    vec![
        Effect::SetScrollOffset {
            x: target,
            animated,
        },
        Effect::SetMaskRect(mask::mask_rect(&state.layout, target)),
    ]
}

/// Continuous scroll-position callback, fired per frame during drags
/// and animations. Records the offset and re-emits the mask; nothing
/// else moves.
pub fn did_scroll(state: &mut ControlState, offset_x: f32) -> Vec<Effect> {
    tracing::trace!(offset_x, "scroll position changed");
    state.scroll_offset = offset_x;
    vec![Effect::SetMaskRect(mask::mask_rect(
        &state.layout,
        offset_x,
    ))]
}

/// The user lifted their finger. When the scroll surface will keep
/// decelerating, the settle arrives later via [`deceleration_ended`];
/// otherwise the offset is final and commits now.
pub fn drag_ended(state: &mut ControlState, will_decelerate: bool) -> Vec<Effect> {
    if will_decelerate {
        return Vec::new();
    }
    settle(state)
}

/// Paging deceleration came to rest; commit the settled page.
pub fn deceleration_ended(state: &mut ControlState) -> Vec<Effect> {
    settle(state)
}

/// Container geometry changed. Recompute the track layout, re-run the
/// push path non-animated so the offset stays consistent with the
/// (possibly revalidated) selection, and refresh the mask for the new
/// indicator size.
pub fn relayout(state: &mut ControlState, container: Size) -> Vec<Effect> {
    let layout = TrackLayout::compute(container, state.segments.count());
    set_layout(state, layout)
}

/// Install a pre-computed layout (renderer-reported frames or a fresh
/// equal division) and reconcile offset and mask against it.
pub fn set_layout(state: &mut ControlState, layout: TrackLayout) -> Vec<Effect> {
    state.layout = layout;
    let mut effects = push_offset(state, false);
    let mask_emitted = effects
        .iter()
        .any(|effect| matches!(effect, Effect::SetMaskRect(_)));
    if !mask_emitted {
        effects.push(Effect::SetMaskRect(mask::mask_rect(
            &state.layout,
            state.scroll_offset,
        )));
    }
    effects
}

/// Pull path: resolve the settled offset to the nearest page and commit
/// it through the selection model.
fn settle(state: &mut ControlState) -> Vec<Effect> {
    let count = state.segments.count();
    let Some(index) = mapper::index_for_offset(state.scroll_offset, state.layout.page_width(), count)
    else {
        return Vec::new();
    };
    tracing::debug!(
        offset = state.scroll_offset,
        index,
        "drag settled, committing selection"
    );
    selection::set_selected_index(state, index as i32)
}

// ===== Tests =====

#[cfg(test)]
#[path = "scroll_sync_tests.rs"]
mod tests;
