//! Central interaction state.

use crate::model::segment::{SegmentSet, NO_SEGMENT};
use crate::view_state::layout::TrackLayout;

/// Interaction state of the control. Pure data, no side effects.
///
/// Three coupled pieces of state stay in sync through the handler
/// modules, whichever one an event touches first:
///
/// - `selected_index`: the discrete selection model
/// - `scroll_offset`: the logical position of the paging scroll
/// - the mask: derived from `layout` and `scroll_offset`, never stored
///
/// # Invariants
///
/// - `selected_index` is always valid for the current segment set:
///   `NO_SEGMENT` or `[0, count)`. Enforced immediately on every
///   mutation, never lazily.
/// - `highlighted_index` is `Some` only while a segment-press gesture
///   session is active, and always within `[0, count)`.
/// - `scroll_offset` reflects the logical target the moment a handler
///   returns; animated transitions are fire-and-forget and never leave
///   the state waiting on an intermediate frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlState {
    pub(crate) segments: SegmentSet,
    pub(crate) selected_index: i32,
    pub(crate) highlighted_index: Option<usize>,
    pub(crate) layout: TrackLayout,
    pub(crate) scroll_offset: f32,
}

impl ControlState {
    /// State for the given segment set: nothing selected, nothing
    /// highlighted, no layout yet.
    pub fn new(segments: SegmentSet) -> Self {
        Self {
            segments,
            selected_index: NO_SEGMENT,
            highlighted_index: None,
            layout: TrackLayout::empty(),
            scroll_offset: 0.0,
        }
    }

    /// Current segment set.
    pub fn segments(&self) -> &SegmentSet {
        &self.segments
    }

    /// Committed selection in the public index space (`NO_SEGMENT` when
    /// nothing is selected).
    pub fn selected_index(&self) -> i32 {
        self.selected_index
    }

    /// Committed selection as a positional index, `None` when nothing
    /// is selected.
    pub fn selected_segment(&self) -> Option<usize> {
        usize::try_from(self.selected_index).ok()
    }

    /// Segment carrying transient press feedback, if any.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    /// Current geometry snapshot.
    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Logical scroll offset (the animation target, not an intermediate
    /// frame).
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }
}
