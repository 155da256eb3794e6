//! Public control surface.
//!
//! [`ScrollingSegmentedControl`] is the facade the host application and
//! the rendering shell talk to. It owns the interaction state and the
//! style configuration, forwards every external event to the handler
//! modules, and hands back the effect list the shell must apply. It
//! performs no I/O and never blocks.

use crate::config::{Color, StyleConfig};
use crate::model::effect::Effect;
use crate::model::geometry::{Point, Rect, Size};
use crate::model::gesture::GesturePhase;
use crate::model::segment::SegmentSet;
use crate::model::ControlStateFlag;
use crate::state::{gesture, scroll_sync, selection, ControlState};
use crate::view_state::layout::TrackLayout;

/// A segmented control whose selection indicator scrolls between
/// segments.
///
/// The control is a pure interaction core: every mutating call returns
/// the ordered [`Effect`] list for the embedding renderer, and state
/// reads reflect the logical target immediately (animations are
/// fire-and-forget). Call [`relayout`](Self::relayout) whenever the
/// container's geometry becomes known or changes; before the first
/// relayout all offsets and masks are degenerate zeros.
///
/// ```
/// use scrolling_segments::model::{GesturePhase, Point, Size};
/// use scrolling_segments::ScrollingSegmentedControl;
///
/// let mut control = ScrollingSegmentedControl::with_titles(["One", "Two", "Three"]);
/// control.relayout(Size::new(300.0, 32.0));
///
/// // Tap the middle segment.
/// let tap = Point::new(150.0, 16.0);
/// control.handle_segment_press(GesturePhase::Began, tap);
/// let effects = control.handle_segment_press(GesturePhase::Ended, tap);
///
/// assert_eq!(control.selected_segment_index(), 1);
/// assert!(effects.iter().any(|e| e.is_value_changed()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollingSegmentedControl {
    state: ControlState,
    style: StyleConfig,
}

impl Default for ScrollingSegmentedControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollingSegmentedControl {
    /// Control with the stock two segments, "First" and "Second", and
    /// nothing selected.
    pub fn new() -> Self {
        Self::with_titles(["First", "Second"])
    }

    /// Control with the given segment titles and nothing selected.
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: ControlState::new(SegmentSet::new(titles)),
            style: StyleConfig::default(),
        }
    }

    // ===== Properties =====

    /// Segment titles in display order.
    pub fn segment_titles(&self) -> &[String] {
        self.state.segments().titles()
    }

    /// Replace the segment titles (whole-sequence semantics).
    ///
    /// Re-validates the selection against the new count (an index that
    /// fell out of range snaps to [`crate::NO_SEGMENT`] with the usual
    /// change and visibility signals), recomputes the layout, and asks
    /// the renderer to rebuild both segment tracks.
    pub fn set_segment_titles<I, S>(&mut self, titles: I) -> Vec<Effect>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.segments = SegmentSet::new(titles);
        let count = self.state.segments.count();

        // A stale press highlight may refer to an element that no
        // longer exists; the rebuild discards it wholesale.
        if self.state.highlighted_index.is_some_and(|i| i >= count) {
            self.state.highlighted_index = None;
        }

        let mut effects = vec![Effect::RebuildSegments];
        let layout = TrackLayout::compute(self.state.layout.container(), count);
        effects.extend(scroll_sync::set_layout(&mut self.state, layout));
        let selected = self.state.selected_index;
        effects.extend(selection::set_selected_index(&mut self.state, selected));
        effects
    }

    /// Number of segments (derived, read-only).
    pub fn number_of_segments(&self) -> usize {
        self.state.segments().count()
    }

    /// Committed selection, [`crate::NO_SEGMENT`] when nothing is
    /// selected.
    pub fn selected_segment_index(&self) -> i32 {
        self.state.selected_index()
    }

    /// Set the committed selection. Out-of-range values snap silently
    /// to [`crate::NO_SEGMENT`].
    pub fn set_selected_segment_index(&mut self, index: i32) -> Vec<Effect> {
        selection::set_selected_index(&mut self.state, index)
    }

    /// Segment currently carrying press feedback, if a segment-press
    /// gesture is active.
    pub fn highlighted_segment_index(&self) -> Option<usize> {
        self.state.highlighted_index()
    }

    /// Corner radius applied to the control and its segments.
    pub fn corner_radius(&self) -> f32 {
        self.style.corner_radius
    }

    /// Change the corner radius and ask the renderer to restyle.
    pub fn set_corner_radius(&mut self, radius: f32) -> Vec<Effect> {
        self.style.corner_radius = radius;
        vec![Effect::SetCornerRadius(radius)]
    }

    /// Fraction of the container width the paging scroll viewport
    /// occupies: `1 / count`, or 0 with no segments (which
    /// short-circuits all offset math downstream).
    pub fn scroll_view_width_multiplier(&self) -> f32 {
        let count = self.number_of_segments();
        if count == 0 {
            return 0.0;
        }
        1.0 / count as f32
    }

    // ===== Styling =====

    /// Control background color for `state`, if configured.
    pub fn background_color(&self, state: ControlStateFlag) -> Option<Color> {
        self.style.background_color(state)
    }

    /// Set or clear the control background color for `state`.
    pub fn set_background_color(&mut self, color: Option<Color>, state: ControlStateFlag) {
        self.style.set_background_color(color, state);
    }

    /// Segment background color for `state`, if configured.
    pub fn segment_color(&self, state: ControlStateFlag) -> Option<Color> {
        self.style.segment_color(state)
    }

    /// Set or clear the segment background color for `state`.
    pub fn set_segment_color(&mut self, color: Option<Color>, state: ControlStateFlag) {
        self.style.set_segment_color(color, state);
    }

    /// Segment title color for `state`, if configured.
    pub fn title_color(&self, state: ControlStateFlag) -> Option<Color> {
        self.style.title_color(state)
    }

    /// Set or clear the segment title color for `state`.
    pub fn set_title_color(&mut self, color: Option<Color>, state: ControlStateFlag) {
        self.style.set_title_color(color, state);
    }

    /// Full style configuration (colors, durations, corner radius).
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    // ===== State reads for the renderer =====

    /// Interaction state snapshot.
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Current mask rectangle for the foreground track.
    pub fn mask_rect(&self) -> Rect {
        crate::view_state::mask::mask_rect(self.state.layout(), self.state.scroll_offset())
    }

    // ===== Event inputs =====

    /// Background segment press lifecycle event with its touch
    /// location in control-local coordinates.
    pub fn handle_segment_press(&mut self, phase: GesturePhase, location: Point) -> Vec<Effect> {
        gesture::handle_segment_press(&mut self.state, phase, location, &self.style.durations)
    }

    /// Indicator drag lifecycle event. Positional tracking arrives
    /// separately through the scroll callbacks.
    pub fn handle_slider_drag(&mut self, phase: GesturePhase) -> Vec<Effect> {
        gesture::handle_slider_drag(phase, &self.style.durations)
    }

    /// Continuous scroll-position callback (per frame during drags and
    /// animations).
    pub fn scroll_did_scroll(&mut self, offset_x: f32) -> Vec<Effect> {
        scroll_sync::did_scroll(&mut self.state, offset_x)
    }

    /// The scroll surface's drag ended; commits immediately unless a
    /// deceleration follows.
    pub fn scroll_drag_ended(&mut self, will_decelerate: bool) -> Vec<Effect> {
        scroll_sync::drag_ended(&mut self.state, will_decelerate)
    }

    /// The scroll surface's deceleration came to rest.
    pub fn scroll_deceleration_ended(&mut self) -> Vec<Effect> {
        scroll_sync::deceleration_ended(&mut self.state)
    }

    /// The container was (re)laid out with equal-width segments.
    pub fn relayout(&mut self, container: Size) -> Vec<Effect> {
        scroll_sync::relayout(&mut self.state, container)
    }

    /// The container was (re)laid out with renderer-reported segment
    /// frames (for layout engines whose widths do not divide evenly).
    pub fn relayout_with_segment_frames(
        &mut self,
        container: Size,
        segment_frames: Vec<Rect>,
    ) -> Vec<Effect> {
        let layout = TrackLayout::with_segment_frames(container, segment_frames);
        scroll_sync::set_layout(&mut self.state, layout)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "control_tests.rs"]
mod tests;
