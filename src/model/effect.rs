//! Effects emitted by the core toward the embedding renderer.
//!
//! Every update entry point returns an ordered `Vec<Effect>`. The caller
//! applies them in order; within one event the core emits highlight
//! effects before offset effects before mask effects, so an observer
//! never sees a partially-updated frame.
//!
//! Animated effects are fire-and-forget: the core's own state already
//! reflects the logical target when the effect is emitted, and it does
//! not wait for the animation to finish.

use super::geometry::Rect;

/// What a highlight effect applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightTarget {
    /// The control as a whole (indicator/slider press feedback).
    Control,
    /// A single background segment by index.
    Segment(usize),
}

/// A single instruction for the embedding renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The committed selection changed. `previous`/`current` use the
    /// public index space where [`crate::NO_SEGMENT`] (-1) means no
    /// selection.
    ValueChanged {
        /// Selection before the change.
        previous: i32,
        /// Selection after the change.
        current: i32,
    },

    /// Move the paging scroll surface to `x`. When `animated` is false
    /// the jump must be applied immediately.
    SetScrollOffset {
        /// Target content offset along the scroll axis.
        x: f32,
        /// Whether to animate the transition.
        animated: bool,
    },

    /// Reposition the foreground-track mask.
    SetMaskRect(Rect),

    /// Apply the highlighted state to an element. A zero duration means
    /// apply immediately with no animation; non-zero durations use the
    /// renderer's ease-out curve.
    SetHighlighted {
        /// Which element to restyle.
        target: HighlightTarget,
        /// New highlighted state.
        highlighted: bool,
        /// Animation duration in seconds (0 = immediate).
        duration_secs: f32,
    },

    /// Show or hide the sliding indicator surfaces. Hiding (on entering
    /// the no-selection state) is immediate; showing fades in.
    SetIndicatorVisible {
        /// Whether the indicator should be visible.
        visible: bool,
        /// Whether to animate the transition.
        animated: bool,
    },

    /// Re-apply the corner radius to the control and every segment
    /// element.
    SetCornerRadius(f32),

    /// The segment titles were replaced; rebuild both per-segment
    /// element tracks from the current titles.
    RebuildSegments,
}

impl Effect {
    /// Whether this effect is a [`Effect::ValueChanged`] notification.
    pub fn is_value_changed(&self) -> bool {
        matches!(self, Effect::ValueChanged { .. })
    }
}
