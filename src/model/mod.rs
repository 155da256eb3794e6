//! Domain model types (pure).
//!
//! All types in this module are pure data: geometry primitives, the
//! segment set, the gesture vocabulary, style state flags, and the
//! effects the core emits toward the embedding renderer.

pub mod effect;
pub mod geometry;
pub mod gesture;
pub mod segment;

pub use effect::{Effect, HighlightTarget};
pub use geometry::{Point, Rect, Size};
pub use gesture::{GesturePhase, GestureSource};
pub use segment::{SegmentSet, NO_SEGMENT};

/// Visual state of the control or of a single segment element.
///
/// Used as the key of the color tables in [`crate::config::StyleConfig`].
/// Mirrors the three states the renderer distinguishes when styling:
/// resting, pressed, and carrying the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlStateFlag {
    /// Resting state, no interaction in progress.
    Normal,
    /// Transient press feedback during an active gesture.
    Highlighted,
    /// The element carries the committed selection.
    Selected,
}
