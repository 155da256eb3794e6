//! Scrolling Segments
//!
//! Interaction core for a segmented control whose selection indicator
//! scrolls/pages between segments: drag gestures, paging physics, a
//! mask-based visual transition, and press-highlight feedback.
//!
//! The crate follows a Pure Core / Impure Shell architecture. The core
//! keeps three coupled subsystems in sync (the physically-scrolled
//! offset, the discrete selected index, and the continuous foreground
//! mask) and emits typed [`Effect`](model::Effect)s that the embedding
//! renderer applies. Rendering, layout constraints, and platform gesture
//! recognition live outside the crate.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view_state;

mod control;

pub use control::ScrollingSegmentedControl;
pub use model::segment::NO_SEGMENT;
