//! Interaction state machine (pure).
//!
//! [`ControlState`] is the single state container; the handler modules
//! are pure functions that mutate it in response to one external event
//! and return the ordered [`Effect`](crate::model::Effect) list the
//! renderer must apply. No handler blocks, retries, or re-enters:
//! within one event all derived updates (highlight, then offset, then
//! mask) complete before the call returns.

pub mod control_state;
pub mod gesture;
pub mod scroll_sync;
pub mod selection;

pub use control_state::ControlState;
