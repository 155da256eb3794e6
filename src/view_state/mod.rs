//! Geometry layer: stateless math over the control's coordinate spaces.
//!
//! Three concerns live here, all pure and testable without a renderer:
//! index↔offset conversion ([`mapper`]), track layout and hit-testing
//! ([`layout`]), and the foreground mask rectangle ([`mask`]).
//!
//! # Reverse-order geometry
//!
//! The scrollable content and the visible tracks run in opposite
//! geometric order: segment `i`'s scroll offset corresponds to the
//! complement index `count - 1 - i`, because the indicator is pinned to
//! the trailing edge of content that is as wide as the whole control
//! while the scroll viewport is only one page wide. All three modules
//! share this one coordinate transform; it is kept explicit here rather
//! than folded into layout code.

pub mod layout;
pub mod mapper;
pub mod mask;

pub use layout::TrackLayout;
