//! Foreground-track mask computation.
//!
//! The mask clips the foreground track so the inverse-colored labels
//! show only under the indicator. It must be recomputed on *every*
//! scroll-position change (per frame during a drag or animation) and on
//! every indicator-size change: either input can move independently
//! (size on layout, position on scroll) and the mask is correct only
//! when it tracks both. No debouncing.

use crate::model::geometry::Rect;
use crate::view_state::layout::TrackLayout;

/// Mask rectangle for the foreground track: the indicator's frame
/// mapped from scroll-content space into track space by subtracting the
/// current scroll offset.
pub fn mask_rect(layout: &TrackLayout, scroll_offset: f32) -> Rect {
    let indicator = layout.indicator_frame_in_content();
    Rect::new(
        indicator.min_x() - scroll_offset,
        indicator.origin.y,
        indicator.size.width,
        indicator.size.height,
    )
}
