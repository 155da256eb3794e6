//! Conversion between discrete segment index and continuous scroll offset.
//!
//! Pure functions, no state. One page width per segment; the mapping is
//! reverse-ordered (index 0 is the rightmost/last page in content
//! space), see the module docs of [`crate::view_state`].
//!
//! Round-trip law: `index_for_offset(offset_for_index(i)) == i` for all
//! valid `i` when `page_width > 0`, subject to rounding at exact page
//! boundaries.

/// Scroll offset for the page of segment `index`.
///
/// `offset = page_width * (count - 1 - index)`.
///
/// Returns `None` when the mapping is undefined: zero segments or an
/// out-of-range index.
pub fn offset_for_index(index: usize, page_width: f32, count: usize) -> Option<f32> {
    if count == 0 || index >= count {
        return None;
    }
    Some(page_width * (count - 1 - index) as f32)
}

/// Segment index whose page is nearest to `offset`.
///
/// `index = (count - 1) - round(offset / page_width)`, with the
/// complement clamped into `[0, count - 1]` so overscrolled offsets
/// resolve to the edge pages.
///
/// Returns `None` when the mapping is undefined: zero segments or a
/// non-positive page width.
pub fn index_for_offset(offset: f32, page_width: f32, count: usize) -> Option<usize> {
    if count == 0 || page_width <= 0.0 {
        return None;
    }
    let complement = (offset / page_width).round() as i64;
    let complement = complement.clamp(0, count as i64 - 1) as usize;
    Some(count - 1 - complement)
}
