//! Track layout and segment hit-testing.
//!
//! [`TrackLayout`] is a snapshot of the control's geometry, recomputed
//! on every relayout (container resize or segment-count change). It
//! answers the three geometric questions the state machine asks:
//! which segment sits under a touch point, what scroll offset centers
//! the indicator on a segment, and where the indicator lives in
//! scroll-content space.

use crate::model::geometry::{Rect, Size};

/// Geometry snapshot for the current container size and segment count.
///
/// Segment frames are fill-equally in track space (the control's own
/// bounds). The push-path offset for a segment is measured as the delta
/// between that segment's origin and the last segment's origin rather
/// than `page_width * complement`, which stays correct when the frames
/// a real layout produced do not divide the container evenly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackLayout {
    container: Size,
    segment_frames: Vec<Rect>,
}

impl TrackLayout {
    /// Layout with no container and no segments.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compute a fill-equally layout for `count` segments in `container`.
    pub fn compute(container: Size, count: usize) -> Self {
        let mut segment_frames = Vec::with_capacity(count);
        if count > 0 {
            let width = container.width / count as f32;
            for i in 0..count {
                segment_frames.push(Rect::new(width * i as f32, 0.0, width, container.height));
            }
        }
        Self {
            container,
            segment_frames,
        }
    }

    /// Replace the equal-division frames with renderer-reported ones.
    ///
    /// For embedders whose layout engine produced uneven widths. Frames
    /// must be ordered left to right in track space.
    pub fn with_segment_frames(container: Size, segment_frames: Vec<Rect>) -> Self {
        Self {
            container,
            segment_frames,
        }
    }

    /// Container size this layout was computed for.
    pub fn container(&self) -> Size {
        self.container
    }

    /// Number of segments in the layout.
    pub fn count(&self) -> usize {
        self.segment_frames.len()
    }

    /// Width of one scroll page: container width divided by segment
    /// count, 0 when there are no segments.
    pub fn page_width(&self) -> f32 {
        if self.segment_frames.is_empty() {
            return 0.0;
        }
        self.container.width / self.segment_frames.len() as f32
    }

    /// Frame of segment `index` in track space.
    pub fn segment_frame(&self, index: usize) -> Option<Rect> {
        self.segment_frames.get(index).copied()
    }

    /// Segment under the touch point `x`, after clamping `x` into the
    /// container bounds. First segment whose closed horizontal range
    /// contains the clamped coordinate; `None` only when there are no
    /// segments.
    pub fn segment_index_at(&self, x: f32) -> Option<usize> {
        let bounded_x = x.clamp(0.0, self.container.width);
        self.segment_frames
            .iter()
            .position(|frame| frame.contains_x(bounded_x))
    }

    /// Push-path scroll offset that parks the indicator on segment
    /// `index`: the origin delta between the last segment and the
    /// target segment.
    pub fn offset_for_segment(&self, index: usize) -> Option<f32> {
        let last = self.segment_frames.last()?;
        let target = self.segment_frames.get(index)?;
        Some(last.min_x() - target.min_x())
    }

    /// Indicator frame in scroll-content space: pinned to the trailing
    /// edge of content that spans the whole container, one page wide,
    /// full height.
    pub fn indicator_frame_in_content(&self) -> Rect {
        let page_width = self.page_width();
        Rect::new(
            self.container.width - page_width,
            0.0,
            page_width,
            self.container.height,
        )
    }
}
