//! Gesture vocabulary independent of any platform recognizer.
//!
//! The embedding shell translates its platform's recognizer callbacks
//! into [`GestureSource`] + [`GesturePhase`] pairs. Cross-recognizer
//! arbitration (which the platform performs) is specified here as a
//! table keyed by source tags, so the rules are testable without a
//! delegate protocol.

/// Logical origin of a gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureSource {
    /// Press on the background segments (zero minimum duration, tracks
    /// movement). Drives per-segment highlight and commits a selection
    /// on release.
    SegmentPress,
    /// Press-and-drag on the sliding indicator. Positional tracking is
    /// delegated to the paging scroll surface; this source only drives
    /// control-level highlight.
    SliderDrag,
    /// The paging scroll surface's own pan. Owned and recognized by the
    /// external scroll collaborator; listed here because it participates
    /// in the arbitration rules.
    ScrollPan,
}

/// Lifecycle phase of a gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Touch down; the gesture started tracking.
    Began,
    /// Touch moved while tracking.
    Changed,
    /// Touch lifted; the gesture completed normally.
    Ended,
    /// The system interrupted the gesture.
    Cancelled,
}

impl GesturePhase {
    /// Whether this phase terminates the gesture session.
    pub fn is_terminal(self) -> bool {
        matches!(self, GesturePhase::Ended | GesturePhase::Cancelled)
    }
}

/// Whether two gesture sources may recognize at the same time.
///
/// Only the slider drag and the scroll pan recognize together: dragging
/// the indicator directly pans the scroll surface it sits on.
pub fn recognize_simultaneously(a: GestureSource, b: GestureSource) -> bool {
    let pair = (a, b);
    matches!(
        pair,
        (GestureSource::SliderDrag, GestureSource::ScrollPan)
            | (GestureSource::ScrollPan, GestureSource::SliderDrag)
    )
}

/// Whether gesture `a` must wait for gesture `b` to fail before it may
/// recognize.
///
/// The segment press requires failure of the scroll pan, so a stray tap
/// cannot commit a selection while the user is dragging the indicator.
pub fn requires_failure_of(a: GestureSource, b: GestureSource) -> bool {
    a == GestureSource::SegmentPress && b == GestureSource::ScrollPan
}

#[cfg(test)]
mod tests {
    use super::*;
    use GestureSource::*;

    #[test]
    fn slider_drag_and_scroll_pan_recognize_together() {
        assert!(recognize_simultaneously(SliderDrag, ScrollPan));
        assert!(recognize_simultaneously(ScrollPan, SliderDrag));
    }

    #[test]
    fn no_other_pair_recognizes_together() {
        let sources = [SegmentPress, SliderDrag, ScrollPan];
        for a in sources {
            for b in sources {
                let is_slider_pan_pair = (a == SliderDrag && b == ScrollPan)
                    || (a == ScrollPan && b == SliderDrag);
                assert_eq!(recognize_simultaneously(a, b), is_slider_pan_pair);
            }
        }
    }

    #[test]
    fn segment_press_waits_for_scroll_pan_failure() {
        assert!(requires_failure_of(SegmentPress, ScrollPan));
    }

    #[test]
    fn failure_requirement_is_not_symmetric_or_general() {
        assert!(!requires_failure_of(ScrollPan, SegmentPress));
        assert!(!requires_failure_of(SliderDrag, ScrollPan));
        assert!(!requires_failure_of(SegmentPress, SliderDrag));
    }

    #[test]
    fn terminal_phases() {
        assert!(GesturePhase::Ended.is_terminal());
        assert!(GesturePhase::Cancelled.is_terminal());
        assert!(!GesturePhase::Began.is_terminal());
        assert!(!GesturePhase::Changed.is_terminal());
    }
}
