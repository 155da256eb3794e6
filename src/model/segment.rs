//! Segment set and the no-selection sentinel.

/// Sentinel selection index meaning "nothing selected".
pub const NO_SEGMENT: i32 = -1;

/// Ordered collection of segment labels.
///
/// Replacement is whole-sequence: assigning a new set of titles rebuilds
/// every derived element; the set is never partially mutated in place.
/// Callers that replace the set must immediately re-validate the
/// selected index against the new count (see
/// [`crate::state::selection`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentSet {
    titles: Vec<String>,
}

impl SegmentSet {
    /// Create a segment set from a list of titles.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of segments.
    pub fn count(&self) -> usize {
        self.titles.len()
    }

    /// Whether the set holds no segments.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Segment titles in display order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Title at `index`, if in range.
    pub fn title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// Whether `index` is a valid selection for this set.
    ///
    /// `NO_SEGMENT` is always valid; non-negative values must fall in
    /// `[0, count)`.
    pub fn is_valid_selection(&self, index: i32) -> bool {
        index == NO_SEGMENT || (0..self.count() as i32).contains(&index)
    }
}
