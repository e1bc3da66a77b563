//! Figure-space areas already taken by earlier insets.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Ordered, append-only set of figure-space rectangles a new placement must
/// not overlap.
///
/// Owned by the caller for one rendering pass; placements for inset N depend
/// on insets 0..N-1 already being reserved, so append in placement order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservedAreas(Vec<Rect>);

impl ReservedAreas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserve(&mut self, rect: Rect) {
        self.0.push(rect);
    }

    /// Check if `rect` overlaps any reserved area.
    pub fn overlaps_any(&self, rect: &Rect) -> bool {
        self.0.iter().any(|r| r.overlaps(rect))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Rect] {
        &self.0
    }
}

impl From<Vec<Rect>> for ReservedAreas {
    fn from(rects: Vec<Rect>) -> Self {
        Self(rects)
    }
}

impl<'a> IntoIterator for &'a ReservedAreas {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
