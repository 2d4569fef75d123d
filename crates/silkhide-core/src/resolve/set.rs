//! Insertion-ordered placement set keyed by identity.

use std::collections::HashSet;
use std::slice;

use crate::model::PlacementId;

/// Unique placements in first-encountered order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPlacements {
    order: Vec<PlacementId>,
    seen: HashSet<PlacementId>,
}

impl ResolvedPlacements {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` unless it is already present; returns whether it was added.
    pub fn insert(&mut self, id: PlacementId) -> bool {
        if !self.seen.insert(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    /// Number of resolved placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Placements in resolution order.
    #[must_use]
    pub fn as_slice(&self) -> &[PlacementId] {
        &self.order
    }

    /// Iterate placements in resolution order.
    pub fn iter(&self) -> slice::Iter<'_, PlacementId> {
        self.order.iter()
    }
}

impl<'a> IntoIterator for &'a ResolvedPlacements {
    type Item = &'a PlacementId;
    type IntoIter = slice::Iter<'a, PlacementId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<PlacementId> for ResolvedPlacements {
    fn from_iter<I: IntoIterator<Item = PlacementId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl From<ResolvedPlacements> for Vec<PlacementId> {
    fn from(set: ResolvedPlacements) -> Self {
        set.order
    }
}
