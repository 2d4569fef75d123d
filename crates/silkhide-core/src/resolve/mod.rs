//! Selection resolution: raw editor selection to unique target placements.
//!
//! # Design
//! - Primary pass walks the selection, following recognised labels to their owner.
//! - A selection that refuses enumeration abandons the primary pass entirely and the
//!   placement inventory is scanned for selected footprints or labels instead.
//! - Both passes deduplicate by [`PlacementId`] and keep first-encountered order.

mod set;

pub use set::ResolvedPlacements;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::EnumerationUnsupported;
use crate::host::{EditorHost, PlacementInventory, Selection};
use crate::model::{LabelKindSet, ParentRef, SelectionItem};

/// Which pass produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPath {
    /// The selection was enumerated item by item.
    Selection,
    /// The selection refused enumeration and the inventory was scanned.
    InventoryScan,
}

impl ResolutionPath {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::InventoryScan => "inventory_scan",
        }
    }
}

/// Outcome of resolving a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// At least one placement was resolved.
    Resolved {
        /// Unique targets in first-encountered order.
        targets: ResolvedPlacements,
        /// Pass that produced the targets.
        path: ResolutionPath,
    },
    /// Nothing in the selection maps to a placement.
    NothingResolved {
        /// Pass that ran last.
        path: ResolutionPath,
    },
}

impl Resolution {
    fn from_targets(targets: ResolvedPlacements, path: ResolutionPath) -> Self {
        if targets.is_empty() {
            Self::NothingResolved { path }
        } else {
            Self::Resolved { targets, path }
        }
    }

    /// Pass that produced this outcome.
    #[must_use]
    pub const fn path(&self) -> ResolutionPath {
        match self {
            Self::Resolved { path, .. } | Self::NothingResolved { path } => *path,
        }
    }

    /// Resolved targets, or `None` when nothing resolved.
    #[must_use]
    pub const fn targets(&self) -> Option<&ResolvedPlacements> {
        match self {
            Self::Resolved { targets, .. } => Some(targets),
            Self::NothingResolved { .. } => None,
        }
    }

    /// Number of resolved placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets().map_or(0, ResolvedPlacements::len)
    }

    /// Whether nothing resolved.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NothingResolved { .. })
    }
}

/// Resolves editor selections into target placements.
#[derive(Debug, Clone, Default)]
pub struct SelectionResolver {
    label_kinds: LabelKindSet,
}

impl SelectionResolver {
    /// Resolver that follows the given label kinds back to their owner.
    #[must_use]
    pub const fn new(label_kinds: LabelKindSet) -> Self {
        Self { label_kinds }
    }

    /// Resolve `selection`, falling back to `inventory` when enumeration fails.
    ///
    /// A missing inventory (no open board) makes the fallback resolve nothing.
    #[must_use]
    pub fn resolve(
        &self,
        selection: &dyn Selection,
        inventory: Option<&dyn PlacementInventory>,
    ) -> Resolution {
        match self.enumerate_selection(selection) {
            Ok(targets) => {
                debug!(resolved = targets.len(), "resolved selection by enumeration");
                Resolution::from_targets(targets, ResolutionPath::Selection)
            }
            Err(signal) => {
                warn!(
                    item_kind = signal.item_kind.as_deref().unwrap_or("unknown"),
                    reason = signal.reason,
                    "selection enumeration unsupported; scanning placement inventory"
                );
                let targets = inventory.map(scan_inventory).unwrap_or_default();
                debug!(resolved = targets.len(), "resolved selection by inventory scan");
                Resolution::from_targets(targets, ResolutionPath::InventoryScan)
            }
        }
    }

    /// Resolve the current selection of `host`.
    #[must_use]
    pub fn resolve_host<H: EditorHost + ?Sized>(&self, host: &H) -> Resolution {
        self.resolve(host.selection(), host.inventory())
    }

    fn enumerate_selection(
        &self,
        selection: &dyn Selection,
    ) -> Result<ResolvedPlacements, EnumerationUnsupported> {
        let mut targets = ResolvedPlacements::new();
        for item in selection.items() {
            match item? {
                SelectionItem::Placement { id } => {
                    targets.insert(id);
                }
                SelectionItem::Label { kind, parent } if self.label_kinds.contains(kind) => {
                    match parent {
                        Some(ParentRef::Placement { id }) => {
                            targets.insert(id);
                        }
                        Some(ParentRef::Other { type_name }) => {
                            trace!(
                                kind = %kind,
                                parent = %type_name,
                                "label owner is not a footprint"
                            );
                        }
                        None => trace!(kind = %kind, "label has no owner"),
                    }
                }
                other => trace!(item_kind = other.type_name(), "ignoring selection item"),
            }
        }
        Ok(targets)
    }
}

/// Every placement that is selected or has a selected reference/value label.
#[must_use]
pub fn scan_inventory(inventory: &dyn PlacementInventory) -> ResolvedPlacements {
    inventory
        .placements()
        .filter(|placement| placement.is_picked())
        .map(|placement| placement.id)
        .collect()
}
