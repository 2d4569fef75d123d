//! Traits implemented by the hosting editor.
//!
//! The core never owns editor objects: it reads the selection and inventory through
//! these seams and writes label visibility back through them.

use crate::error::EnumerationUnsupported;
use crate::model::{LabelRole, PlacementId, PlacementSnapshot, SelectionItem};

/// Iterator over selection entries; an `Err` ends enumeration.
pub type SelectionItems<'a> =
    Box<dyn Iterator<Item = Result<SelectionItem, EnumerationUnsupported>> + 'a>;

/// Editor selection supplied fresh for each invocation.
pub trait Selection {
    /// Enumerate the selection in editor order.
    ///
    /// Hosts whose selection cannot be walked for some item kinds yield an
    /// [`EnumerationUnsupported`] entry at the point of failure.
    fn items(&self) -> SelectionItems<'_>;
}

impl Selection for [SelectionItem] {
    fn items(&self) -> SelectionItems<'_> {
        Box::new(self.iter().cloned().map(Ok))
    }
}

impl Selection for Vec<SelectionItem> {
    fn items(&self) -> SelectionItems<'_> {
        self.as_slice().items()
    }
}

/// Full inventory of placements on the open document.
pub trait PlacementInventory {
    /// Snapshot every placement in document order.
    fn placements(&self) -> Box<dyn Iterator<Item = PlacementSnapshot> + '_>;
}

impl PlacementInventory for [PlacementSnapshot] {
    fn placements(&self) -> Box<dyn Iterator<Item = PlacementSnapshot> + '_> {
        Box::new(self.iter().copied())
    }
}

impl PlacementInventory for Vec<PlacementSnapshot> {
    fn placements(&self) -> Box<dyn Iterator<Item = PlacementSnapshot> + '_> {
        self.as_slice().placements()
    }
}

/// Outcome of a single label visibility write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelUpdate {
    /// The label exists and its flag was written.
    Applied,
    /// The placement has no label for the requested role (or no longer exists).
    Missing,
}

/// Write access to label visibility flags.
pub trait LabelVisibility {
    /// Set the visibility flag of the `role` label owned by `placement`.
    fn set_label_visible(
        &mut self,
        placement: PlacementId,
        role: LabelRole,
        visible: bool,
    ) -> LabelUpdate;
}

/// Rendering collaborator that repaints the canvas.
pub trait RedrawSink {
    /// Ask the editor to repaint once.
    fn request_redraw(&mut self);
}

/// Everything an action needs from the hosting editor.
pub trait EditorHost: LabelVisibility + RedrawSink {
    /// Current editor selection.
    fn selection(&self) -> &dyn Selection;

    /// Placement inventory of the open document, or `None` when no board is open.
    fn inventory(&self) -> Option<&dyn PlacementInventory>;
}
