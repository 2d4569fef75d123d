//! Editor host implemented over an in-memory board document.

use std::collections::HashMap;

use silkhide_core::{
    EditorHost, LabelRole, LabelUpdate, LabelVisibility, ParentRef, PlacementId,
    PlacementInventory, PlacementSnapshot, RedrawSink, Selection, SelectionItem, SelectionItems,
};
use tracing::{debug, warn};

use crate::error::{DocumentError, DocumentResult};
use crate::model::{BoardDocument, Footprint};

/// Board document wired to the editor seams the core consumes.
#[derive(Debug, Clone)]
pub struct DocumentHost {
    document: BoardDocument,
    index: HashMap<PlacementId, usize>,
    board_open: bool,
    redraw_requests: usize,
}

impl DocumentHost {
    /// Wrap `document`, indexing footprints by identity.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::DuplicateFootprint`] when two footprints share an id.
    pub fn new(document: BoardDocument) -> DocumentResult<Self> {
        let mut index = HashMap::with_capacity(document.footprints.len());
        for (position, footprint) in document.footprints.iter().enumerate() {
            if index.insert(footprint.id, position).is_some() {
                return Err(DocumentError::DuplicateFootprint { id: footprint.id });
            }
        }
        Ok(Self {
            document,
            index,
            board_open: true,
            redraw_requests: 0,
        })
    }

    /// Host with a selection but no open board; the inventory is unavailable.
    #[must_use]
    pub fn without_board(mut self) -> Self {
        self.board_open = false;
        self
    }

    /// Underlying document.
    #[must_use]
    pub const fn document(&self) -> &BoardDocument {
        &self.document
    }

    /// Consume the host, returning the (possibly mutated) document.
    #[must_use]
    pub fn into_document(self) -> BoardDocument {
        self.document
    }

    /// Footprint with identity `id`.
    #[must_use]
    pub fn footprint(&self, id: PlacementId) -> Option<&Footprint> {
        self.index
            .get(&id)
            .and_then(|position| self.document.footprints.get(*position))
    }

    /// Redraw requests received so far.
    #[must_use]
    pub const fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    /// Whether `item` points at a footprint that is not on the board.
    fn is_dangling(&self, item: &SelectionItem) -> bool {
        let owner = match item {
            SelectionItem::Placement { id }
            | SelectionItem::Label {
                parent: Some(ParentRef::Placement { id }),
                ..
            } => *id,
            _ => return false,
        };
        !self.index.contains_key(&owner)
    }
}

impl Selection for DocumentHost {
    /// Recorded selection without entries whose footprint is absent from the board.
    fn items(&self) -> SelectionItems<'_> {
        Box::new(self.document.selection.items().filter(move |item| match item {
            Ok(item) if self.is_dangling(item) => {
                warn!(
                    item_kind = item.type_name(),
                    "selection entry has no footprint on the board"
                );
                false
            }
            _ => true,
        }))
    }
}

impl PlacementInventory for DocumentHost {
    fn placements(&self) -> Box<dyn Iterator<Item = PlacementSnapshot> + '_> {
        Box::new(self.document.footprints.iter().map(Footprint::snapshot))
    }
}

impl LabelVisibility for DocumentHost {
    fn set_label_visible(
        &mut self,
        placement: PlacementId,
        role: LabelRole,
        visible: bool,
    ) -> LabelUpdate {
        let label = self
            .index
            .get(&placement)
            .and_then(|position| self.document.footprints.get_mut(*position))
            .and_then(|footprint| footprint.label_mut(role));
        match label {
            Some(label) => {
                label.visible = visible;
                LabelUpdate::Applied
            }
            None => LabelUpdate::Missing,
        }
    }
}

impl RedrawSink for DocumentHost {
    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
        debug!(requests = self.redraw_requests, "redraw requested");
    }
}

impl EditorHost for DocumentHost {
    fn selection(&self) -> &dyn Selection {
        self
    }

    fn inventory(&self) -> Option<&dyn PlacementInventory> {
        if self.board_open { Some(self) } else { None }
    }
}
