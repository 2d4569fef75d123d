//! Board fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use silkhide_core::{LabelKind, PlacementId, SelectionItem};
use silkhide_document::{BoardDocument, DocumentHost, Footprint, TextLabel};

/// Fluent builder for board documents.
#[derive(Debug, Clone, Default)]
pub struct BoardBuilder {
    document: BoardDocument,
}

impl BoardBuilder {
    /// Empty board with an enumerable, empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add footprint `raw` with optional reference and value texts.
    #[must_use]
    pub fn footprint(mut self, raw: u64, reference: Option<&str>, value: Option<&str>) -> Self {
        self.document.footprints.push(Footprint {
            id: PlacementId::new(raw),
            selected: false,
            reference: reference.map(TextLabel::field),
            value: value.map(TextLabel::field),
        });
        self
    }

    /// Mark footprint `raw` as selected on the board (seen only by the inventory scan).
    #[must_use]
    pub fn board_selected(mut self, raw: u64) -> Self {
        if let Some(footprint) = self.footprint_mut(raw) {
            footprint.selected = true;
        }
        self
    }

    /// Mark the reference label of footprint `raw` as selected on the board.
    #[must_use]
    pub fn reference_selected(mut self, raw: u64) -> Self {
        if let Some(label) = self
            .footprint_mut(raw)
            .and_then(|footprint| footprint.reference.as_mut())
        {
            label.selected = true;
        }
        self
    }

    /// Mark the reference label of footprint `raw` as already hidden.
    #[must_use]
    pub fn reference_hidden(mut self, raw: u64) -> Self {
        if let Some(label) = self
            .footprint_mut(raw)
            .and_then(|footprint| footprint.reference.as_mut())
        {
            label.visible = false;
        }
        self
    }

    /// Append footprint `raw` to the editor selection.
    #[must_use]
    pub fn pick(self, raw: u64) -> Self {
        self.pick_item(SelectionItem::placement(PlacementId::new(raw)))
    }

    /// Append a label of `kind` owned by footprint `owner` to the editor selection.
    #[must_use]
    pub fn pick_label(self, kind: LabelKind, owner: u64) -> Self {
        self.pick_item(SelectionItem::owned_label(kind, PlacementId::new(owner)))
    }

    /// Append an arbitrary item to the editor selection.
    #[must_use]
    pub fn pick_item(mut self, item: SelectionItem) -> Self {
        self.document.selection.items.push(item);
        self
    }

    /// Make enumeration break on items with this editor type name.
    #[must_use]
    pub fn unsupported(mut self, type_name: &str) -> Self {
        self.document
            .selection
            .unsupported_kinds
            .push(type_name.to_string());
        self
    }

    /// Make the selection refuse enumeration altogether.
    #[must_use]
    pub const fn not_enumerable(mut self) -> Self {
        self.document.selection.enumerable = false;
        self
    }

    /// Finished document.
    #[must_use]
    pub fn build(self) -> BoardDocument {
        self.document
    }

    /// Finished document wrapped in an editor host.
    ///
    /// # Errors
    ///
    /// Returns an error when footprint ids collide.
    pub fn host(self) -> anyhow::Result<DocumentHost> {
        DocumentHost::new(self.document).context("building document host")
    }

    fn footprint_mut(&mut self, raw: u64) -> Option<&mut Footprint> {
        let id = PlacementId::new(raw);
        self.document
            .footprints
            .iter_mut()
            .find(|footprint| footprint.id == id)
    }
}

/// Three footprints: `R1` (10k), `C2` (100nF) and `U3` without a value label.
#[must_use]
pub fn sample_board() -> BoardBuilder {
    BoardBuilder::new()
        .footprint(1, Some("R1"), Some("10k"))
        .footprint(2, Some("C2"), Some("100nF"))
        .footprint(3, Some("U3"), None)
}

/// Write `document` as pretty JSON to `dir/name`.
///
/// # Errors
///
/// Returns an error when encoding or writing fails.
pub fn write_board(dir: &Path, name: &str, document: &BoardDocument) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    let text = serde_json::to_string_pretty(document).context("encoding board fixture")?;
    fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
