//! Serde board document: footprints, their labels and the editor selection.
//!
//! # Design
//! - Mirrors what the editor exposes to actions, nothing more (no geometry, no nets).
//! - The selection record can be told to refuse enumeration, reproducing hosts whose
//!   selection objects cannot be walked for some item kinds.

use serde::{Deserialize, Serialize};
use silkhide_core::{
    EnumerationUnsupported, LabelKind, LabelRole, LabelSnapshot, PlacementId, PlacementSnapshot,
    Selection, SelectionItem, SelectionItems,
};

const fn default_true() -> bool {
    true
}

const fn default_label_kind() -> LabelKind {
    LabelKind::PcbField
}

/// Text label owned by a footprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLabel {
    /// Displayed text.
    #[serde(default)]
    pub text: String,
    /// Whether the label is drawn.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Whether the label is selected in the editor.
    #[serde(default)]
    pub selected: bool,
    /// Text item kind.
    #[serde(default = "default_label_kind")]
    pub kind: LabelKind,
}

impl TextLabel {
    /// Visible, unselected field label.
    #[must_use]
    pub fn field(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
            selected: false,
            kind: LabelKind::PcbField,
        }
    }

    fn snapshot(&self) -> LabelSnapshot {
        LabelSnapshot {
            kind: self.kind,
            selected: self.selected,
            visible: self.visible,
        }
    }
}

/// Footprint placement on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    /// Editor handle.
    pub id: PlacementId,
    /// Whether the footprint itself is selected.
    #[serde(default)]
    pub selected: bool,
    /// Reference designator label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<TextLabel>,
    /// Value label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TextLabel>,
}

impl Footprint {
    /// Label for `role`, when present.
    #[must_use]
    pub const fn label(&self, role: LabelRole) -> Option<&TextLabel> {
        match role {
            LabelRole::Reference => self.reference.as_ref(),
            LabelRole::Value => self.value.as_ref(),
        }
    }

    /// Mutable label for `role`, when present.
    pub fn label_mut(&mut self, role: LabelRole) -> Option<&mut TextLabel> {
        match role {
            LabelRole::Reference => self.reference.as_mut(),
            LabelRole::Value => self.value.as_mut(),
        }
    }

    /// Reference text, or the handle when the footprint has no reference.
    #[must_use]
    pub fn designator(&self) -> String {
        self.reference
            .as_ref()
            .filter(|label| !label.text.is_empty())
            .map_or_else(|| self.id.to_string(), |label| label.text.clone())
    }

    /// Read-only view used by the inventory scan.
    #[must_use]
    pub fn snapshot(&self) -> PlacementSnapshot {
        PlacementSnapshot {
            id: self.id,
            selected: self.selected,
            reference: self.reference.as_ref().map(TextLabel::snapshot),
            value: self.value.as_ref().map(TextLabel::snapshot),
        }
    }
}

/// Editor selection as recorded in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    /// Whether the selection can be iterated at all.
    #[serde(default = "default_true")]
    pub enumerable: bool,
    /// Editor type names that break iteration when reached (e.g. `PCB_FIELD`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unsupported_kinds: Vec<String>,
    /// Selected items in editor order.
    #[serde(default)]
    pub items: Vec<SelectionItem>,
}

impl Default for SelectionRecord {
    fn default() -> Self {
        Self {
            enumerable: true,
            unsupported_kinds: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl SelectionRecord {
    /// Enumerable selection of `items`.
    #[must_use]
    pub fn of(items: Vec<SelectionItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    fn refuses(&self, item: &SelectionItem) -> bool {
        self.unsupported_kinds
            .iter()
            .any(|kind| kind.eq_ignore_ascii_case(item.type_name()))
    }
}

impl Selection for SelectionRecord {
    fn items(&self) -> SelectionItems<'_> {
        if !self.enumerable {
            return Box::new(std::iter::once(Err(EnumerationUnsupported::not_iterable())));
        }
        Box::new(self.items.iter().scan(false, move |failed, item| {
            if *failed {
                return None;
            }
            if self.refuses(item) {
                *failed = true;
                return Some(Err(EnumerationUnsupported::for_kind(
                    item.type_name(),
                    "type_error",
                )));
            }
            Some(Ok(item.clone()))
        }))
    }
}

/// Board document read by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDocument {
    /// Footprints in board order.
    #[serde(default)]
    pub footprints: Vec<Footprint>,
    /// Current editor selection.
    #[serde(default)]
    pub selection: SelectionRecord,
}
