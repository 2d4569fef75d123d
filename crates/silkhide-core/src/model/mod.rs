//! Core domain types shared across the workspace.
//!
//! # Design
//! - Selection items are a tagged union dispatched on their kind, never on host types.
//! - Placements are compared by their opaque [`PlacementId`] only.
//! - A [`HideDecision`] can only be built from a request that hides something.

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Stable identity of a footprint placement as assigned by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementId(u64);

impl PlacementId {
    /// Wrap a raw editor handle.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw editor handle.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for PlacementId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// Role a label plays on its owning placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelRole {
    /// Reference designator (e.g. `R1`, `U3`).
    Reference,
    /// Component value (e.g. `10k`, `100nF`).
    Value,
}

impl LabelRole {
    /// Both roles in the order the applicator visits them.
    pub const ALL: [Self; 2] = [Self::Reference, Self::Value];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Value => "value",
        }
    }
}

/// Text item kinds that may be selected in place of a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    /// Free text item.
    PcbText,
    /// Text item drawn as part of a footprint.
    FpText,
    /// Structural footprint field such as the reference or value.
    PcbField,
}

impl LabelKind {
    /// Every kind known to the editor.
    pub const ALL: [Self; 3] = [Self::PcbText, Self::FpText, Self::PcbField];

    /// Editor type name (`PCB_TEXT`, `FP_TEXT`, `PCB_FIELD`).
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::PcbText => "PCB_TEXT",
            Self::FpText => "FP_TEXT",
            Self::PcbField => "PCB_FIELD",
        }
    }
}

impl Display for LabelKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.type_name())
    }
}

/// Set of label kinds the resolver follows back to their owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LabelKind>", into = "Vec<LabelKind>")]
pub struct LabelKindSet {
    kinds: BTreeSet<LabelKind>,
}

impl LabelKindSet {
    /// Set containing every known label kind.
    #[must_use]
    pub fn all() -> Self {
        Self::from_iter(LabelKind::ALL)
    }

    /// Whether the set contains `kind`.
    #[must_use]
    pub fn contains(&self, kind: LabelKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Whether no label kind is recognised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterate the recognised kinds in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = LabelKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl Default for LabelKindSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<LabelKind> for LabelKindSet {
    fn from_iter<I: IntoIterator<Item = LabelKind>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<LabelKind>> for LabelKindSet {
    fn from(kinds: Vec<LabelKind>) -> Self {
        Self::from_iter(kinds)
    }
}

impl From<LabelKindSet> for Vec<LabelKind> {
    fn from(set: LabelKindSet) -> Self {
        set.kinds.into_iter().collect()
    }
}

/// Container a selected label points back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParentRef {
    /// Label belongs to a footprint placement.
    #[serde(rename = "footprint")]
    Placement {
        /// Owning placement.
        id: PlacementId,
    },
    /// Label belongs to something that is not a placement (board, group, ...).
    Other {
        /// Editor type name of the container.
        type_name: String,
    },
}

/// One entry of the editor's current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionItem {
    /// Footprint picked directly.
    #[serde(rename = "footprint")]
    Placement {
        /// Picked placement.
        id: PlacementId,
    },
    /// Text item picked on the canvas.
    Label {
        /// Text item kind.
        kind: LabelKind,
        /// Back-reference to the owner, when the editor reports one.
        #[serde(default)]
        parent: Option<ParentRef>,
    },
    /// Any other editor item (tracks, vias, zones, ...).
    Other {
        /// Editor type name of the item.
        type_name: String,
    },
}

impl SelectionItem {
    /// Direct footprint pick.
    #[must_use]
    pub const fn placement(id: PlacementId) -> Self {
        Self::Placement { id }
    }

    /// Label owned by the given placement.
    #[must_use]
    pub const fn owned_label(kind: LabelKind, owner: PlacementId) -> Self {
        Self::Label {
            kind,
            parent: Some(ParentRef::Placement { id: owner }),
        }
    }

    /// Editor type name used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Placement { .. } => "FOOTPRINT",
            Self::Label { kind, .. } => kind.type_name(),
            Self::Other { type_name } => type_name,
        }
    }
}

/// Read-only view of a label used by the inventory scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSnapshot {
    /// Text item kind.
    pub kind: LabelKind,
    /// Whether the label is currently selected in the editor.
    pub selected: bool,
    /// Whether the label is currently drawn.
    pub visible: bool,
}

/// Read-only view of a placement used by the inventory scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementSnapshot {
    /// Placement identity.
    pub id: PlacementId,
    /// Whether the footprint itself is selected.
    pub selected: bool,
    /// Reference label, when present.
    pub reference: Option<LabelSnapshot>,
    /// Value label, when present.
    pub value: Option<LabelSnapshot>,
}

impl PlacementSnapshot {
    /// Label for the given role, when present.
    #[must_use]
    pub const fn label(&self, role: LabelRole) -> Option<&LabelSnapshot> {
        match role {
            LabelRole::Reference => self.reference.as_ref(),
            LabelRole::Value => self.value.as_ref(),
        }
    }

    /// Whether the footprint or one of its two labels is selected.
    #[must_use]
    pub fn is_picked(&self) -> bool {
        self.selected
            || LabelRole::ALL
                .iter()
                .any(|role| self.label(*role).is_some_and(|label| label.selected))
    }
}

/// Raw hide flags returned by the decision dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HideRequest {
    /// Hide the reference designator.
    pub hide_reference: bool,
    /// Hide the value.
    pub hide_value: bool,
}

impl HideRequest {
    /// Build a request from the two dialog flags.
    #[must_use]
    pub const fn new(hide_reference: bool, hide_value: bool) -> Self {
        Self {
            hide_reference,
            hide_value,
        }
    }
}

/// Validated hide decision; at least one role is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HideDecision {
    hide_reference: bool,
    hide_value: bool,
}

impl HideDecision {
    /// Hide reference designators only.
    pub const REFERENCE_ONLY: Self = Self {
        hide_reference: true,
        hide_value: false,
    };
    /// Hide values only.
    pub const VALUE_ONLY: Self = Self {
        hide_reference: false,
        hide_value: true,
    };
    /// Hide both labels.
    pub const BOTH: Self = Self {
        hide_reference: true,
        hide_value: true,
    };

    /// Whether reference labels are hidden.
    #[must_use]
    pub const fn hide_reference(self) -> bool {
        self.hide_reference
    }

    /// Whether value labels are hidden.
    #[must_use]
    pub const fn hide_value(self) -> bool {
        self.hide_value
    }

    /// Whether labels of `role` are hidden.
    #[must_use]
    pub const fn hides(self, role: LabelRole) -> bool {
        match role {
            LabelRole::Reference => self.hide_reference,
            LabelRole::Value => self.hide_value,
        }
    }
}

impl TryFrom<HideRequest> for HideDecision {
    type Error = CoreError;

    fn try_from(request: HideRequest) -> Result<Self, Self::Error> {
        if !request.hide_reference && !request.hide_value {
            return Err(CoreError::NoOptionSelected);
        }
        Ok(Self {
            hide_reference: request.hide_reference,
            hide_value: request.hide_value,
        })
    }
}

impl From<HideDecision> for HideRequest {
    fn from(decision: HideDecision) -> Self {
        Self::new(decision.hide_reference, decision.hide_value)
    }
}
