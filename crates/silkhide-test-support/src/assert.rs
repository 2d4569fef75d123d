//! Assertions over label visibility.

use silkhide_core::{LabelRole, PlacementId};
use silkhide_document::BoardDocument;

/// Visibility of the `role` label of footprint `raw`; `None` when either is absent.
#[must_use]
pub fn label_visible(document: &BoardDocument, raw: u64, role: LabelRole) -> Option<bool> {
    let id = PlacementId::new(raw);
    document
        .footprints
        .iter()
        .find(|footprint| footprint.id == id)
        .and_then(|footprint| footprint.label(role))
        .map(|label| label.visible)
}

/// Every hidden label, in board order.
#[must_use]
pub fn hidden_labels(document: &BoardDocument) -> Vec<(u64, LabelRole)> {
    document
        .footprints
        .iter()
        .flat_map(|footprint| {
            LabelRole::ALL.into_iter().filter_map(move |role| {
                footprint
                    .label(role)
                    .filter(|label| !label.visible)
                    .map(|_| (footprint.id.get(), role))
            })
        })
        .collect()
}

/// Panic unless exactly the listed labels are hidden.
///
/// # Panics
///
/// Panics with both lists when they differ.
pub fn assert_hidden(document: &BoardDocument, expected: &[(u64, LabelRole)]) {
    let actual = hidden_labels(document);
    assert_eq!(actual, expected, "hidden labels differ");
}
