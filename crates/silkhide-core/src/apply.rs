//! Hide applicator: writes label visibility for resolved placements.

use serde::Serialize;
use tracing::{debug, info};

use crate::host::{LabelUpdate, LabelVisibility, RedrawSink};
use crate::model::{HideDecision, LabelRole};
use crate::resolve::ResolvedPlacements;

/// Counters describing one applicator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Placements visited.
    pub placements: usize,
    /// Reference labels set hidden.
    pub references_hidden: usize,
    /// Value labels set hidden.
    pub values_hidden: usize,
    /// Placements without a reference label while references were requested.
    pub references_missing: usize,
    /// Placements without a value label while values were requested.
    pub values_missing: usize,
}

impl ApplyReport {
    fn record(&mut self, role: LabelRole, update: LabelUpdate) {
        let slot = match (role, update) {
            (LabelRole::Reference, LabelUpdate::Applied) => &mut self.references_hidden,
            (LabelRole::Value, LabelUpdate::Applied) => &mut self.values_hidden,
            (LabelRole::Reference, LabelUpdate::Missing) => &mut self.references_missing,
            (LabelRole::Value, LabelUpdate::Missing) => &mut self.values_missing,
        };
        *slot += 1;
    }

    /// Total labels written.
    #[must_use]
    pub const fn labels_hidden(&self) -> usize {
        self.references_hidden + self.values_hidden
    }
}

/// Hide the labels selected by `decision` on every target, then redraw once.
///
/// Labels are written unconditionally, already-hidden ones included. Placements lacking
/// a requested label are skipped for that role only.
pub fn apply_hide<H>(
    targets: &ResolvedPlacements,
    decision: HideDecision,
    host: &mut H,
) -> ApplyReport
where
    H: LabelVisibility + RedrawSink + ?Sized,
{
    let mut report = ApplyReport::default();
    for &placement in targets {
        report.placements += 1;
        for role in LabelRole::ALL {
            if !decision.hides(role) {
                continue;
            }
            let update = host.set_label_visible(placement, role, false);
            if update == LabelUpdate::Missing {
                debug!(
                    placement = %placement,
                    role = role.as_str(),
                    "placement has no label for role"
                );
            }
            report.record(role, update);
        }
    }

    host.request_redraw();
    info!(
        placements = report.placements,
        references_hidden = report.references_hidden,
        values_hidden = report.values_hidden,
        "label visibility applied"
    );
    report
}
