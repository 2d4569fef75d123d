//! Output renderers and formatting helpers for CLI commands.

use std::path::PathBuf;

use anyhow::anyhow;
use serde::Serialize;
use silkhide_app::{ActionDescriptor, ActionOutcome};
use silkhide_core::ResolutionPath;

use crate::cli::OutputFormat;
use crate::context::{CliError, CliResult};

/// Footprint row shown by `resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct FootprintRow {
    pub(crate) id: u64,
    pub(crate) designator: String,
}

/// Result of `resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ResolutionView {
    pub(crate) path: ResolutionPath,
    pub(crate) footprints: Vec<FootprintRow>,
}

/// Result of `hide`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct HideView {
    pub(crate) action: String,
    #[serde(flatten)]
    pub(crate) outcome: ActionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) written: Option<PathBuf>,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    println!("{text}");
    Ok(())
}

pub(crate) fn render_resolution(view: &ResolutionView, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(view)?,
        OutputFormat::Table => {
            println!("path: {}", view.path.as_str());
            if view.footprints.is_empty() {
                println!("No footprints selected");
            } else {
                println!("{:>8} DESIGNATOR", "ID");
                for row in &view.footprints {
                    println!("{:>8} {}", row.id, row.designator);
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn render_hide(view: &HideView, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(view)?,
        OutputFormat::Table => {
            println!("action: {}", view.action);
            println!("outcome: {}", view.outcome.as_str());
            println!("path: {}", view.outcome.path().as_str());
            match &view.outcome {
                ActionOutcome::Applied { report, .. } => {
                    println!("footprints: {}", report.placements);
                    println!(
                        "hidden: {} reference(s), {} value(s)",
                        report.references_hidden, report.values_hidden
                    );
                    if report.references_missing + report.values_missing > 0 {
                        println!(
                            "skipped: {} without reference, {} without value",
                            report.references_missing, report.values_missing
                        );
                    }
                }
                ActionOutcome::Cancelled { placements, .. }
                | ActionOutcome::Rejected { placements, .. } => {
                    println!("footprints: {placements} (unchanged)");
                }
                ActionOutcome::NothingResolved { .. } => {}
            }
            if let Some(path) = &view.written {
                println!("written: {}", path.display());
            }
        }
    }
    Ok(())
}

pub(crate) fn render_actions(actions: &[ActionDescriptor], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(actions)?,
        OutputFormat::Table => {
            println!("{:<36} {:<12} {:<7} DESCRIPTION", "NAME", "CATEGORY", "TOOLBAR");
            for action in actions {
                println!(
                    "{:<36} {:<12} {:<7} {}",
                    action.name,
                    action.category,
                    yes_no(action.show_toolbar_button),
                    action.description
                );
                if let Some(icon) = &action.icon {
                    println!("{:<36} icon: {}", "", icon.display());
                }
            }
        }
    }
    Ok(())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use silkhide_core::ApplyReport;

    #[test]
    fn hide_view_flattens_outcome_in_json() -> Result<(), serde_json::Error> {
        let view = HideView {
            action: "Bulk hide silkscreen designators".to_string(),
            outcome: ActionOutcome::Applied {
                path: ResolutionPath::InventoryScan,
                report: ApplyReport {
                    placements: 2,
                    references_hidden: 2,
                    ..ApplyReport::default()
                },
            },
            written: None,
        };
        let value = serde_json::to_value(&view)?;
        assert_eq!(value["outcome"], json!("applied"));
        assert_eq!(value["path"], json!("inventory_scan"));
        assert_eq!(value["report"]["references_hidden"], json!(2));
        assert!(value.get("written").is_none());
        Ok(())
    }

    #[test]
    fn renderers_accept_both_formats() -> CliResult<()> {
        let view = ResolutionView {
            path: ResolutionPath::Selection,
            footprints: vec![FootprintRow {
                id: 1,
                designator: "R1".to_string(),
            }],
        };
        render_resolution(&view, OutputFormat::Table)?;
        render_resolution(&view, OutputFormat::Json)?;
        render_actions(&[], OutputFormat::Table)?;
        assert_eq!(yes_no(true), "yes");
        Ok(())
    }
}
