use std::fs;

use silkhide_app::{
    Action, ActionOutcome, BootstrapOptions, BulkHideAction, UserMessage, bootstrap,
};
use silkhide_config::{ActionConfig, LoadedConfig};
use silkhide_core::{LabelKind, LabelRole, ResolutionPath, SelectionItem};
use silkhide_test_support::assert::{assert_hidden, label_visible};
use silkhide_test_support::fixtures::sample_board;
use silkhide_test_support::mocks::ScriptedUi;

fn action() -> BulkHideAction {
    BulkHideAction::from_config(&LoadedConfig {
        config: ActionConfig::default(),
        source: None,
    })
}

#[test]
fn references_only_hides_exactly_the_references() -> anyhow::Result<()> {
    let mut host = sample_board().pick(1).pick(2).pick(3).host()?;
    let mut ui = ScriptedUi::confirming(true, false);

    let outcome = action().run(&mut host, &mut ui);

    let ActionOutcome::Applied { path, report } = outcome else {
        anyhow::bail!("expected labels to be applied, got {outcome:?}");
    };
    assert_eq!(path, ResolutionPath::Selection);
    assert_eq!(report.placements, 3);
    assert_eq!(report.references_hidden, 3);
    assert_eq!(report.values_hidden, 0);
    assert_hidden(
        host.document(),
        &[
            (1, LabelRole::Reference),
            (2, LabelRole::Reference),
            (3, LabelRole::Reference),
        ],
    );
    assert_eq!(host.redraw_requests(), 1);
    assert!(ui.shown().is_empty());
    Ok(())
}

#[test]
fn missing_value_label_is_skipped_without_error() -> anyhow::Result<()> {
    let mut host = sample_board().pick(3).pick(1).host()?;
    let mut ui = ScriptedUi::confirming(true, true);

    let outcome = action().run(&mut host, &mut ui);

    let ActionOutcome::Applied { report, .. } = outcome else {
        anyhow::bail!("expected labels to be applied, got {outcome:?}");
    };
    assert_eq!(report.values_missing, 1);
    assert_eq!(report.labels_hidden(), 3);
    assert_eq!(label_visible(host.document(), 3, LabelRole::Reference), Some(false));
    assert_eq!(label_visible(host.document(), 1, LabelRole::Value), Some(false));
    assert_eq!(label_visible(host.document(), 2, LabelRole::Reference), Some(true));
    assert_eq!(host.redraw_requests(), 1);
    Ok(())
}

#[test]
fn nothing_resolved_shows_only_the_selection_message() -> anyhow::Result<()> {
    let mut host = sample_board()
        .pick_item(SelectionItem::Other {
            type_name: "PCB_TRACK".to_string(),
        })
        .host()?;
    let mut ui = ScriptedUi::confirming(true, true);

    let outcome = action().run(&mut host, &mut ui);

    assert_eq!(outcome.as_str(), "nothing_resolved");
    assert_eq!(ui.shown(), [UserMessage::no_footprints_selected()]);
    assert!(ui.prompts().is_empty());
    assert_hidden(host.document(), &[]);
    assert_eq!(host.redraw_requests(), 0);
    Ok(())
}

#[test]
fn entries_without_a_footprint_on_the_board_resolve_nothing() -> anyhow::Result<()> {
    let mut host = sample_board()
        .pick_label(LabelKind::PcbField, 99)
        .pick(42)
        .host()?;
    let mut ui = ScriptedUi::confirming(true, true);

    let outcome = action().run(&mut host, &mut ui);

    assert_eq!(
        outcome,
        ActionOutcome::NothingResolved {
            path: ResolutionPath::Selection
        }
    );
    assert_eq!(ui.shown(), [UserMessage::no_footprints_selected()]);
    assert!(ui.prompts().is_empty());
    assert_eq!(host.redraw_requests(), 0);
    Ok(())
}

#[test]
fn empty_decision_changes_nothing() -> anyhow::Result<()> {
    let mut host = sample_board().pick(1).pick(2).host()?;
    let mut ui = ScriptedUi::confirming(false, false);

    let outcome = action().run(&mut host, &mut ui);

    assert_eq!(
        outcome,
        ActionOutcome::Rejected {
            path: ResolutionPath::Selection,
            placements: 2
        }
    );
    assert_eq!(ui.shown(), [UserMessage::no_option_selected()]);
    assert_hidden(host.document(), &[]);
    assert_eq!(host.redraw_requests(), 0);
    Ok(())
}

#[test]
fn cancelled_dialog_changes_nothing() -> anyhow::Result<()> {
    let mut host = sample_board().pick(2).host()?;
    let mut ui = ScriptedUi::cancelling();

    let outcome = action().run(&mut host, &mut ui);

    assert_eq!(outcome.as_str(), "cancelled");
    assert_eq!(ui.prompts().len(), 1);
    assert!(ui.shown().is_empty());
    assert_hidden(host.document(), &[]);
    assert_eq!(host.redraw_requests(), 0);
    Ok(())
}

#[test]
fn refused_enumeration_hides_board_selection() -> anyhow::Result<()> {
    let mut host = sample_board()
        .board_selected(1)
        .reference_selected(3)
        .pick(1)
        .pick_label(LabelKind::PcbField, 3)
        .unsupported("PCB_FIELD")
        .host()?;
    let mut ui = ScriptedUi::confirming(true, false);

    let outcome = action().run(&mut host, &mut ui);

    assert_eq!(outcome.path(), ResolutionPath::InventoryScan);
    assert_eq!(ui.prompts().first().map(|prompt| prompt.placements), Some(2));
    assert_hidden(
        host.document(),
        &[(1, LabelRole::Reference), (3, LabelRole::Reference)],
    );
    Ok(())
}

#[test]
fn refused_enumeration_without_board_resolves_nothing() -> anyhow::Result<()> {
    let mut host = sample_board()
        .board_selected(2)
        .pick(2)
        .not_enumerable()
        .host()?
        .without_board();
    let mut ui = ScriptedUi::confirming(true, true);

    let outcome = action().run(&mut host, &mut ui);

    assert_eq!(
        outcome,
        ActionOutcome::NothingResolved {
            path: ResolutionPath::InventoryScan
        }
    );
    assert_eq!(ui.shown(), [UserMessage::no_footprints_selected()]);
    Ok(())
}

#[test]
fn already_hidden_labels_are_written_again() -> anyhow::Result<()> {
    let mut host = sample_board().reference_hidden(1).pick(1).host()?;
    let mut ui = ScriptedUi::confirming(true, false);

    let outcome = action().run(&mut host, &mut ui);

    let ActionOutcome::Applied { report, .. } = outcome else {
        anyhow::bail!("expected labels to be applied, got {outcome:?}");
    };
    assert_eq!(report.references_hidden, 1);
    assert_hidden(host.document(), &[(1, LabelRole::Reference)]);
    assert_eq!(host.redraw_requests(), 1);
    Ok(())
}

#[test]
fn configured_action_is_dispatched_by_name() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("silkhide.yaml");
    fs::write(
        &config_path,
        "\
action:
  name: Hide values
  icon_file_name: hide.png
resolver:
  label_kinds: [fp_text]
dialog:
  hide_reference: false
",
    )?;
    let app = bootstrap(BootstrapOptions {
        config_path: Some(config_path),
        install_logging: false,
        ..BootstrapOptions::default()
    })?;

    let descriptors: Vec<_> = app.registry.descriptors().cloned().collect();
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].name, "Hide values");
    assert_eq!(descriptors[0].icon, Some(dir.path().join("hide.png")));

    // Field labels are not followed with this configuration.
    let mut host = sample_board()
        .pick_label(LabelKind::PcbField, 1)
        .pick_label(LabelKind::FpText, 2)
        .host()?;
    let mut ui = ScriptedUi::confirming(false, true);
    let outcome = app.registry.run("Hide values", &mut host, &mut ui)?;

    assert!(outcome.is_applied());
    let defaults = ui.prompts().first().map(|prompt| prompt.defaults);
    assert_eq!(defaults.map(|request| request.hide_reference), Some(false));
    assert_hidden(host.document(), &[(2, LabelRole::Value)]);
    Ok(())
}
