use std::io::{self, IsTerminal};

use anyhow::Context;
use silkhide_app::UserInterface;
use silkhide_document::save_document;
use tracing::info;

use crate::cli::HideArgs;
use crate::commands::open_board;
use crate::context::{CliContext, CliError, CliResult};
use crate::output::{HideView, render_hide};
use crate::prompt::{FlagOverrides, TerminalUi};

pub(crate) fn handle_hide(ctx: &CliContext, args: &HideArgs) -> CliResult<()> {
    let overrides = FlagOverrides {
        reference: args.reference_flag(),
        value: args.value_flag(),
    };
    let interactive = io::stdin().is_terminal();
    let stdin = io::stdin();
    let mut ui = TerminalUi::new(
        interactive.then(|| stdin.lock()),
        io::stderr(),
        overrides,
        args.yes,
    );
    let view = hide_board(ctx, args, &mut ui)?;
    render_hide(&view, ctx.output)
}

pub(crate) fn hide_board(
    ctx: &CliContext,
    args: &HideArgs,
    ui: &mut dyn UserInterface,
) -> CliResult<HideView> {
    let action = args
        .action
        .clone()
        .unwrap_or_else(|| ctx.app.config.config.action.name.clone());
    let mut host = open_board(&args.board)?;
    let outcome = ctx.app.registry.run(&action, &mut host, ui)?;

    let written = match args.output_path() {
        Some(path) if outcome.is_applied() => {
            save_document(&path, host.document())
                .with_context(|| format!("failed to write board {}", path.display()))
                .map_err(CliError::failure)?;
            info!(path = %path.display(), "board document written");
            Some(path)
        }
        _ => None,
    };

    Ok(HideView {
        action,
        outcome,
        written,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    use super::*;
    use silkhide_app::{ActionOutcome, BootstrapOptions, bootstrap};
    use silkhide_core::LabelRole;
    use silkhide_document::load_document;
    use silkhide_test_support::assert::assert_hidden;
    use silkhide_test_support::fixtures::{sample_board, write_board};
    use silkhide_test_support::mocks::ScriptedUi;

    use crate::cli::OutputFormat;

    fn context() -> CliContext {
        let app = bootstrap(BootstrapOptions {
            install_logging: false,
            ..BootstrapOptions::default()
        })
        .unwrap_or_else(|err| panic!("bootstrap: {err}"));
        CliContext {
            app,
            output: OutputFormat::Table,
        }
    }

    fn args(board: &Path) -> HideArgs {
        HideArgs {
            board: board.to_path_buf(),
            reference: false,
            no_reference: false,
            value: false,
            no_value: false,
            yes: true,
            write: None,
            in_place: false,
            action: None,
        }
    }

    fn sample(dir: &Path) -> anyhow::Result<PathBuf> {
        write_board(dir, "board.json", &sample_board().pick(1).pick(3).build())
    }

    #[test]
    fn applied_outcome_is_written_to_target() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let board = sample(dir.path())?;
        let target = dir.path().join("hidden.yaml");
        let mut ui = ScriptedUi::confirming(true, false);

        let view = hide_board(
            &context(),
            &HideArgs {
                write: Some(target.clone()),
                ..args(&board)
            },
            &mut ui,
        )
        .map_err(|err| anyhow::anyhow!(err.display_message()))?;

        assert!(view.outcome.is_applied());
        assert_eq!(view.written.as_deref(), Some(target.as_path()));
        assert_hidden(
            &load_document(&target)?,
            &[(1, LabelRole::Reference), (3, LabelRole::Reference)],
        );
        assert_hidden(&load_document(&board)?, &[]);
        Ok(())
    }

    #[test]
    fn rejected_decision_does_not_write() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let board = sample(dir.path())?;
        let original = std::fs::read_to_string(&board)?;
        let mut ui = ScriptedUi::confirming(false, false);

        let view = hide_board(
            &context(),
            &HideArgs {
                in_place: true,
                ..args(&board)
            },
            &mut ui,
        )
        .map_err(|err| anyhow::anyhow!(err.display_message()))?;

        assert!(matches!(view.outcome, ActionOutcome::Rejected { .. }));
        assert_eq!(view.written, None);
        assert_eq!(std::fs::read_to_string(&board)?, original);
        Ok(())
    }

    fn detached_ui(transcript: &mut Vec<u8>) -> TerminalUi<Cursor<Vec<u8>>, &mut Vec<u8>> {
        TerminalUi::new(None, transcript, FlagOverrides::default(), false)
    }

    #[test]
    fn detached_run_with_empty_selection_reports_nothing_selected() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let board = write_board(dir.path(), "board.json", &sample_board().build())?;
        let mut transcript = Vec::new();

        let view = {
            let mut ui = detached_ui(&mut transcript);
            hide_board(
                &context(),
                &HideArgs {
                    yes: false,
                    in_place: true,
                    ..args(&board)
                },
                &mut ui,
            )
            .map_err(|err| anyhow::anyhow!(err.display_message()))?
        };

        assert!(matches!(view.outcome, ActionOutcome::NothingResolved { .. }));
        assert_eq!(view.written, None);
        let transcript = String::from_utf8(transcript)?;
        assert!(transcript.starts_with("error: No footprints selected"));
        Ok(())
    }

    #[test]
    fn detached_run_without_flags_cancels_with_a_hint() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let board = sample(dir.path())?;
        let original = std::fs::read_to_string(&board)?;
        let mut transcript = Vec::new();

        let view = {
            let mut ui = detached_ui(&mut transcript);
            hide_board(
                &context(),
                &HideArgs {
                    yes: false,
                    in_place: true,
                    ..args(&board)
                },
                &mut ui,
            )
            .map_err(|err| anyhow::anyhow!(err.display_message()))?
        };

        assert!(matches!(view.outcome, ActionOutcome::Cancelled { placements: 2, .. }));
        assert_eq!(std::fs::read_to_string(&board)?, original);
        assert!(String::from_utf8(transcript)?.contains("--yes"));
        Ok(())
    }

    #[test]
    fn unknown_action_is_a_validation_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let board = sample(dir.path())?;
        let mut ui = ScriptedUi::cancelling();

        let result = hide_board(
            &context(),
            &HideArgs {
                action: Some("Renumber".to_string()),
                ..args(&board)
            },
            &mut ui,
        );

        let err = result.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.display_message(), "unknown action 'Renumber'");
        Ok(())
    }
}
