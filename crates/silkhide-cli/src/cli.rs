//! Argument parsing and command dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use silkhide_app::{BootstrapOptions, bootstrap};
use silkhide_config::ENV_CONFIG_PATH;

use crate::commands::actions::handle_actions;
use crate::commands::hide::handle_hide;
use crate::commands::resolve::handle_resolve;
use crate::context::{CliContext, CliResult};

/// Parses CLI arguments and executes the requested command. Returns the process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    match dispatch(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn dispatch(cli: Cli) -> CliResult<()> {
    let app = bootstrap(BootstrapOptions {
        config_path: cli.config,
        log_level: cli.log_level,
        front_end: "cli",
        install_logging: true,
    })?;
    let ctx = CliContext {
        app,
        output: cli.output,
    };

    match cli.command {
        Command::Resolve(args) => handle_resolve(&ctx, &args),
        Command::Hide(args) => handle_hide(&ctx, &args),
        Command::Actions => handle_actions(&ctx),
    }
}

#[derive(Parser)]
#[command(
    name = "silkhide",
    about = "Hide footprint reference designators and values on a board document"
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = ENV_CONFIG_PATH,
        help = "Action configuration file (YAML or JSON)"
    )]
    config: Option<PathBuf>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    output: OutputFormat,
    #[arg(long, global = true, help = "Log level overriding the configured one")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show which footprints the current selection resolves to.
    Resolve(ResolveArgs),
    /// Run the bulk-hide action on a board document.
    Hide(HideArgs),
    /// List registered actions.
    Actions,
}

#[derive(Args)]
pub(crate) struct ResolveArgs {
    #[arg(long, help = "Board document (JSON or YAML)")]
    pub(crate) board: PathBuf,
}

#[derive(Args)]
pub(crate) struct HideArgs {
    #[arg(long, help = "Board document (JSON or YAML)")]
    pub(crate) board: PathBuf,
    #[arg(long, overrides_with = "no_reference", help = "Hide reference designators")]
    pub(crate) reference: bool,
    #[arg(long, overrides_with = "reference", help = "Keep reference designators")]
    pub(crate) no_reference: bool,
    #[arg(long, overrides_with = "no_value", help = "Hide values")]
    pub(crate) value: bool,
    #[arg(long, overrides_with = "value", help = "Keep values")]
    pub(crate) no_value: bool,
    #[arg(long, short = 'y', help = "Confirm without prompting")]
    pub(crate) yes: bool,
    #[arg(long, conflicts_with = "in_place", help = "Write the updated board to this file")]
    pub(crate) write: Option<PathBuf>,
    #[arg(long, help = "Overwrite the board document")]
    pub(crate) in_place: bool,
    #[arg(long, help = "Registered action to run (defaults to the configured one)")]
    pub(crate) action: Option<String>,
}

impl HideArgs {
    pub(crate) const fn reference_flag(&self) -> Option<bool> {
        tri_state(self.reference, self.no_reference)
    }

    pub(crate) const fn value_flag(&self) -> Option<bool> {
        tri_state(self.value, self.no_value)
    }

    pub(crate) fn output_path(&self) -> Option<PathBuf> {
        if self.in_place {
            Some(self.board.clone())
        } else {
            self.write.clone()
        }
    }
}

const fn tri_state(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn hide_args(argv: &[&str]) -> HideArgs {
        let cli = Cli::try_parse_from(argv.iter().copied())
            .unwrap_or_else(|err| panic!("parse failed: {err}"));
        match cli.command {
            Command::Hide(args) => args,
            _ => panic!("expected hide command"),
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn last_reference_flag_wins() {
        let args = hide_args(&[
            "silkhide",
            "hide",
            "--board",
            "b.json",
            "--reference",
            "--no-reference",
            "--value",
        ]);
        assert_eq!(args.reference_flag(), Some(false));
        assert_eq!(args.value_flag(), Some(true));
        assert_eq!(args.output_path(), None);
    }

    #[test]
    fn unset_flags_defer_to_configuration() {
        let args = hide_args(&["silkhide", "hide", "--board", "b.json", "--in-place", "-y"]);
        assert_eq!(args.reference_flag(), None);
        assert_eq!(args.value_flag(), None);
        assert!(args.yes);
        assert_eq!(args.output_path(), Some(PathBuf::from("b.json")));
    }

    #[test]
    fn write_and_in_place_conflict() {
        let result = Cli::try_parse_from([
            "silkhide",
            "hide",
            "--board",
            "b.json",
            "--write",
            "out.json",
            "--in-place",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_output_flag_is_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["silkhide", "actions", "--output", "json"])
            .unwrap_or_else(|err| panic!("parse failed: {err}"));
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(cli.command, Command::Actions));
    }
}
