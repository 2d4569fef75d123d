//! CLI error type and the context shared by command handlers.

use std::fmt::{self, Display, Formatter};

use silkhide_app::{App, AppError};

use crate::cli::OutputFormat;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<AppError> for CliError {
    fn from(err: AppError) -> Self {
        let user_error = matches!(
            err,
            AppError::Config { .. }
                | AppError::UnknownAction { .. }
                | AppError::DuplicateAction { .. }
        );
        if let AppError::UnknownAction { name } = &err {
            return Self::validation(format!("unknown action '{name}'"));
        }
        let error = anyhow::Error::new(err);
        if user_error {
            Self::Validation(format!("{error:#}"))
        } else {
            Self::Failure(error)
        }
    }
}

/// Everything a command handler needs.
pub(crate) struct CliContext {
    pub(crate) app: App,
    pub(crate) output: OutputFormat,
}
