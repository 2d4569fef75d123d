//! # Design
//!
//! - Centralize application-level errors for bootstrap and action dispatch.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// An action with the same name is already registered.
    #[error("duplicate action registration")]
    DuplicateAction {
        /// Name that was registered twice.
        name: String,
    },
    /// No action is registered under the requested name.
    #[error("unknown action")]
    UnknownAction {
        /// Requested name.
        name: String,
    },
    /// Configuration operations failed.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: silkhide_config::ConfigError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: silkhide_telemetry::TelemetryError,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: silkhide_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: silkhide_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }
}
