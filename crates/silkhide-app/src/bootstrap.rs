//! Start-up sequence shared by every front end: configuration, logging, registration.

use std::path::PathBuf;

use silkhide_config::validate::parse_log_level;
use silkhide_config::{ConfigLoader, LoadedConfig, LogFormatSetting, LoggingSettings};
use silkhide_telemetry::{GlobalContextGuard, LogFormat, LoggingConfig, init_logging};
use tracing::info;

use crate::action::BulkHideAction;
use crate::error::{AppError, AppResult};
use crate::registry::ActionRegistry;

/// Inputs of the start-up sequence.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Configuration file; defaults apply when `None`.
    pub config_path: Option<PathBuf>,
    /// Log level overriding the configured one.
    pub log_level: Option<String>,
    /// Front end name recorded on the process span.
    pub front_end: &'static str,
    /// Whether to install the global tracing subscriber.
    pub install_logging: bool,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: None,
            front_end: "silkhide",
            install_logging: true,
        }
    }
}

/// Configured application ready to dispatch actions.
pub struct App {
    /// Effective configuration.
    pub config: LoadedConfig,
    /// Registered actions.
    pub registry: ActionRegistry,
    _context: Option<GlobalContextGuard>,
}

/// Load configuration, install logging and register the built-in actions.
///
/// # Errors
///
/// Returns an error when the configuration is invalid or logging cannot be installed.
pub fn bootstrap(options: BootstrapOptions) -> AppResult<App> {
    let config = load_config(options.config_path)?;
    let context = if options.install_logging {
        let logging = logging_config(&config.config.logging, options.log_level.as_deref())?;
        init_logging(&logging).map_err(|err| AppError::telemetry("telemetry.init", err))?;
        Some(GlobalContextGuard::new(options.front_end))
    } else {
        None
    };

    let registry = build_registry(&config)?;
    info!(
        front_end = options.front_end,
        actions = registry.len(),
        "silkhide bootstrap complete"
    );
    Ok(App {
        config,
        registry,
        _context: context,
    })
}

/// Load and validate the configuration, applying `SILKHIDE_*` overrides.
///
/// # Errors
///
/// Returns [`AppError::Config`] when loading or validation fails.
pub fn load_config(path: Option<PathBuf>) -> AppResult<LoadedConfig> {
    let loader = path.map_or_else(ConfigLoader::new, |path| ConfigLoader::new().with_path(path));
    loader
        .with_process_env()
        .load()
        .map_err(|err| AppError::config("config.load", err))
}

/// Logging configuration for `settings`, with an optional level override.
///
/// # Errors
///
/// Returns [`AppError::Config`] when the override is not a known level.
pub fn logging_config<'a>(
    settings: &'a LoggingSettings,
    level_override: Option<&str>,
) -> AppResult<LoggingConfig<'a>> {
    let level = match level_override {
        Some(level) => {
            parse_log_level(level).map_err(|err| AppError::config("logging.level", err))?
        }
        None => settings.level.as_str(),
    };
    let format = match settings.format {
        Some(LogFormatSetting::Json) => LogFormat::Json,
        Some(LogFormatSetting::Pretty) => LogFormat::Pretty,
        None => LogFormat::infer(),
    };
    Ok(LoggingConfig {
        level,
        format,
        ..LoggingConfig::default()
    })
}

/// Registry holding the bulk-hide action described by `config`.
///
/// # Errors
///
/// Returns [`AppError::DuplicateAction`] if registration collides.
pub fn build_registry(config: &LoadedConfig) -> AppResult<ActionRegistry> {
    let mut registry = ActionRegistry::new();
    registry.register(Box::new(BulkHideAction::from_config(config)))?;
    Ok(registry)
}
