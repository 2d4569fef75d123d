//! Configuration discovery, parsing and environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::ActionConfig;
use crate::validate::{parse_log_format, parse_log_level, validate_config};

/// Environment variable naming the configuration file.
pub const ENV_CONFIG_PATH: &str = "SILKHIDE_CONFIG";
/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "SILKHIDE_LOG_LEVEL";
/// Environment variable overriding `logging.format`.
pub const ENV_LOG_FORMAT: &str = "SILKHIDE_LOG_FORMAT";

/// Serialisation format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`.
    Yaml,
    /// `.json`.
    Json,
}

impl ConfigFormat {
    /// Infer the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Validated configuration plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// Effective configuration.
    pub config: ActionConfig,
    /// File the configuration was read from; `None` when built from defaults.
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Directory relative paths in the configuration resolve against.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.source.as_deref().and_then(Path::parent)
    }

    /// Absolute-ish icon path, when an icon is configured.
    #[must_use]
    pub fn icon_path(&self) -> Option<PathBuf> {
        let icon = self.config.action.icon_file_name.as_deref()?;
        Some(
            self.base_dir()
                .map_or_else(|| PathBuf::from(icon), |dir| dir.join(icon)),
        )
    }
}

/// Builder that loads, overrides and validates the action configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env: Vec<(String, String)>,
}

impl ConfigLoader {
    /// Loader with no file and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from `path`; a missing file is an error.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Capture `SILKHIDE_*` overrides from the process environment.
    #[must_use]
    pub fn with_process_env(self) -> Self {
        let vars = [ENV_LOG_LEVEL, ENV_LOG_FORMAT]
            .into_iter()
            .filter_map(|name| std::env::var(name).ok().map(|value| (name.to_string(), value)));
        self.with_env(vars)
    }

    /// Apply the given `(name, value)` overrides.
    #[must_use]
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(name, value)| (name.into(), value.into())));
        self
    }

    /// Load the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed, an override is invalid,
    /// or the resulting document fails validation.
    pub fn load(self) -> ConfigResult<LoadedConfig> {
        let mut config = match &self.path {
            Some(path) => read_config_file(path)?,
            None => ActionConfig::default(),
        };
        apply_overrides(&mut config, &self.env)?;
        validate_config(&config)?;
        let origin = self
            .path
            .as_deref()
            .map_or_else(|| "defaults".to_string(), |path| path.display().to_string());
        debug!(origin = %origin, action = %config.action.name, "configuration loaded");
        Ok(LoadedConfig {
            config,
            source: self.path,
        })
    }
}

fn read_config_file(path: &Path) -> ConfigResult<ActionConfig> {
    let format = ConfigFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        operation: "config.read",
        path: path.to_path_buf(),
        source,
    })?;
    match format {
        ConfigFormat::Yaml => serde_yaml::from_str(&text).map_err(|source| ConfigError::ParseYaml {
            path: path.to_path_buf(),
            source,
        }),
        ConfigFormat::Json => serde_json::from_str(&text).map_err(|source| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn apply_overrides(config: &mut ActionConfig, env: &[(String, String)]) -> ConfigResult<()> {
    for (name, value) in env {
        match name.as_str() {
            ENV_LOG_LEVEL => config.logging.level = parse_log_level(value)?.to_string(),
            ENV_LOG_FORMAT => config.logging.format = Some(parse_log_format(value)?),
            _ => {}
        }
    }
    Ok(())
}
