//! Validation helpers and parsing utilities for configuration documents.

use std::collections::HashSet;

use crate::error::{ConfigError, ConfigResult};
use crate::model::{ActionConfig, LogFormatSetting};

/// Level directives accepted in `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a parsed configuration document.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for the first field that fails validation.
pub fn validate_config(config: &ActionConfig) -> ConfigResult<()> {
    require_text("action", "name", &config.action.name)?;
    require_text("action", "category", &config.action.category)?;
    if let Some(icon) = &config.action.icon_file_name {
        require_text("action", "icon_file_name", icon)?;
    }

    let kinds = &config.resolver.label_kinds;
    if kinds.is_empty() {
        return Err(ConfigError::invalid(
            "resolver",
            "label_kinds",
            None,
            "empty",
        ));
    }
    let mut seen = HashSet::new();
    if let Some(duplicate) = kinds.iter().find(|kind| !seen.insert(**kind)) {
        return Err(ConfigError::invalid(
            "resolver",
            "label_kinds",
            Some(duplicate.type_name().to_string()),
            "duplicate",
        ));
    }

    parse_log_level(&config.logging.level)?;
    Ok(())
}

/// Normalise a log level directive.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the level is not recognised.
pub fn parse_log_level(value: &str) -> ConfigResult<&'static str> {
    let normalised = value.trim().to_ascii_lowercase();
    LOG_LEVELS
        .iter()
        .find(|level| **level == normalised)
        .copied()
        .ok_or_else(|| ConfigError::invalid("logging", "level", Some(value.to_string()), "unknown"))
}

/// Parse a log format name (`pretty` or `json`).
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for any other value.
pub fn parse_log_format(value: &str) -> ConfigResult<LogFormatSetting> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pretty" => Ok(LogFormatSetting::Pretty),
        "json" => Ok(LogFormatSetting::Json),
        _ => Err(ConfigError::invalid(
            "logging",
            "format",
            Some(value.to_string()),
            "unknown",
        )),
    }
}

fn require_text(section: &'static str, field: &'static str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(section, field, None, "empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use silkhide_core::LabelKind;

    fn reason(result: ConfigResult<()>) -> Option<(&'static str, &'static str)> {
        match result {
            Err(ConfigError::InvalidField { field, reason, .. }) => Some((field, reason)),
            _ => None,
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ActionConfig::default()).is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut config = ActionConfig::default();
        config.action.name = "  ".to_string();
        assert_eq!(reason(validate_config(&config)), Some(("name", "empty")));
    }

    #[test]
    fn label_kinds_must_be_unique_and_present() {
        let mut config = ActionConfig::default();
        config.resolver.label_kinds = Vec::new();
        assert_eq!(reason(validate_config(&config)), Some(("label_kinds", "empty")));

        config.resolver.label_kinds = vec![LabelKind::PcbField, LabelKind::PcbField];
        assert_eq!(
            reason(validate_config(&config)),
            Some(("label_kinds", "duplicate"))
        );
    }

    #[test]
    fn log_levels_and_formats_parse() {
        assert_eq!(parse_log_level(" DEBUG ").ok(), Some("debug"));
        assert!(parse_log_level("verbose").is_err());
        assert_eq!(parse_log_format("json").ok(), Some(LogFormatSetting::Json));
        assert!(parse_log_format("xml").is_err());
    }
}
