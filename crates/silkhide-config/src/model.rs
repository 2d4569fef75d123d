//! Typed configuration sections.
//!
//! # Design
//! - Pure data carriers; every section has a default so an absent file is valid.
//! - Keeps IO and validation out of the model (`loader.rs`, `validate.rs`).

use serde::{Deserialize, Serialize};
use silkhide_core::{HideRequest, LabelKind, LabelKindSet, SelectionResolver};

/// Display name the action registers under.
pub const DEFAULT_ACTION_NAME: &str = "Bulk hide silkscreen designators";
/// Menu category of the action.
pub const DEFAULT_ACTION_CATEGORY: &str = "Silkscreen";
/// One-line description shown in the host's action list.
pub const DEFAULT_ACTION_DESCRIPTION: &str =
    "Hide reference designators or values for selected footprints";
/// Toolbar icon expected next to the configuration file.
pub const DEFAULT_ICON_FILE_NAME: &str = "icon.png";

/// Complete action configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActionConfig {
    /// Registration metadata.
    pub action: ActionMetadata,
    /// Selection resolver settings.
    pub resolver: ResolverSettings,
    /// Initial state of the decision dialog.
    pub dialog: DialogDefaults,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Metadata the hosting shell registers the action with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActionMetadata {
    /// Display name; also the registry key.
    pub name: String,
    /// Menu category.
    pub category: String,
    /// Short description.
    pub description: String,
    /// Whether the host shows a toolbar button.
    pub show_toolbar_button: bool,
    /// Icon file, relative to the configuration file's directory.
    pub icon_file_name: Option<String>,
}

impl Default for ActionMetadata {
    fn default() -> Self {
        Self {
            name: DEFAULT_ACTION_NAME.to_string(),
            category: DEFAULT_ACTION_CATEGORY.to_string(),
            description: DEFAULT_ACTION_DESCRIPTION.to_string(),
            show_toolbar_button: true,
            icon_file_name: Some(DEFAULT_ICON_FILE_NAME.to_string()),
        }
    }
}

/// Resolver knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverSettings {
    /// Label kinds followed back to their owning footprint.
    pub label_kinds: Vec<LabelKind>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            label_kinds: LabelKind::ALL.to_vec(),
        }
    }
}

impl ResolverSettings {
    /// Label kinds as a set.
    #[must_use]
    pub fn label_kind_set(&self) -> LabelKindSet {
        self.label_kinds.iter().copied().collect()
    }

    /// Resolver honouring these settings.
    #[must_use]
    pub fn resolver(&self) -> SelectionResolver {
        SelectionResolver::new(self.label_kind_set())
    }
}

/// Initial checkbox state of the decision dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialogDefaults {
    /// Hide-reference box checked initially.
    pub hide_reference: bool,
    /// Hide-value box checked initially.
    pub hide_value: bool,
}

impl Default for DialogDefaults {
    fn default() -> Self {
        Self {
            hide_reference: true,
            hide_value: true,
        }
    }
}

impl DialogDefaults {
    /// Defaults as a raw request.
    #[must_use]
    pub const fn request(self) -> HideRequest {
        HideRequest::new(self.hide_reference, self.hide_value)
    }
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatSetting {
    /// Human-readable output.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Level directive applied when `RUST_LOG` is unset.
    pub level: String,
    /// Output format; inferred from the build profile when absent.
    pub format: Option<LogFormatSetting>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: None,
        }
    }
}
