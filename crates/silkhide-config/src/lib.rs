#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! File-backed configuration for the bulk-hide action.
//!
//! Layout: `model.rs` (typed config sections), `validate.rs` (validation/parsing
//! helpers), `loader.rs` (file discovery, parsing and environment overrides).

pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    ConfigFormat, ConfigLoader, ENV_CONFIG_PATH, ENV_LOG_FORMAT, ENV_LOG_LEVEL, LoadedConfig,
};
pub use model::{
    ActionConfig, ActionMetadata, DialogDefaults, LogFormatSetting, LoggingSettings,
    ResolverSettings,
};
pub use validate::validate_config;
