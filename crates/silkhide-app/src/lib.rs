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

//! Silkhide application wiring: the bulk-hide action and the registry hosts run it from.
//!
//! Layout: `action.rs` (action trait and the bulk-hide pipeline), `registry.rs` (explicit
//! registration), `ui.rs` (user interaction seam), `bootstrap.rs` (configuration and
//! logging start-up).

/// Action trait and the bulk-hide pipeline.
pub mod action;
/// Configuration loading, logging start-up and registry assembly.
pub mod bootstrap;
/// Application-level errors.
pub mod error;
/// Explicit action registration.
pub mod registry;
/// User interaction seam.
pub mod ui;

pub use action::{Action, ActionDescriptor, ActionOutcome, BulkHideAction};
pub use bootstrap::{App, BootstrapOptions, bootstrap, build_registry, load_config, logging_config};
pub use error::{AppError, AppResult};
pub use registry::ActionRegistry;
pub use ui::{DecisionOutcome, DecisionPrompt, MessageSeverity, UserInterface, UserMessage};
