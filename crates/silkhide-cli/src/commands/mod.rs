//! Command handlers grouped by concern.

pub(crate) mod actions;
pub(crate) mod hide;
pub(crate) mod resolve;

use std::path::Path;

use anyhow::Context;
use silkhide_document::{DocumentHost, load_document};

use crate::context::{CliError, CliResult};

/// Read `path` and wrap it in an editor host.
pub(crate) fn open_board(path: &Path) -> CliResult<DocumentHost> {
    let document = load_document(path)
        .with_context(|| format!("failed to read board {}", path.display()))
        .map_err(CliError::failure)?;
    DocumentHost::new(document)
        .with_context(|| format!("board {} is inconsistent", path.display()))
        .map_err(CliError::failure)
}
