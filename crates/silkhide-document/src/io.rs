//! Loading and saving board documents.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{DocumentError, DocumentResult};
use crate::model::BoardDocument;

/// Serialisation format of a board document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.yaml` / `.yml`.
    Yaml,
    /// `.json`.
    Json,
}

impl DocumentFormat {
    /// Infer the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> DocumentResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(DocumentError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Read a board document from `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not parse.
pub fn load_document(path: &Path) -> DocumentResult<BoardDocument> {
    let format = DocumentFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        operation: "document.read",
        path: path.to_path_buf(),
        source,
    })?;
    let document: BoardDocument = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(&text).map_err(|source| DocumentError::Yaml {
            operation: "document.parse",
            path: path.to_path_buf(),
            source,
        })?,
        DocumentFormat::Json => serde_json::from_str(&text).map_err(|source| DocumentError::Json {
            operation: "document.parse",
            path: path.to_path_buf(),
            source,
        })?,
    };
    debug!(
        path = %path.display(),
        footprints = document.footprints.len(),
        selected_items = document.selection.items.len(),
        "board document loaded"
    );
    Ok(document)
}

/// Write `document` to `path` in the format implied by its extension.
///
/// # Errors
///
/// Returns an error when encoding or writing fails.
pub fn save_document(path: &Path, document: &BoardDocument) -> DocumentResult<()> {
    let text = match DocumentFormat::from_path(path)? {
        DocumentFormat::Yaml => {
            serde_yaml::to_string(document).map_err(|source| DocumentError::Yaml {
                operation: "document.encode",
                path: path.to_path_buf(),
                source,
            })?
        }
        DocumentFormat::Json => {
            let mut text =
                serde_json::to_string_pretty(document).map_err(|source| DocumentError::Json {
                    operation: "document.encode",
                    path: path.to_path_buf(),
                    source,
                })?;
            text.push('\n');
            text
        }
    };
    fs::write(path, text).map_err(|source| DocumentError::Io {
        operation: "document.write",
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "board document written");
    Ok(())
}
