//! Error types for core resolution and hide operations.

use thiserror::Error;

/// Primary error type for core operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Neither hide flag was set on the submitted request.
    #[error("no option selected")]
    NoOptionSelected,
}

/// Signal raised by a selection that refuses to be enumerated.
///
/// Resolution treats this as a request to fall back to the inventory scan; it is never
/// surfaced to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("selection enumeration unsupported")]
pub struct EnumerationUnsupported {
    /// Type name of the item that broke enumeration, when the host knows it.
    pub item_kind: Option<String>,
    /// Machine-readable reason reported by the host.
    pub reason: &'static str,
}

impl EnumerationUnsupported {
    /// Build a signal for an item of the given editor type.
    #[must_use]
    pub fn for_kind(item_kind: impl Into<String>, reason: &'static str) -> Self {
        Self {
            item_kind: Some(item_kind.into()),
            reason,
        }
    }

    /// Build a signal for a selection that cannot be iterated at all.
    #[must_use]
    pub const fn not_iterable() -> Self {
        Self {
            item_kind: None,
            reason: "not_iterable",
        }
    }
}
