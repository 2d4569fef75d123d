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

//! Board documents and the in-memory editor host built on them.
//!
//! Layout: `model.rs` (serde board document), `host.rs` (`DocumentHost`, the
//! editor seams implemented over a document), `io.rs` (JSON/YAML load and save).

pub mod error;
pub mod host;
pub mod io;
pub mod model;

pub use error::{DocumentError, DocumentResult};
pub use host::DocumentHost;
pub use io::{DocumentFormat, load_document, save_document};
pub use model::{BoardDocument, Footprint, SelectionRecord, TextLabel};
