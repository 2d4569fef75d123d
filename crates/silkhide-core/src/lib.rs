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

//! Host-agnostic footprint selection resolution and label hiding.
//!
//! Layout: `model/` (placements, labels, selection items, decisions), `host.rs`
//! (traits the editor implements), `resolve/` (selection resolver), `apply.rs`
//! (hide applicator), `error.rs` (core errors).

pub mod apply;
pub mod error;
pub mod host;
pub mod model;
pub mod resolve;

pub use apply::{ApplyReport, apply_hide};
pub use error::{CoreError, EnumerationUnsupported};
pub use host::{
    EditorHost, LabelUpdate, LabelVisibility, PlacementInventory, RedrawSink, Selection,
    SelectionItems,
};
pub use model::{
    HideDecision, HideRequest, LabelKind, LabelKindSet, LabelRole, LabelSnapshot, ParentRef,
    PlacementId, PlacementSnapshot, SelectionItem,
};
pub use resolve::{
    Resolution, ResolutionPath, ResolvedPlacements, SelectionResolver, scan_inventory,
};
