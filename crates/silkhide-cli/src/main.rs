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

//! Binary entrypoint for the silkhide command-line front end.

/// Runs the requested command and exits with its status code.
fn main() {
    let exit_code = silkhide_cli::run();
    std::process::exit(exit_code);
}
