//! Command-line interface definition.
//!
//! Lives in the library so the `xtask` man-page and completion generators
//! can reuse the exact command the binary parses.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

/// Version string for `--version`: crate version plus git hash and build
/// date for dev builds, a clean version for `--features release` builds.
#[cfg(not(feature = "release"))]
pub fn version() -> String {
    format!(
        "{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_SHA"),
        env!("CSSMIN_BUILD_DATE")
    )
}

#[cfg(feature = "release")]
pub fn version() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("CSSMIN_BUILD_DATE"))
}

/// Minify a CSS file.
#[derive(Parser, Debug)]
#[command(
    name = "cssmin",
    version = version(),
    about = "Whole-document CSS minifier",
    long_about = "Minifies a CSS document: strips comments (license comments survive), \
                  collapses whitespace, shortens values, collapses margin/padding \
                  longhands, removes shadowed duplicate declarations, and merges \
                  adjacent rules with identical selectors. Malformed CSS is passed \
                  through best-effort, never rejected."
)]
pub struct Cli {
    /// Input CSS file, or `-` to read from standard input
    pub input: Option<String>,

    /// Output file; prints to standard output when omitted
    pub output: Option<PathBuf>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
