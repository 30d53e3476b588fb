//! CSS minification pipeline.
//!
//! Seven ordered passes, each a pure `&str -> String` function consuming the
//! previous pass's full output. No shared state crosses a pass boundary;
//! every pass independently tracks string-literal and nesting context while
//! it scans. The pipeline is total over arbitrary text: malformed CSS
//! degrades to best-effort passthrough and never panics.
//!
//! # Pass order
//!
//! 1. [`StripComments`] - removes comments, keeps `/*!` license comments
//! 2. [`CollapseWhitespace`] - depth-aware whitespace collapsing
//! 3. [`OptimizeValues`] - ordered value-rewrite rule table
//! 4. [`UnquoteTokens`] - `url()` and attribute-selector unquoting
//! 5. [`CollapseShorthands`] - margin/padding longhand collapsing
//! 6. [`RemoveDuplicateProperties`] - last-wins dedup, fallback chains kept
//! 7. [`MergeAdjacentRules`] - merges adjacent identical-selector rules
//!
//! Later passes assume earlier normalization (e.g. shorthand collapsing
//! relies on the single-space, semicolon-delimited declarations the
//! whitespace pass produces), so the order is fixed.

mod passes;
mod scan;

pub use passes::{
    CollapseShorthands, CollapseWhitespace, MergeAdjacentRules, OptimizeValues,
    RemoveDuplicateProperties, StripComments, UnquoteTokens,
};

/// One minification pass: a pure string-to-string transform.
pub trait Pass {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Transform the full document, allocating a fresh output buffer.
    fn apply(&self, css: &str) -> String;
}

/// Runs the full minification pipeline over `css`.
///
/// Total over arbitrary input: malformed CSS is passed through best-effort,
/// never rejected.
pub fn minify(css: &str) -> String {
    let pipeline: [&dyn Pass; 7] = [
        &StripComments,
        &CollapseWhitespace,
        &OptimizeValues,
        &UnquoteTokens,
        &CollapseShorthands,
        &RemoveDuplicateProperties,
        &MergeAdjacentRules,
    ];

    let mut css = css.to_string();
    for pass in pipeline {
        let output = pass.apply(&css);
        tracing::debug!(
            pass = pass.name(),
            input_len = css.len(),
            output_len = output.len(),
            "pass complete"
        );
        css = output;
    }
    css
}
