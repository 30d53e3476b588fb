//! cssmin - whole-document CSS minifier.
//!
//! Transforms a complete CSS source document into a semantically equivalent,
//! byte-smaller document: comments, redundant whitespace, and redundant
//! punctuation go away, and a curated set of value-level and structural
//! rewrites is applied on top. The transform works on raw text with
//! delimiter and depth tracking - no syntax tree, no validation - so
//! malformed CSS passes through best-effort instead of being rejected.
//!
//! ```
//! assert_eq!(cssmin::minify("a { color: #ff0000; }"), "a{color:#f00}");
//! ```

pub mod cli;
pub mod minifier;

pub use minifier::minify;
