//! Comment stripping pass.
//!
//! Removes every `/* ... */` comment from the document except license
//! comments (`/*! ... */`), which are copied through verbatim. Comment
//! delimiters inside string literals are content, not comments.

use crate::minifier::scan::QuoteTracker;
use crate::minifier::Pass;

/// Strips comments, preserving `/*!` license comments verbatim.
pub struct StripComments;

impl Pass for StripComments {
    fn name(&self) -> &'static str {
        "strip-comments"
    }

    fn apply(&self, css: &str) -> String {
        let bytes = css.as_bytes();
        let mut out = String::with_capacity(css.len());
        let mut quotes = QuoteTracker::new();
        let mut copied = 0;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if quotes.in_string() {
                quotes.step(b);
                i += 1;
                continue;
            }
            if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
                out.push_str(&css[copied..i]);
                if bytes.get(i + 2) == Some(&b'!') {
                    // License comment: copy the whole span unchanged. An
                    // unterminated one swallows the rest of the input.
                    match css[i..].find("*/") {
                        Some(rel) => {
                            let end = i + rel + 2;
                            out.push_str(&css[i..end]);
                            i = end;
                        }
                        None => {
                            out.push_str(&css[i..]);
                            i = css.len();
                        }
                    }
                } else {
                    // Regular comment: drop through the closing `*/`, or to
                    // end of input when unterminated.
                    i = match css[i + 2..].find("*/") {
                        Some(rel) => i + 2 + rel + 2,
                        None => css.len(),
                    };
                }
                copied = i;
                continue;
            }
            quotes.step(b);
            i += 1;
        }
        out.push_str(&css[copied..]);
        out
    }
}
