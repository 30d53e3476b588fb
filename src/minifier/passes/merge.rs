//! Adjacent rule merging pass.
//!
//! Two textually consecutive rules with byte-identical selector text merge
//! into one rule. Only flat bodies participate: an at-rule block containing
//! nested rules is emitted as-is, and anything between two rules (a license
//! comment, a blockless at-rule) breaks adjacency. No selector-semantic
//! comparison happens - `a` and `a ` would be different selectors, but the
//! whitespace pass has already normalized that.

use crate::minifier::scan::{comment_end, has_nested_block, matching_brace, string_end};
use crate::minifier::Pass;

/// Merges textually adjacent rules sharing an identical selector.
pub struct MergeAdjacentRules;

impl Pass for MergeAdjacentRules {
    fn name(&self) -> &'static str {
        "merge-adjacent-rules"
    }

    fn apply(&self, css: &str) -> String {
        let bytes = css.as_bytes();
        let mut out = String::with_capacity(css.len());
        // selector and accumulated body of the previous flat rule, still
        // open for merging
        let mut pending: Option<(String, String)> = None;
        let mut item_start = 0;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b == b'"' || b == b'\'' {
                i = string_end(css, i);
                continue;
            }
            if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
                i = comment_end(css, i);
                continue;
            }
            if b == b';' {
                // blockless at-rule such as @import or @charset
                flush(&mut out, &mut pending);
                out.push_str(&css[item_start..=i]);
                i += 1;
                item_start = i;
                continue;
            }
            if b == b'{' {
                let selector = &css[item_start..i];
                let (body_end, terminated) = match matching_brace(css, i) {
                    Some(close) => (close, true),
                    None => (css.len(), false),
                };
                if !terminated {
                    // unbalanced input: pass the rest through untouched
                    flush(&mut out, &mut pending);
                    out.push_str(&css[item_start..]);
                    return out;
                }
                let body = &css[i + 1..body_end];
                let flat = !has_nested_block(body);
                match &mut pending {
                    Some((sel, acc)) if flat && sel.as_str() == selector => {
                        if !body.is_empty() {
                            if !acc.is_empty() {
                                acc.push(';');
                            }
                            acc.push_str(body);
                        }
                    }
                    _ => {
                        flush(&mut out, &mut pending);
                        if flat {
                            pending = Some((selector.to_string(), body.to_string()));
                        } else {
                            out.push_str(selector);
                            out.push('{');
                            out.push_str(body);
                            out.push('}');
                        }
                    }
                }
                i = body_end + 1;
                item_start = i;
                continue;
            }
            i += 1;
        }
        flush(&mut out, &mut pending);
        out.push_str(&css[item_start..]);
        out
    }
}

fn flush(out: &mut String, pending: &mut Option<(String, String)>) {
    if let Some((selector, body)) = pending.take() {
        out.push_str(&selector);
        out.push('{');
        out.push_str(&body);
        out.push('}');
    }
}
