//! Whitespace collapsing pass.
//!
//! Removes whitespace runs that touch a *strip char* and collapses everything
//! else to a single space. Which characters count as strip chars depends on
//! where the scan currently sits:
//!
//! - `{` `}` `;` `,` everywhere
//! - `:` only inside a declaration block or inside parens, so the space in a
//!   descendant selector like `.parent :hover` survives
//! - `>` `+` `~` only outside parens, where they are selector combinators
//!   rather than `calc()` arithmetic
//! - `*` `/` only inside parens (multiply/divide operators)
//! - `!` only inside a declaration block (`!important`)
//!
//! Also removes the redundant `;` runs directly before a `}`.

use crate::minifier::scan::{comment_end, string_end};
use crate::minifier::Pass;

/// Collapses insignificant whitespace outside string literals.
pub struct CollapseWhitespace;

fn is_strip_char(byte: u8, brace_depth: usize, paren_depth: usize) -> bool {
    match byte {
        b'{' | b'}' | b';' | b',' => true,
        b':' => brace_depth > 0 || paren_depth > 0,
        b'>' | b'+' | b'~' => paren_depth == 0,
        b'*' | b'/' => paren_depth > 0,
        b'!' => brace_depth > 0,
        _ => false,
    }
}

impl Pass for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse-whitespace"
    }

    fn apply(&self, css: &str) -> String {
        let bytes = css.as_bytes();
        let mut out = String::with_capacity(css.len());
        let mut brace_depth = 0usize;
        let mut paren_depth = 0usize;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b == b'"' || b == b'\'' {
                let end = string_end(css, i);
                out.push_str(&css[i..end]);
                i = end;
                continue;
            }
            if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
                // Only license comments survive the first pass; their
                // interior whitespace is untouchable.
                let end = comment_end(css, i);
                out.push_str(&css[i..end]);
                i = end;
                continue;
            }
            if b.is_ascii_whitespace() {
                let mut j = i + 1;
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                let prev_strips = match out.as_bytes().last() {
                    Some(&p) => is_strip_char(p, brace_depth, paren_depth),
                    None => true,
                };
                let next_strips = match bytes.get(j) {
                    Some(&n) => is_strip_char(n, brace_depth, paren_depth),
                    None => true,
                };
                if !prev_strips && !next_strips && !out.ends_with(' ') {
                    out.push(' ');
                }
                i = j;
                continue;
            }
            match b {
                b'{' => brace_depth += 1,
                b'}' => {
                    brace_depth = brace_depth.saturating_sub(1);
                    while out.ends_with(';') {
                        out.pop();
                    }
                }
                b'(' => paren_depth += 1,
                b')' => paren_depth = paren_depth.saturating_sub(1),
                _ => {}
            }
            match css[i..].chars().next() {
                Some(c) => {
                    out.push(c);
                    i += c.len_utf8();
                }
                None => break,
            }
        }
        out.trim().to_string()
    }
}
