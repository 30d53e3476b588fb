//! Quote removal pass.
//!
//! The earlier passes treat string literals as opaque, but CSS syntax allows
//! two quoted positions to drop their quotes outright: `url("X")` when `X`
//! needs no quoting, and `[attr="X"]` when `X` is a valid unquoted
//! identifier. Both checks are bounded lookahead from the triggering
//! character; anything that does not match exactly is copied through and the
//! scan advances by one.

use crate::minifier::scan::{comment_end, string_end};
use crate::minifier::Pass;

/// Strips removable quotes from `url(...)` and attribute selectors.
pub struct UnquoteTokens;

impl Pass for UnquoteTokens {
    fn name(&self) -> &'static str {
        "unquote-tokens"
    }

    fn apply(&self, css: &str) -> String {
        let bytes = css.as_bytes();
        let mut out = String::with_capacity(css.len());
        let mut copied = 0;
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
            if b == b'u' && css[i..].starts_with("url(") {
                if let Some((content, after)) = unquoted_url(css, i) {
                    out.push_str(&css[copied..i]);
                    out.push_str("url(");
                    out.push_str(content);
                    out.push(')');
                    i = after;
                    copied = i;
                    continue;
                }
            }
            if b == b'[' {
                if let Some((prefix, content, after)) = unquoted_attribute(css, i) {
                    out.push_str(&css[copied..i]);
                    out.push_str(prefix);
                    out.push_str(content);
                    out.push(']');
                    i = after;
                    copied = i;
                    continue;
                }
            }
            i += 1;
        }
        out.push_str(&css[copied..]);
        out
    }
}

/// Checks for `url("X")` at `start` where `X` survives unquoting. Returns
/// the content and the offset past the closing paren.
fn unquoted_url(css: &str, start: usize) -> Option<(&str, usize)> {
    let bytes = css.as_bytes();
    let quote = start + 4;
    if !matches!(bytes.get(quote), Some(b'"') | Some(b'\'')) {
        return None;
    }
    let close = string_end(css, quote);
    if close == css.len() || bytes.get(close) != Some(&b')') {
        return None;
    }
    let content = &css[quote + 1..close - 1];
    if content.is_empty() || !content.bytes().all(is_safe_url_byte) {
        return None;
    }
    Some((content, close + 1))
}

/// An unquoted URL token must not contain whitespace, parens, `;`, quotes,
/// or backslashes.
fn is_safe_url_byte(b: u8) -> bool {
    !b.is_ascii_whitespace() && !matches!(b, b'(' | b')' | b';' | b'"' | b'\'' | b'\\')
}

/// Checks for `[attr="X"]` (with an optional `^$*~|` operator before `=`)
/// at `start` where `X` is a valid unquoted identifier. Returns the
/// `[attr<op>=` prefix, the content, and the offset past the `]`.
fn unquoted_attribute(css: &str, start: usize) -> Option<(&str, &str, usize)> {
    let bytes = css.as_bytes();
    let mut i = start + 1;
    while matches!(bytes.get(i), Some(b) if b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-')) {
        i += 1;
    }
    if i == start + 1 {
        return None;
    }
    if matches!(bytes.get(i), Some(b'^' | b'$' | b'*' | b'~' | b'|')) {
        i += 1;
    }
    if bytes.get(i) != Some(&b'=') {
        return None;
    }
    i += 1;
    if !matches!(bytes.get(i), Some(b'"') | Some(b'\'')) {
        return None;
    }
    let close = string_end(css, i);
    if close == css.len() || bytes.get(close) != Some(&b']') {
        return None;
    }
    let content = &css[i + 1..close - 1];
    if !is_identifier(content) {
        return None;
    }
    Some((&css[start..i], content, close + 1))
}

/// Syntactically valid unquoted CSS identifier: starts with a letter, `_`,
/// or `-` (a leading `-` requires a following letter, `_`, or `-`), and
/// continues with letters, digits, `_`, or `-`.
fn is_identifier(s: &str) -> bool {
    let bytes = s.as_bytes();
    let first = match bytes.first() {
        Some(&b) => b,
        None => return false,
    };
    match first {
        b'_' => {}
        b'-' => match bytes.get(1) {
            Some(&b) if b.is_ascii_alphabetic() || b == b'_' || b == b'-' => {}
            _ => return false,
        },
        b if b.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes[1..]
        .iter()
        .all(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
