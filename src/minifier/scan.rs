//! Shared scanning primitives for the minification passes.
//!
//! Every pass walks the document left to right while tracking whether the
//! current position sits inside a string literal or a comment. The helpers
//! here centralize that bookkeeping so each pass only implements its own
//! rewriting logic on top of the same span detection.
//!
//! All helpers operate on byte offsets. The characters that drive state
//! transitions (quotes, backslashes, braces, comment delimiters) are ASCII,
//! so multi-byte UTF-8 sequences pass through without affecting any state.

/// Tracks string-literal state across a left-to-right scan.
///
/// A string opens on an unescaped `"` or `'` and closes on the matching
/// unescaped delimiter. Escaping follows backslash parity: a delimiter
/// preceded by an odd number of consecutive backslashes stays literal.
pub(crate) struct QuoteTracker {
    delim: Option<u8>,
    escaped: bool,
}

impl QuoteTracker {
    pub(crate) fn new() -> Self {
        Self {
            delim: None,
            escaped: false,
        }
    }

    pub(crate) fn in_string(&self) -> bool {
        self.delim.is_some()
    }

    /// Feed one byte of input. Returns `true` when the byte belongs to a
    /// string literal (either delimiter or content).
    pub(crate) fn step(&mut self, byte: u8) -> bool {
        match self.delim {
            Some(d) => {
                if self.escaped {
                    self.escaped = false;
                } else if byte == b'\\' {
                    self.escaped = true;
                } else if byte == d {
                    self.delim = None;
                }
                true
            }
            None => {
                if byte == b'"' || byte == b'\'' {
                    self.delim = Some(byte);
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Byte offset one past the closing delimiter of the string literal opening
/// at `open`, or `css.len()` when the string is unterminated.
pub(crate) fn string_end(css: &str, open: usize) -> usize {
    let bytes = css.as_bytes();
    let delim = bytes[open];
    let mut escaped = false;
    let mut i = open + 1;
    while i < bytes.len() {
        let b = bytes[i];
        if escaped {
            escaped = false;
        } else if b == b'\\' {
            escaped = true;
        } else if b == delim {
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

/// Byte offset one past the `*/` closing the comment opening at `open`, or
/// `css.len()` when the comment is unterminated.
pub(crate) fn comment_end(css: &str, open: usize) -> usize {
    match css[open + 2..].find("*/") {
        Some(rel) => open + 2 + rel + 2,
        None => css.len(),
    }
}

/// Byte offset of the `}` matching the `{` at `open`, or `None` when the
/// block runs to end of input. Braces inside string literals are ignored.
pub(crate) fn matching_brace(css: &str, open: usize) -> Option<usize> {
    let bytes = css.as_bytes();
    let mut quotes = QuoteTracker::new();
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        let b = bytes[i];
        if quotes.step(b) {
            i += 1;
            continue;
        }
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Whether `body` contains a `{` outside of string literals, i.e. whether
/// the block is an at-rule body with nested rules rather than a flat run of
/// declarations.
pub(crate) fn has_nested_block(body: &str) -> bool {
    let mut quotes = QuoteTracker::new();
    for &b in body.as_bytes() {
        if quotes.step(b) {
            continue;
        }
        if b == b'{' {
            return true;
        }
    }
    false
}

/// Splits a flat block body on `;`, treating separators inside string
/// literals as non-separating. Empty pieces (stray `;;`) are kept; callers
/// that rebuild a block filter them out.
pub(crate) fn split_declarations(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quotes = QuoteTracker::new();
    let mut start = 0;
    for (i, &b) in body.as_bytes().iter().enumerate() {
        if quotes.step(b) {
            continue;
        }
        if b == b';' {
            parts.push(&body[start..i]);
            start = i + 1;
        }
    }
    if start < body.len() {
        parts.push(&body[start..]);
    }
    parts
}

/// Byte offset of the first `:` in `decl` outside string literals, or `None`
/// for declarations without one.
pub(crate) fn property_colon(decl: &str) -> Option<usize> {
    let mut quotes = QuoteTracker::new();
    for (i, &b) in decl.as_bytes().iter().enumerate() {
        if quotes.step(b) {
            continue;
        }
        if b == b':' {
            return Some(i);
        }
    }
    None
}

/// A span of the document as seen by the value-rewriting pass: either plain
/// text open to rewriting, or an opaque string literal / comment copied
/// through untouched.
pub(crate) enum Segment<'a> {
    Plain(&'a str),
    Opaque(&'a str),
}

/// Splits `css` into plain and opaque spans. Opaque spans cover string
/// literals (delimiters included) and comments; after the comment-stripping
/// pass the only comments left are license comments.
pub(crate) fn segments(css: &str) -> Vec<Segment<'_>> {
    let bytes = css.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        let span_end = if b == b'"' || b == b'\'' {
            string_end(css, i)
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
            comment_end(css, i)
        } else {
            i += 1;
            continue;
        };
        if start < i {
            out.push(Segment::Plain(&css[start..i]));
        }
        out.push(Segment::Opaque(&css[i..span_end]));
        i = span_end;
        start = span_end;
    }
    if start < bytes.len() {
        out.push(Segment::Plain(&css[start..]));
    }
    out
}

/// Walks `css`, recursing into every `{...}` block depth-first, and rewrites
/// each flat declaration block (one with no nested blocks) with `rewrite`.
/// Text outside blocks, block structure, and unmatched braces are preserved
/// byte-for-byte.
pub(crate) fn map_flat_blocks(css: &str, rewrite: &dyn Fn(&str) -> String) -> String {
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
        if b == b'{' {
            let (body_end, terminated) = match matching_brace(css, i) {
                Some(close) => (close, true),
                None => (css.len(), false),
            };
            let body = &css[i + 1..body_end];
            let rewritten = if has_nested_block(body) {
                map_flat_blocks(body, rewrite)
            } else {
                rewrite(body)
            };
            out.push_str(&css[copied..=i]);
            out.push_str(&rewritten);
            if terminated {
                out.push('}');
                i = body_end + 1;
            } else {
                i = css.len();
            }
            copied = i;
            continue;
        }
        i += 1;
    }
    out.push_str(&css[copied..]);
    out
}
