//! Value optimization pass.
//!
//! Applies an ordered battery of value-level rewrites to every span of the
//! document outside string literals and license comments. The rules run
//! strictly in table order on each span; later rules rely on earlier ones
//! having already normalized their input (e.g. the 3-D transform rule sees
//! `translate3d(0,0,X)` only after zero-unit stripping).
//!
//! All patterns are precompiled once; the table is process-wide immutable
//! state.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::minifier::scan::{segments, Segment};
use crate::minifier::Pass;

/// Applies the ordered value-rewrite rule table to non-opaque segments.
pub struct OptimizeValues;

/// Ordered rule table. Each entry maps one segment to its rewritten form;
/// the output of rule *n* feeds rule *n+1*.
const REWRITES: &[fn(&str) -> String] = &[
    shorten_hex_colors,
    strip_zero_units,
    strip_leading_zeros,
    numeric_font_weights,
    keyframe_offsets,
    flatten_3d_transforms,
    zero_value_keywords,
];

impl Pass for OptimizeValues {
    fn name(&self) -> &'static str {
        "optimize-values"
    }

    fn apply(&self, css: &str) -> String {
        let mut out = String::with_capacity(css.len());
        for segment in segments(css) {
            match segment {
                Segment::Opaque(text) => out.push_str(text),
                Segment::Plain(text) => {
                    let mut rewritten = text.to_string();
                    for rule in REWRITES {
                        rewritten = rule(&rewritten);
                    }
                    out.push_str(&rewritten);
                }
            }
        }
        out
    }
}

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[0-9a-fA-F]+").unwrap());

/// `#aabbcc` -> `#abc` and `#aabbccdd` -> `#abcd`, lower-cased. Matching the
/// maximal hex run means a color followed by another hex digit never
/// shortens.
fn shorten_hex_colors(seg: &str) -> String {
    HEX_COLOR
        .replace_all(seg, |caps: &Captures| {
            let hex = &caps[0][1..];
            if (hex.len() == 6 || hex.len() == 8) && has_doubled_pairs(hex) {
                let mut short = String::with_capacity(1 + hex.len() / 2);
                short.push('#');
                for pair in hex.as_bytes().chunks(2) {
                    short.push(pair[0].to_ascii_lowercase() as char);
                }
                short
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn has_doubled_pairs(hex: &str) -> bool {
    hex.as_bytes()
        .chunks(2)
        .all(|pair| pair[0].eq_ignore_ascii_case(&pair[1]))
}

static ZERO_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([:\s,(/])0(vmin|vmax|turn|rem|deg|rad|ms|px|em|pt|cm|mm|in|pc|ex|ch|vw|vh|s|%)")
        .unwrap()
});

/// `0px` -> `0` for length/angle/time/percentage units, except keyframe
/// selectors (`0%{`) and custom-property values, whose literal units may be
/// significant to `calc()` consumers.
fn strip_zero_units(seg: &str) -> String {
    let mut out = String::with_capacity(seg.len());
    let mut copied = 0;
    for caps in ZERO_UNIT.captures_iter(seg) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        let next = seg[whole.end()..].chars().next();
        // A trailing identifier/digit char means this is not a bare zero token
        if matches!(next, Some(c) if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '%'))
        {
            continue;
        }
        // `0%{` is a keyframe selector, not a value
        if &caps[2] == "%" && next == Some('{') {
            continue;
        }
        if in_custom_property(seg, whole.start()) {
            continue;
        }
        out.push_str(&seg[copied..whole.start()]);
        out.push_str(&caps[1]);
        out.push('0');
        copied = whole.end();
    }
    out.push_str(&seg[copied..]);
    out
}

/// Whether the declaration containing byte offset `pos` names a custom
/// property (`--x: ...`). Scans back to the nearest `;`, `{`, or segment
/// start.
fn in_custom_property(seg: &str, pos: usize) -> bool {
    let head = &seg[..pos];
    let decl_start = head
        .rfind(|c| c == ';' || c == '{')
        .map(|i| i + 1)
        .unwrap_or(0);
    head[decl_start..].trim_start().starts_with("--")
}

static LEADING_ZERO: Lazy<Regex> = Lazy::new(|| Regex::new(r"([:\s,(/-])0\.").unwrap());

/// `0.25` -> `.25`; the `-` prefix case covers `-0.5em` -> `-.5em`.
fn strip_leading_zeros(seg: &str) -> String {
    LEADING_ZERO.replace_all(seg, "$1.").into_owned()
}

static FONT_WEIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"font-weight:(normal|bold)").unwrap());

/// `font-weight:normal` -> `400`, `font-weight:bold` -> `700`, only at a
/// declaration boundary (the `font` shorthand is a different property and is
/// left alone).
fn numeric_font_weights(seg: &str) -> String {
    let mut out = String::with_capacity(seg.len());
    let mut copied = 0;
    for caps in FONT_WEIGHT.captures_iter(seg) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        // None = segment boundary, i.e. a string literal or end of input
        if !matches!(seg[whole.end()..].chars().next(), Some(';' | '}') | None) {
            continue;
        }
        out.push_str(&seg[copied..whole.start()]);
        out.push_str("font-weight:");
        out.push_str(if &caps[1] == "bold" { "700" } else { "400" });
        copied = whole.end();
    }
    out.push_str(&seg[copied..]);
    out
}

static KEYFRAME_FROM: Lazy<Regex> = Lazy::new(|| Regex::new(r"([{}])from([{,])").unwrap());
static KEYFRAME_TO: Lazy<Regex> = Lazy::new(|| Regex::new(r"([{}])100%([{,])").unwrap());

/// Keyframe selector shortening: `from` -> `0%` and `100%` -> `to`. The
/// preceding `{`/`}` restricts the match to block-selector position.
fn keyframe_offsets(seg: &str) -> String {
    let pass_one = KEYFRAME_FROM.replace_all(seg, "${1}0%${2}");
    KEYFRAME_TO.replace_all(&pass_one, "${1}to${2}").into_owned()
}

static TRANSLATE3D_Z: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"translate3d\(0,0,([^,()]+)\)").unwrap());
static SCALE3D_IDENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"scale3d\(1,1,1\)").unwrap());
static ROTATE3D: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"rotate3d\(([01]),([01]),([01]),([^,()]+)\)").unwrap());

/// Canonicalizes 3-D transform functions that have no actual 3-D effect.
fn flatten_3d_transforms(seg: &str) -> String {
    let step = TRANSLATE3D_Z.replace_all(seg, "translateZ($1)");
    let step = SCALE3D_IDENTITY.replace_all(&step, "scaleX(1)");
    ROTATE3D
        .replace_all(&step, |caps: &Captures| {
            let angle = &caps[4];
            match (&caps[1], &caps[2], &caps[3]) {
                ("0", "0", "1") => format!("rotate({angle})"),
                ("0", "1", "0") => format!("rotateY({angle})"),
                ("1", "0", "0") => format!("rotateX({angle})"),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

static BACKGROUND_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"background:(transparent|none)").unwrap());
static OUTLINE_NONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"outline:none").unwrap());

/// `background:transparent|none` -> `background:0 0` and `outline:none` ->
/// `outline:0`, at declaration boundaries only.
fn zero_value_keywords(seg: &str) -> String {
    let step = replace_at_boundary(seg, &BACKGROUND_KEYWORD, "background:0 0");
    replace_at_boundary(&step, &OUTLINE_NONE, "outline:0")
}

fn replace_at_boundary(seg: &str, pattern: &Regex, replacement: &str) -> String {
    let mut out = String::with_capacity(seg.len());
    let mut copied = 0;
    for found in pattern.find_iter(seg) {
        if !matches!(
            seg[found.end()..].chars().next(),
            Some(';' | '}' | ',' | '!') | None
        ) {
            continue;
        }
        out.push_str(&seg[copied..found.start()]);
        out.push_str(replacement);
        copied = found.end();
    }
    out.push_str(&seg[copied..]);
    out
}
