//! Shorthand collapsing pass.
//!
//! For every flat declaration block (nested at-rule bodies are walked
//! depth-first), a complete quartet of `margin-*` or `padding-*` side
//! declarations collapses into one shorthand declaration using CSS's
//! positional 1/2/3/4-value convention. The shorthand lands after the
//! block's remaining declarations; blocks missing any side are left alone.

use crate::minifier::scan::{map_flat_blocks, property_colon, split_declarations};
use crate::minifier::Pass;

/// Collapses complete margin/padding longhand quartets into shorthands.
pub struct CollapseShorthands;

const BOX_PROPERTIES: [&str; 2] = ["margin", "padding"];
const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

impl Pass for CollapseShorthands {
    fn name(&self) -> &'static str {
        "collapse-shorthands"
    }

    fn apply(&self, css: &str) -> String {
        map_flat_blocks(css, &collapse_block)
    }
}

fn collapse_block(body: &str) -> String {
    let mut decls: Vec<String> = split_declarations(body)
        .into_iter()
        .filter(|d| !d.trim().is_empty())
        .map(str::to_string)
        .collect();

    for property in BOX_PROPERTIES {
        let longhands = SIDES.map(|side| format!("{property}-{side}"));
        let mut values: [Vec<String>; 4] = Default::default();
        for decl in &decls {
            if let Some((name, value)) = split_property(decl) {
                if let Some(k) = longhands.iter().position(|l| l == name) {
                    values[k].push(value.to_string());
                }
            }
        }
        // Collapse only when every side is present exactly once
        if !values.iter().all(|v| v.len() == 1) {
            continue;
        }
        let [top, right, bottom, left] = values.map(|mut v| v.remove(0));
        decls.retain(|decl| match split_property(decl) {
            Some((name, _)) => !longhands.iter().any(|l| l == name),
            None => true,
        });
        decls.push(format!(
            "{property}:{}",
            shorthand_value(&top, &right, &bottom, &left)
        ));
    }

    decls.join(";")
}

fn split_property(decl: &str) -> Option<(&str, &str)> {
    let colon = property_colon(decl)?;
    Some((decl[..colon].trim(), decl[colon + 1..].trim()))
}

/// CSS positional collapsing: 1 value when all sides match, 2 when vertical
/// and horizontal pair up, 3 when only left mirrors right, else all 4.
fn shorthand_value(top: &str, right: &str, bottom: &str, left: &str) -> String {
    if top == right && right == bottom && bottom == left {
        top.to_string()
    } else if top == bottom && right == left {
        format!("{top} {right}")
    } else if right == left {
        format!("{top} {right} {bottom}")
    } else {
        format!("{top} {right} {bottom} {left}")
    }
}
