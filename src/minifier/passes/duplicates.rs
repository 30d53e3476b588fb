//! Duplicate property removal pass.
//!
//! Within a flat declaration block, a property declared more than once
//! normally keeps only its last occurrence. Repeats that form an intentional
//! fallback chain are kept in full; a group counts as a chain when any of
//! its values carries a vendor prefix or a modern CSS function, when the
//! property itself is vendor-prefixed or is `src` (repeated legitimately in
//! `@font-face`), or when a vendor-prefixed counterpart of the property
//! exists in the same block.

use std::collections::{HashMap, HashSet};

use crate::minifier::scan::{map_flat_blocks, property_colon, split_declarations};
use crate::minifier::Pass;

/// Removes declarations shadowed by a later same-named declaration, keeping
/// vendor-fallback chains intact.
pub struct RemoveDuplicateProperties;

const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-ms-", "-o-"];
const MODERN_FUNCTIONS: [&str; 6] = ["calc(", "var(", "min(", "max(", "clamp(", "env("];

impl Pass for RemoveDuplicateProperties {
    fn name(&self) -> &'static str {
        "remove-duplicate-properties"
    }

    fn apply(&self, css: &str) -> String {
        map_flat_blocks(css, &dedupe_block)
    }
}

fn dedupe_block(body: &str) -> String {
    let decls: Vec<&str> = split_declarations(body)
        .into_iter()
        .filter(|d| !d.trim().is_empty())
        .collect();

    let parsed: Vec<(Option<&str>, &str)> = decls
        .iter()
        .map(|decl| match property_colon(decl) {
            Some(colon) => (Some(decl[..colon].trim()), decl[colon + 1..].trim()),
            None => (None, *decl),
        })
        .collect();

    let names: HashSet<&str> = parsed.iter().filter_map(|(name, _)| *name).collect();

    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, (name, _)) in parsed.iter().enumerate() {
        if let Some(name) = name {
            groups.entry(name).or_default().push(i);
        }
    }

    let mut keep = vec![true; decls.len()];
    for (name, indices) in &groups {
        if indices.len() < 2 || is_fallback_chain(name, indices, &parsed, &names) {
            continue;
        }
        // last one wins
        for &i in &indices[..indices.len() - 1] {
            keep[i] = false;
        }
    }

    let kept: Vec<&str> = decls
        .iter()
        .enumerate()
        .filter(|(i, _)| keep[*i])
        .map(|(_, d)| *d)
        .collect();
    kept.join(";")
}

fn is_fallback_chain(
    name: &str,
    indices: &[usize],
    parsed: &[(Option<&str>, &str)],
    names: &HashSet<&str>,
) -> bool {
    if name == "src" || VENDOR_PREFIXES.iter().any(|p| name.starts_with(p)) {
        return true;
    }
    if indices.iter().any(|&i| {
        let value = parsed[i].1;
        VENDOR_PREFIXES.iter().any(|p| value.contains(p))
            || MODERN_FUNCTIONS.iter().any(|f| value.contains(f))
    }) {
        return true;
    }
    VENDOR_PREFIXES
        .iter()
        .any(|p| names.contains(format!("{p}{name}").as_str()))
}
