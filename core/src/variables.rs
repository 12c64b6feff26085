//! Flattening token trees into CSS custom properties.

use indexmap::IndexMap;
use itertools::Itertools;

use crate::token::{TokenGroup, TokenNode};

/// Variable namespace of the generated Paragon theme tokens.
pub const PGN_NAMESPACE: &str = "--pgn-";
/// Variable namespace of the HUMAIN brand tokens.
pub const HUMAIN_NAMESPACE: &str = "--humain-";

/// Ordered name→value mapping of generated variables.
///
/// Re-inserting an existing name replaces the value but keeps the name's
/// original position, so combining sets preserves first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableSet {
    vars: IndexMap<String, String>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, value: String) {
        self.vars.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn first_name(&self) -> Option<&str> {
        self.vars.keys().next().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Flatten a token group into variables under `namespace`.
///
/// Key paths are joined with `-`; one entry per leaf, in source order.
/// Pure function of its input.
pub fn flatten(group: &TokenGroup, namespace: &str) -> VariableSet {
    let mut set = VariableSet::new();
    collect(group, namespace, "", &mut set);
    set
}

fn collect(group: &TokenGroup, namespace: &str, prefix: &str, out: &mut VariableSet) {
    for (key, node) in group {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}-{key}")
        };
        match node {
            TokenNode::Leaf(leaf) => {
                out.insert(format!("{namespace}{path}"), leaf.value.to_css(namespace));
            }
            TokenNode::Group(inner) => collect(inner, namespace, &path, out),
        }
    }
}

/// Merge sets left to right; on a name collision the later set wins.
pub fn combine(sets: impl IntoIterator<Item = VariableSet>) -> VariableSet {
    let mut merged = VariableSet::new();
    for set in sets {
        for (name, value) in set.vars {
            merged.insert(name, value);
        }
    }
    merged
}

/// Render a set as a standalone `:root` stylesheet.
pub fn serialize(set: &VariableSet) -> String {
    format!(
        ":root {{\n{}}}\n",
        set.iter()
            .map(|(name, value)| format!("  {name}: {value};\n"))
            .join("")
    )
}
