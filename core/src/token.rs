//! The token document model.
//!
//! A document is a tree of groups with leaves at the tips. The shape of
//! every node is decided once, here, while the JSON is being walked: an
//! object carrying a `value` (or `$value`) field is a leaf, any other
//! object is a group. Nothing downstream ever re-checks the shape.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as Json;
use tracing::{debug, warn};

use crate::error::{BuildError, Result};
use crate::expression::{parse_value, ValueExpr};

/// Keys starting with this sigil are document metadata, not tokens.
pub const METADATA_SIGIL: char = '$';

/// Ordered group of named nodes. Iteration order is source order.
pub type TokenGroup = IndexMap<String, TokenNode>;

#[derive(Debug, Clone)]
pub enum TokenNode {
    Leaf(TokenLeaf),
    Group(TokenGroup),
}

#[derive(Debug, Clone)]
pub struct TokenLeaf {
    pub value: TokenValue,
    pub type_: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub enum TokenValue {
    Single(ValueExpr),
    /// Array-valued tokens (font stacks). Rendered comma-joined.
    List(Vec<ValueExpr>),
}

impl TokenValue {
    pub fn to_css(&self, namespace: &str) -> String {
        match self {
            TokenValue::Single(expr) => expr.to_css(namespace),
            TokenValue::List(items) => {
                items.iter().map(|e| e.to_css(namespace)).collect::<Vec<_>>().join(",")
            }
        }
    }
}

/// Decode a whole token document from already-parsed JSON.
pub fn parse_document(doc: &Path, json: &Json) -> Result<TokenGroup> {
    match json {
        Json::Object(_) => parse_node(doc, json, "").map(|node| match node {
            Some(TokenNode::Group(group)) => group,
            // A leaf can only come back for an object with a value field,
            // which the match arm below has already ruled out.
            _ => unreachable!(),
        }),
        _ => Err(BuildError::NotAnObject {
            path: doc.to_path_buf(),
        }),
    }
}

fn parse_node(doc: &Path, json: &Json, at: &str) -> Result<Option<TokenNode>> {
    let Json::Object(members) = json else {
        // Unrecognized shapes produce no variables (silent-skip policy).
        debug!(document = %doc.display(), token = at, "skipping non-token member");
        return Ok(None);
    };

    if !at.is_empty() && (members.contains_key("$value") || members.contains_key("value")) {
        return parse_leaf(doc, json, at);
    }

    let mut group = TokenGroup::new();
    for (key, child) in members {
        if key.starts_with(METADATA_SIGIL) {
            continue;
        }
        let path = if at.is_empty() {
            key.clone()
        } else {
            format!("{at}.{key}")
        };
        if let Some(node) = parse_node(doc, child, &path)? {
            group.insert(key.clone(), node);
        }
    }
    Ok(Some(TokenNode::Group(group)))
}

/// Raw leaf fields; both the plain and the `$`-prefixed spellings occur in
/// the wild, so each field accepts either.
#[derive(Debug, Deserialize)]
struct RawLeaf {
    #[serde(alias = "$value")]
    value: Json,
    #[serde(default, rename = "type", alias = "$type")]
    type_: Option<String>,
    #[serde(default, alias = "$description")]
    description: Option<String>,
}

fn parse_leaf(doc: &Path, json: &Json, at: &str) -> Result<Option<TokenNode>> {
    let raw = RawLeaf::deserialize(json).map_err(|err| BuildError::InvalidLeaf {
        document: doc.to_path_buf(),
        token: at.to_string(),
        reason: err.to_string(),
    })?;

    let value = match &raw.value {
        Json::Null => {
            warn!(document = %doc.display(), token = at, "token value is null, skipping");
            return Ok(None);
        }
        Json::Array(items) => {
            let mut exprs = Vec::with_capacity(items.len());
            for item in items {
                exprs.push(scalar_expr(item).ok_or_else(|| BuildError::InvalidLeaf {
                    document: doc.to_path_buf(),
                    token: at.to_string(),
                    reason: "array values must contain only scalars".to_string(),
                })?);
            }
            TokenValue::List(exprs)
        }
        other => TokenValue::Single(scalar_expr(other).ok_or_else(|| {
            BuildError::InvalidLeaf {
                document: doc.to_path_buf(),
                token: at.to_string(),
                reason: "value must be a scalar or an array of scalars".to_string(),
            }
        })?),
    };

    if raw.type_.as_deref() == Some("color") {
        if let TokenValue::Single(expr) = &value {
            if let Some(text) = expr.literal_text() {
                if csscolorparser::parse(text).is_err() {
                    warn!(
                        document = %doc.display(),
                        token = at,
                        value = text,
                        "color token does not parse as a CSS color"
                    );
                }
            }
        }
    }

    Ok(Some(TokenNode::Leaf(TokenLeaf {
        value,
        type_: raw.type_,
        description: raw.description,
    })))
}

fn scalar_expr(json: &Json) -> Option<ValueExpr> {
    match json {
        Json::String(s) => Some(parse_value(s)),
        Json::Number(n) => Some(ValueExpr::literal(n.to_string())),
        Json::Bool(b) => Some(ValueExpr::literal(b.to_string())),
        _ => None,
    }
}
