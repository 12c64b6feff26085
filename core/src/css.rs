//! Structural edits to an existing stylesheet.
//!
//! The merge target is treated as opaque text apart from its one top-level
//! `:root` block. The block is located with a small tokenizing scan that
//! tracks brace depth and skips comments and quoted strings, so nested
//! braces and `@media`-wrapped `:root` rules do not confuse it. More than
//! one top-level `:root` block is rejected outright.

use crate::error::{BuildError, Result};
use crate::variables::{serialize, VariableSet};

/// Where spliced declarations land relative to the block's existing body.
///
/// CSS resolves duplicate custom-property declarations last-wins, so the
/// splice position decides which side takes precedence for names defined
/// on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePrecedence {
    /// Splice at the start of the block; existing duplicates still win.
    ExistingWins,
    /// Splice at the end of the block; the new tokens win.
    NewTokensWin,
}

/// Byte span of the first top-level `:root` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootBlock {
    /// Offset of the `:` in `:root`.
    pub start: usize,
    /// Offset just past the opening `{`.
    pub body_start: usize,
    /// Offset of the closing `}`.
    pub body_end: usize,
}

/// Locate the single top-level `:root` block, if any.
pub fn find_root_block(css: &str) -> Result<Option<RootBlock>> {
    let bytes = css.as_bytes();
    let mut found: Option<RootBlock> = None;
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_comment(bytes, i),
            b'"' | b'\'' => i = skip_string(bytes, i),
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            b':' if depth == 0 && css[i..].starts_with(":root") => {
                let mut j = i + ":root".len();
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                if bytes.get(j) != Some(&b'{') {
                    // Some other selector (`:root:not(...)`, `:roothack`).
                    i += 1;
                    continue;
                }
                let body_start = j + 1;
                let body_end = find_block_end(bytes, body_start)?;
                if found.is_some() {
                    return Err(BuildError::MultipleRootBlocks);
                }
                found = Some(RootBlock {
                    start: i,
                    body_start,
                    body_end,
                });
                i = body_end + 1;
            }
            _ => i += 1,
        }
    }

    Ok(found)
}

/// Find the `}` matching the block whose body starts at `from`.
fn find_block_end(bytes: &[u8], from: usize) -> Result<usize> {
    let mut depth = 1usize;
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_comment(bytes, i),
            b'"' | b'\'' => i = skip_string(bytes, i),
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    Err(BuildError::UnbalancedBraces)
}

/// Index just past a `/* ... */` comment starting at `i`. An unterminated
/// comment swallows the rest of the input.
fn skip_comment(bytes: &[u8], i: usize) -> usize {
    let mut j = i + 2;
    while j + 1 < bytes.len() {
        if bytes[j] == b'*' && bytes[j + 1] == b'/' {
            return j + 2;
        }
        j += 1;
    }
    bytes.len()
}

/// Index just past a quoted string starting at `i`, honoring backslash
/// escapes. An unterminated string swallows the rest of the input.
fn skip_string(bytes: &[u8], i: usize) -> usize {
    let quote = bytes[i];
    let mut j = i + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b if b == quote => return j + 1,
            _ => j += 1,
        }
    }
    bytes.len()
}

/// Splice `set` into `existing`.
///
/// With a `:root` block present, the new declarations are inserted inside
/// it in compact `name:value;` form at the position `precedence` dictates;
/// every byte outside the block is preserved. Without one, a freshly
/// serialized `:root` block is prepended to the whole text.
///
/// Merging is not idempotent: running it twice accumulates duplicate
/// declarations. Callers must hand in a pristine target.
pub fn merge(existing: &str, set: &VariableSet, precedence: MergePrecedence) -> Result<String> {
    if set.is_empty() {
        return Ok(existing.to_string());
    }

    let Some(block) = find_root_block(existing)? else {
        return Ok(format!("{}{existing}", serialize(set)));
    };

    let decls: String = set
        .iter()
        .map(|(name, value)| format!("{name}:{value};"))
        .collect();

    let mut out = String::with_capacity(existing.len() + decls.len() + 1);
    match precedence {
        MergePrecedence::ExistingWins => {
            out.push_str(&existing[..block.body_start]);
            out.push_str(&decls);
            out.push_str(&existing[block.body_start..]);
        }
        MergePrecedence::NewTokensWin => {
            out.push_str(&existing[..block.body_end]);
            let body = existing[block.body_start..block.body_end].trim_end();
            // Minified sheets often drop the final semicolon.
            if !body.is_empty() && !body.ends_with(';') {
                out.push(';');
            }
            out.push_str(&decls);
            out.push_str(&existing[block.body_end..]);
        }
    }
    Ok(out)
}
