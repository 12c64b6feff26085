//! Build tooling for the HUMAIN Paragon theme.
//!
//! Design-token JSON documents are flattened into CSS custom properties
//! and emitted three ways: a standalone `--pgn-` tokens stylesheet, a
//! `--humain-` overrides stylesheet that redirects Paragon's semantic
//! variables at the brand palette, and the compiled upstream theme
//! stylesheet with the variables spliced into its `:root` block.
//!
//! All filesystem access goes through [`fs::TokenFs`], and every pipeline
//! takes an explicit job description, so nothing in here depends on
//! ambient paths.

pub mod config;
pub mod css;
pub mod error;
pub mod expression;
pub mod fs;
pub mod overrides;
pub mod pipeline;
pub mod token;
pub mod variables;

pub use config::ProjectLayout;
pub use error::{BuildError, Result};
pub use pipeline::{build_merged_css, build_overrides_css, build_tokens_css, BuildReport};
