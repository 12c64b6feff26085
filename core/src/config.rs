//! Explicit build configuration.
//!
//! The upstream build scripts hard-coded every file location as a
//! process-wide constant. Here each pipeline is handed the full set of
//! input and output identifiers instead, and [`ProjectLayout`] is the one
//! place that knows the conventional directory structure.

use std::path::{Path, PathBuf};

use crate::css::MergePrecedence;
use crate::variables::{HUMAIN_NAMESPACE, PGN_NAMESPACE};

/// One token document to load, optionally narrowed to a top-level group.
#[derive(Debug, Clone)]
pub struct TokenSource {
    pub path: PathBuf,
    pub member: Option<String>,
}

impl TokenSource {
    /// Use the whole document.
    pub fn document(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            member: None,
        }
    }

    /// Use one top-level group of the document (color documents nest all
    /// their tokens under a `color` member).
    pub fn member_of(path: impl Into<PathBuf>, member: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            member: Some(member.into()),
        }
    }
}

/// Inputs and output of the standalone tokens stylesheet build.
#[derive(Debug, Clone)]
pub struct TokensCssJob {
    pub sources: Vec<TokenSource>,
    pub namespace: &'static str,
    pub output: PathBuf,
}

/// Inputs and output of the overrides stylesheet build.
#[derive(Debug, Clone)]
pub struct OverridesCssJob {
    pub sources: Vec<TokenSource>,
    pub namespace: &'static str,
    pub output: PathBuf,
}

/// Inputs, merge target and output of the merged stylesheet build.
#[derive(Debug, Clone)]
pub struct MergedCssJob {
    pub sources: Vec<TokenSource>,
    pub namespace: &'static str,
    pub target: PathBuf,
    pub output: PathBuf,
    pub precedence: MergePrecedence,
}

/// Conventional layout of a token workspace.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn core_tokens(&self, name: &str) -> PathBuf {
        self.root
            .join("tokens")
            .join("src")
            .join("core")
            .join(format!("{name}.json"))
    }

    pub fn theme_tokens(&self, theme: &str, name: &str) -> PathBuf {
        self.root
            .join("tokens")
            .join("src")
            .join("themes")
            .join(theme)
            .join(format!("{name}.json"))
    }

    pub fn paragon_theme(&self, file: &str) -> PathBuf {
        self.root
            .join("docs")
            .join("paragon")
            .join("themes")
            .join(file)
    }

    /// Sources of the generated `--pgn-` variable set, core tokens first
    /// so the light theme overrides core values on name collisions.
    fn pgn_sources(&self) -> Vec<TokenSource> {
        vec![
            TokenSource::member_of(self.core_tokens("colors"), "color"),
            TokenSource::document(self.core_tokens("typography")),
            TokenSource::document(self.core_tokens("spacing")),
            TokenSource::member_of(self.theme_tokens("light", "colors"), "color"),
            TokenSource::document(self.theme_tokens("light", "component")),
        ]
    }

    pub fn tokens_css_job(&self) -> TokensCssJob {
        TokensCssJob {
            sources: self.pgn_sources(),
            namespace: PGN_NAMESPACE,
            output: self.paragon_theme("humain-tokens.css"),
        }
    }

    pub fn overrides_css_job(&self) -> OverridesCssJob {
        OverridesCssJob {
            sources: vec![
                TokenSource::member_of(self.core_tokens("colors"), "color"),
                TokenSource::member_of(self.theme_tokens("light", "colors"), "color"),
                TokenSource::document(self.theme_tokens("light", "component")),
            ],
            namespace: HUMAIN_NAMESPACE,
            output: self.paragon_theme("humain-overrides.css"),
        }
    }

    /// The merged build rewrites the upstream theme stylesheet in place.
    /// New tokens are appended inside the `:root` block so they win over
    /// the stock values under last-declaration-wins resolution.
    pub fn merged_css_job(&self) -> MergedCssJob {
        let theme = self.paragon_theme("light.min.css");
        MergedCssJob {
            sources: self.pgn_sources(),
            namespace: PGN_NAMESPACE,
            target: theme.clone(),
            output: theme,
            precedence: MergePrecedence::NewTokensWin,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_paths_follow_the_workspace_convention() {
        let layout = ProjectLayout::new("/srv/brand");

        assert_eq!(
            layout.core_tokens("colors"),
            PathBuf::from("/srv/brand/tokens/src/core/colors.json")
        );
        assert_eq!(
            layout.theme_tokens("light", "component"),
            PathBuf::from("/srv/brand/tokens/src/themes/light/component.json")
        );
        assert_eq!(
            layout.paragon_theme("humain-tokens.css"),
            PathBuf::from("/srv/brand/docs/paragon/themes/humain-tokens.css")
        );
    }

    #[test]
    fn theme_sources_come_after_core_sources() {
        let job = ProjectLayout::new(".").tokens_css_job();

        assert_eq!(job.sources.len(), 5);
        assert_eq!(job.sources[0].member.as_deref(), Some("color"));
        assert!(job.sources[0].path.ends_with("core/colors.json"));
        assert!(job.sources[4].path.ends_with("themes/light/component.json"));
    }
}
