//! End-to-end builds over the in-memory filesystem.

use humain_design_tokens_core::error::BuildError;
use humain_design_tokens_core::fs::MemoryFs;
use humain_design_tokens_core::{
    build_merged_css, build_overrides_css, build_tokens_css, ProjectLayout,
};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn layout() -> ProjectLayout {
    ProjectLayout::new("/project")
}

/// A small but complete token workspace: the light theme overrides one
/// core color, and component tokens use alias references.
fn seed_tokens(fs: &MemoryFs, layout: &ProjectLayout) {
    fs.insert(
        layout.core_tokens("colors"),
        indoc! {r#"
            {
              "$description": "core palette",
              "color": {
                "primary": { "base": { "$value": "#00E08F" } },
                "neutral": { "white": { "$value": "#FFFFFF" } }
              }
            }
        "#},
    );
    fs.insert(
        layout.core_tokens("typography"),
        r#"{ "font": { "size": { "md": { "value": "1rem" } } } }"#,
    );
    fs.insert(
        layout.core_tokens("spacing"),
        r#"{ "spacing": { "unit": { "value": "8px" }, "md": { "value": "{spacing.unit} * 2" } } }"#,
    );
    fs.insert(
        layout.theme_tokens("light", "colors"),
        indoc! {r#"
            {
              "color": {
                "primary": { "base": { "$value": "#00C07F" } },
                "background": { "$value": "#FAFBFA" }
              }
            }
        "#},
    );
    fs.insert(
        layout.theme_tokens("light", "component"),
        r#"{ "button": { "bg": { "value": "{primary.base}" } } }"#,
    );
}

const EXPECTED_TOKENS_CSS: &str = indoc! {r#"
    :root {
      --pgn-primary-base: #00C07F;
      --pgn-neutral-white: #FFFFFF;
      --pgn-font-size-md: 1rem;
      --pgn-spacing-unit: 8px;
      --pgn-spacing-md: calc(var(--pgn-spacing-unit) * 2);
      --pgn-background: #FAFBFA;
      --pgn-button-bg: var(--pgn-primary-base);
    }
"#};

#[test]
fn tokens_css_build_flattens_and_combines_all_sources() {
    let fs = MemoryFs::new();
    let layout = layout();
    seed_tokens(&fs, &layout);

    let report = build_tokens_css(&fs, &layout.tokens_css_job()).unwrap();

    let css = fs.get(layout.paragon_theme("humain-tokens.css")).unwrap();
    assert_eq!(css, EXPECTED_TOKENS_CSS);
    // The light theme's value won, at the name's original position.
    assert_eq!(report.variables, 7);
    assert_eq!(report.bytes, css.len());
}

#[test]
fn tokens_css_round_trips_through_the_root_block() {
    let fs = MemoryFs::new();
    let layout = layout();
    seed_tokens(&fs, &layout);

    build_tokens_css(&fs, &layout.tokens_css_job()).unwrap();
    let css = fs.get(layout.paragon_theme("humain-tokens.css")).unwrap();

    // Re-parsing the generated :root block recovers the combined set.
    let body = css
        .strip_prefix(":root {\n")
        .and_then(|rest| rest.strip_suffix("}\n"))
        .unwrap();
    let pairs: Vec<(&str, &str)> = body
        .lines()
        .map(|line| {
            let decl = line.trim().strip_suffix(';').unwrap();
            decl.split_once(": ").unwrap()
        })
        .collect();

    assert_eq!(
        pairs,
        [
            ("--pgn-primary-base", "#00C07F"),
            ("--pgn-neutral-white", "#FFFFFF"),
            ("--pgn-font-size-md", "1rem"),
            ("--pgn-spacing-unit", "8px"),
            ("--pgn-spacing-md", "calc(var(--pgn-spacing-unit) * 2)"),
            ("--pgn-background", "#FAFBFA"),
            ("--pgn-button-bg", "var(--pgn-primary-base)"),
        ]
    );
}

#[test]
fn overrides_css_build_emits_humain_variables_and_indirections() {
    let fs = MemoryFs::new();
    let layout = layout();
    seed_tokens(&fs, &layout);

    build_overrides_css(&fs, &layout.overrides_css_job()).unwrap();

    let css = fs
        .get(layout.paragon_theme("humain-overrides.css"))
        .unwrap();
    assert_eq!(
        css,
        indoc! {r#"
            :root {
              --humain-primary-base: #00C07F;
              --humain-neutral-white: #FFFFFF;
              --humain-background: #FAFBFA;
              --humain-button-bg: var(--humain-primary-base);
              --pgn-color-primary-500: var(--humain-primary-base, var(--pgn-color-primary-500));
              --pgn-color-brand-500: var(--humain-brand-base, var(--pgn-color-brand-500));
              --pgn-color-secondary-500: var(--humain-secondary-base, var(--pgn-color-secondary-500));
              --pgn-color-success-500: var(--humain-status-success, var(--pgn-color-success-500));
              --pgn-color-warning-500: var(--humain-status-warning, var(--pgn-color-warning-500));
              --pgn-color-danger-500: var(--humain-status-error, var(--pgn-color-danger-500));
            }
        "#}
    );
}

#[test]
fn merged_css_build_appends_inside_the_existing_root_block() {
    let fs = MemoryFs::new();
    let layout = layout();
    seed_tokens(&fs, &layout);
    fs.insert(
        layout.paragon_theme("light.min.css"),
        "html{margin:0}:root{--pgn-color-root:#fff;--x:1}footer{color:blue}",
    );

    let report = build_merged_css(&fs, &layout.merged_css_job()).unwrap();

    let merged = fs.get(layout.paragon_theme("light.min.css")).unwrap();
    assert_eq!(
        merged,
        concat!(
            "html{margin:0}",
            ":root{--pgn-color-root:#fff;--x:1;",
            "--pgn-primary-base:#00C07F;",
            "--pgn-neutral-white:#FFFFFF;",
            "--pgn-font-size-md:1rem;",
            "--pgn-spacing-unit:8px;",
            "--pgn-spacing-md:calc(var(--pgn-spacing-unit) * 2);",
            "--pgn-background:#FAFBFA;",
            "--pgn-button-bg:var(--pgn-primary-base);",
            "}footer{color:blue}"
        )
    );
    assert_eq!(report.variables, 7);
}

#[test]
fn merged_css_build_prepends_a_block_when_the_target_has_no_root() {
    let fs = MemoryFs::new();
    let layout = layout();
    seed_tokens(&fs, &layout);
    fs.insert(layout.paragon_theme("light.min.css"), "footer{color:blue}");

    build_merged_css(&fs, &layout.merged_css_job()).unwrap();

    let merged = fs.get(layout.paragon_theme("light.min.css")).unwrap();
    assert_eq!(merged, format!("{EXPECTED_TOKENS_CSS}footer{{color:blue}}"));
}

#[test]
fn missing_token_document_fails_the_build() {
    let fs = MemoryFs::new();
    let layout = layout();

    let err = build_tokens_css(&fs, &layout.tokens_css_job()).unwrap_err();
    assert!(matches!(err, BuildError::Read { .. }));

    // Nothing was written.
    assert!(fs.get(layout.paragon_theme("humain-tokens.css")).is_none());
}

#[test]
fn malformed_json_fails_the_build() {
    let fs = MemoryFs::new();
    let layout = layout();
    seed_tokens(&fs, &layout);
    fs.insert(layout.core_tokens("spacing"), "{ not json");

    let err = build_tokens_css(&fs, &layout.tokens_css_job()).unwrap_err();
    assert!(matches!(err, BuildError::Json { .. }));
}

#[test]
fn color_document_without_its_color_group_fails_the_build() {
    let fs = MemoryFs::new();
    let layout = layout();
    seed_tokens(&fs, &layout);
    fs.insert(
        layout.core_tokens("colors"),
        r#"{ "palette": { "primary": { "value": "#000" } } }"#,
    );

    let err = build_tokens_css(&fs, &layout.tokens_css_job()).unwrap_err();
    assert!(matches!(err, BuildError::MissingMember { member, .. } if member == "color"));
}

#[test]
fn missing_merge_target_fails_the_build() {
    let fs = MemoryFs::new();
    let layout = layout();
    seed_tokens(&fs, &layout);

    let err = build_merged_css(&fs, &layout.merged_css_job()).unwrap_err();
    assert!(matches!(err, BuildError::Read { .. }));
}
