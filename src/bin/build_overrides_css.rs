//! Generate the HUMAIN overrides stylesheet.
//!
//! The output maps Paragon's semantic variables onto the HUMAIN palette
//! through `var()` indirection, so it only takes effect when loaded after
//! the stock theme stylesheets.

use anyhow::Result;
use humain_design_tokens_core::{build_overrides_css, fs::OsFs, ProjectLayout};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let layout = ProjectLayout::new(".");
    let report = build_overrides_css(&OsFs, &layout.overrides_css_job())?;

    info!(
        output = %report.output.display(),
        tokens = report.variables,
        "generated HUMAIN overrides stylesheet"
    );
    info!("load order: core.min.css, light.min.css, then humain-overrides.css");
    Ok(())
}
