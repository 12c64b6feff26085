//! Generate the standalone HUMAIN tokens stylesheet.

use anyhow::Result;
use humain_design_tokens_core::{build_tokens_css, fs::OsFs, ProjectLayout};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let layout = ProjectLayout::new(".");
    let report = build_tokens_css(&OsFs, &layout.tokens_css_job())?;

    info!(
        output = %report.output.display(),
        tokens = report.variables,
        "generated HUMAIN custom tokens stylesheet"
    );
    Ok(())
}
