//! Merge the HUMAIN tokens into the compiled Paragon light theme.
//!
//! Rewrites docs/paragon/themes/light.min.css in place. The target must be
//! the pristine upstream stylesheet: merging is not idempotent, so running
//! this twice duplicates the generated declarations.

use anyhow::Result;
use humain_design_tokens_core::{build_merged_css, fs::OsFs, ProjectLayout};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let layout = ProjectLayout::new(".");
    let report = build_merged_css(&OsFs, &layout.merged_css_job())?;

    info!(
        output = %report.output.display(),
        tokens = report.variables,
        size_kb = format!("{:.2}", report.bytes as f64 / 1024.0),
        "merged HUMAIN tokens into the light theme"
    );
    Ok(())
}
