//! The three build operations.
//!
//! Each one reads its token documents, flattens and combines them, renders
//! stylesheet text, and writes a single output file. All computation
//! happens before the write, so a failing build leaves no partial output.

use std::path::{Path, PathBuf};

use serde_json::Value as Json;
use tracing::{debug, warn};

use crate::config::{MergedCssJob, OverridesCssJob, TokenSource, TokensCssJob};
use crate::css;
use crate::error::{BuildError, Result};
use crate::fs::TokenFs;
use crate::overrides::{overrides_stylesheet, SEMANTIC_OVERRIDES};
use crate::token::{self, TokenGroup, TokenNode};
use crate::variables::{combine, flatten, serialize, VariableSet};

/// What a build wrote, for driver reporting.
#[derive(Debug)]
pub struct BuildReport {
    pub output: PathBuf,
    pub variables: usize,
    pub bytes: usize,
}

/// Generate the standalone HUMAIN tokens stylesheet.
pub fn build_tokens_css(fs: &dyn TokenFs, job: &TokensCssJob) -> Result<BuildReport> {
    let vars = load_variables(fs, &job.sources, job.namespace)?;
    let stylesheet = serialize(&vars);
    write_output(fs, &job.output, &stylesheet)?;
    Ok(BuildReport {
        output: job.output.clone(),
        variables: vars.len(),
        bytes: stylesheet.len(),
    })
}

/// Generate the overrides stylesheet: HUMAIN variables plus the semantic
/// indirections that point Paragon's brand variables at them.
pub fn build_overrides_css(fs: &dyn TokenFs, job: &OverridesCssJob) -> Result<BuildReport> {
    let vars = load_variables(fs, &job.sources, job.namespace)?;
    for (name, value) in vars.iter() {
        debug!(%name, %value, "HUMAIN token");
    }
    for o in SEMANTIC_OVERRIDES {
        debug!(paragon = o.paragon, humain = o.humain, label = o.label, "semantic override");
    }

    let stylesheet = overrides_stylesheet(&vars, SEMANTIC_OVERRIDES);
    write_output(fs, &job.output, &stylesheet)?;
    Ok(BuildReport {
        output: job.output.clone(),
        variables: vars.len(),
        bytes: stylesheet.len(),
    })
}

/// Merge the generated variables into the compiled upstream theme.
pub fn build_merged_css(fs: &dyn TokenFs, job: &MergedCssJob) -> Result<BuildReport> {
    let vars = load_variables(fs, &job.sources, job.namespace)?;
    let existing = fs.read(&job.target)?;

    if let Some(name) = vars.first_name() {
        if existing.contains(name) {
            warn!(
                target = %job.target.display(),
                variable = name,
                "merge target already contains generated variables; merging again duplicates declarations"
            );
        }
    }

    let merged = css::merge(&existing, &vars, job.precedence)?;
    write_output(fs, &job.output, &merged)?;
    Ok(BuildReport {
        output: job.output.clone(),
        variables: vars.len(),
        bytes: merged.len(),
    })
}

fn load_variables(
    fs: &dyn TokenFs,
    sources: &[TokenSource],
    namespace: &str,
) -> Result<VariableSet> {
    let mut sets = Vec::with_capacity(sources.len());
    for source in sources {
        let group = load_source(fs, source)?;
        let set = flatten(&group, namespace);
        debug!(
            document = %source.path.display(),
            variables = set.len(),
            "flattened token document"
        );
        sets.push(set);
    }
    Ok(combine(sets))
}

fn load_source(fs: &dyn TokenFs, source: &TokenSource) -> Result<TokenGroup> {
    let text = fs.read(&source.path)?;
    let json: Json = serde_json::from_str(&text).map_err(|err| BuildError::Json {
        path: source.path.clone(),
        source: err,
    })?;
    let mut doc = token::parse_document(&source.path, &json)?;

    match &source.member {
        None => Ok(doc),
        Some(member) => match doc.shift_remove(member.as_str()) {
            Some(TokenNode::Group(group)) => Ok(group),
            _ => Err(BuildError::MissingMember {
                path: source.path.clone(),
                member: member.clone(),
            }),
        },
    }
}

fn write_output(fs: &dyn TokenFs, path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !fs.exists(parent) {
            fs.create_dir_all(parent)?;
        }
    }
    fs.write(path, contents)
}
