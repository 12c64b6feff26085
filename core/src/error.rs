use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

/// Everything that can abort a token build.
///
/// Every failure is fatal to the run; output files are only written after
/// all computation has succeeded, so there is no partial-result cleanup.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid JSON", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: token document root must be a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("{}: no top-level `{member}` group", path.display())]
    MissingMember { path: PathBuf, member: String },

    #[error("{}: invalid token `{token}`: {reason}", document.display())]
    InvalidLeaf {
        document: PathBuf,
        token: String,
        reason: String,
    },

    /// The merge target has more than one top-level `:root` block, which
    /// the splice step cannot disambiguate.
    #[error("stylesheet has more than one top-level :root block")]
    MultipleRootBlocks,

    #[error(":root block is never closed")]
    UnbalancedBraces,
}
