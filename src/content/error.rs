use std::path::PathBuf;

use thiserror::Error;

/// Failures while building the content store.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to parse content module '{module}': {source}")]
    Parse {
        module: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to read content file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("No content modules found in {}", .0.display())]
    Empty(PathBuf),

    #[error("Content store failed validation:\n  - {}", .0.join("\n  - "))]
    Invalid(Vec<String>),
}
