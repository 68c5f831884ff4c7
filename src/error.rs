use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),

    #[error("Failed to parse page: {0}")]
    ParseFailed(String),
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to read manifest {}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No <version>X.Y.Z-SNAPSHOT</version> in the first {max_lines} lines of {}", .path.display())]
    MissingVersion { path: PathBuf, max_lines: usize },

    #[error("Failed to fetch changelog page")]
    Fetch(#[from] FetchError),

    #[error("Failed to render changelog page")]
    Render(#[from] RenderError),

    #[error("Invalid changelog pattern")]
    Pattern(#[from] regex::Error),
}
