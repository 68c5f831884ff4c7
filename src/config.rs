use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

// =============================================================================
// Manifest-related constants
// =============================================================================

/// Manifest read from the working directory when `--manifest` is not given
pub const DEFAULT_MANIFEST: &str = "pom.xml";

/// Number of manifest lines scanned for the project version
pub const DEFAULT_MAX_LINES: usize = 30;

/// Placeholder used when the manifest carries no snapshot version
pub const MISSING_VERSION_PLACEHOLDER: &str = "none";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding a `tracing_subscriber::EnvFilter` directive
pub const LOG_ENV_VAR: &str = "CHANGELOG_CHECK_LOG";

/// Filter used when neither the env var nor `--verbose` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for a single check run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    /// Changelog page to search
    pub url: Url,
    /// Manifest holding the `<version>` element
    pub manifest: PathBuf,
    /// How many leading manifest lines are scanned
    pub max_lines: usize,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Fail instead of searching for `Version none`
    pub require_version: bool,
}

impl CheckConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            max_lines: DEFAULT_MAX_LINES,
            timeout: None,
            require_version: false,
        }
    }

    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = manifest.into();
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_require_version(mut self, require_version: bool) -> Self {
        self.require_version = require_version;
        self
    }
}

/// Picks the log filter directive: env var first, then `--verbose`, then the default.
pub fn log_filter(env_value: Option<String>, verbose: bool) -> String {
    env_value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| {
            if verbose {
                "debug".to_string()
            } else {
                DEFAULT_LOG_FILTER.to_string()
            }
        })
}
