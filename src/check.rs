//! The check pipeline: manifest version, page fetch, heading search

use std::path::Path;

use tracing::{info, warn};

use crate::changelog::{EntryMatcher, PageSource, render_lines};
use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::manifest::{ManifestVersion, read_version};
use crate::report::{CheckOutcome, CheckReport};

/// One changelog check against a page source
pub struct ChangelogCheck<S: PageSource> {
    source: S,
    config: CheckConfig,
}

impl<S: PageSource> ChangelogCheck<S> {
    pub fn new(source: S, config: CheckConfig) -> Self {
        Self { source, config }
    }

    /// Manifest the version is read from
    pub fn manifest(&self) -> &Path {
        &self.config.manifest
    }

    /// Run the whole pipeline. A missing entry is a report, not an error.
    pub async fn run(&self) -> Result<CheckReport, CheckError> {
        let version = self.manifest_version()?;
        self.check_version(version).await
    }

    /// Read the manifest version, failing on a missing one only when required
    pub fn manifest_version(&self) -> Result<ManifestVersion, CheckError> {
        let version = read_version(&self.config.manifest, self.config.max_lines)?;

        match &version {
            ManifestVersion::Found { version, line } => {
                info!(
                    "Found version {} on line {} of {}",
                    version,
                    line,
                    self.config.manifest.display()
                );
            }
            ManifestVersion::Missing if self.config.require_version => {
                return Err(CheckError::MissingVersion {
                    path: self.config.manifest.clone(),
                    max_lines: self.config.max_lines,
                });
            }
            ManifestVersion::Missing => {
                warn!(
                    "No snapshot version in the first {} lines of {}, searching for 'Version {}'",
                    self.config.max_lines,
                    self.config.manifest.display(),
                    version.as_str()
                );
            }
        }

        Ok(version)
    }

    /// Search the page for an already extracted version
    pub async fn check_version(&self, version: ManifestVersion) -> Result<CheckReport, CheckError> {
        let outcome = self.search(version.as_str()).await?;

        Ok(CheckReport {
            url: self.config.url.to_string(),
            manifest: self.config.manifest.clone(),
            version,
            outcome,
        })
    }

    /// Fetch the page and look for the heading of `version`
    pub async fn search(&self, version: &str) -> Result<CheckOutcome, CheckError> {
        let matcher = EntryMatcher::new(version)?;
        let body = self.source.fetch(&self.config.url).await?;
        let lines = render_lines(&body)?;
        info!("Scanning {} rendered lines", lines.len());

        let outcome = match matcher.find(lines.iter().map(String::as_str)) {
            Some(entry) => {
                info!("Matched '{}' on line {}", entry.fragment, entry.line);
                CheckOutcome::Found(entry)
            }
            None => CheckOutcome::Missing,
        };

        Ok(outcome)
    }
}
