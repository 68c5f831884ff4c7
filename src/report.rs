//! Check results and their human and JSON renderings

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::changelog::EntryMatch;
use crate::manifest::ManifestVersion;

/// Printed when the page has no heading for the manifest version
pub const MISSING_ENTRY_MESSAGE: &str =
    "Could not find any changelog entry on the url - please create a changelog";

/// Result of scanning the changelog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Found(EntryMatch),
    Missing,
}

/// Everything a single run found out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub url: String,
    pub manifest: PathBuf,
    pub version: ManifestVersion,
    pub outcome: CheckOutcome,
}

/// Announce the manifest version before the page is fetched. Silent when none was found.
pub fn write_version<W: Write>(
    out: &mut W,
    manifest: &Path,
    version: &ManifestVersion,
) -> io::Result<()> {
    match version {
        ManifestVersion::Found { version, .. } => writeln!(
            out,
            "Found version number in {} to be: {}",
            manifest.display(),
            version
        ),
        ManifestVersion::Missing => Ok(()),
    }
}

impl CheckReport {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Found(_))
    }

    /// The matched fragment goes to `out`, the missing-entry message to `err`
    pub fn write_text<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> io::Result<()> {
        match &self.outcome {
            CheckOutcome::Found(entry) => {
                writeln!(out, "Matched changelog entry: {}", entry.fragment)
            }
            CheckOutcome::Missing => writeln!(err, "{}", MISSING_ENTRY_MESSAGE),
        }
    }

    /// One pretty-printed JSON object on `out`
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}
