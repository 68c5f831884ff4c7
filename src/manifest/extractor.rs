//! Snapshot version extraction from `pom.xml`
//!
//! Format example:
//! ```text
//! <project>
//!   <artifactId>demo</artifactId>
//!   <version>2.2.3-SNAPSHOT</version>
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::config::MISSING_VERSION_PLACEHOLDER;
use crate::error::CheckError;

/// Version found in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ManifestVersion {
    Found {
        /// `major.minor.patch` with the `-SNAPSHOT` suffix stripped
        version: String,
        /// Line number (1-indexed)
        line: usize,
    },
    Missing,
}

impl ManifestVersion {
    /// Text searched for on the changelog page
    pub fn as_str(&self) -> &str {
        match self {
            ManifestVersion::Found { version, .. } => version,
            ManifestVersion::Missing => MISSING_VERSION_PLACEHOLDER,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ManifestVersion::Found { .. })
    }
}

/// Line scanner for `<version>X.Y.Z-SNAPSHOT</version>`
pub struct VersionExtractor {
    /// Regex for the snapshot version element
    snapshot_re: Regex,
    /// Regex re-checking the captured text as plain `int.int.int`
    plain_re: Regex,
    max_lines: usize,
}

impl VersionExtractor {
    pub fn new(max_lines: usize) -> Self {
        Self {
            snapshot_re: Regex::new(r"<version>([0-9]+\.[0-9]+\.[0-9]+)-SNAPSHOT</version>")
                .unwrap(),
            plain_re: Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap(),
            max_lines,
        }
    }

    /// Check a single line, returning the captured version if it qualifies
    pub fn match_line(&self, line: &str) -> Option<String> {
        let caps = self.snapshot_re.captures(line)?;
        let version = caps.get(1)?.as_str();

        self.plain_re
            .is_match(version)
            .then(|| version.to_string())
    }

    /// Scan the leading lines of an in-memory manifest
    pub fn extract(&self, content: &str) -> ManifestVersion {
        self.scan(content.lines().map(|line| Ok::<_, std::io::Error>(line.to_string())))
            .unwrap_or(ManifestVersion::Missing)
    }

    /// Scan the leading lines of a reader. Lines past `max_lines` are never read.
    pub fn extract_from<R: BufRead>(&self, reader: R) -> std::io::Result<ManifestVersion> {
        self.scan(reader.lines())
    }

    fn scan<I>(&self, lines: I) -> std::io::Result<ManifestVersion>
    where
        I: Iterator<Item = std::io::Result<String>>,
    {
        for (index, line) in lines.take(self.max_lines).enumerate() {
            let line = line?;
            if let Some(version) = self.match_line(&line) {
                debug!("Version {} found on manifest line {}", version, index + 1);
                return Ok(ManifestVersion::Found {
                    version,
                    line: index + 1,
                });
            }
        }

        debug!("No snapshot version in the first {} lines", self.max_lines);
        Ok(ManifestVersion::Missing)
    }
}

/// Open the manifest at `path` and extract its snapshot version
pub fn read_version(path: &Path, max_lines: usize) -> Result<ManifestVersion, CheckError> {
    let manifest_err = |source| CheckError::Manifest {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(manifest_err)?;
    VersionExtractor::new(max_lines)
        .extract_from(BufReader::new(file))
        .map_err(manifest_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn pom_with_version_at(line: usize, version_line: &str) -> String {
        let mut lines: Vec<String> = (1..line).map(|i| format!("  <!-- filler {i} -->")).collect();
        lines.push(version_line.to_string());
        lines.push("</project>".to_string());
        lines.join("\n")
    }

    #[rstest]
    #[case("<version>2.2.3-SNAPSHOT</version>", Some("2.2.3"))]
    #[case("    <version>10.0.1-SNAPSHOT</version>  ", Some("10.0.1"))]
    #[case("<version>2.2.3</version>", None)]
    #[case("<version>2.2-SNAPSHOT</version>", None)]
    #[case("<version>2.x.3-SNAPSHOT</version>", None)]
    #[case("<artifactId>demo</artifactId>", None)]
    fn match_line_accepts_only_snapshot_versions(
        #[case] line: &str,
        #[case] expected: Option<&str>,
    ) {
        let extractor = VersionExtractor::new(30);

        assert_eq!(extractor.match_line(line).as_deref(), expected);
    }

    #[test]
    fn extract_finds_version_on_line_five() {
        let content = pom_with_version_at(5, "  <version>2.2.3-SNAPSHOT</version>");
        let extractor = VersionExtractor::new(30);

        assert_eq!(
            extractor.extract(&content),
            ManifestVersion::Found {
                version: "2.2.3".to_string(),
                line: 5
            }
        );
    }

    #[test]
    fn extract_finds_version_on_last_scanned_line() {
        let content = pom_with_version_at(30, "<version>1.0.0-SNAPSHOT</version>");
        let extractor = VersionExtractor::new(30);

        assert_eq!(extractor.extract(&content).as_str(), "1.0.0");
    }

    #[test]
    fn extract_ignores_version_past_max_lines() {
        let content = pom_with_version_at(31, "<version>1.0.0-SNAPSHOT</version>");
        let extractor = VersionExtractor::new(30);

        let result = extractor.extract(&content);

        assert_eq!(result, ManifestVersion::Missing);
        assert_eq!(result.as_str(), "none");
    }

    #[test]
    fn extract_honors_custom_bound() {
        let content = pom_with_version_at(31, "<version>1.0.0-SNAPSHOT</version>");
        let extractor = VersionExtractor::new(40);

        assert!(extractor.extract(&content).is_found());
    }

    #[test]
    fn extract_returns_first_match() {
        let content = "<version>1.0.0-SNAPSHOT</version>\n<version>2.0.0-SNAPSHOT</version>";
        let extractor = VersionExtractor::new(30);

        assert_eq!(extractor.extract(content).as_str(), "1.0.0");
    }

    #[test]
    fn extract_from_stops_before_unreadable_tail() {
        // Invalid UTF-8 after the bound must not be read
        let mut bytes = b"<project>\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let extractor = VersionExtractor::new(1);

        let result = extractor.extract_from(bytes.as_slice()).unwrap();

        assert_eq!(result, ManifestVersion::Missing);
    }

    #[test]
    fn read_version_reads_file_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "<project>").unwrap();
        writeln!(file, "  <version>0.9.12-SNAPSHOT</version>").unwrap();

        let result = read_version(file.path(), 30).unwrap();

        assert_eq!(
            result,
            ManifestVersion::Found {
                version: "0.9.12".to_string(),
                line: 2
            }
        );
    }

    #[test]
    fn read_version_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pom.xml");

        let result = read_version(&path, 30);

        assert!(matches!(result, Err(CheckError::Manifest { .. })));
    }
}
