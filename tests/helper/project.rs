//! Throwaway project directories holding a `pom.xml`

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temp directory with a manifest in it
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Project whose `pom.xml` is `content`
    pub fn with_pom(content: &str) -> Self {
        let project = Self::empty();
        fs::write(project.pom_path(), content).unwrap();
        project
    }

    /// Project without any manifest
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn pom_path(&self) -> PathBuf {
        self.dir.path().join("pom.xml")
    }
}

/// A pom with `<version>{version}-SNAPSHOT</version>` on the given 1-indexed line
pub fn pom_with_version_at(line: usize, version: &str) -> String {
    let mut lines = vec!["<project>".to_string()];
    lines.extend((2..line).map(|i| format!("  <!-- line {i} -->")));
    lines.push(format!("  <version>{version}-SNAPSHOT</version>"));
    lines.push("</project>".to_string());
    lines.join("\n")
}
