//! Changelog heading matcher

use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// A changelog heading found on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryMatch {
    /// Rendered line number (1-indexed)
    pub line: usize,
    /// The matched `h5. Version X.Y.Z` text
    pub fragment: String,
}

/// Matcher for the Confluence heading `h5. Version <version>`
pub struct EntryMatcher {
    heading_re: Regex,
}

impl EntryMatcher {
    /// The version is escaped, so `2.2.3` never matches `2x2x3`. The trailing
    /// word boundary keeps `2.2.3` from matching `2.2.30`.
    pub fn new(version: &str) -> Result<Self, regex::Error> {
        let pattern = format!(r"(h5\.\sVersion\s{})\b", regex::escape(version));
        debug!("Changelog heading pattern: {}", pattern);

        Ok(Self {
            heading_re: Regex::new(&pattern)?,
        })
    }

    /// Fragment matched on `line`, if any
    pub fn match_line(&self, line: &str) -> Option<String> {
        self.heading_re
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// First matching line; later lines are not scanned
    pub fn find<'a, I>(&self, lines: I) -> Option<EntryMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .enumerate()
            .find_map(|(index, line)| {
                self.match_line(line).map(|fragment| EntryMatch {
                    line: index + 1,
                    fragment,
                })
            })
    }
}
