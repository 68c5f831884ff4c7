//! Project manifest handling
//!
//! Only the release version is read from the manifest, and only from its
//! leading lines.

pub mod extractor;

pub use extractor::{ManifestVersion, VersionExtractor, read_version};
