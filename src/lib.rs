//! Release gate that verifies the manifest version has a changelog entry.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Manifest   │────▶│   Source    │────▶│   Render    │────▶│   Matcher   │
//! │  (version)  │     │   (fetch)   │     │ (html→text) │     │  (h5. line) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! The library never exits the process. [`check::ChangelogCheck::run`] returns a
//! [`report::CheckReport`] or a [`error::CheckError`], and the binary maps those
//! to exit codes.

pub mod changelog;
pub mod check;
pub mod config;
pub mod error;
pub mod manifest;
pub mod report;
