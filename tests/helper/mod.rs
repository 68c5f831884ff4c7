#![allow(dead_code)]

pub mod page;
pub mod project;

pub use page::{changelog_page, serve_page, serve_page_async};
pub use project::{TestProject, pom_with_version_at};
