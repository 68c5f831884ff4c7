//! Changelog page handling
//!
//! - [`source`]: fetching the page over HTTP
//! - [`render`]: flattening HTML into text lines
//! - [`matcher`]: finding the `h5. Version X.Y.Z` heading

pub mod matcher;
pub mod render;
pub mod source;

pub use matcher::{EntryMatch, EntryMatcher};
pub use render::render_lines;
pub use source::{HttpPageSource, PageSource};
