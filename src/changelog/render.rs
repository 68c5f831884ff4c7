//! HTML to text rendering
//!
//! Parses the page with tree-sitter and keeps only what a reader would see:
//! text with entities decoded, one line per block element, no scripts, styles
//! or comments. Blank lines are dropped.

use tracing::warn;

use crate::error::RenderError;

/// Elements that start and end on their own line
const BLOCK_TAGS: [&str; 30] = [
    "address", "article", "blockquote", "body", "br", "dd", "div", "dl", "dt", "footer",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p",
    "pre", "section", "table", "td", "textarea", "th", "tr",
];

/// Node kinds that carry no visible text
const SKIPPED_KINDS: [&str; 7] = [
    "comment",
    "doctype",
    "end_tag",
    "erroneous_end_tag",
    "script_element",
    "start_tag",
    "style_element",
];

/// Render `content` to its non-blank text lines
pub fn render_lines(content: &str) -> Result<Vec<String>, RenderError> {
    let mut parser = tree_sitter::Parser::new();
    let language = tree_sitter_html::LANGUAGE;
    parser.set_language(&language.into()).map_err(|e| {
        warn!("Failed to set HTML language for tree-sitter: {}", e);
        RenderError::TreeSitter(e.to_string())
    })?;

    let tree = parser.parse(content, None).ok_or_else(|| {
        warn!("Failed to parse HTML content");
        RenderError::ParseFailed("Failed to parse HTML".to_string())
    })?;

    let mut renderer = TextRenderer {
        content,
        out: String::with_capacity(content.len()),
        last_end: 0,
    };
    renderer.visit(tree.root_node());

    Ok(renderer
        .out
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

struct TextRenderer<'a> {
    content: &'a str,
    out: String,
    /// End of the last emitted text node, used to recover inter-token whitespace
    last_end: usize,
}

impl TextRenderer<'_> {
    fn visit(&mut self, node: tree_sitter::Node) {
        match node.kind() {
            "text" => self.emit(node, None),
            "entity" => {
                let raw = &self.content[node.byte_range()];
                self.emit(node, Some(decode_entity(raw)));
            }
            "self_closing_tag" => {
                if self.is_block(node) {
                    self.out.push('\n');
                }
            }
            "element" => {
                let block = node
                    .child(0)
                    .is_some_and(|tag| self.is_block(tag));

                if block {
                    self.out.push('\n');
                }
                self.visit_children(node);
                if block {
                    self.out.push('\n');
                }
            }
            kind if SKIPPED_KINDS.contains(&kind) => {}
            _ => self.visit_children(node),
        }
    }

    fn visit_children(&mut self, node: tree_sitter::Node) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child);
        }
    }

    fn emit(&mut self, node: tree_sitter::Node, decoded: Option<String>) {
        let start = node.start_byte();
        if start > self.last_end {
            let gap = &self.content[self.last_end..start];
            self.out.push_str(&gap_whitespace(gap));
        }

        match decoded {
            Some(text) => self.out.push_str(&text),
            None => self.out.push_str(&self.content[node.byte_range()]),
        }
        self.last_end = node.end_byte();
    }

    /// Whether a start or self-closing tag opens a block element
    fn is_block(&self, tag: tree_sitter::Node) -> bool {
        let mut cursor = tag.walk();
        tag.children(&mut cursor)
            .find(|child| child.kind() == "tag_name")
            .map(|name| self.content[name.byte_range()].to_ascii_lowercase())
            .is_some_and(|name| BLOCK_TAGS.contains(&name.as_str()))
    }
}

/// Whitespace that separated two text tokens, ignoring any markup in between
fn gap_whitespace(gap: &str) -> String {
    let mut in_tag = false;
    gap.chars()
        .filter(|&c| match c {
            '<' => {
                in_tag = true;
                false
            }
            '>' => {
                in_tag = false;
                false
            }
            c => !in_tag && c.is_whitespace(),
        })
        .collect()
}

/// Decode a character reference like `&amp;` or `&#x41;`; unknown names are kept as written
fn decode_entity(raw: &str) -> String {
    let name = raw.trim_start_matches('&').trim_end_matches(';');

    let decoded = match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => name
            .strip_prefix("#x")
            .or_else(|| name.strip_prefix("#X"))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .or_else(|| name.strip_prefix('#').and_then(|dec| dec.parse().ok()))
            .and_then(char::from_u32),
    };

    decoded.map_or_else(|| raw.to_string(), |c| c.to_string())
}
