//! # Plain Text Serializer
//!
//! Indented text that reads like tidied Lua: block layouts put each child on
//! its own line, bodies are indented one level, tables print one field per
//! line. Operator units nested in other operator units are parenthesized so
//! the tree's grouping is visible.

use super::{is_compact, space_between, Serializer};
use crate::element::{Container, Element, Layout, Role};
use crate::error::RenderError;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use config::RenderConfig;
use stacker::maybe_grow;

/// Indented plain-text backend.
#[derive(Debug, Clone, Copy)]
pub struct TextSerializer {
    config: RenderConfig,
}

impl TextSerializer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn indent(&self, depth: usize) -> String {
        " ".repeat(depth * self.config.indent_width)
    }

    /// Append the lines of `element` at `depth`.
    fn lines(&self, element: &Element, depth: usize, out: &mut Vec<String>) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match element {
            Element::Container(container) if container.layout == Layout::Block => {
                for child in &container.children {
                    // Bodies are indented, except the chunk's top-level block
                    let nested_body = child.role() == Some(Role::Block) && container.role != Role::Chunk;
                    let child_depth = if nested_body { depth + 1 } else { depth };
                    self.lines(child, child_depth, out);
                }
            }
            other => out.push(format!("{}{}", self.indent(depth), self.inline(other, depth))),
        })
    }

    /// Render `element` as a run starting mid-line. Continuation lines, if
    /// any, are indented for `depth`.
    fn inline(&self, element: &Element, depth: usize) -> String {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match element {
            Element::Text(text) => text.clone(),
            Element::Leaf(leaf) => leaf.text.clone(),
            Element::Container(container) => match container.layout {
                Layout::Block => {
                    let mut lines = Vec::new();
                    self.lines(element, depth, &mut lines);
                    lines.join("\n").trim_start().to_string()
                }
                Layout::Table => self.table(container, depth),
                Layout::Inline | Layout::Row | Layout::Cell => self.run(container, depth),
            },
        })
    }

    /// Children joined on one line.
    fn run(&self, container: &Container, depth: usize) -> String {
        let compact = is_compact(container);
        let mut out = String::new();

        for (i, child) in container.children.iter().enumerate() {
            if i > 0 && !compact && space_between(&container.children[i - 1], child) {
                out.push(' ');
            }
            let piece = self.inline(child, depth);
            let grouped = container.role.is_operator() && child.role().map_or(false, |r| r.is_operator());
            if grouped {
                out.push('(');
                out.push_str(&piece);
                out.push(')');
            } else {
                out.push_str(&piece);
            }
        }

        out
    }

    /// `{`, one `row,` line per field, `}`.
    fn table(&self, container: &Container, depth: usize) -> String {
        if container.children.is_empty() {
            return "{}".to_string();
        }

        let mut out = String::from("{");
        for row in &container.children {
            out.push('\n');
            out.push_str(&self.indent(depth + 1));
            out.push_str(&self.inline(row, depth + 1));
            out.push(',');
        }
        out.push('\n');
        out.push_str(&self.indent(depth));
        out.push('}');
        out
    }
}

impl Serializer for TextSerializer {
    fn serialize(&self, element: &Element) -> Result<String, RenderError> {
        let mut lines = Vec::new();
        self.lines(element, 0, &mut lines);
        Ok(lines.join("\n"))
    }
}
