//! # HTML Serializer
//!
//! Layouts map to tags (`div`, `span`, `table`, `tr`, `td`), roles and
//! emphasis kinds to `class` attributes. Block-level tags are pretty-printed;
//! everything inside an inline run stays on one line so no stray whitespace
//! appears between tokens.
//!
//! Inline runs may only hold phrasing content, so a container nested in one
//! is always a `span`. Its layout travels in a `layout-*` class instead
//! (`<span class="anonymous-function layout-block">`).
//!
//! ## Example
//!
//! ```rust
//! use config::RenderConfig;
//! use vlua_render::element::{Element, Role};
//! use vlua_render::serialize::{HtmlSerializer, Serializer};
//!
//! let html = HtmlSerializer::new(RenderConfig::default())
//!     .serialize(&Element::inline(Role::Return, vec![Element::keyword("return")]))
//!     .unwrap();
//! assert_eq!(html, r#"<span class="return"><span class="keyword">return</span></span>"#);
//! ```

use super::{is_compact, space_between, Serializer};
use crate::element::{Container, Element, Layout};
use crate::error::RenderError;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use config::RenderConfig;
use stacker::maybe_grow;

/// Default stylesheet embedded in standalone documents.
pub const STYLESHEET: &str = r#"body { font-family: monospace; }
div.block, span.block { margin-left: 2em; border-left: 1px dotted #bbb; padding-left: 0.5em; }
div.chunk > div.block { margin-left: 0; border-left: none; }
div.function, div.local-function, div.method, span.anonymous-function {
    border: 1px solid #9ab; border-radius: 4px; padding: 0.2em; margin: 0.2em 0;
}
span.layout-block { display: inline-block; vertical-align: top; }
span.layout-block > * { display: block; }
table.table, span.layout-table { display: inline-table; border-collapse: collapse; vertical-align: top; }
span.layout-row { display: table-row; }
table.table td, span.layout-cell { display: table-cell; border: 1px solid #ddd; padding: 0 0.3em; }
span.binary-op, span.unary-op { background: rgba(0, 0, 0, 0.04); border-radius: 3px; }
.keyword { color: #a626a4; font-weight: bold; }
.operator { color: #0184bc; }
.nil, .boolean { color: #c18401; }
.number { color: #986801; }
.string { color: #50a14f; }
.name { color: #383a42; }
.label { color: #e45649; }
.varargs { color: #4078f2; }
"#;

/// HTML backend.
#[derive(Debug, Clone, Copy)]
pub struct HtmlSerializer {
    config: RenderConfig,
}

impl HtmlSerializer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn indent(&self, depth: usize, out: &mut String) {
        for _ in 0..depth * self.config.indent_width {
            out.push(' ');
        }
    }

    /// Write `element` on its own line(s) at `depth`.
    fn write_block(&self, element: &Element, depth: usize, out: &mut String) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match element {
            Element::Container(container)
                if matches!(container.layout, Layout::Block | Layout::Table | Layout::Row) =>
            {
                let tag = tag_name(container.layout);
                self.indent(depth, out);
                open_tag(tag, container.role.class_name(), out);
                if container.children.is_empty() {
                    close_tag(tag, out);
                    out.push('\n');
                    return;
                }
                out.push('\n');
                for child in &container.children {
                    self.write_block(child, depth + 1, out);
                }
                self.indent(depth, out);
                close_tag(tag, out);
                out.push('\n');
            }
            Element::Container(container) if container.layout == Layout::Cell => {
                self.indent(depth, out);
                let tag = tag_name(container.layout);
                open_tag(tag, container.role.class_name(), out);
                self.write_run(container, out);
                close_tag(tag, out);
                out.push('\n');
            }
            other => {
                self.indent(depth, out);
                self.write_inline(other, out);
                out.push('\n');
            }
        })
    }

    /// Write `element` without line breaks.
    fn write_inline(&self, element: &Element, out: &mut String) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match element {
            Element::Text(text) => escape(text, out),
            Element::Leaf(leaf) => {
                open_tag("span", leaf.emphasis.class_name(), out);
                escape(&leaf.text, out);
                close_tag("span", out);
            }
            Element::Container(container) => {
                open_tag("span", &inline_class(container), out);
                self.write_run(container, out);
                close_tag("span", out);
            }
        })
    }

    /// Children of `container` on one line, spaced.
    fn write_run(&self, container: &Container, out: &mut String) {
        let compact = is_compact(container);
        for (i, child) in container.children.iter().enumerate() {
            if i > 0 && !compact && space_between(&container.children[i - 1], child) {
                out.push(' ');
            }
            self.write_inline(child, out);
        }
    }

    /// Wrap a fragment in a complete document.
    fn document(&self, fragment: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>vlua</title>\n<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>",
            STYLESHEET, fragment
        )
    }
}

impl Serializer for HtmlSerializer {
    fn serialize(&self, element: &Element) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_block(element, 0, &mut out);
        let fragment = out.trim_end_matches('\n');

        if self.config.standalone {
            Ok(self.document(fragment))
        } else {
            Ok(fragment.to_string())
        }
    }
}

// =============================================================================
// MARKUP HELPERS
// =============================================================================

const fn tag_name(layout: Layout) -> &'static str {
    match layout {
        Layout::Block => "div",
        Layout::Inline => "span",
        Layout::Table => "table",
        Layout::Row => "tr",
        Layout::Cell => "td",
    }
}

/// Class of a container written as a `span` inside an inline run.
fn inline_class(container: &Container) -> String {
    match container.layout {
        Layout::Inline => container.role.class_name().to_string(),
        layout => format!("{} layout-{}", container.role.class_name(), layout.class_name()),
    }
}

fn open_tag(tag: &str, class: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(" class=\"");
    out.push_str(class);
    out.push_str("\">");
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Append `text` with HTML special characters escaped.
pub fn escape(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
