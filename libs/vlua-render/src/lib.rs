//! # vlua Render
//!
//! Turns Lua syntax trees into visual element trees and serializes them as
//! markup.
//!
//! ## Architecture
//!
//! ```text
//! Source → lua-parser (Chunk) → translate (Element) → serialize (markup)
//! ```
//!
//! The translator is output-agnostic: every construct becomes a role-tagged
//! [`Element`] tree, and a [`Serializer`] decides what roles look like.
//!
//! ## Example
//!
//! ```rust
//! use config::RenderConfig;
//! use vlua_render::{render_source, Format};
//!
//! let text = render_source("for i = 1, 10 do end", Format::Text, RenderConfig::default()).unwrap();
//! assert_eq!(text, "for i = 1, 10 do\nend");
//! ```

pub mod element;
pub mod error;
pub mod serialize;
pub mod translate;

// Re-export public API
pub use element::{Container, Element, Emphasis, Layout, Leaf, Role};
pub use error::RenderError;
pub use serialize::{Format, HtmlSerializer, JsonSerializer, Serializer, TextSerializer};
pub use translate::{translate, Translate};

use config::RenderConfig;
use lua_ast::Chunk;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Render a parsed chunk in the given format.
pub fn render(chunk: &Chunk, format: Format, config: RenderConfig) -> Result<String, RenderError> {
    let element = translate(chunk);
    format.serializer(config).serialize(&element)
}

/// Parse Lua source and render it in the given format.
///
/// The parser's nesting limit comes from `config.max_nesting_depth`.
///
/// ## Example
///
/// ```rust
/// use config::RenderConfig;
/// use vlua_render::{render_source, Format, RenderError};
///
/// let html = render_source("local x = 1", Format::Html, RenderConfig::default()).unwrap();
/// assert!(html.contains(r#"<span class="keyword">local</span>"#));
///
/// let err = render_source("local = 1", Format::Html, RenderConfig::default()).unwrap_err();
/// assert!(matches!(err, RenderError::Parse(_)));
/// ```
pub fn render_source(source: &str, format: Format, config: RenderConfig) -> Result<String, RenderError> {
    let chunk = lua_parser::parse_with_limit(source, config.max_nesting_depth)?;
    render(&chunk, format, config)
}

// =============================================================================
// TESTS
// =============================================================================
