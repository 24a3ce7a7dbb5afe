//! # Serializers
//!
//! Turn a visual element tree into markup text. The translator emits one
//! role-tagged tree; each backend decides how roles and emphasis look.
//!
//! ## Backends
//!
//! | Format | Output |
//! |--------|--------|
//! | `html` | nested `div`/`span`/`table` markup with role classes |
//! | `text` | indented plain text |
//! | `json` | the element tree itself, as JSON |
//!
//! ## Example
//!
//! ```rust
//! use config::RenderConfig;
//! use vlua_render::element::{Element, Role};
//! use vlua_render::serialize::Format;
//!
//! let element = Element::inline(Role::Return, vec![Element::keyword("return")]);
//! let serializer = "text".parse::<Format>().unwrap().serializer(RenderConfig::default());
//! assert_eq!(serializer.serialize(&element).unwrap(), "return");
//! ```

mod html;
mod json;
mod text;


pub use html::HtmlSerializer;
pub use json::JsonSerializer;
pub use text::TextSerializer;

use crate::element::{Container, Element, Role};
use crate::error::RenderError;
use config::RenderConfig;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SERIALIZER
// =============================================================================

/// Element tree to markup text.
///
/// Children are written in their original order; output depends only on the
/// tree and the serializer's configuration.
pub trait Serializer {
    fn serialize(&self, element: &Element) -> Result<String, RenderError>;
}

/// Output vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Html,
    Text,
    Json,
}

impl Format {
    /// Serializer for this format.
    pub fn serializer(self, config: RenderConfig) -> Box<dyn Serializer> {
        match self {
            Self::Html => Box::new(HtmlSerializer::new(config)),
            Self::Text => Box::new(TextSerializer::new(config)),
            Self::Json => Box::new(JsonSerializer::new(config)),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for Format {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// SPACING
// =============================================================================

/// Text runs that attach to the token before them.
const NO_SPACE_BEFORE: [&str; 8] = [")", "]", ",", ".", ":", "(", "[", ";"];

/// Text runs that attach to the token after them.
const NO_SPACE_AFTER: [&str; 4] = ["(", "[", ".", ":"];

/// Whether two neighboring children of an inline run are separated by a
/// space.
pub(crate) fn space_between(prev: &Element, next: &Element) -> bool {
    let attached_before =
        matches!(next, Element::Text(text) if NO_SPACE_BEFORE.contains(&text.as_str()));
    let attached_after =
        matches!(prev, Element::Text(text) if NO_SPACE_AFTER.contains(&text.as_str()));
    !attached_before && !attached_after
}

/// Units rendered without any inner spacing: labels (`::top::`) and
/// symbolic unary operators (`-x`, `#t`). Word operators keep their space
/// (`not x`).
pub(crate) fn is_compact(container: &Container) -> bool {
    match container.role {
        Role::Label => true,
        Role::UnaryOp => !matches!(
            container.children.first(),
            Some(Element::Leaf(leaf)) if leaf.text.chars().all(char::is_alphabetic)
        ),
        _ => false,
    }
}
