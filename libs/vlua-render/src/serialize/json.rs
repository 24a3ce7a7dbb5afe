//! # JSON Serializer
//!
//! Dumps the element tree as pretty-printed JSON, indented with the
//! configured width.

use super::Serializer;
use crate::element::Element;
use crate::error::RenderError;
use config::constants::JSON_STACK_SIZE_BYTES;
use config::RenderConfig;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// JSON backend.
#[derive(Debug, Clone, Copy)]
pub struct JsonSerializer {
    config: RenderConfig,
}

impl JsonSerializer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl Serializer for JsonSerializer {
    fn serialize(&self, element: &Element) -> Result<String, RenderError> {
        let indent = " ".repeat(self.config.indent_width);
        let mut buffer = Vec::new();

        // serde_json recurses once per tree level; run on a stack sized for
        // the deepest tree the parser accepts
        stacker::grow(JSON_STACK_SIZE_BYTES, || {
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            element.serialize(&mut serializer)
        })?;

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
