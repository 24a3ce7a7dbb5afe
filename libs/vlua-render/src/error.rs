//! # Render Errors
//!
//! Error types for the source-to-markup pipeline.

use config::ConfigError;
use lua_parser::ParseError;
use thiserror::Error;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Source did not parse.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// JSON serialization failed.
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid render settings.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output format name not recognized.
    #[error("unknown output format '{0}', expected html, text or json")]
    UnknownFormat(String),
}

// =============================================================================
// TESTS
// =============================================================================
