//! Centralized configuration values shared across the vlua pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use thiserror::Error;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Number of spaces used for one indentation level by the text and HTML
/// serializers.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_INDENT_WIDTH;
/// assert_eq!(DEFAULT_INDENT_WIDTH, 4);
/// ```
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Largest indentation width accepted by [`RenderConfig::new`].
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH};
/// assert!(DEFAULT_INDENT_WIDTH <= MAX_INDENT_WIDTH);
/// ```
pub const MAX_INDENT_WIDTH: usize = 16;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum nesting depth of blocks and expressions accepted by the parser.
///
/// Inputs nested deeper than this are rejected with a parse error, which
/// bounds the recursion of every later stage.
///
/// # Examples
/// ```
/// use config::constants::MAX_NESTING_DEPTH;
/// assert!(MAX_NESTING_DEPTH >= 200);
/// ```
pub const MAX_NESTING_DEPTH: usize = 1000;

/// Remaining stack below which `stacker` allocates a new segment.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 128 * 1024;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 4 * 1024 * 1024;

/// Stack reserved for one JSON serialization pass. serde_json recurses per
/// element level, so this covers the deepest tree the parser accepts.
///
/// # Examples
/// ```
/// use config::constants::{JSON_STACK_SIZE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(JSON_STACK_SIZE_BYTES >= STACKER_STACK_SIZE_BYTES);
/// ```
pub const JSON_STACK_SIZE_BYTES: usize = 32 * 1024 * 1024;

// =============================================================================
// RENDER CONFIG
// =============================================================================

/// Immutable snapshot of the settings that shape rendered output.
///
/// # Examples
/// ```
/// use config::constants::RenderConfig;
/// let config = RenderConfig::default().with_standalone(true);
/// assert!(config.standalone);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Wrap HTML output in a complete document with the default stylesheet.
    pub standalone: bool,
    /// Deepest block/expression nesting the parser accepts.
    pub max_nesting_depth: usize,
}

impl RenderConfig {
    /// Builds a configuration, validating the indent width and nesting limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::RenderConfig;
    /// let cfg = RenderConfig::new(2, 64).expect("valid config");
    /// assert_eq!(cfg.indent_width, 2);
    /// assert!(RenderConfig::new(64, 64).is_err());
    /// ```
    pub fn new(indent_width: usize, max_nesting_depth: usize) -> Result<Self, ConfigError> {
        if indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::InvalidIndentWidth(indent_width));
        }
        if max_nesting_depth == 0 || max_nesting_depth > MAX_NESTING_DEPTH {
            return Err(ConfigError::InvalidNestingDepth(max_nesting_depth));
        }
        Ok(Self {
            indent_width,
            standalone: false,
            max_nesting_depth,
        })
    }

    /// Returns a copy with the standalone-document flag set.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            standalone: false,
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Raised when the indent width exceeds [`MAX_INDENT_WIDTH`].
    #[error("indent width {0} exceeds the maximum of {}", MAX_INDENT_WIDTH)]
    InvalidIndentWidth(usize),
    /// Raised when the nesting limit is zero or above [`MAX_NESTING_DEPTH`].
    #[error("nesting depth {0} is outside 1..={}", MAX_NESTING_DEPTH)]
    InvalidNestingDepth(usize),
}
