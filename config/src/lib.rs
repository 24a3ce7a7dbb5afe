//! # Config Crate
//!
//! Centralized configuration for the vlua rendering pipeline.
//! Every tunable limit and default used by the parser, the translator and the
//! serializers is defined here so the crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{RenderConfig, DEFAULT_INDENT_WIDTH};
//!
//! let config = RenderConfig::default();
//! assert_eq!(config.indent_width, DEFAULT_INDENT_WIDTH);
//! assert!(!config.standalone);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Values**: `RenderConfig::new` rejects out-of-range settings
//! - **Immutable Snapshots**: Configuration is `Copy` and passed by value

pub mod constants;

pub use constants::{ConfigError, RenderConfig};
