//! # Literal Values
//!
//! Number and string literal payloads.
//!
//! ## Example
//!
//! ```rust
//! use lua_ast::{Delimiter, LuaString, Number};
//!
//! assert_eq!(Number::Int(10).to_string(), "10");
//! assert_eq!(Number::Float(1.0).to_string(), "1.0");
//!
//! let s = LuaString::new("foo", Delimiter::SingleQuote);
//! assert_eq!(s.delimiter, Delimiter::SingleQuote);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NUMBER
// =============================================================================

/// Numeric literal, split into Lua's integer and float subtypes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// True when the literal denotes the value one (`1` or `1.0`).
    pub fn is_one(&self) -> bool {
        match self {
            Self::Int(value) => *value == 1,
            Self::Float(value) => *value == 1.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::Float(value) => f.write_str(&format_float(*value)),
        }
    }
}

/// Significant digits Lua uses when printing floats (`%.14g`).
const FLOAT_DIGITS: i32 = 14;

/// A float the way Lua 5.3 prints it: `%.14g`, plus `.0` when the result
/// would otherwise read as an integer.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Exponent after rounding to the target precision decides the notation.
    let scientific = format!("{:.*e}", (FLOAT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let text = if value != 0.0 && (exponent < -4 || exponent >= FLOAT_DIGITS) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let precision = (FLOAT_DIGITS - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", precision, value)).to_string()
    };

    if text.chars().all(|c| c.is_ascii_digit() || c == '-') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Drop trailing zeros of a fractional part, and the point if nothing is left.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

// =============================================================================
// STRING
// =============================================================================

/// Quoting style of a string literal, kept exactly as written.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `'text'`
    SingleQuote,
    /// `"text"`
    DoubleQuote,
    /// `[[text]]` (any level, e.g. `[==[text]==]`)
    LongBracket,
}

/// String literal. `value` is the raw source text between the delimiters;
/// escape sequences are not decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LuaString {
    pub value: String,
    pub delimiter: Delimiter,
}

impl LuaString {
    pub fn new(value: impl Into<String>, delimiter: Delimiter) -> Self {
        Self {
            value: value.into(),
            delimiter,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
