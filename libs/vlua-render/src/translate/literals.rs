//! # Literal Translation

use crate::element::{Element, Emphasis};
use lua_ast::{Delimiter, LuaString, Number};

pub(super) fn number(number: &Number) -> Element {
    Element::leaf(number.to_string(), Emphasis::Number)
}

pub(super) fn string(string: &LuaString) -> Element {
    Element::leaf(quote_string(string), Emphasis::String)
}

/// String content wrapped in its original delimiters.
///
/// Long brackets use the lowest level whose closing bracket does not occur
/// in the content.
///
/// ## Example
///
/// ```rust
/// use lua_ast::{Delimiter, LuaString};
/// use vlua_render::translate::quote_string;
///
/// assert_eq!(quote_string(&LuaString::new("foo", Delimiter::DoubleQuote)), "\"foo\"");
/// assert_eq!(quote_string(&LuaString::new("a]]b", Delimiter::LongBracket)), "[=[a]]b]=]");
/// ```
pub fn quote_string(string: &LuaString) -> String {
    let value = &string.value;
    match string.delimiter {
        Delimiter::SingleQuote => format!("'{}'", value),
        Delimiter::DoubleQuote => format!("\"{}\"", value),
        Delimiter::LongBracket => {
            // The closer must not appear early, including across the end of
            // the content (`a]` followed by `]]`).
            let haystack = format!("{}]", value);
            let level = (0..)
                .find(|&n| !haystack.contains(&format!("]{}]", "=".repeat(n))))
                .unwrap_or(0);
            let equals = "=".repeat(level);
            format!("[{equals}[{value}]{equals}]")
        }
    }
}
