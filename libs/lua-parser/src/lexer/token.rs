//! # Tokens
//!
//! Token types for the Lua lexer.
//!
//! ## Example
//!
//! ```rust
//! use lua_parser::lexer::{Token, TokenKind};
//! use lua_parser::Span;
//!
//! let token = Token::new(TokenKind::Number, Span::from_bytes(0, 2), "10".to_string());
//! assert_eq!(token.kind, TokenKind::Number);
//! ```

use crate::span::Span;
use lua_ast::Delimiter;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// For strings `text` holds the raw content between the delimiters; for every
/// other kind it is the exact source slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text.
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens, following the Lua 5.3 reference manual (§3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Numeral like `10`, `3.14` or `0xff`
    Number,
    /// String literal with its quoting style
    String(Delimiter),
    /// Identifier
    Name,

    // Keywords
    And,
    Break,
    Do,
    Else,
    ElseIf,
    End,
    False,
    For,
    Function,
    Goto,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `//`
    SlashSlash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `#`
    Hash,
    /// `&`
    Amp,
    /// `~`
    Tilde,
    /// `|`
    Pipe,
    /// `<<`
    LtLt,
    /// `>>`
    GtGt,
    /// `==`
    EqEq,
    /// `~=`
    TildeEq,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `=`
    Eq,

    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `::`
    ColonColon,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `...`
    Ellipsis,

    // Meta
    /// End of file
    Eof,
}

impl TokenKind {
    /// Keyword kind for a reserved word, if `text` is one.
    pub fn keyword(text: &str) -> Option<Self> {
        let kind = match text {
            "and" => Self::And,
            "break" => Self::Break,
            "do" => Self::Do,
            "else" => Self::Else,
            "elseif" => Self::ElseIf,
            "end" => Self::End,
            "false" => Self::False,
            "for" => Self::For,
            "function" => Self::Function,
            "goto" => Self::Goto,
            "if" => Self::If,
            "in" => Self::In,
            "local" => Self::Local,
            "nil" => Self::Nil,
            "not" => Self::Not,
            "or" => Self::Or,
            "repeat" => Self::Repeat,
            "return" => Self::Return,
            "then" => Self::Then,
            "true" => Self::True,
            "until" => Self::Until,
            "while" => Self::While,
            _ => return None,
        };
        Some(kind)
    }

    /// Check if this is a keyword token.
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Break
                | Self::Do
                | Self::Else
                | Self::ElseIf
                | Self::End
                | Self::False
                | Self::For
                | Self::Function
                | Self::Goto
                | Self::If
                | Self::In
                | Self::Local
                | Self::Nil
                | Self::Not
                | Self::Or
                | Self::Repeat
                | Self::Return
                | Self::Then
                | Self::True
                | Self::Until
                | Self::While
        )
    }

    /// Tokens that close a block: `end`, `else`, `elseif`, `until`, EOF.
    pub const fn is_block_follow(&self) -> bool {
        matches!(
            self,
            Self::End | Self::Else | Self::ElseIf | Self::Until | Self::Eof
        )
    }

    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String(_) => "string",
            Self::Name => "name",
            Self::And => "and",
            Self::Break => "break",
            Self::Do => "do",
            Self::Else => "else",
            Self::ElseIf => "elseif",
            Self::End => "end",
            Self::False => "false",
            Self::For => "for",
            Self::Function => "function",
            Self::Goto => "goto",
            Self::If => "if",
            Self::In => "in",
            Self::Local => "local",
            Self::Nil => "nil",
            Self::Not => "not",
            Self::Or => "or",
            Self::Repeat => "repeat",
            Self::Return => "return",
            Self::Then => "then",
            Self::True => "true",
            Self::Until => "until",
            Self::While => "while",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::SlashSlash => "//",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Hash => "#",
            Self::Amp => "&",
            Self::Tilde => "~",
            Self::Pipe => "|",
            Self::LtLt => "<<",
            Self::GtGt => ">>",
            Self::EqEq => "==",
            Self::TildeEq => "~=",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::ColonColon => "::",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::DotDot => "..",
            Self::Ellipsis => "...",
            Self::Eof => "end of file",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("elseif"), Some(TokenKind::ElseIf));
        assert_eq!(TokenKind::keyword("goto"), Some(TokenKind::Goto));
        assert_eq!(TokenKind::keyword("print"), None);
    }

    #[test]
    fn test_token_is_keyword() {
        assert!(TokenKind::Local.is_keyword());
        assert!(TokenKind::Nil.is_keyword());
        assert!(!TokenKind::Name.is_keyword());
    }

    #[test]
    fn test_block_follow() {
        assert!(TokenKind::Until.is_block_follow());
        assert!(TokenKind::Eof.is_block_follow());
        assert!(!TokenKind::Return.is_block_follow());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(TokenKind::TildeEq.display(), "~=");
        assert_eq!(TokenKind::String(Delimiter::DoubleQuote).display(), "string");
    }
}
