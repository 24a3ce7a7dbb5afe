//! # Lua Lexer
//!
//! Tokenizes Lua 5.3 source code.
//!
//! ## Example
//!
//! ```rust
//! use lua_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("local x = 10").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Local);
//! assert_eq!(tokens[1].kind, TokenKind::Name);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::{ParseError, ParseErrorKind};
use crate::span::{Position, Span};
use lua_ast::{Delimiter, Number};

// =============================================================================
// LEXER
// =============================================================================

/// Lua lexer.
///
/// Converts source text into a stream of tokens terminated by `Eof`.
/// Whitespace, comments and a leading `#!` line are skipped.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Vector of tokens including the EOF token, or the first lexical error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        self.skip_shebang();

        loop {
            self.skip_whitespace_and_comments()?;
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token()?;
        }

        let eof_pos = self.cursor.position();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(eof_pos, eof_pos),
            String::new(),
        ));

        Ok(self.tokens)
    }

    fn skip_shebang(&mut self) {
        if self.cursor.peek() == Some('#') && self.cursor.peek_next() == Some('!') {
            self.cursor.advance_while(|c| c != '\n');
        }
    }

    /// Skip whitespace, `--` line comments and `--[[ ]]` long comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            self.cursor.advance_while(char::is_whitespace);

            if self.cursor.peek() == Some('-') && self.cursor.peek_next() == Some('-') {
                let start = self.cursor.position();
                self.cursor.advance(); // -
                self.cursor.advance(); // -

                if let Some(level) = self.long_bracket_level() {
                    if self.read_long_bracket(level).is_none() {
                        return Err(self.error_from(start, ParseErrorKind::UnterminatedComment));
                    }
                } else {
                    self.cursor.advance_while(|c| c != '\n');
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Scan a single token.
    fn scan_token(&mut self) -> Result<(), ParseError> {
        let start = self.cursor.position();

        if let Some(level) = self.long_bracket_level() {
            return match self.read_long_bracket(level) {
                Some(content) => {
                    self.push_text(TokenKind::String(Delimiter::LongBracket), start, content);
                    Ok(())
                }
                None => Err(self.error_from(start, ParseErrorKind::UnterminatedString)),
            };
        }

        let c = match self.cursor.advance() {
            Some(c) => c,
            None => return Ok(()),
        };

        let kind = match c {
            // Single-character tokens
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '#' => TokenKind::Hash,
            '&' => TokenKind::Amp,
            '|' => TokenKind::Pipe,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,

            // One- or two-character tokens
            '/' if self.cursor.eat('/') => TokenKind::SlashSlash,
            '/' => TokenKind::Slash,
            '~' if self.cursor.eat('=') => TokenKind::TildeEq,
            '~' => TokenKind::Tilde,
            '=' if self.cursor.eat('=') => TokenKind::EqEq,
            '=' => TokenKind::Eq,
            ':' if self.cursor.eat(':') => TokenKind::ColonColon,
            ':' => TokenKind::Colon,
            '<' if self.cursor.eat('<') => TokenKind::LtLt,
            '<' if self.cursor.eat('=') => TokenKind::LtEq,
            '<' => TokenKind::Lt,
            '>' if self.cursor.eat('>') => TokenKind::GtGt,
            '>' if self.cursor.eat('=') => TokenKind::GtEq,
            '>' => TokenKind::Gt,

            // Dots, or a numeral like `.5`
            '.' => {
                if self.cursor.peek().map_or(false, |c| c.is_ascii_digit()) {
                    return self.scan_number(start, c);
                }
                if self.cursor.eat('.') {
                    if self.cursor.eat('.') {
                        TokenKind::Ellipsis
                    } else {
                        TokenKind::DotDot
                    }
                } else {
                    TokenKind::Dot
                }
            }

            // String literal
            '"' => return self.scan_string(start, '"', Delimiter::DoubleQuote),
            '\'' => return self.scan_string(start, '\'', Delimiter::SingleQuote),

            // Number literal
            '0'..='9' => return self.scan_number(start, c),

            // Identifier or keyword
            'a'..='z' | 'A'..='Z' | '_' => return Ok(self.scan_identifier(start)),

            _ => {
                return Err(self.error_from(start, ParseErrorKind::UnexpectedCharacter { ch: c }));
            }
        };

        self.push_slice(kind, start);
        Ok(())
    }

    /// Scan a quoted string. Escapes are validated for termination only and
    /// kept verbatim in the token text.
    fn scan_string(&mut self, start: Position, quote: char, delimiter: Delimiter) -> Result<(), ParseError> {
        let content_start = self.cursor.position().byte;

        loop {
            match self.cursor.peek() {
                None | Some('\n') | Some('\r') => {
                    return Err(self.error_from(start, ParseErrorKind::UnterminatedString));
                }
                Some(c) if c == quote => break,
                Some('\\') => {
                    self.cursor.advance(); // Backslash
                    match self.cursor.advance() {
                        None => {
                            return Err(self.error_from(start, ParseErrorKind::UnterminatedString));
                        }
                        // `\z` skips the following run of whitespace, newlines included
                        Some('z') => self.cursor.advance_while(char::is_whitespace),
                        Some(_) => {}
                    }
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }

        let content = self
            .cursor
            .slice(content_start, self.cursor.position().byte)
            .to_string();
        self.cursor.advance(); // Closing quote
        self.push_text(TokenKind::String(delimiter), start, content);
        Ok(())
    }

    /// Scan a numeral the way Lua's `read_numeral` does: greedily take hex
    /// digits, dots and signed exponents, then validate the whole text.
    fn scan_number(&mut self, start: Position, first: char) -> Result<(), ParseError> {
        let exponent_marks: &[char] = if first == '0' && matches!(self.cursor.peek(), Some('x' | 'X')) {
            self.cursor.advance();
            &['p', 'P']
        } else {
            &['e', 'E']
        };

        loop {
            match self.cursor.peek() {
                Some(c) if exponent_marks.contains(&c) => {
                    self.cursor.advance();
                    if matches!(self.cursor.peek(), Some('+' | '-')) {
                        self.cursor.advance();
                    }
                }
                Some(c) if c.is_ascii_hexdigit() || c == '.' => {
                    self.cursor.advance();
                }
                _ => break,
            }
        }
        // Trailing letters make the numeral malformed rather than a new token
        self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let end = self.cursor.position();
        let text = self.cursor.slice(start.byte, end.byte);
        if parse_number(text).is_none() {
            return Err(ParseError::new(
                ParseErrorKind::InvalidNumber {
                    text: text.to_string(),
                },
                Span::new(start, end),
            ));
        }

        self.push_slice(TokenKind::Number, start);
        Ok(())
    }

    /// Scan an identifier or keyword.
    fn scan_identifier(&mut self, start: Position) {
        self.cursor
            .advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let text = self.cursor.slice(start.byte, self.cursor.position().byte);
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Name);
        self.push_slice(kind, start);
    }

    // =========================================================================
    // LONG BRACKETS
    // =========================================================================

    /// Level of a long bracket opening at the cursor (`[[` is 0, `[==[` is 2),
    /// without consuming anything.
    fn long_bracket_level(&self) -> Option<usize> {
        if self.cursor.peek() != Some('[') {
            return None;
        }
        let mut level = 0;
        while self.cursor.peek_nth(level + 1) == Some('=') {
            level += 1;
        }
        (self.cursor.peek_nth(level + 1) == Some('[')).then_some(level)
    }

    /// Consume a long bracket of the given level and return its content.
    /// A newline directly after the opening bracket is not part of the content.
    fn read_long_bracket(&mut self, level: usize) -> Option<String> {
        for _ in 0..level + 2 {
            self.cursor.advance();
        }
        if self.cursor.eat('\r') {
            self.cursor.eat('\n');
        } else {
            self.cursor.eat('\n');
        }

        let content_start = self.cursor.position().byte;
        loop {
            if self.cursor.is_eof() {
                return None;
            }
            if self.at_long_bracket_close(level) {
                let content = self
                    .cursor
                    .slice(content_start, self.cursor.position().byte)
                    .to_string();
                for _ in 0..level + 2 {
                    self.cursor.advance();
                }
                return Some(content);
            }
            self.cursor.advance();
        }
    }

    fn at_long_bracket_close(&self, level: usize) -> bool {
        self.cursor.peek() == Some(']')
            && (1..=level).all(|i| self.cursor.peek_nth(i) == Some('='))
            && self.cursor.peek_nth(level + 1) == Some(']')
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Push a token whose text is the source slice from `start` to the cursor.
    fn push_slice(&mut self, kind: TokenKind, start: Position) {
        let end = self.cursor.position();
        let text = self.cursor.slice(start.byte, end.byte).to_string();
        self.tokens.push(Token::new(kind, Span::new(start, end), text));
    }

    fn push_text(&mut self, kind: TokenKind, start: Position, text: String) {
        let end = self.cursor.position();
        self.tokens.push(Token::new(kind, Span::new(start, end), text));
    }

    fn error_from(&self, start: Position, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, Span::new(start, self.cursor.position()))
    }
}

// =============================================================================
// NUMERALS
// =============================================================================

/// Convert a Lua numeral to its value.
///
/// Decimal integers that overflow `i64` become floats; hexadecimal integers
/// wrap around modulo 2^64, as in Lua.
///
/// ## Example
///
/// ```rust
/// use lua_ast::Number;
/// use lua_parser::lexer::parse_number;
///
/// assert_eq!(parse_number("0xff"), Some(Number::Int(255)));
/// assert_eq!(parse_number("1e2"), Some(Number::Float(100.0)));
/// assert_eq!(parse_number("3..4"), None);
/// ```
pub fn parse_number(text: &str) -> Option<Number> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return parse_hex(hex);
    }

    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return match text.parse::<i64>() {
            Ok(value) => Some(Number::Int(value)),
            Err(_) => text.parse::<f64>().ok().map(Number::Float),
        };
    }

    let valid_chars = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !valid_chars {
        return None;
    }
    text.parse::<f64>().ok().map(Number::Float)
}

fn parse_hex(text: &str) -> Option<Number> {
    let (mantissa, exponent) = match text.find(|c: char| c == 'p' || c == 'P') {
        Some(i) => (&text[..i], Some(&text[i + 1..])),
        None => (text, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };

    let fraction = frac_part.unwrap_or("");
    if int_part.is_empty() && fraction.is_empty() {
        return None;
    }
    if !int_part.chars().chain(fraction.chars()).all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let digits = int_part.chars().chain(fraction.chars()).filter_map(|c| c.to_digit(16));

    if frac_part.is_none() && exponent.is_none() {
        let value = digits.fold(0u64, |acc, d| acc.wrapping_mul(16).wrapping_add(u64::from(d)));
        return Some(Number::Int(value as i64));
    }

    let exponent = match exponent {
        Some(text) => parse_binary_exponent(text)?,
        None => 0,
    };
    let mantissa = digits.fold(0f64, |acc, d| acc * 16.0 + f64::from(d));
    let fraction_bits = i64::try_from(fraction.len()).unwrap_or(i64::MAX).saturating_mul(4);
    let scale = exponent.saturating_sub(fraction_bits);
    let scale = i32::try_from(scale).unwrap_or(if scale < 0 { i32::MIN } else { i32::MAX });

    // Two steps keep subnormal results from flushing to zero early.
    let half = scale / 2;
    Some(Number::Float(mantissa * 2f64.powi(half) * 2f64.powi(scale - half)))
}

/// Power-of-two exponent of a hex float, saturating instead of overflowing.
/// Any magnitude is accepted, as Lua does.
fn parse_binary_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// TESTS
// =============================================================================
