//! # Table Constructor Parsing
//!
//! ## Grammar
//!
//! ```text
//! tableconstructor = "{" [ field { sep field } [ sep ] ] "}"
//! field            = "[" exp "]" "=" exp | Name "=" exp | exp
//! sep              = "," | ";"
//! ```

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use lua_ast::{Field, Table};

impl Parser {
    /// Parse `{ ... }`. Field order is preserved.
    pub(super) fn parse_table(&mut self) -> Result<Table, ParseError> {
        self.expect(TokenKind::LBrace)?;

        let mut fields = Vec::new();
        while !self.check(TokenKind::RBrace) {
            fields.push(self.parse_field()?);
            if !self.match_token(TokenKind::Comma) && !self.match_token(TokenKind::Semicolon) {
                break;
            }
        }

        self.expect(TokenKind::RBrace)?;
        Ok(Table { fields })
    }

    fn parse_field(&mut self) -> Result<Field, ParseError> {
        match self.peek_kind() {
            TokenKind::LBracket => {
                self.advance();
                let key = self.parse_expression()?;
                self.expect(TokenKind::RBracket)?;
                self.expect(TokenKind::Eq)?;
                let value = self.parse_expression()?;
                Ok(Field::bracketed(key, value))
            }
            TokenKind::Name if self.peek_next_kind() == TokenKind::Eq => {
                let key = self.expect_name()?;
                self.advance(); // =
                let value = self.parse_expression()?;
                Ok(Field::named(key.id, value))
            }
            _ => Ok(Field::positional(self.parse_expression()?)),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use lua_ast::{Delimiter, Expr, Field, Stmt, Table};

    fn parse_table(source: &str) -> Table {
        let full = format!("t = {}", source);
        let tokens = Lexer::new(&full).tokenize().unwrap();
        let chunk = Parser::new(tokens).parse().unwrap();
        match chunk.body.body.into_iter().next() {
            Some(Stmt::Assign(assign)) => match assign.values.into_iter().next() {
                Some(Expr::Table(table)) => table,
                other => panic!("expected table, got {:?}", other),
            },
            other => panic!("expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_table() {
        assert_eq!(parse_table("{}"), Table::default());
    }

    #[test]
    fn test_parse_mixed_fields() {
        let table = parse_table("{1, x = 2; ['k'] = 3, y}");
        assert_eq!(
            table.fields,
            vec![
                Field::positional(Expr::int(1)),
                Field::named("x", Expr::int(2)),
                Field::bracketed(Expr::string("k", Delimiter::SingleQuote), Expr::int(3)),
                Field::positional(Expr::name("y")),
            ]
        );
    }

    #[test]
    fn test_parse_trailing_separator() {
        assert_eq!(parse_table("{1,}").fields.len(), 1);
        assert_eq!(parse_table("{a = 1;}").fields.len(), 1);
    }

    #[test]
    fn test_name_without_equals_is_positional() {
        assert_eq!(
            parse_table("{x == 1}").fields,
            vec![Field::positional(Expr::binary(
                lua_ast::BinaryOpKind::Eq,
                Expr::name("x"),
                Expr::int(1)
            ))]
        );
    }

    #[test]
    fn test_missing_separator_is_error() {
        let tokens = Lexer::new("t = {1 2}").tokenize().unwrap();
        assert!(Parser::new(tokens).parse().is_err());
    }
}
