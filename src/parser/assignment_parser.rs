use super::ast::{Assignment, Statement};
use super::token_stream::TokenStream;
use crate::error::{AssignField, Error, Result, Warning};
use crate::lexer::{Token, TokenKind};

/// Outcome of a successful parse
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The recognised top-level form
    pub statement: Statement,
    /// Non-fatal diagnostics raised along the way
    pub warnings: Vec<Warning>,
}

/// Single-pass recursive-descent parser for the assignment form
pub struct AssignmentParser {
    stream: TokenStream,
    strict: bool,
    warnings: Vec<Warning>,
}

impl AssignmentParser {
    /// Creates a parser that tolerates a non-digit value and an unclosed form
    pub fn new(stream: TokenStream) -> Self {
        AssignmentParser {
            stream,
            strict: false,
            warnings: Vec::new(),
        }
    }

    /// Creates a parser that rejects a non-digit value and requires the closing `)`
    pub fn strict(stream: TokenStream) -> Self {
        AssignmentParser {
            strict: true,
            ..Self::new(stream)
        }
    }

    /// Parses the first top-level form; anything after it is ignored
    pub fn parse(&mut self) -> Result<Parsed> {
        self.stream.reset();

        let statement = if self.stream.current()?.kind == TokenKind::LeftParen {
            self.parse_sexp()?
        } else {
            tracing::debug!("input does not start with `(`, nothing to translate");
            Statement::Unsupported
        };

        tracing::debug!(%statement, "parsed top-level form");
        Ok(Parsed {
            statement,
            warnings: std::mem::take(&mut self.warnings),
        })
    }

    /// Gives the token stream back, cursor where parsing stopped
    pub fn into_stream(self) -> TokenStream {
        self.stream
    }

    fn parse_sexp(&mut self) -> Result<Statement> {
        let head = self.stream.advance()?;

        if head.kind != TokenKind::Assign {
            tracing::debug!(head = %head.kind, "unsupported sexp head");
            return Ok(Statement::Unsupported);
        }

        self.parse_assignment().map(Statement::Assignment)
    }

    fn parse_assignment(&mut self) -> Result<Assignment> {
        let ty = Self::expect_symbol(self.stream.advance()?, AssignField::Type)?;
        let name = Self::expect_symbol(self.stream.advance()?, AssignField::Name)?;
        let value = self.parse_value()?;

        if self.strict {
            self.expect_close()?;
        }

        Ok(Assignment { ty, name, value })
    }

    fn parse_value(&mut self) -> Result<String> {
        let token = self.stream.advance()?;
        if token.kind == TokenKind::IntLiteral {
            return Ok(token.lexeme.clone());
        }

        if self.strict {
            return Err(Error::NonDigitValue {
                found: token.kind,
                lexeme: token.lexeme.clone(),
            });
        }

        let warning = Warning::NonDigitValue {
            found: token.kind,
            lexeme: token.lexeme.clone(),
            line: token.line,
            column: token.column,
        };
        let value = token.lexeme.clone();
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
        Ok(value)
    }

    fn expect_close(&self) -> Result<()> {
        match self.stream.peek_next() {
            Some(token) if token.kind == TokenKind::RightParen => Ok(()),
            other => Err(Error::UnclosedAssignment {
                found: other.map(|t| t.kind),
            }),
        }
    }

    fn expect_symbol(token: &Token, field: AssignField) -> Result<String> {
        if token.kind == TokenKind::Symbol {
            Ok(token.lexeme.clone())
        } else {
            Err(Error::Grammar {
                field,
                found: token.kind,
                line: token.line,
                column: token.column,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::SExprScanner;

    fn parse_str(source: &str) -> Result<Parsed> {
        let stream = SExprScanner::new(source).scan_tokens()?;
        AssignmentParser::new(stream).parse()
    }

    fn parse_strict(source: &str) -> Result<Parsed> {
        let stream = SExprScanner::new(source).scan_tokens()?;
        AssignmentParser::strict(stream).parse()
    }

    #[test]
    fn test_simple_assignment() {
        let parsed = parse_str("(= int x 5)").unwrap();
        assert_eq!(
            parsed.statement,
            Statement::Assignment(Assignment::new("int", "x", "5"))
        );
        assert_eq!(parsed.statement.to_string(), "(= int x 5)");
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_closing_paren_not_required() {
        let parsed = parse_str("(= char c 7").unwrap();
        assert_eq!(
            parsed.statement,
            Statement::Assignment(Assignment::new("char", "c", "7"))
        );
    }

    #[test]
    fn test_trailing_input_ignored() {
        let parsed = parse_str("(= int x 5)))) (= long y 6)").unwrap();
        assert_eq!(
            parsed.statement,
            Statement::Assignment(Assignment::new("int", "x", "5"))
        );
    }

    #[test]
    fn test_unsupported_head() {
        let parsed = parse_str("(int x 5)").unwrap();
        assert_eq!(parsed.statement, Statement::Unsupported);
        assert_eq!(parsed.statement.to_string(), "<unsupported>");
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_no_leading_paren() {
        assert_eq!(
            parse_str("= int x 5").unwrap().statement,
            Statement::Unsupported
        );
        assert_eq!(parse_str(")").unwrap().statement, Statement::Unsupported);
    }

    #[test]
    fn test_type_not_symbol() {
        let err = parse_str("(= 5 x 5)").unwrap_err();
        assert!(matches!(
            err,
            Error::Grammar {
                field: AssignField::Type,
                found: TokenKind::IntLiteral,
                ..
            }
        ));
    }

    #[test]
    fn test_name_not_symbol() {
        let err = parse_str("(= int (x 5)").unwrap_err();
        assert!(matches!(
            err,
            Error::Grammar {
                field: AssignField::Name,
                found: TokenKind::LeftParen,
                ..
            }
        ));
    }

    #[test]
    fn test_value_not_digit_warns() {
        let parsed = parse_str("(= int x y)").unwrap();
        assert_eq!(
            parsed.statement,
            Statement::Assignment(Assignment::new("int", "x", "y"))
        );
        assert_eq!(parsed.warnings.len(), 1);
        assert!(matches!(
            &parsed.warnings[0],
            Warning::NonDigitValue { found: TokenKind::Symbol, lexeme, .. } if lexeme == "y"
        ));
    }

    #[test]
    fn test_value_paren_substituted() {
        let parsed = parse_str("(= int x )").unwrap();
        assert_eq!(
            parsed.statement,
            Statement::Assignment(Assignment::new("int", "x", ")"))
        );
    }

    #[test]
    fn test_empty_input_cursor_error() {
        assert_eq!(
            parse_str("").unwrap_err(),
            Error::CursorOutOfRange {
                position: Some(0),
                len: 0
            }
        );
        assert!(matches!(
            parse_str("   \n").unwrap_err(),
            Error::CursorOutOfRange { .. }
        ));
    }

    #[test]
    fn test_truncated_form_cursor_error() {
        assert_eq!(
            parse_str("(").unwrap_err(),
            Error::CursorOutOfRange {
                position: Some(1),
                len: 1
            }
        );
        assert_eq!(
            parse_str("(= int x").unwrap_err(),
            Error::CursorOutOfRange {
                position: Some(4),
                len: 4
            }
        );
    }

    #[test]
    fn test_cursor_stops_at_value() {
        let stream = SExprScanner::new("(= int x 5)").scan_tokens().unwrap();
        let mut parser = AssignmentParser::new(stream);
        parser.parse().unwrap();
        assert_eq!(parser.into_stream().position(), Some(4));
    }

    #[test]
    fn test_strict_accepts_closed_form() {
        let parsed = parse_strict("(= int x 5)").unwrap();
        assert_eq!(
            parsed.statement,
            Statement::Assignment(Assignment::new("int", "x", "5"))
        );
    }

    #[test]
    fn test_strict_rejects_non_digit() {
        assert_eq!(
            parse_strict("(= int x y)").unwrap_err(),
            Error::NonDigitValue {
                found: TokenKind::Symbol,
                lexeme: "y".to_string()
            }
        );
    }

    #[test]
    fn test_strict_requires_close() {
        assert_eq!(
            parse_strict("(= int x 5").unwrap_err(),
            Error::UnclosedAssignment { found: None }
        );
        assert_eq!(
            parse_strict("(= int x 5 6)").unwrap_err(),
            Error::UnclosedAssignment {
                found: Some(TokenKind::IntLiteral)
            }
        );
    }

    #[test]
    fn test_strict_unsupported_still_silent() {
        assert_eq!(
            parse_strict("(int x 5)").unwrap().statement,
            Statement::Unsupported
        );
    }
}
