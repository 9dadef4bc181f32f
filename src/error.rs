//! Error types for the lispv translator

use crate::lexer::TokenKind;
use std::fmt;
use thiserror::Error;

/// Field of an assignment form that failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignField {
    /// The leading type symbol, `int` in `(= int x 5)`
    Type,
    /// The variable name symbol, `x` in `(= int x 5)`
    Name,
}

impl fmt::Display for AssignField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssignField::Type => write!(f, "type"),
            AssignField::Name => write!(f, "name"),
        }
    }
}

/// lispv translation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Token capacity exhausted while scanning
    ///
    /// **Triggered by:** Source containing more than `limit` token-producing characters
    /// **Example:** 513 `(` characters in a row
    #[error("Can't add new token: max number of tokens ({limit}) reached")]
    CapacityExceeded {
        /// Maximum number of tokens a stream may hold
        limit: usize,
    },

    /// Assignment type or name is not a symbol
    ///
    /// **Triggered by:** A non-symbol token where the type or name is expected
    /// **Example:** `(= 5 x 5)` (type is a digit)
    #[error("variable {field} must be a symbol, found {found} at line {line}, column {column}")]
    Grammar {
        /// Which part of the assignment was malformed
        field: AssignField,
        /// Kind of the offending token
        found: TokenKind,
        /// Line of the offending token
        line: usize,
        /// Column of the offending token
        column: usize,
    },

    /// Cursor dereferenced outside the token stream
    ///
    /// **Triggered by:** Empty input, or input that ends in the middle of a form
    /// **Example:** `(= int x` (no value token to advance onto)
    #[error("invalid parse point {}, num_tokens: {len}", display_position(.position))]
    CursorOutOfRange {
        /// Cursor position, `None` when the cursor was never set
        position: Option<usize>,
        /// Number of tokens in the stream
        len: usize,
    },

    /// Assignment value is not a digit (strict mode only)
    #[error("variable must be assigned to a digit, found {found} `{lexeme}`")]
    NonDigitValue {
        /// Kind of the offending token
        found: TokenKind,
        /// Text of the offending token
        lexeme: String,
    },

    /// Assignment form not closed by `)` (strict mode only)
    #[error("assignment must be closed by `)`, found {}", display_found(.found))]
    UnclosedAssignment {
        /// Kind of the token after the value, `None` at end of input
        found: Option<TokenKind>,
    },
}

fn display_position(position: &Option<usize>) -> String {
    match position {
        Some(p) => p.to_string(),
        None => "unset".to_string(),
    }
}

fn display_found(found: &Option<TokenKind>) -> String {
    match found {
        Some(kind) => kind.to_string(),
        None => "end of file".to_string(),
    }
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Fatal error that aborts the run
    Fatal,
    /// Warning that doesn't prevent emission
    Warning,
}

impl Error {
    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::CapacityExceeded { .. }
            | Error::Grammar { .. }
            | Error::CursorOutOfRange { .. }
            | Error::NonDigitValue { .. }
            | Error::UnclosedAssignment { .. } => ErrorSeverity::Fatal,
        }
    }
}

/// Non-fatal diagnostics collected during translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Assignment value is not a single digit; its lexeme is emitted verbatim
    NonDigitValue {
        /// Kind of the offending token
        found: TokenKind,
        /// Text substituted as the value
        lexeme: String,
        /// Line of the offending token
        line: usize,
        /// Column of the offending token
        column: usize,
    },
}

impl Warning {
    /// Severity of every warning, for symmetry with [`Error::classify`]
    pub fn classify(&self) -> ErrorSeverity {
        ErrorSeverity::Warning
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::NonDigitValue {
                found,
                lexeme,
                line,
                column,
            } => write!(
                f,
                "variable must be assigned to a digit, found {} `{}` at line {}, column {}",
                found, lexeme, line, column
            ),
        }
    }
}

/// Result type for lispv operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_message_names_field() {
        let err = Error::Grammar {
            field: AssignField::Type,
            found: TokenKind::IntLiteral,
            line: 1,
            column: 4,
        };
        assert!(err
            .to_string()
            .starts_with("variable type must be a symbol"));

        let err = Error::Grammar {
            field: AssignField::Name,
            found: TokenKind::Assign,
            line: 1,
            column: 8,
        };
        assert!(err
            .to_string()
            .starts_with("variable name must be a symbol"));
    }

    #[test]
    fn test_cursor_message_unset() {
        let err = Error::CursorOutOfRange {
            position: None,
            len: 0,
        };
        assert_eq!(err.to_string(), "invalid parse point unset, num_tokens: 0");

        let err = Error::CursorOutOfRange {
            position: Some(6),
            len: 6,
        };
        assert_eq!(err.to_string(), "invalid parse point 6, num_tokens: 6");
    }

    #[test]
    fn test_all_errors_fatal() {
        assert_eq!(
            Error::CapacityExceeded { limit: 512 }.classify(),
            ErrorSeverity::Fatal
        );
        assert_eq!(
            Error::UnclosedAssignment { found: None }.classify(),
            ErrorSeverity::Fatal
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::NonDigitValue {
            found: TokenKind::Symbol,
            lexeme: "y".to_string(),
            line: 1,
            column: 10,
        };
        assert_eq!(warning.classify(), ErrorSeverity::Warning);
        assert!(warning.to_string().contains("`y`"));
    }
}
