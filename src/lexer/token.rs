use serde::{Deserialize, Serialize};

/// Longest lexeme kept for a symbol or integer literal
pub const MAX_LEXEME_LEN: usize = 15;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token (truncated for long symbols)
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }
}

/// All token types recognised by lispv
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Alphabetic symbol
    Symbol,
    /// Assignment operator (=)
    Assign,
    /// Single-digit integer literal
    IntLiteral,
}

/// Display names indexed by [`TokenKind::index`]
const TOKEN_KIND_NAMES: [&str; 5] = ["(", ")", "SYMBOL", ":=", "INT"];

impl TokenKind {
    fn index(self) -> usize {
        match self {
            TokenKind::LeftParen => 0,
            TokenKind::RightParen => 1,
            TokenKind::Symbol => 2,
            TokenKind::Assign => 3,
            TokenKind::IntLiteral => 4,
        }
    }

    /// Name used in token listings and diagnostics
    pub fn name(self) -> &'static str {
        TOKEN_KIND_NAMES[self.index()]
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render tokens as `<"lexeme", KIND>` entries separated by three spaces
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("<\"{}\", {}>", t.lexeme, t.kind))
        .collect::<Vec<_>>()
        .join("   ")
}
