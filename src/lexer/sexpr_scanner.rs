use super::token::{format_tokens, Token, TokenKind, MAX_LEXEME_LEN};
use crate::error::Result;
use crate::parser::{TokenStream, MAX_TOKENS};

/// Scanner for lispv S-expression syntax
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: TokenStream,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Column where the current token starts
    start_column: usize,
}

impl SExprScanner {
    /// Creates a new S-expression scanner from source code
    pub fn new(source: &str) -> Self {
        Self::with_limit(source, MAX_TOKENS)
    }

    /// Creates a scanner whose token stream holds at most `max_tokens` tokens.
    /// Values above [`MAX_TOKENS`] are clamped.
    pub fn with_limit(source: &str, max_tokens: usize) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            tokens: TokenStream::with_limit(max_tokens),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_column: 1,
        }
    }

    /// Scans all tokens from source code into a token stream
    pub fn scan_tokens(mut self) -> Result<TokenStream> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_column = self.column;
            self.scan_token()?;
        }

        tracing::debug!(
            count = self.tokens.len(),
            tokens = %format_tokens(self.tokens.tokens()),
            "scanned source"
        );

        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            // `:` of `:=` falls through to the skip arm
            '=' => self.add_token(TokenKind::Assign),

            // Integers are one digit each: `42` is two literals
            c if c.is_ascii_digit() => self.add_token(TokenKind::IntLiteral),

            c if c.is_ascii_alphabetic() => self.scan_symbol(),

            '\n' => {
                self.line += 1;
                self.column = 1;
                Ok(())
            }

            _ => Ok(()),
        }
    }

    fn scan_symbol(&mut self) -> Result<()> {
        while self.peek().is_ascii_alphabetic() && self.current - self.start < MAX_LEXEME_LEN {
            self.advance();
        }
        let end = self.current;

        // Letters past the limit are dropped
        while self.peek().is_ascii_alphabetic() {
            self.advance();
        }

        let lexeme: String = self.source[self.start..end].iter().collect();
        self.push(TokenKind::Symbol, lexeme)?;

        // The character ending the run is consumed without a token
        if !self.is_at_end() && self.advance() == '\n' {
            self.line += 1;
            self.column = 1;
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn add_token(&mut self, kind: TokenKind) -> Result<()> {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.push(kind, lexeme)
    }

    fn push(&mut self, kind: TokenKind, lexeme: String) -> Result<()> {
        self.tokens
            .push(Token::new(kind, lexeme, self.line, self.start_column))
    }
}
