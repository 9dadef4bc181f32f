use crate::error::{Error, Result};
use crate::lexer::Token;

/// Hard cap on the number of tokens a stream may hold
pub const MAX_TOKENS: usize = 512;

/// Bounded token sequence with a forward-only cursor
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    limit: usize,
    /// `None` until [`TokenStream::reset`] points it at the first token
    cursor: Option<usize>,
}

impl TokenStream {
    /// Creates an empty stream holding at most [`MAX_TOKENS`] tokens
    pub fn new() -> Self {
        Self::with_limit(MAX_TOKENS)
    }

    /// Creates an empty stream holding at most `limit` tokens, clamped to [`MAX_TOKENS`]
    pub fn with_limit(limit: usize) -> Self {
        TokenStream {
            tokens: Vec::new(),
            limit: limit.min(MAX_TOKENS),
            cursor: None,
        }
    }

    /// Appends a token, failing once the stream is full
    pub fn push(&mut self, token: Token) -> Result<()> {
        if self.tokens.len() == self.limit {
            return Err(Error::CapacityExceeded { limit: self.limit });
        }
        self.tokens.push(token);
        Ok(())
    }

    /// Points the cursor at the first token
    pub fn reset(&mut self) {
        self.cursor = Some(0);
    }

    /// Returns the token under the cursor
    pub fn current(&self) -> Result<&Token> {
        match self.cursor {
            Some(pos) if pos < self.tokens.len() => Ok(&self.tokens[pos]),
            position => Err(Error::CursorOutOfRange {
                position,
                len: self.tokens.len(),
            }),
        }
    }

    /// Moves the cursor one token forward and returns the token there
    pub fn advance(&mut self) -> Result<&Token> {
        let next = match self.cursor {
            Some(pos) => pos + 1,
            None => {
                return Err(Error::CursorOutOfRange {
                    position: None,
                    len: self.tokens.len(),
                })
            }
        };
        self.cursor = Some(next);
        self.current()
    }

    /// Returns the token after the cursor without moving
    pub fn peek_next(&self) -> Option<&Token> {
        self.cursor.and_then(|pos| self.tokens.get(pos + 1))
    }

    /// Cursor position, `None` while unset
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of tokens held
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no tokens were pushed
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in source order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the stream, returning its tokens
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl Default for TokenStream {
    fn default() -> Self {
        Self::new()
    }
}
