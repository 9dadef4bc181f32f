//! Lexical analysis for lispv
//!
//! Converts source text into a bounded stream of tokens.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::SExprScanner;
pub use token::{format_tokens, Token, TokenKind, MAX_LEXEME_LEN};
