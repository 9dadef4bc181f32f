//! # lispv - S-expression assignments to C
//!
//! Translates a single typed variable assignment written as an S-expression
//! into a C declaration.
//!
//! ```text
//! (= int x 5)   →   int x = 5;
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use lispv::{AssignmentParser, CEmitter, Scanner};
//!
//! # fn main() -> lispv::Result<()> {
//! // Tokenize (scan)
//! let stream = Scanner::new("(= int x 5)").scan_tokens()?;
//!
//! // Parse
//! let parsed = AssignmentParser::new(stream).parse()?;
//!
//! // Emit
//! assert_eq!(CEmitter::new().emit(&parsed.statement), "int x = 5;");
//! # Ok(())
//! # }
//! ```
//!
//! ## Language
//!
//! - `(` and `)` delimit the form; the closing `)` is not checked
//! - `=` is the only recognised head (`:=` also works, the `:` is skipped)
//! - symbols are runs of ASCII letters, truncated to 15 characters
//! - integers are single digits
//! - every other character is ignored
//!
//! Any other top-level form translates to nothing. A symbol where a type or
//! name belongs is an error; a non-digit value is only a warning and its
//! text is emitted verbatim.
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → TokenStream → AssignmentParser → Statement → CEmitter → C
//! ```

pub mod compiler;
pub mod emitter;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;

/// Version of the lispv translator
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export main types
pub use compiler::{compile, CompileOptions, CompileResult, Compiler};
pub use emitter::CEmitter;
pub use error::{AssignField, Error, ErrorSeverity, Result, Warning};
pub use lexer::{format_tokens, SExprScanner, Token, TokenKind};
pub use output::output_path_for;
pub use parser::{Assignment, AssignmentParser, Parsed, Statement, TokenStream, MAX_TOKENS};

/// Type alias for the S-expression scanner (lexer).
pub type Scanner = SExprScanner;
