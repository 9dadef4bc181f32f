//! # lispv Compiler - S-expressions to C
//!
//! ## Architecture
//!
//! ```text
//! Source → Scanner → TokenStream → AssignmentParser → Statement → CEmitter → C text
//! ```
//!
//! ## Usage
//!
//! ```
//! use lispv::compiler::{CompileOptions, Compiler};
//!
//! let compiler = Compiler::new(CompileOptions::default());
//! let result = compiler.compile("(= int x 5)")?;
//! assert_eq!(result.output, "int x = 5;");
//! # Ok::<(), lispv::Error>(())
//! ```

use crate::emitter::CEmitter;
use crate::error::{Result, Warning};
use crate::lexer::{SExprScanner, Token};
use crate::parser::{AssignmentParser, Statement, MAX_TOKENS};

/// Compilation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Reject a non-digit value and require the closing `)`
    pub strict: bool,
    /// Token cap, clamped to [`MAX_TOKENS`]
    pub max_tokens: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_tokens: MAX_TOKENS,
        }
    }
}

impl CompileOptions {
    /// Options with strict checking enabled
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// Compilation result with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct CompileResult {
    /// Emitted C text, empty for unsupported input
    pub output: String,
    /// The recognised statement
    pub statement: Statement,
    /// Tokens produced by the scanner
    pub tokens: Vec<Token>,
    /// Warnings generated during compilation
    pub warnings: Vec<Warning>,
}

/// lispv to C compiler
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    /// Create a new compiler with options
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Options this compiler was created with
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile lispv source to C text
    pub fn compile(&self, source: &str) -> Result<CompileResult> {
        let stream = SExprScanner::with_limit(source, self.options.max_tokens).scan_tokens()?;

        let mut parser = if self.options.strict {
            AssignmentParser::strict(stream)
        } else {
            AssignmentParser::new(stream)
        };
        let parsed = parser.parse()?;

        let output = CEmitter::new().emit(&parsed.statement);
        tracing::debug!(%output, warnings = parsed.warnings.len(), "compiled");

        Ok(CompileResult {
            output,
            statement: parsed.statement,
            tokens: parser.into_stream().into_tokens(),
            warnings: parsed.warnings,
        })
    }
}

/// Compile with default options
pub fn compile(source: &str) -> Result<CompileResult> {
    Compiler::default().compile(source)
}
