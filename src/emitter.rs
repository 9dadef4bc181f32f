//! # C Code Emitter
//!
//! Renders a parsed [`Statement`] as C source text. Emission is a pure
//! function of the statement.

use crate::parser::{Assignment, Statement};

/// C code emitter
#[derive(Debug, Default, Clone, Copy)]
pub struct CEmitter;

impl CEmitter {
    /// Creates a new C emitter
    pub fn new() -> Self {
        CEmitter
    }

    /// Emit C code for a statement; unsupported forms produce no text
    pub fn emit(&self, statement: &Statement) -> String {
        let mut output = String::new();
        if let Statement::Assignment(assignment) = statement {
            self.emit_assignment(assignment, &mut output);
        }
        output
    }

    fn emit_assignment(&self, assignment: &Assignment, output: &mut String) {
        // No trailing newline
        output.push_str(&format!(
            "{} {} = {};",
            assignment.ty, assignment.name, assignment.value
        ));
    }
}
