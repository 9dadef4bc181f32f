use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level form recognised by the parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// Variable assignment: `(= type name value)`
    Assignment(Assignment),
    /// Any other form; translates to nothing
    Unsupported,
}

/// Typed variable assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Declared type, e.g. `int`
    pub ty: String,
    /// Variable name
    pub name: String,
    /// Value text, normally a single digit
    pub value: String,
}

impl Assignment {
    /// Creates an assignment from its three parts
    pub fn new(ty: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Assignment {
            ty: ty.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assignment(a) => write!(f, "(= {} {} {})", a.ty, a.name, a.value),
            Statement::Unsupported => write!(f, "<unsupported>"),
        }
    }
}
