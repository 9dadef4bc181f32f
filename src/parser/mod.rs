//! lispv Parser Module
//!
//! Walks a bounded token stream and recognises the assignment form.

mod assignment_parser;
mod ast;
mod token_stream;

pub use assignment_parser::{AssignmentParser, Parsed};
pub use ast::{Assignment, Statement};
pub use token_stream::{TokenStream, MAX_TOKENS};
