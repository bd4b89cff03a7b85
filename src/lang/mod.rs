/*!
# Rust Language Module

This Rust module provides lexical analysis of Nyx source text and the
single-pass compiler that turns an expression into bytecode.

*/

pub type Line = usize;
pub type Column = usize;

#[macro_use]
mod error;
mod lex;
mod parse;
mod rule;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::Scanner;
pub use parse::compile_into;
pub use parse::Compiler;
pub use parse::MAX_DEPTH;
pub use rule::{Handler, ParseRule, Precedence};
pub use token::{Token, TokenKind};
