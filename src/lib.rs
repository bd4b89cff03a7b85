//! # Nyx
//!
//! A small language front end and executor. Arithmetic source text is
//! compiled in a single pass into compact bytecode, which then runs on a
//! stack machine.
//!
//! ```
//! let chunk = nyx::compile("(2 + 3) * 4").unwrap();
//! assert_eq!(nyx::run(&chunk).unwrap(), 20.0);
//! ```
//!
//! Running the `nyx` executable without arguments opens a prompt that
//! evaluates one expression per line. Given a path it evaluates the file.

pub mod lang;
pub mod mach;
pub mod term;

use lang::Error;
use mach::{Chunk, Runtime, Val};

/// Compiles `source` into a fresh chunk, or returns every diagnostic found.
pub fn compile(source: &str) -> Result<Chunk, Vec<Error>> {
    let mut chunk = Chunk::new();
    lang::compile_into(source, &mut chunk)?;
    Ok(chunk)
}

/// Runs `chunk` on a new runtime.
pub fn run(chunk: &Chunk) -> Result<Val, Error> {
    Runtime::new().run(chunk)
}
