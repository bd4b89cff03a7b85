/*!
## Rust Machine Module

This Rust module holds the bytecode container and the stack virtual
machine that executes it.

*/

pub type Address = usize;
pub type Val = f64;

mod chunk;
mod listing;
mod opcode;
mod runtime;
mod stack;

pub use chunk::Chunk;
pub use listing::decode;
pub use listing::Instruction;
pub use listing::Listing;
pub use opcode::Opcode;
pub use runtime::Runtime;
pub use runtime::STACK_MAX;
pub use stack::Stack;
