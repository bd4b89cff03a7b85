use super::{listing, Address, Chunk, Opcode, Stack, Val};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use tracing::{trace, Level};

type Result<T> = std::result::Result<T, Error>;

/// Maximum number of values on the VM stack.
pub const STACK_MAX: usize = 256;

/// ## Stack virtual machine
///
/// A `Runtime` may be reused for any number of chunks. The stack and
/// instruction pointer are reset by every call to `run`.

pub struct Runtime {
    ip: Address,
    stack: Stack<Val>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new()
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime {
            ip: 0,
            stack: Stack::new(STACK_MAX),
        }
    }

    /// Executes `chunk` until `RETURN` and yields the popped value.
    /// Faults abort the run and report the offset of the failing opcode.
    pub fn run(&mut self, chunk: &Chunk) -> Result<Val> {
        self.stack.clear();
        self.ip = 0;
        loop {
            let addr = self.ip;
            if tracing::enabled!(Level::TRACE) {
                let (instruction, _) = listing::decode(chunk, addr);
                trace!(stack = ?self.stack, "{:04} {}", addr, instruction);
            }
            match self.step(chunk) {
                Ok(Some(val)) => return Ok(val),
                Ok(None) => {}
                Err(error) => return Err(error.at_offset(addr)),
            }
        }
    }

    fn read_byte(&mut self, chunk: &Chunk) -> Result<u8> {
        match chunk.byte(self.ip) {
            Some(byte) => {
                self.ip += 1;
                Ok(byte)
            }
            None => Err(error!(EndOfChunk; "ran past the last instruction")),
        }
    }

    fn step(&mut self, chunk: &Chunk) -> Result<Option<Val>> {
        let byte = self.read_byte(chunk)?;
        let opcode = match Opcode::try_from(byte) {
            Ok(opcode) => opcode,
            Err(byte) => return Err(error!(UnknownOpcode; format!("byte {}", byte))),
        };
        match opcode {
            Opcode::Constant => {
                let index = self.read_byte(chunk)?;
                match chunk.constant(index as usize) {
                    Some(val) => self.stack.push(val)?,
                    None => {
                        return Err(error!(InvalidConstant; format!("index {}", index)));
                    }
                }
            }
            Opcode::Negate => {
                let val = self.stack.pop()?;
                self.stack.push(-val)?;
            }
            Opcode::Add => self.binary(|a, b| a + b)?,
            Opcode::Sub => self.binary(|a, b| a - b)?,
            Opcode::Mul => self.binary(|a, b| a * b)?,
            Opcode::Div => self.binary(|a, b| a / b)?,
            Opcode::Return => return Ok(Some(self.stack.pop()?)),
        }
        Ok(None)
    }

    fn binary<F: Fn(Val, Val) -> Val>(&mut self, op: F) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(op(lhs, rhs))
    }
}
