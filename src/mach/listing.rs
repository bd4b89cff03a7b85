use super::{Address, Chunk, Opcode, Val};
use std::convert::TryFrom;

/// One decoded instruction, or the undecodable byte found in its place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    Constant { index: u8, val: Option<Val> },
    Simple(Opcode),
    Truncated(Opcode),
    Unknown(u8),
    End,
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Instruction::*;
        match self {
            Constant {
                index,
                val: Some(val),
            } => write!(f, "{:<16} {:4} '{}'", Opcode::Constant, index, val),
            Constant { index, val: None } => {
                write!(f, "{:<16} {:4} <missing>", Opcode::Constant, index)
            }
            Simple(opcode) => write!(f, "{}", opcode),
            Truncated(opcode) => write!(f, "{:<16} <truncated>", opcode),
            Unknown(byte) => write!(f, "Unknown opcode {}", byte),
            End => write!(f, "<end>"),
        }
    }
}

/// Decodes the instruction at `addr` the same way the runtime reads it.
/// Returns the instruction and the address of the next one.
pub fn decode(chunk: &Chunk, addr: Address) -> (Instruction, Address) {
    let byte = match chunk.byte(addr) {
        Some(byte) => byte,
        None => return (Instruction::End, addr),
    };
    match Opcode::try_from(byte) {
        Err(byte) => (Instruction::Unknown(byte), addr + 1),
        Ok(Opcode::Constant) => match chunk.byte(addr + 1) {
            Some(index) => (
                Instruction::Constant {
                    index,
                    val: chunk.constant(index as usize),
                },
                addr + 2,
            ),
            None => (Instruction::Truncated(Opcode::Constant), addr + 1),
        },
        Ok(opcode) => (Instruction::Simple(opcode), addr + 1 + opcode.operand_len()),
    }
}

/// ## Bytecode listing
///
/// Walks a chunk from offset 0 yielding `(offset, instruction)` pairs.

#[derive(Debug, Clone)]
pub struct Listing<'a> {
    chunk: &'a Chunk,
    addr: Address,
}

impl<'a> Listing<'a> {
    pub fn new(chunk: &'a Chunk) -> Listing<'a> {
        Listing { chunk, addr: 0 }
    }

    pub fn disassemble(chunk: &Chunk, name: &str) -> String {
        let mut s = format!("== {} ==\n", name);
        for (addr, instruction) in Listing::new(chunk) {
            s.push_str(&format!("{:04} {}\n", addr, instruction));
        }
        s
    }
}

impl<'a> Iterator for Listing<'a> {
    type Item = (Address, Instruction);

    fn next(&mut self) -> Option<Self::Item> {
        let addr = self.addr;
        match decode(self.chunk, addr) {
            (Instruction::End, _) => None,
            (instruction, next) => {
                self.addr = next;
                Some((addr, instruction))
            }
        }
    }
}
