use super::{Address, Opcode, Val};

const CODE_CAPACITY: usize = 4;
const CONSTANTS_CAPACITY: usize = 8;

/// ## Bytecode container
///
/// An append-only instruction stream paired with an append-only constant
/// pool. Nothing is ever removed or reordered, so constant indices stay
/// valid for the lifetime of the chunk.

#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    code: Vec<u8>,
    constants: Vec<Val>,
}

impl Default for Chunk {
    fn default() -> Chunk {
        Chunk::new()
    }
}

impl Chunk {
    pub fn new() -> Chunk {
        Chunk {
            code: Vec::with_capacity(CODE_CAPACITY),
            constants: Vec::with_capacity(CONSTANTS_CAPACITY),
        }
    }

    pub fn write(&mut self, byte: u8) {
        self.code.push(byte)
    }

    pub fn write_opcode(&mut self, opcode: Opcode) {
        self.write(opcode.into())
    }

    /// Returns the index of the new constant. The caller decides whether
    /// the index fits in an operand byte.
    pub fn add_constant(&mut self, val: Val) -> usize {
        self.constants.push(val);
        self.constants.len() - 1
    }

    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn byte(&self, addr: Address) -> Option<u8> {
        self.code.get(addr).copied()
    }

    pub fn constants(&self) -> &[Val] {
        &self.constants
    }

    pub fn constant(&self, index: usize) -> Option<Val> {
        self.constants.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}
