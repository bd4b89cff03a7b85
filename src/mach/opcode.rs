use std::convert::TryFrom;

/// ## Virtual machine instruction set
///
/// The Nyx virtual machine has no registers.
/// Every operation is performed on the stack.
///
/// For example: `1 + 2 * 3` compiles to
/// `[CONSTANT 0, CONSTANT 1, CONSTANT 2, MUL, ADD, RETURN]`
///
/// Each opcode is a single byte. `CONSTANT` is followed by one operand
/// byte indexing the chunk's constant pool.

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Constant = 0,
    Negate = 1,
    Add = 2,
    Sub = 3,
    Mul = 4,
    Div = 5,
    Return = 6,
}

impl Opcode {
    pub fn name(self) -> &'static str {
        use Opcode::*;
        match self {
            Constant => "CONSTANT",
            Negate => "NEGATE",
            Add => "ADD",
            Sub => "SUB",
            Mul => "MUL",
            Div => "DIV",
            Return => "RETURN",
        }
    }

    /// Number of operand bytes following the opcode.
    pub fn operand_len(self) -> usize {
        match self {
            Opcode::Constant => 1,
            _ => 0,
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        opcode as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        use Opcode::*;
        match byte {
            0 => Ok(Constant),
            1 => Ok(Negate),
            2 => Ok(Add),
            3 => Ok(Sub),
            4 => Ok(Mul),
            5 => Ok(Div),
            6 => Ok(Return),
            _ => Err(byte),
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_conversion() {
        for byte in 0..=6u8 {
            let opcode = Opcode::try_from(byte).unwrap();
            assert_eq!(u8::from(opcode), byte);
        }
        assert_eq!(Opcode::try_from(7), Err(7));
        assert_eq!(Opcode::try_from(255), Err(255));
    }

    #[test]
    fn test_operand_len() {
        assert_eq!(Opcode::Constant.operand_len(), 1);
        assert_eq!(Opcode::Div.operand_len(), 0);
    }
}
