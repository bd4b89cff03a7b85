use nyx::lang::ErrorCode;
use nyx::mach::{Chunk, Opcode, Runtime, STACK_MAX};

fn hand_built(bytes: &[u8], constants: &[f64]) -> Chunk {
    let mut chunk = Chunk::new();
    for val in constants {
        chunk.add_constant(*val);
    }
    for byte in bytes {
        chunk.write(*byte);
    }
    chunk
}

#[test]
fn test_invalid_opcode_faults() {
    for byte in 7..=255u8 {
        let chunk = hand_built(&[Opcode::Constant as u8, 0, byte, Opcode::Return as u8], &[1.0]);
        let fault = nyx::run(&chunk).unwrap_err();
        assert_eq!(fault.code(), ErrorCode::UnknownOpcode);
        assert!(fault.is_fault());
        assert_eq!(fault.offset(), Some(2));
    }
}

#[test]
fn test_return_on_empty_stack() {
    let chunk = hand_built(&[Opcode::Return as u8], &[]);
    assert_eq!(
        nyx::run(&chunk).unwrap_err().code(),
        ErrorCode::StackUnderflow
    );
}

#[test]
fn test_negate_on_empty_stack() {
    let chunk = hand_built(&[Opcode::Negate as u8, Opcode::Return as u8], &[]);
    assert_eq!(
        nyx::run(&chunk).unwrap_err().code(),
        ErrorCode::StackUnderflow
    );
}

#[test]
fn test_stack_overflow() {
    let mut bytes = vec![];
    for _ in 0..STACK_MAX + 1 {
        bytes.push(Opcode::Constant as u8);
        bytes.push(0);
    }
    bytes.push(Opcode::Return as u8);
    let chunk = hand_built(&bytes, &[2.0]);
    assert_eq!(
        nyx::run(&chunk).unwrap_err().code(),
        ErrorCode::StackOverflow
    );
}

#[test]
fn test_full_stack_is_allowed() {
    let mut bytes = vec![];
    for _ in 0..STACK_MAX {
        bytes.push(Opcode::Constant as u8);
        bytes.push(0);
    }
    for _ in 1..STACK_MAX {
        bytes.push(Opcode::Add as u8);
    }
    bytes.push(Opcode::Return as u8);
    let chunk = hand_built(&bytes, &[2.0]);
    assert_eq!(nyx::run(&chunk).unwrap(), 2.0 * STACK_MAX as f64);
}

#[test]
fn test_return_ignores_trailing_code() {
    let chunk = hand_built(&[Opcode::Constant as u8, 0, Opcode::Return as u8, 250], &[5.0]);
    assert_eq!(nyx::run(&chunk).unwrap(), 5.0);
}

#[test]
fn test_fault_then_success_on_same_runtime() {
    let mut runtime = Runtime::default();
    let bad = hand_built(&[Opcode::Constant as u8, 9, Opcode::Return as u8], &[1.0]);
    assert_eq!(
        runtime.run(&bad).unwrap_err().code(),
        ErrorCode::InvalidConstant
    );
    let good = nyx::compile("6 / 3").unwrap();
    assert_eq!(runtime.run(&good).unwrap(), 2.0);
}
