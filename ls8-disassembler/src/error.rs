//! Disassembler errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisassemblerError {
    #[error("Unknown opcode: 0x{0:02X}")]
    UnknownOpcode(u8),

    #[error("Invalid register operand: {0} (valid range: 0-7)")]
    InvalidRegister(u8),

    #[error("Truncated instruction 0x{opcode:02X}: needs {needed} bytes, {available} available")]
    Truncated {
        opcode: u8,
        needed: usize,
        available: usize,
    },

    #[error("Empty instruction stream")]
    Empty,
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
