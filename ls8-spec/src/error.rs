//! # Error Types for LS-8

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Ls8Error {
    // Instruction errors
    #[error("Invalid opcode: {0:#04x}")]
    InvalidOpcode(u8),

    #[error("Invalid register index: {0} (valid range: 0-7)")]
    InvalidRegister(u8),

    #[error("Unknown mnemonic: {0}")]
    UnknownMnemonic(String),

    // Program image errors
    #[error("Program too large: {size} bytes exceeds {max} bytes of memory")]
    ProgramTooLarge { size: usize, max: usize },
}

impl Ls8Error {
    /// Check if this error can only arise while executing (as opposed to loading)
    pub fn is_fatal(&self) -> bool {
        matches!(self, Ls8Error::InvalidOpcode(_) | Ls8Error::InvalidRegister(_))
    }
}
