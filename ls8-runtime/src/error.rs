//! Runtime error types for LS-8

use ls8_spec::{Ls8Error, Opcode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    SpecError(#[from] Ls8Error),

    #[error("Unknown opcode {opcode:#04x} at PC {pc:#04x}")]
    UnknownOpcode { opcode: u8, pc: usize },

    #[error("Unsupported ALU operation: {0}")]
    UnsupportedOperation(Opcode),

    #[error("Memory out of bounds: address {address:#x}")]
    OutOfBounds { address: usize },

    #[error("Register index out of range: {index} (valid range: 0-7)")]
    InvalidRegister { index: u8 },

    #[error("Stack overflow: push with SP at {sp:#04x}")]
    StackOverflow { sp: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of runtime failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedOperation,
    OutOfRangeAccess,
    UnknownOpcode,
    Io,
}

impl RuntimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::UnknownOpcode { .. } | RuntimeError::SpecError(Ls8Error::InvalidOpcode(_)) => {
                ErrorKind::UnknownOpcode
            }
            RuntimeError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            RuntimeError::OutOfBounds { .. }
            | RuntimeError::InvalidRegister { .. }
            | RuntimeError::StackOverflow { .. }
            | RuntimeError::SpecError(_) => ErrorKind::OutOfRangeAccess,
            RuntimeError::Io(_) => ErrorKind::Io,
        }
    }

    /// Check if this error stopped the machine on undefined state
    ///
    /// Everything except a failed output write is fatal; the machine is not
    /// resumable after a fatal error.
    pub fn is_fatal(&self) -> bool {
        self.kind() != ErrorKind::Io
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
