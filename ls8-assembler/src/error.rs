//! Assembler and loader errors

use ls8_spec::Ls8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Line {line}: malformed program byte {text:?} (expected 8 binary digits)")]
    MalformedLine { line: usize, text: String },

    #[error("Line {line}: unknown instruction {instruction}")]
    UnknownInstruction { line: usize, instruction: String },

    #[error("Line {line}: {mnemonic} expects {expected} operands, found {found}")]
    OperandCount {
        line: usize,
        mnemonic: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid register {name}")]
    InvalidRegister { line: usize, name: String },

    #[error("Line {line}: invalid immediate value {value} (expected 0-255)")]
    InvalidImmediate { line: usize, value: String },

    #[error("Line {line}: undefined label {label}")]
    UndefinedLabel { line: usize, label: String },

    #[error("Line {line}: duplicate label {label}")]
    DuplicateLabel { line: usize, label: String },

    #[error("{0}")]
    Spec(#[from] Ls8Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AssemblerError {
    /// Source line the error points at, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            AssemblerError::SyntaxError { line, .. }
            | AssemblerError::MalformedLine { line, .. }
            | AssemblerError::UnknownInstruction { line, .. }
            | AssemblerError::OperandCount { line, .. }
            | AssemblerError::InvalidRegister { line, .. }
            | AssemblerError::InvalidImmediate { line, .. }
            | AssemblerError::UndefinedLabel { line, .. }
            | AssemblerError::DuplicateLabel { line, .. } => Some(*line),
            AssemblerError::Spec(_) | AssemblerError::IoError(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
