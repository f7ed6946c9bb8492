//! # LS-8 Specification
//!
//! 8-bit register machine with a 256-byte linear address space.
//!
//! ## Key Features
//! - 8 general-purpose byte registers (R0-R7)
//! - 256 bytes of memory shared by code, data and stack
//! - Variable width instructions: opcode byte plus 0-2 operand bytes
//! - Downward-growing stack starting at `0xF4`
//! - Von Neumann layout: programs load at address 0

pub mod error;
pub mod opcode;
pub mod register;
pub mod instruction;
pub mod program;

pub use error::Ls8Error;
pub use opcode::Opcode;
pub use register::{Register, NUM_REGISTERS};
pub use instruction::Instruction;
pub use program::Program;

/// Total addressable memory in bytes
pub const MEMORY_SIZE: usize = 256;

/// Initial stack pointer; the stack grows down from here
pub const STACK_TOP: u8 = 0xF4;

/// Address the program image is loaded at
pub const PROGRAM_BASE: usize = 0;

/// Maximum instruction width in bytes (opcode + two operands)
pub const MAX_INSTRUCTION_WIDTH: usize = 3;
