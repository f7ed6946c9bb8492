//! # LS-8 Disassembler
//!
//! Decode LS-8 machine code into [`Instruction`]s and render it as
//! human-readable assembly.
//!
//! The runtime uses [`decode`] as its dispatch table: one lookup per
//! fetched opcode byte, with unknown bytes surfacing as
//! [`DisassemblerError::UnknownOpcode`].
//!
//! ## Example
//!
//! ```rust
//! use ls8_spec::Program;
//! use ls8_disassembler::disassemble;
//!
//! let program = Program::from_bytes(vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
//! let asm = disassemble(&program).unwrap();
//! assert!(asm.contains("LDI R0, 8"));
//! ```
//!
//! [`Instruction`]: ls8_spec::Instruction

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::disassemble;
pub use decoder::decode;
pub use formatter::{format, format_trace};
