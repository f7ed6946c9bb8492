//! LS-8 Assembler
//!
//! Two front ends that both produce a [`Program`] image:
//!
//! - [`load_image`]: the `.ls8` format, one binary byte literal per line
//! - [`assemble`]: mnemonic assembly (`LDI R0, 8`) with labels
//!
//! ## Example
//!
//! ```rust
//! use ls8_assembler::{assemble, load_image};
//!
//! let from_text = assemble("LDI R0, 8\nPRN R0\nHLT").unwrap();
//! let from_image = load_image("10000010\n00000000\n00001000\n01000111\n00000000\n00000001").unwrap();
//! assert_eq!(from_text, from_image);
//! ```
//!
//! [`Program`]: ls8_spec::Program

pub mod error;
pub mod lexer;
pub mod parser;
pub mod encoder;
pub mod assembler;
pub mod loader;

pub use error::{AssemblerError, Result};
pub use assembler::assemble;
pub use parser::{parse_instruction, parse_register};
pub use encoder::{encode, encode_program};
pub use loader::{load_image, load_image_file};
