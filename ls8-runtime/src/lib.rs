//! # LS-8 Runtime
//!
//! Fetch-decode-execute engine for LS-8 programs.
//!
//! ## Features
//!
//! - **Memory**: 256 bounds-checked bytes holding code, data and stack
//! - **Register file**: R0-R7, PC, SP (starts at `0xF4`) and a flags cell
//! - **ALU**: ADD and MUL, wrapping at 8 bits
//! - **Stack**: PUSH, POP, CALL and RET on a downward-growing stack
//! - **Cycle limit**: optional, for hosts that need to bound execution
//!
//! ## Example
//!
//! ```rust
//! use ls8_runtime::{VM, VMConfig};
//! use ls8_spec::Program;
//!
//! let program = Program::from_bytes(vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
//! let vm = VM::new(program, VMConfig::default());
//! let result = vm.run().unwrap();
//! assert_eq!(result.outputs, vec![8]);
//! ```

pub mod error;
pub mod memory;
pub mod registers;
pub mod alu;
pub mod state;
pub mod io;
pub mod execute;
pub mod vm;

pub use error::{ErrorKind, Result, RuntimeError};
pub use memory::Memory;
pub use registers::RegisterFile;
pub use state::{HaltReason, VMState};
pub use io::IOHandler;
pub use execute::execute;
pub use vm::{ExecutionResult, VMConfig, VM};

/// Simple execution helper
///
/// Runs a program to completion and returns the printed values.
pub fn run(program: ls8_spec::Program) -> Result<Vec<u8>> {
    let vm = VM::new(program, VMConfig::default());
    Ok(vm.run()?.outputs)
}
