//! Memory subsystem
//!
//! 256 bytes, zero-initialized, shared by code, data and stack. Every
//! access is bounds-checked; nothing wraps.

use ls8_spec::{Program, MAX_INSTRUCTION_WIDTH, MEMORY_SIZE, PROGRAM_BASE};
use crate::error::{Result, RuntimeError};

#[derive(Clone)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            cells: [0; MEMORY_SIZE],
        }
    }

    #[inline]
    pub fn read(&self, address: usize) -> Result<u8> {
        self.cells
            .get(address)
            .copied()
            .ok_or(RuntimeError::OutOfBounds { address })
    }

    #[inline]
    pub fn write(&mut self, address: usize, value: u8) -> Result<()> {
        let cell = self
            .cells
            .get_mut(address)
            .ok_or(RuntimeError::OutOfBounds { address })?;
        *cell = value;
        Ok(())
    }

    /// Instruction fetch window at `pc`: the opcode byte plus up to two
    /// operand bytes, cut short at the end of memory
    ///
    /// Only the opcode read is checked here; whether the instruction
    /// actually needs the missing operand bytes is the decoder's call.
    pub fn fetch(&self, pc: usize) -> Result<&[u8]> {
        self.read(pc)?;
        let end = (pc + MAX_INSTRUCTION_WIDTH).min(MEMORY_SIZE);
        Ok(&self.cells[pc..end])
    }

    /// Copy a program image to [`PROGRAM_BASE`]
    pub fn load_program(&mut self, program: &Program) {
        let code = program.as_bytes();
        self.cells[PROGRAM_BASE..PROGRAM_BASE + code.len()].copy_from_slice(code);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("nonzero_cells", &used)
            .finish()
    }
}
