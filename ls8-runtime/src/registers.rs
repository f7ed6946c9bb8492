//! Register file: R0-R7, program counter, stack pointer and flags

use ls8_spec::{Register, NUM_REGISTERS, STACK_TOP};
use crate::error::{Result, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
    pc: usize,
    sp: usize,
    /// Reserved for comparison results; no instruction touches it yet
    fl: bool,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
            pc: 0,
            sp: STACK_TOP as usize,
            fl: false,
        }
    }

    /// Read a register by raw index
    pub fn read(&self, index: u8) -> Result<u8> {
        self.regs
            .get(index as usize)
            .copied()
            .ok_or(RuntimeError::InvalidRegister { index })
    }

    /// Write a register by raw index
    pub fn write(&mut self, index: u8, value: u8) -> Result<()> {
        let slot = self
            .regs
            .get_mut(index as usize)
            .ok_or(RuntimeError::InvalidRegister { index })?;
        *slot = value;
        Ok(())
    }

    #[inline]
    pub fn get(&self, reg: Register) -> u8 {
        self.regs[reg.index()]
    }

    #[inline]
    pub fn set(&mut self, reg: Register, value: u8) {
        self.regs[reg.index()] = value;
    }

    #[inline]
    pub fn pc(&self) -> usize {
        self.pc
    }

    #[inline]
    pub fn set_pc(&mut self, pc: usize) {
        self.pc = pc;
    }

    #[inline]
    pub fn sp(&self) -> usize {
        self.sp
    }

    #[inline]
    pub fn set_sp(&mut self, sp: usize) {
        self.sp = sp;
    }

    pub fn flags(&self) -> bool {
        self.fl
    }

    /// Copy of R0-R7
    pub fn snapshot(&self) -> [u8; NUM_REGISTERS] {
        self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
