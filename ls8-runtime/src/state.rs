//! VM state for LS-8

use ls8_spec::Program;
use crate::memory::Memory;
use crate::registers::RegisterFile;

/// Complete machine state, exclusively owned by one VM
#[derive(Debug, Clone)]
pub struct VMState {
    pub registers: RegisterFile,

    pub memory: Memory,

    /// Instructions executed so far
    pub cycles: u64,

    pub halted: bool,

    pub halt_reason: Option<HaltReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// HLT instruction
    Halt,
    /// Configured cycle limit reached
    CycleLimit,
}

impl VMState {
    /// Fresh machine: zeroed memory and registers, `pc = 0`, `sp = 0xF4`
    pub fn new() -> Self {
        VMState {
            registers: RegisterFile::new(),
            memory: Memory::new(),
            cycles: 0,
            halted: false,
            halt_reason: None,
        }
    }

    /// Fresh machine with `program` loaded at address 0
    pub fn with_program(program: &Program) -> Self {
        let mut state = Self::new();
        state.memory.load_program(program);
        state
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn halt(&mut self, reason: HaltReason) {
        self.halted = true;
        self.halt_reason = Some(reason);
    }

    #[inline]
    pub fn inc_cycles(&mut self) {
        self.cycles += 1;
    }
}

impl Default for VMState {
    fn default() -> Self {
        Self::new()
    }
}
