//! Virtual Machine for LS-8

use std::io::Write;

use ls8_disassembler::{decode, format_trace, DisassemblerError};
use ls8_spec::{Instruction, Program, MAX_INSTRUCTION_WIDTH};
use tracing::{debug, trace};

use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::io::IOHandler;
use crate::state::{HaltReason, VMState};

/// VM configuration
#[derive(Debug, Clone, Default)]
pub struct VMConfig {
    /// Halt with [`HaltReason::CycleLimit`] after this many instructions
    pub max_cycles: Option<u64>,

    /// Emit a `TRACE:` line per instruction at `trace` level
    pub trace: bool,
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Number of instructions executed
    pub cycles: u64,

    /// Values printed by `PRN`, in order
    pub outputs: Vec<u8>,

    pub halt_reason: HaltReason,
}

impl ExecutionResult {
    /// Outputs rendered the way `PRN` prints them: one decimal per line
    pub fn output_text(&self) -> String {
        self.outputs
            .iter()
            .map(|v| format!("{}\n", v))
            .collect()
    }
}

/// LS-8 Virtual Machine
pub struct VM {
    state: VMState,
    io: IOHandler,
    config: VMConfig,
}

impl VM {
    /// Create a VM with `program` loaded at address 0
    pub fn new(program: Program, config: VMConfig) -> Self {
        debug!(
            size = program.len(),
            digest = %program.digest_hex(),
            "loading program"
        );

        Self {
            state: VMState::with_program(&program),
            io: IOHandler::new(),
            config,
        }
    }

    /// Stream `PRN` output to `sink` as it happens
    pub fn with_output(mut self, sink: impl Write + 'static) -> Self {
        self.io = IOHandler::with_sink(sink);
        self
    }

    /// Run until HLT, the cycle limit, or a fatal error
    pub fn run(mut self) -> Result<ExecutionResult> {
        while !self.state.is_halted() {
            if let Some(max) = self.config.max_cycles {
                if self.state.cycles >= max {
                    self.state.halt(HaltReason::CycleLimit);
                    break;
                }
            }

            self.step()?;
        }

        self.io.flush()?;

        let halt_reason = self.state.halt_reason.unwrap_or(HaltReason::Halt);
        debug!(cycles = self.state.cycles, ?halt_reason, "halted");

        Ok(ExecutionResult {
            cycles: self.state.cycles,
            outputs: self.io.take_outputs(),
            halt_reason,
        })
    }

    /// Fetch, decode and execute one instruction
    ///
    /// Does nothing once the machine has halted.
    pub fn step(&mut self) -> Result<()> {
        if self.state.is_halted() {
            return Ok(());
        }

        let inst = self.fetch_and_decode()?;
        execute(&inst, &mut self.state, &mut self.io)?;
        self.state.inc_cycles();
        Ok(())
    }

    /// Fetch the instruction window at `pc` and decode it
    fn fetch_and_decode(&self) -> Result<Instruction> {
        let pc = self.state.registers.pc();
        let window = self.state.memory.fetch(pc)?;

        if self.config.trace {
            let mut fetched = [0u8; MAX_INSTRUCTION_WIDTH];
            fetched[..window.len()].copy_from_slice(window);
            trace!("{}", format_trace(pc, fetched, &self.state.registers.snapshot()));
        }

        decode(window).map_err(|e| match e {
            DisassemblerError::UnknownOpcode(opcode) => RuntimeError::UnknownOpcode { opcode, pc },
            DisassemblerError::InvalidRegister(index) => RuntimeError::InvalidRegister { index },
            DisassemblerError::Truncated { available, .. } => RuntimeError::OutOfBounds {
                address: pc + available,
            },
            DisassemblerError::Empty => RuntimeError::OutOfBounds { address: pc },
        })
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    /// Values printed so far
    pub fn outputs(&self) -> &[u8] {
        self.io.outputs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ls8_spec::Register;

    fn create_program_from_instructions(instructions: Vec<Instruction>) -> Program {
        ls8_assembler::encode_program(&instructions).unwrap()
    }

    fn program(bytes: &[u8]) -> Program {
        Program::from_bytes(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_print8() {
        let vm = VM::new(program(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]), VMConfig::default());
        let result = vm.run().unwrap();
        assert_eq!(result.outputs, vec![8]);
        assert_eq!(result.cycles, 3);
        assert_eq!(result.halt_reason, HaltReason::Halt);
        assert_eq!(result.output_text(), "8\n");
    }

    #[test]
    fn test_from_instructions() {
        let vm = VM::new(
            create_program_from_instructions(vec![
                Instruction::Ldi { reg: Register::R0, imm: 3 },
                Instruction::Ldi { reg: Register::R1, imm: 4 },
                Instruction::Mul { ra: Register::R0, rb: Register::R1 },
                Instruction::Prn { reg: Register::R0 },
                Instruction::Hlt,
            ]),
            VMConfig::default(),
        );
        assert_eq!(vm.run().unwrap().outputs, vec![12]);
    }

    #[test]
    fn test_step_until_halt() {
        let mut vm = VM::new(program(&[0x82, 0x02, 0x05, 0x01]), VMConfig::default());
        vm.step().unwrap();
        assert_eq!(vm.state().registers.get(Register::R2), 5);
        assert_eq!(vm.state().registers.pc(), 3);
        assert!(!vm.state().is_halted());

        vm.step().unwrap();
        assert!(vm.state().is_halted());
        assert_eq!(vm.state().cycles, 2);

        // halted machines stay put
        vm.step().unwrap();
        assert_eq!(vm.state().cycles, 2);
    }

    #[test]
    fn test_unknown_opcode() {
        let mut vm = VM::new(program(&[0x82, 0x00, 0x07, 0xFF]), VMConfig::default());
        vm.step().unwrap();
        let before = vm.state().registers.clone();

        let err = vm.step().unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownOpcode { opcode: 0xFF, pc: 3 }));
        assert_eq!(vm.state().registers, before);
    }

    #[test]
    fn test_empty_program_hits_unknown_opcode() {
        // zeroed memory decodes as opcode 0x00
        let vm = VM::new(Program::new(), VMConfig::default());
        let err = vm.run().unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownOpcode { opcode: 0x00, pc: 0 }));
    }

    #[test]
    fn test_invalid_register_operand() {
        let vm = VM::new(program(&[0x47, 0x08, 0x01]), VMConfig::default());
        let err = vm.run().unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidRegister { index: 8 }));
    }

    #[test]
    fn test_cycle_limit() {
        // LDI R1,0 ; CALL R1 loops back to address 0 forever
        let config = VMConfig {
            max_cycles: Some(10),
            ..Default::default()
        };
        let vm = VM::new(
            program(&[0x82, 0x01, 0x00, 0x50, 0x01]),
            config,
        );
        let result = vm.run().unwrap();
        assert_eq!(result.halt_reason, HaltReason::CycleLimit);
        assert_eq!(result.cycles, 10);
    }

    #[test]
    fn test_trace_does_not_change_result() {
        let config = VMConfig {
            trace: true,
            ..Default::default()
        };
        let vm = VM::new(program(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]), config);
        assert_eq!(vm.run().unwrap().outputs, vec![8]);
    }

    #[test]
    fn test_truncated_instruction_at_end_of_memory() {
        let mut bytes = vec![0u8; 256];
        // LDI R0,0xFE ; CALL R0 lands on an LDI cut off by the end of memory
        bytes[0] = 0x82;
        bytes[1] = 0x00;
        bytes[2] = 0xFE;
        bytes[3] = 0x50;
        bytes[4] = 0x00;
        bytes[0xFE] = 0x82;
        bytes[0xFF] = 0x00;
        let vm = VM::new(Program::from_bytes(bytes).unwrap(), VMConfig::default());
        let err = vm.run().unwrap_err();
        assert!(matches!(err, RuntimeError::OutOfBounds { address: 256 }));
    }
}
