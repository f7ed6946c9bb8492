//! Instruction execution for LS-8

use ls8_spec::Instruction;
use tracing::warn;

use crate::alu;
use crate::error::{Result, RuntimeError};
use crate::io::IOHandler;
use crate::state::{HaltReason, VMState};

/// Execute a single decoded instruction
///
/// Advances `pc` by the instruction width unless the instruction transfers
/// control or halts. On error the state is left as it was before the
/// instruction.
pub fn execute(instr: &Instruction, state: &mut VMState, io: &mut IOHandler) -> Result<()> {
    let pc = state.registers.pc();

    match *instr {
        Instruction::Hlt => {
            state.halt(HaltReason::Halt);
            return Ok(());
        }

        Instruction::Iret => {
            warn!(pc, "IRET executed as a no-op");
        }

        Instruction::Ldi { reg, imm } => {
            state.registers.set(reg, imm);
        }

        Instruction::Prn { reg } => {
            io.write(state.registers.get(reg))?;
        }

        Instruction::Add { ra, rb } | Instruction::Mul { ra, rb } => {
            alu::apply(instr.opcode(), ra, rb, &mut state.registers)?;
        }

        Instruction::Push { reg } => {
            let value = state.registers.get(reg);
            push(state, value)?;
        }

        Instruction::Pop { reg } => {
            let value = pop(state)?;
            state.registers.set(reg, value);
        }

        Instruction::Call { reg } => {
            let return_addr = pc + instr.width();
            let encoded = u8::try_from(return_addr)
                .map_err(|_| RuntimeError::OutOfBounds { address: return_addr })?;
            push(state, encoded)?;
            state.registers.set_pc(state.registers.get(reg) as usize);
        }

        Instruction::Ret => {
            let target = pop(state)?;
            state.registers.set_pc(target as usize);
        }
    }

    if !instr.opcode().sets_pc() {
        state.registers.set_pc(pc + instr.width());
    }
    Ok(())
}

/// `sp -= 1; mem[sp] = value`
fn push(state: &mut VMState, value: u8) -> Result<()> {
    let sp = state.registers.sp();
    let new_sp = sp
        .checked_sub(1)
        .ok_or(RuntimeError::StackOverflow { sp })?;
    state.memory.write(new_sp, value)?;
    state.registers.set_sp(new_sp);
    Ok(())
}

/// `value = mem[sp]; sp += 1`
fn pop(state: &mut VMState) -> Result<u8> {
    let sp = state.registers.sp();
    let value = state.memory.read(sp)?;
    state.registers.set_sp(sp + 1);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ls8_spec::Register;

    fn run_one(instr: Instruction, state: &mut VMState) -> Result<()> {
        let mut io = IOHandler::new();
        execute(&instr, state, &mut io)
    }

    #[test]
    fn test_ldi_advances_three() {
        let mut state = VMState::new();
        run_one(Instruction::Ldi { reg: Register::R2, imm: 42 }, &mut state).unwrap();
        assert_eq!(state.registers.get(Register::R2), 42);
        assert_eq!(state.registers.pc(), 3);
    }

    #[test]
    fn test_prn_writes_output() {
        let mut state = VMState::new();
        state.registers.set(Register::R1, 99);
        let mut io = IOHandler::new();
        execute(&Instruction::Prn { reg: Register::R1 }, &mut state, &mut io).unwrap();
        assert_eq!(io.outputs(), &[99]);
        assert_eq!(state.registers.pc(), 2);
    }

    #[test]
    fn test_prn_sink_failure_leaves_state() {
        struct Closed;

        impl std::io::Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut state = VMState::new();
        state.registers.set(Register::R1, 99);
        let mut io = IOHandler::with_sink(Closed);
        let err = execute(&Instruction::Prn { reg: Register::R1 }, &mut state, &mut io).unwrap_err();
        assert!(matches!(err, RuntimeError::Io(_)));
        assert!(io.outputs().is_empty());
        assert_eq!(state.registers.pc(), 0);
    }

    #[test]
    fn test_hlt_does_not_advance() {
        let mut state = VMState::new();
        run_one(Instruction::Hlt, &mut state).unwrap();
        assert!(state.is_halted());
        assert_eq!(state.registers.pc(), 0);
    }

    #[test]
    fn test_iret_is_noop() {
        let mut state = VMState::new();
        state.registers.set(Register::R0, 7);
        run_one(Instruction::Iret, &mut state).unwrap();
        assert_eq!(state.registers.pc(), 1);
        assert_eq!(state.registers.sp(), 0xF4);
        assert_eq!(state.registers.get(Register::R0), 7);
    }

    #[test]
    fn test_push_pop() {
        let mut state = VMState::new();
        state.registers.set(Register::R0, 0xAB);
        run_one(Instruction::Push { reg: Register::R0 }, &mut state).unwrap();
        assert_eq!(state.registers.sp(), 0xF3);
        assert_eq!(state.memory.read(0xF3).unwrap(), 0xAB);

        run_one(Instruction::Pop { reg: Register::R5 }, &mut state).unwrap();
        assert_eq!(state.registers.get(Register::R5), 0xAB);
        assert_eq!(state.registers.sp(), 0xF4);
        assert_eq!(state.registers.pc(), 4);
    }

    #[test]
    fn test_push_at_zero_overflows() {
        let mut state = VMState::new();
        state.registers.set_sp(0);
        let err = run_one(Instruction::Push { reg: Register::R0 }, &mut state).unwrap_err();
        assert!(matches!(err, RuntimeError::StackOverflow { sp: 0 }));
        assert_eq!(state.registers.sp(), 0);
        assert_eq!(state.registers.pc(), 0);
    }

    #[test]
    fn test_pop_past_end_of_memory() {
        let mut state = VMState::new();
        state.registers.set_sp(256);
        let err = run_one(Instruction::Pop { reg: Register::R0 }, &mut state).unwrap_err();
        assert!(matches!(err, RuntimeError::OutOfBounds { address: 256 }));
    }

    #[test]
    fn test_call_and_ret() {
        let mut state = VMState::new();
        state.registers.set_pc(10);
        state.registers.set(Register::R1, 0x40);

        run_one(Instruction::Call { reg: Register::R1 }, &mut state).unwrap();
        assert_eq!(state.registers.pc(), 0x40);
        assert_eq!(state.registers.sp(), 0xF3);
        assert_eq!(state.memory.read(0xF3).unwrap(), 12);

        run_one(Instruction::Ret, &mut state).unwrap();
        assert_eq!(state.registers.pc(), 12);
        assert_eq!(state.registers.sp(), 0xF4);
    }

    #[test]
    fn test_call_return_address_out_of_range() {
        let mut state = VMState::new();
        state.registers.set_pc(255);
        let err = run_one(Instruction::Call { reg: Register::R0 }, &mut state).unwrap_err();
        assert!(matches!(err, RuntimeError::OutOfBounds { address: 257 }));
        assert_eq!(state.registers.sp(), 0xF4);
    }

    #[test]
    fn test_alu_dispatch() {
        let mut state = VMState::new();
        state.registers.set(Register::R0, 3);
        state.registers.set(Register::R1, 4);
        run_one(Instruction::Mul { ra: Register::R0, rb: Register::R1 }, &mut state).unwrap();
        assert_eq!(state.registers.get(Register::R0), 12);
        run_one(Instruction::Add { ra: Register::R0, rb: Register::R1 }, &mut state).unwrap();
        assert_eq!(state.registers.get(Register::R0), 16);
        assert_eq!(state.registers.pc(), 6);
    }
}
