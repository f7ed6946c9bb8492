//! Arithmetic-logic unit
//!
//! Results wrap at 8 bits, the register width.

use ls8_spec::{Opcode, Register};
use crate::error::{Result, RuntimeError};
use crate::registers::RegisterFile;

/// Apply `op` to `ra` and `rb`, storing the result in `ra`
pub fn apply(op: Opcode, ra: Register, rb: Register, regs: &mut RegisterFile) -> Result<()> {
    let a = regs.get(ra);
    let b = regs.get(rb);

    let result = match op {
        Opcode::Add => a.wrapping_add(b),
        Opcode::Mul => a.wrapping_mul(b),
        other => return Err(RuntimeError::UnsupportedOperation(other)),
    };

    regs.set(ra, result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regs_with(a: u8, b: u8) -> RegisterFile {
        let mut regs = RegisterFile::new();
        regs.set(Register::R0, a);
        regs.set(Register::R1, b);
        regs
    }

    #[test]
    fn test_add() {
        let mut regs = regs_with(5, 6);
        apply(Opcode::Add, Register::R0, Register::R1, &mut regs).unwrap();
        assert_eq!(regs.get(Register::R0), 11);
        assert_eq!(regs.get(Register::R1), 6);
    }

    #[test]
    fn test_mul() {
        let mut regs = regs_with(3, 4);
        apply(Opcode::Mul, Register::R0, Register::R1, &mut regs).unwrap();
        assert_eq!(regs.get(Register::R0), 12);
        assert_eq!(regs.get(Register::R1), 4);
    }

    #[test]
    fn test_add_wraps() {
        let mut regs = regs_with(200, 100);
        apply(Opcode::Add, Register::R0, Register::R1, &mut regs).unwrap();
        assert_eq!(regs.get(Register::R0), 44);
    }

    #[test]
    fn test_mul_wraps() {
        let mut regs = regs_with(16, 17);
        apply(Opcode::Mul, Register::R0, Register::R1, &mut regs).unwrap();
        assert_eq!(regs.get(Register::R0), 16);
    }

    #[test]
    fn test_same_register() {
        let mut regs = regs_with(9, 0);
        apply(Opcode::Add, Register::R0, Register::R0, &mut regs).unwrap();
        assert_eq!(regs.get(Register::R0), 18);
    }

    #[test]
    fn test_unsupported_operation() {
        let mut regs = regs_with(1, 2);
        for op in [Opcode::Ldi, Opcode::Push, Opcode::Hlt, Opcode::Call] {
            let err = apply(op, Register::R0, Register::R1, &mut regs).unwrap_err();
            assert!(matches!(err, RuntimeError::UnsupportedOperation(o) if o == op));
        }
        assert_eq!(regs.get(Register::R0), 1);
    }
}
