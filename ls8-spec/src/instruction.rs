//! LS-8 Instruction Set
//!
//! Decoded form of an instruction. Operand bytes have already been
//! resolved into registers or immediates.

use crate::opcode::Opcode;
use crate::register::Register;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    // ========== System ==========
    /// HLT: stop execution
    Hlt,

    /// IRET: return from interrupt; executes as a no-op on this core
    Iret,

    // ========== Register ==========
    /// LDI: reg = imm
    Ldi { reg: Register, imm: u8 },

    /// PRN: print reg as decimal
    Prn { reg: Register },

    // ========== ALU ==========
    /// ADD: ra = ra + rb
    Add { ra: Register, rb: Register },

    /// MUL: ra = ra * rb
    Mul { ra: Register, rb: Register },

    // ========== Stack ==========
    /// PUSH: sp -= 1; mem[sp] = reg
    Push { reg: Register },

    /// POP: reg = mem[sp]; sp += 1
    Pop { reg: Register },

    // ========== Control ==========
    /// CALL: sp -= 1; mem[sp] = pc + 2; pc = reg
    Call { reg: Register },

    /// RET: pc = mem[sp]; sp += 1
    Ret,
}

impl Instruction {
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Hlt => Opcode::Hlt,
            Instruction::Iret => Opcode::Iret,
            Instruction::Ldi { .. } => Opcode::Ldi,
            Instruction::Prn { .. } => Opcode::Prn,
            Instruction::Add { .. } => Opcode::Add,
            Instruction::Mul { .. } => Opcode::Mul,
            Instruction::Push { .. } => Opcode::Push,
            Instruction::Pop { .. } => Opcode::Pop,
            Instruction::Call { .. } => Opcode::Call,
            Instruction::Ret => Opcode::Ret,
        }
    }

    /// Get instruction mnemonic
    pub fn mnemonic(&self) -> &'static str {
        self.opcode().mnemonic()
    }

    /// Encoded width in bytes
    #[inline]
    pub fn width(&self) -> usize {
        self.opcode().width()
    }
}
