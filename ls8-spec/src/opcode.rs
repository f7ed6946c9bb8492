//! # LS-8 Opcode Definitions
//!
//! Opcodes are a full byte. The machine code layout of an opcode is
//! `AABCDDDD`:
//!
//! - `AA`: number of operand bytes that follow (0-2)
//! - `B`: 1 if this is an ALU operation
//! - `C`: 1 if the instruction sets the PC directly
//! - `DDDD`: instruction identifier
//!
//! The runtime never derives widths from these bits; each opcode carries
//! its width in [`Opcode::width`].

use serde::{Deserialize, Serialize};

/// Instruction opcode (one byte)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // ========== System ==========
    /// HLT: halt the CPU
    Hlt = 0x01,
    /// IRET: return from interrupt (no-op on this core)
    Iret = 0x13,

    // ========== Register ==========
    /// LDI: reg[a] = imm
    Ldi = 0x82,
    /// PRN: print reg[a] as decimal
    Prn = 0x47,

    // ========== ALU ==========
    /// ADD: reg[a] = reg[a] + reg[b]
    Add = 0xA0,
    /// MUL: reg[a] = reg[a] * reg[b]
    Mul = 0xA2,

    // ========== Stack ==========
    /// PUSH: sp -= 1; mem[sp] = reg[a]
    Push = 0x45,
    /// POP: reg[a] = mem[sp]; sp += 1
    Pop = 0x46,

    // ========== Control ==========
    /// CALL: push pc + 2; pc = reg[a]
    Call = 0x50,
    /// RET: pc = pop()
    Ret = 0x11,
}

impl Opcode {
    /// Every opcode in the dispatch table
    pub const ALL: [Opcode; 10] = [
        Opcode::Hlt,
        Opcode::Iret,
        Opcode::Ldi,
        Opcode::Prn,
        Opcode::Add,
        Opcode::Mul,
        Opcode::Push,
        Opcode::Pop,
        Opcode::Call,
        Opcode::Ret,
    ];

    /// Look up an opcode byte in the dispatch table
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Opcode::Hlt),
            0x13 => Some(Opcode::Iret),
            0x82 => Some(Opcode::Ldi),
            0x47 => Some(Opcode::Prn),
            0xA0 => Some(Opcode::Add),
            0xA2 => Some(Opcode::Mul),
            0x45 => Some(Opcode::Push),
            0x46 => Some(Opcode::Pop),
            0x50 => Some(Opcode::Call),
            0x11 => Some(Opcode::Ret),
            _ => None,
        }
    }

    /// Look up an opcode by its assembly mnemonic (case-insensitive)
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes following the opcode
    #[inline]
    pub const fn operand_count(self) -> usize {
        match self {
            Opcode::Hlt | Opcode::Iret | Opcode::Ret => 0,
            Opcode::Prn | Opcode::Push | Opcode::Pop | Opcode::Call => 1,
            Opcode::Ldi | Opcode::Add | Opcode::Mul => 2,
        }
    }

    /// Total instruction width in bytes, i.e. the PC increment for
    /// instructions that do not set the PC themselves
    #[inline]
    pub const fn width(self) -> usize {
        1 + self.operand_count()
    }

    /// Instructions that assign the PC directly and skip the generic advance
    #[inline]
    pub const fn sets_pc(self) -> bool {
        matches!(self, Opcode::Call | Opcode::Ret)
    }

    /// Upper-case assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Iret => "IRET",
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

impl TryFrom<u8> for Opcode {
    type Error = crate::Ls8Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Opcode::from_u8(value).ok_or(crate::Ls8Error::InvalidOpcode(value))
    }
}
