//! Instruction encoding to LS-8 machine code
//!
//! ```text
//! 0 operands:  [opcode]
//! 1 operand:   [opcode][0000 0rrr]
//! 2 operands:  [opcode][0000 0rrr][iiii iiii | 0000 0rrr]
//! ```

use ls8_spec::{Instruction, Program};
use crate::error::Result;

/// Encode instruction to its machine code bytes (opcode first)
pub fn encode(instr: &Instruction) -> Vec<u8> {
    let op = instr.opcode().to_u8();
    match *instr {
        Instruction::Hlt | Instruction::Iret | Instruction::Ret => vec![op],

        Instruction::Prn { reg }
        | Instruction::Push { reg }
        | Instruction::Pop { reg }
        | Instruction::Call { reg } => vec![op, reg as u8],

        Instruction::Ldi { reg, imm } => vec![op, reg as u8, imm],

        Instruction::Add { ra, rb } | Instruction::Mul { ra, rb } => vec![op, ra as u8, rb as u8],
    }
}

/// Encode a sequence of instructions into a program image
pub fn encode_program(instructions: &[Instruction]) -> Result<Program> {
    let bytes: Vec<u8> = instructions.iter().flat_map(encode).collect();
    Ok(Program::from_bytes(bytes)?)
}
