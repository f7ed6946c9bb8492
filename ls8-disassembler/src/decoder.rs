//! Instruction decoder

use ls8_spec::{Instruction, Opcode, Register};
use crate::error::{DisassemblerError, Result};

/// Decode the instruction starting at `bytes[0]`
///
/// `bytes` may be longer than the instruction; only `width()` bytes are
/// consumed. Operand bytes past the end of the slice are only an error when
/// the opcode actually needs them.
pub fn decode(bytes: &[u8]) -> Result<Instruction> {
    let (&byte, operands) = bytes.split_first().ok_or(DisassemblerError::Empty)?;
    let opcode = Opcode::from_u8(byte).ok_or(DisassemblerError::UnknownOpcode(byte))?;

    if operands.len() < opcode.operand_count() {
        return Err(DisassemblerError::Truncated {
            opcode: byte,
            needed: opcode.width(),
            available: bytes.len(),
        });
    }

    let instr = match opcode {
        Opcode::Hlt => Instruction::Hlt,
        Opcode::Iret => Instruction::Iret,
        Opcode::Ret => Instruction::Ret,
        Opcode::Prn => Instruction::Prn { reg: decode_register(operands[0])? },
        Opcode::Push => Instruction::Push { reg: decode_register(operands[0])? },
        Opcode::Pop => Instruction::Pop { reg: decode_register(operands[0])? },
        Opcode::Call => Instruction::Call { reg: decode_register(operands[0])? },
        Opcode::Ldi => Instruction::Ldi {
            reg: decode_register(operands[0])?,
            imm: operands[1],
        },
        Opcode::Add => Instruction::Add {
            ra: decode_register(operands[0])?,
            rb: decode_register(operands[1])?,
        },
        Opcode::Mul => Instruction::Mul {
            ra: decode_register(operands[0])?,
            rb: decode_register(operands[1])?,
        },
    };

    Ok(instr)
}

fn decode_register(byte: u8) -> Result<Register> {
    Register::from_index(byte).ok_or(DisassemblerError::InvalidRegister(byte))
}
