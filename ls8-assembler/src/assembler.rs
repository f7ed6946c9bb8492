//! Main assembler logic

use std::collections::HashMap;

use ls8_spec::{Ls8Error, Opcode, Program, MEMORY_SIZE};
use crate::encoder::encode;
use crate::error::{AssemblerError, Result};
use crate::parser::{parse_statement, resolve, Operand};

/// Assemble mnemonic source code into a program
///
/// Two passes: the first assigns addresses to labels, the second resolves
/// label operands and encodes. Labels may be used as `LDI` immediates,
/// which is how subroutine addresses reach a register for `CALL`.
pub fn assemble(source: &str) -> Result<Program> {
    let mut labels: HashMap<String, u8> = HashMap::new();
    let mut pending: Vec<(usize, Opcode, Vec<Operand>)> = Vec::new();
    let mut addr = 0usize;

    for (line_num, line) in source.lines().enumerate() {
        let line_num = line_num + 1;
        let statement = parse_statement(line, line_num)?;

        if let Some(label) = statement.label {
            // Label targets are loaded with LDI, so they must fit in a byte
            let target = u8::try_from(addr).map_err(|_| Ls8Error::ProgramTooLarge {
                size: addr,
                max: MEMORY_SIZE,
            })?;
            if labels.insert(label.clone(), target).is_some() {
                return Err(AssemblerError::DuplicateLabel { line: line_num, label });
            }
        }

        if let Some((opcode, operands)) = statement.instruction {
            addr += opcode.width();
            pending.push((line_num, opcode, operands));
        }
    }

    let mut bytes = Vec::with_capacity(addr);
    for (line_num, opcode, operands) in &pending {
        let instr = resolve(*opcode, operands, &labels, *line_num)?;
        bytes.extend(encode(&instr));
    }

    Ok(Program::from_bytes(bytes)?)
}
