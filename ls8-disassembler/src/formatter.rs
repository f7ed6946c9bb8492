//! Instruction formatting to assembly text

use ls8_spec::{Instruction, NUM_REGISTERS};

/// Format instruction as assembly text
pub fn format(instr: &Instruction) -> String {
    match instr {
        Instruction::Hlt | Instruction::Iret | Instruction::Ret => instr.mnemonic().to_string(),

        Instruction::Prn { reg }
        | Instruction::Push { reg }
        | Instruction::Pop { reg }
        | Instruction::Call { reg } => format!("{} {}", instr.mnemonic(), reg),

        Instruction::Ldi { reg, imm } => format!("LDI {}, {}", reg, imm),

        Instruction::Add { ra, rb } | Instruction::Mul { ra, rb } => {
            format!("{} {}, {}", instr.mnemonic(), ra, rb)
        }
    }
}

/// Format one line of machine-state trace
///
/// Layout: `TRACE: pc | ir op_a op_b | R0 .. R7`, all two-digit hex.
pub fn format_trace(pc: usize, fetched: [u8; 3], registers: &[u8; NUM_REGISTERS]) -> String {
    let mut line = format!(
        "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
        pc, fetched[0], fetched[1], fetched[2]
    );
    for value in registers {
        line.push_str(&format!(" {:02X}", value));
    }
    line
}
