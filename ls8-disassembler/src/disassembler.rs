//! Main disassembler logic

use ls8_spec::Program;
use crate::decoder::decode;
use crate::error::{DisassemblerError, Result};
use crate::formatter::format;

/// Disassemble a program into assembly text
///
/// Bytes that do not decode (data, or code reached only through `CALL`)
/// are listed as `.byte` and the walk resumes at the next address.
pub fn disassemble(program: &Program) -> Result<String> {
    let bytes = program.as_bytes();
    let mut output = String::new();

    output.push_str("; LS-8 Disassembly\n");
    output.push_str(&format!("; Size: {} bytes\n", bytes.len()));
    output.push('\n');

    let mut addr = 0usize;

    while addr < bytes.len() {
        output.push_str(&format!("0x{:02X}:  ", addr));

        match decode(&bytes[addr..]) {
            Ok(instr) => {
                let width = instr.width();
                output.push_str(&format!("{:<10}", hex_bytes(&bytes[addr..addr + width])));
                output.push_str(&format(&instr));
                addr += width;
            }
            Err(DisassemblerError::Truncated { .. }) => {
                output.push_str(&format!("{:<10}", hex_bytes(&bytes[addr..])));
                output.push_str("; ERROR: truncated instruction");
                addr = bytes.len();
            }
            Err(e) => {
                output.push_str(&format!("{:<10}", hex_bytes(&bytes[addr..addr + 1])));
                output.push_str(&format!(".byte 0x{:02X}  ; {}", bytes[addr], e));
                addr += 1;
            }
        }

        output.push('\n');
    }

    Ok(output)
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
