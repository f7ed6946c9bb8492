//! Program image loader
//!
//! Reads the `.ls8` text format: one byte per line written as eight binary
//! digits, with an optional `#` comment. Blank and comment-only lines are
//! skipped.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::path::Path;

use ls8_spec::Program;
use crate::error::{AssemblerError, Result};

/// Number of binary digits per program line
pub const DIGITS_PER_LINE: usize = 8;

/// Parse a program image from `.ls8` text
pub fn load_image(source: &str) -> Result<Program> {
    let mut bytes = Vec::new();

    for (line_num, line) in source.lines().enumerate() {
        if let Some(byte) = parse_image_line(line, line_num + 1)? {
            bytes.push(byte);
        }
    }

    Ok(Program::from_bytes(bytes)?)
}

/// Read and parse a program image file
pub fn load_image_file(path: impl AsRef<Path>) -> Result<Program> {
    let source = std::fs::read_to_string(path)?;
    load_image(&source)
}

/// Parse one line of an image; `None` for blank and comment-only lines
pub fn parse_image_line(line: &str, line_num: usize) -> Result<Option<u8>> {
    let text = match line.split_once('#') {
        Some((code, _comment)) => code,
        None => line,
    }
    .trim();

    if text.is_empty() {
        return Ok(None);
    }

    let malformed = || AssemblerError::MalformedLine {
        line: line_num,
        text: text.to_string(),
    };

    if text.len() != DIGITS_PER_LINE || !text.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(malformed());
    }

    u8::from_str_radix(text, 2).map(Some).map_err(|_| malformed())
}
