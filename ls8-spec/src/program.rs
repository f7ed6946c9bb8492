//! # Program Image for LS-8
//!
//! A program is the raw byte image copied into memory at [`PROGRAM_BASE`]
//! before execution starts. No header, no sections: code and data share
//! the same 256-byte space as the stack.
//!
//! [`PROGRAM_BASE`]: crate::PROGRAM_BASE

use crate::error::Ls8Error;
use crate::MEMORY_SIZE;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Deserialization goes through [`Program::from_bytes`] so a decoded image
/// is held to the same size limit as one built in code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Program {
    code: Vec<u8>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self { code: Vec::new() }
    }

    /// Create a program from a byte image, rejecting images that do not fit in memory
    pub fn from_bytes(code: Vec<u8>) -> Result<Self, Ls8Error> {
        if code.len() > MEMORY_SIZE {
            return Err(Ls8Error::ProgramTooLarge {
                size: code.len(),
                max: MEMORY_SIZE,
            });
        }
        Ok(Self { code })
    }

    /// Raw image bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.code
    }

    /// Image size in bytes
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// SHA-256 of the image, used to identify a loaded program in logs
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(&self.code);
        hasher.finalize().into()
    }

    /// Lower-case hex rendering of [`Program::digest`]
    pub fn digest_hex(&self) -> String {
        self.digest().iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl TryFrom<Vec<u8>> for Program {
    type Error = Ls8Error;

    fn try_from(code: Vec<u8>) -> Result<Self, Self::Error> {
        Program::from_bytes(code)
    }
}

impl From<Program> for Vec<u8> {
    fn from(program: Program) -> Self {
        program.code
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LS-8 Program")?;
        writeln!(f, "  Size:   {} bytes", self.code.len())?;
        write!(f, "  SHA256: {}", self.digest_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_new() {
        let program = Program::new();
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
    }

    #[test]
    fn test_from_bytes() {
        let program = Program::from_bytes(vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
        assert_eq!(program.len(), 6);
        assert_eq!(program.as_bytes()[0], 0x82);
    }

    #[test]
    fn test_full_memory_image_accepted() {
        assert!(Program::from_bytes(vec![0; MEMORY_SIZE]).is_ok());
    }

    #[test]
    fn test_oversized_image_rejected() {
        let result = Program::from_bytes(vec![0; MEMORY_SIZE + 1]);
        assert_eq!(
            result,
            Err(Ls8Error::ProgramTooLarge {
                size: MEMORY_SIZE + 1,
                max: MEMORY_SIZE
            })
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let program = Program::from_bytes(vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
        let encoded = bincode::serialize(&program).unwrap();
        // same wire form as the bare byte vector
        assert_eq!(encoded, bincode::serialize(program.as_bytes()).unwrap());
        let decoded: Program = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, program);
    }

    #[test]
    fn test_deserialize_rejects_oversized_image() {
        let encoded = bincode::serialize(&vec![0x01u8; 300]).unwrap();
        let err = bincode::deserialize::<Program>(&encoded).unwrap_err();
        assert!(
            err.to_string().contains("300 bytes exceeds 256 bytes"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_deserialize_full_memory_image() {
        let encoded = bincode::serialize(&vec![0u8; MEMORY_SIZE]).unwrap();
        let program: Program = bincode::deserialize(&encoded).unwrap();
        assert_eq!(program.len(), MEMORY_SIZE);
    }

    #[test]
    fn test_digest_stable() {
        let a = Program::from_bytes(vec![0x01]).unwrap();
        let b = Program::from_bytes(vec![0x01]).unwrap();
        let c = Program::from_bytes(vec![0x02]).unwrap();
        assert_eq!(a.digest(), b.digest());
        assert_ne!(a.digest(), c.digest());
        assert_eq!(a.digest_hex().len(), 64);
    }

    #[test]
    fn test_empty_digest_is_sha256_of_nothing() {
        assert_eq!(
            Program::new().digest_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_display() {
        let program = Program::from_bytes(vec![0x01]).unwrap();
        let text = program.to_string();
        assert!(text.contains("1 bytes"));
        assert!(text.contains("SHA256"));
    }
}
