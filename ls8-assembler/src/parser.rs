//! Assembly parser
//!
//! Line-oriented: each line holds an optional `label:` followed by an
//! optional instruction `MNEMONIC op, op`.

use std::collections::HashMap;

use logos::Logos;
use ls8_spec::{Instruction, Opcode, Register};
use crate::error::{AssemblerError, Result};
use crate::lexer::Token;

/// A single instruction operand before label resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Register(u32),
    Immediate(u64),
    Label(String),
}

/// One parsed source line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statement {
    pub label: Option<String>,
    pub instruction: Option<(Opcode, Vec<Operand>)>,
}

/// Parse a single instruction from assembly text
///
/// Label operands are rejected; use [`crate::assemble`] for programs with labels.
pub fn parse_instruction(text: &str) -> Result<Instruction> {
    match parse_statement(text, 1)? {
        Statement { instruction: Some((opcode, operands)), .. } => {
            resolve(opcode, &operands, &HashMap::new(), 1)
        }
        _ => Err(AssemblerError::SyntaxError {
            line: 1,
            column: 1,
            message: "Empty instruction".to_string(),
        }),
    }
}

/// Parse register name (`R0`-`R7`, case-insensitive)
pub fn parse_register(name: &str) -> Result<Register> {
    let name = name.trim();
    let invalid = || AssemblerError::InvalidRegister {
        line: 0,
        name: name.to_string(),
    };

    let digits = name
        .strip_prefix('R')
        .or_else(|| name.strip_prefix('r'))
        .ok_or_else(invalid)?;
    let index: u8 = digits.parse().map_err(|_| invalid())?;
    Register::from_index(index).ok_or_else(invalid)
}

/// Tokenize and parse one source line
pub fn parse_statement(text: &str, line: usize) -> Result<Statement> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);
    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Newline) => {}
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(AssemblerError::SyntaxError {
                    line,
                    column: lexer.span().start + 1,
                    message: format!("Unexpected input {:?}", lexer.slice()),
                })
            }
        }
    }

    let mut statement = Statement::default();
    let mut rest = tokens.as_slice();

    if let [Token::Identifier(name), Token::Colon, tail @ ..] = rest {
        statement.label = Some(name.clone());
        rest = tail;
    }

    let Some((head, operand_tokens)) = rest.split_first() else {
        return Ok(statement);
    };

    let mnemonic = match head {
        Token::Identifier(name) => name,
        other => {
            return Err(AssemblerError::SyntaxError {
                line,
                column: 1,
                message: format!("Expected mnemonic, found {:?}", other),
            })
        }
    };

    let opcode = Opcode::from_mnemonic(mnemonic).ok_or_else(|| {
        AssemblerError::UnknownInstruction {
            line,
            instruction: mnemonic.clone(),
        }
    })?;

    let operands = parse_operands(operand_tokens, line)?;
    if operands.len() != opcode.operand_count() {
        return Err(AssemblerError::OperandCount {
            line,
            mnemonic: opcode.mnemonic(),
            expected: opcode.operand_count(),
            found: operands.len(),
        });
    }

    statement.instruction = Some((opcode, operands));
    Ok(statement)
}

/// Split `op, op, ...` into operands
fn parse_operands(tokens: &[Token], line: usize) -> Result<Vec<Operand>> {
    let mut operands = Vec::new();
    if tokens.is_empty() {
        return Ok(operands);
    }

    for (i, chunk) in tokens.split(|t| *t == Token::Comma).enumerate() {
        let operand = match chunk {
            [Token::Register(n)] => Operand::Register(*n),
            [Token::Number(v)] | [Token::Hex(v)] | [Token::Binary(v)] => Operand::Immediate(*v),
            [Token::Identifier(name)] => Operand::Label(name.clone()),
            [] => {
                return Err(AssemblerError::SyntaxError {
                    line,
                    column: 0,
                    message: format!("Missing operand {}", i + 1),
                })
            }
            _ => {
                return Err(AssemblerError::SyntaxError {
                    line,
                    column: 0,
                    message: format!("Operand {} is not a register, number or label", i + 1),
                })
            }
        };
        operands.push(operand);
    }

    Ok(operands)
}

/// Turn a parsed statement into a typed instruction, resolving labels
pub fn resolve(
    opcode: Opcode,
    operands: &[Operand],
    labels: &HashMap<String, u8>,
    line: usize,
) -> Result<Instruction> {
    let reg = |i: usize| expect_register(&operands[i], line);

    let instr = match opcode {
        Opcode::Hlt => Instruction::Hlt,
        Opcode::Iret => Instruction::Iret,
        Opcode::Ret => Instruction::Ret,
        Opcode::Prn => Instruction::Prn { reg: reg(0)? },
        Opcode::Push => Instruction::Push { reg: reg(0)? },
        Opcode::Pop => Instruction::Pop { reg: reg(0)? },
        Opcode::Call => Instruction::Call { reg: reg(0)? },
        Opcode::Ldi => Instruction::Ldi {
            reg: reg(0)?,
            imm: expect_immediate(&operands[1], labels, line)?,
        },
        Opcode::Add => Instruction::Add { ra: reg(0)?, rb: reg(1)? },
        Opcode::Mul => Instruction::Mul { ra: reg(0)?, rb: reg(1)? },
    };

    Ok(instr)
}

fn expect_register(operand: &Operand, line: usize) -> Result<Register> {
    match operand {
        Operand::Register(n) => u8::try_from(*n)
            .ok()
            .and_then(Register::from_index)
            .ok_or_else(|| AssemblerError::InvalidRegister {
                line,
                name: format!("R{}", n),
            }),
        Operand::Immediate(v) => Err(AssemblerError::InvalidRegister {
            line,
            name: v.to_string(),
        }),
        Operand::Label(name) => Err(AssemblerError::InvalidRegister {
            line,
            name: name.clone(),
        }),
    }
}

fn expect_immediate(operand: &Operand, labels: &HashMap<String, u8>, line: usize) -> Result<u8> {
    match operand {
        Operand::Immediate(v) => u8::try_from(*v).map_err(|_| AssemblerError::InvalidImmediate {
            line,
            value: v.to_string(),
        }),
        Operand::Label(name) => labels.get(name).copied().ok_or_else(|| {
            AssemblerError::UndefinedLabel {
                line,
                label: name.clone(),
            }
        }),
        Operand::Register(n) => Err(AssemblerError::InvalidImmediate {
            line,
            value: format!("R{}", n),
        }),
    }
}
