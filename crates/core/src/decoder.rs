//! scriptlens' single entry-point for turning byte-sequences into opcode streams.
//!
//! Every analysis walks a script through [`decode_op`], which yields the next opcode and its
//! push payload and advances the cursor past OP_PUSHDATA1/2/4 length prefixes. Lengths are
//! checked before any slice is taken, so a truncated push is reported as an error and never
//! read past the end of the script.

use crate::Opcode;
use scriptlens_utils::errors::DecodeError;
use std::iter::FusedIterator;
use std::{fmt, fs, path::Path};

/// Represents a single decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction<'a> {
    /// the instruction's offset in the script (in bytes)
    pub pc: usize,
    /// the decoded opcode
    pub opcode: Opcode,
    /// push payload; empty for opcodes that carry none
    pub data: &'a [u8],
}

/// Source type of the script input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// The input is the hex text itself.
    HexString,
    /// The input is a path to a file holding hex text.
    File,
}

/// Normalizes hex strings by removing whitespace and an optional 0x prefix.
pub fn normalize_hex_string(input: &str) -> String {
    let clean: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    match clean.strip_prefix("0x").or_else(|| clean.strip_prefix("0X")) {
        Some(rest) => rest.to_string(),
        None => clean,
    }
}

/// Normalizes input into a byte vector from hex string or a file holding hex text.
pub fn input_to_bytes(input: &str, source: SourceType) -> Result<Vec<u8>, DecodeError> {
    let text = match source {
        SourceType::File => {
            let path = Path::new(input);
            fs::read_to_string(path).map_err(|e| DecodeError::FileRead {
                path: path.display().to_string(),
                source: e,
            })?
        }
        SourceType::HexString => input.to_string(),
    };
    Ok(hex::decode(normalize_hex_string(&text))?)
}

/// Decodes the opcode at `*pc` and advances the cursor past it and its payload.
///
/// # Returns
/// The opcode and its payload (empty for non-push opcodes and OP_0), or an error if the cursor
/// is at the end of the script or a push runs past it. The cursor is left untouched on error.
pub fn decode_op<'a>(bytes: &'a [u8], pc: &mut usize) -> Result<(Opcode, &'a [u8]), DecodeError> {
    let start = *pc;
    let Some(&byte) = bytes.get(start) else {
        return Err(DecodeError::EndOfScript(start));
    };
    let opcode = Opcode::parse(byte);
    let mut pos = start + 1;

    if !opcode.carries_data() {
        *pc = pos;
        return Ok((opcode, &[]));
    }

    let width = match opcode {
        Opcode::PUSHDATA1 => 1,
        Opcode::PUSHDATA2 => 2,
        Opcode::PUSHDATA4 => 4,
        _ => 0,
    };

    let declared = if width == 0 {
        byte as usize
    } else {
        let available = bytes.len() - pos;
        if available < width {
            return Err(DecodeError::TruncatedLength {
                pc: start,
                needed: width,
                available,
            });
        }
        let mut prefix = [0u8; 4];
        prefix[..width].copy_from_slice(&bytes[pos..pos + width]);
        pos += width;
        u32::from_le_bytes(prefix) as usize
    };

    let available = bytes.len() - pos;
    if declared > available {
        return Err(DecodeError::TruncatedPush {
            pc: start,
            declared,
            available,
        });
    }

    *pc = pos + declared;
    Ok((opcode, &bytes[pos..pos + declared]))
}

/// Iterator over the instructions of a script.
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
    bytes: &'a [u8],
    pc: usize,
    failed: bool,
}

impl<'a> Instructions<'a> {
    /// Starts decoding `bytes` at offset `pc`.
    pub const fn new(bytes: &'a [u8], pc: usize) -> Self {
        Self {
            bytes,
            pc,
            failed: false,
        }
    }
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Result<Instruction<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pc >= self.bytes.len() {
            return None;
        }
        let pc = self.pc;
        match decode_op(self.bytes, &mut self.pc) {
            Ok((opcode, data)) => {
                tracing::trace!("decoded {} at {:#06x}", opcode, pc);
                Some(Ok(Instruction { pc, opcode, data }))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Instructions<'_> {}

impl fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pc: six-digit hex, mnemonic left-padded to 12 chars, then optional payload
        let mnemonic = match self.opcode {
            Opcode::PUSH(n) => format!("PUSHBYTES_{n}"),
            other => other.name().to_string(),
        };
        if self.data.is_empty() {
            write!(f, "{:06x}  {}", self.pc, mnemonic)
        } else {
            write!(
                f,
                "{:06x}  {:<12} {}",
                self.pc,
                mnemonic,
                hex::encode(self.data)
            )
        }
    }
}
