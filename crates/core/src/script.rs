//! The immutable `Script` type and its read-only queries.
//!
//! All queries walk the bytes through [`crate::decoder`] and degrade to a conservative answer on
//! malformed input: pattern tests return `false`, the push-only check returns `false`, and the
//! disassembly ends in an `[error]` token.

use crate::Opcode;
use crate::decoder::{Instructions, SourceType, input_to_bytes};
use crate::num::{DEFAULT_MAX_NUM_LEN, decode_script_num};
use crate::sigops;
use scriptlens_utils::errors::DecodeError;
use std::fmt;

/// Token appended to a disassembly when decoding fails.
pub const DISASM_ERROR: &str = "[error]";

/// Exact length of a pay-to-script-hash output script.
pub const P2SH_LEN: usize = 23;

/// Exact length of a pay-to-pubkey-hash output script.
pub const P2PKH_LEN: usize = 25;

/// An immutable script.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(Box<[u8]>);

impl Script {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `bytes` into a new script.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }

    /// Parses a hex string (optional `0x` prefix, whitespace ignored).
    pub fn from_hex(input: &str) -> Result<Self, DecodeError> {
        input_to_bytes(input, SourceType::HexString).map(Self::from)
    }

    /// The raw script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty script.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex of the script bytes, without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Iterates over the decoded instructions from the start of the script.
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions::new(&self.0, 0)
    }

    /// Extra-fast test for pay-to-script-hash: `OP_HASH160 <20 bytes> OP_EQUAL`.
    pub fn is_pay_to_script_hash(&self) -> bool {
        let b = &self.0;
        b.len() == P2SH_LEN
            && b[0] == Opcode::HASH160.to_byte()
            && b[1] == 0x14
            && b[22] == Opcode::EQUAL.to_byte()
    }

    /// Tests for the pay-to-pubkey-hash shape:
    /// `OP_DUP OP_HASH160 <push> OP_EQUALVERIFY OP_CHECKSIG`, 25 bytes, nothing after.
    pub fn is_normal_payment(&self) -> bool {
        if self.len() != P2PKH_LEN {
            return false;
        }

        let mut count = 0;
        for ins in self.instructions() {
            let Ok(ins) = ins else {
                return false;
            };
            let expected = match count {
                0 => Some(Opcode::DUP),
                1 => Some(Opcode::HASH160),
                2 => None,
                3 => Some(Opcode::EQUALVERIFY),
                4 => Some(Opcode::CHECKSIG),
                _ => return false,
            };
            if expected.is_some_and(|op| op != ins.opcode) {
                return false;
            }
            count += 1;
        }
        count == 5
    }

    /// Returns `true` if every opcode in the script is a push (at most OP_16).
    pub fn is_push_only(&self) -> bool {
        self.is_push_only_from(0)
    }

    /// Returns `true` if every opcode from offset `pc` to the end is a push.
    ///
    /// OP_RESERVED counts as a push here even though executing it fails.
    pub fn is_push_only_from(&self, pc: usize) -> bool {
        for ins in Instructions::new(&self.0, pc) {
            match ins {
                Ok(ins) if ins.opcode.is_push() => {}
                _ => return false,
            }
        }
        true
    }

    /// Counts signature operations, see [`sigops::count_sigops`].
    pub fn sig_op_count(&self, accurate: bool) -> u32 {
        sigops::count_sigops(self, accurate)
    }

    /// Counts signature operations, unwrapping a pay-to-script-hash redeem script from
    /// `script_sig`, see [`sigops::count_p2sh_sigops`].
    pub fn sig_op_count_with_script_sig(&self, script_sig: &Self) -> u32 {
        sigops::count_p2sh_sigops(self, script_sig)
    }

    /// Renders the script as space-separated tokens.
    ///
    /// Payloads of up to four bytes render as decimal script numbers, longer payloads as hex;
    /// other opcodes render by name. A decode failure appends `[error]` and stops.
    pub fn disassemble(&self) -> String {
        let mut tokens: Vec<String> = Vec::new();
        for ins in self.instructions() {
            match ins {
                Ok(ins) if ins.opcode.carries_data() => tokens.push(value_string(ins.data)),
                Ok(ins) => tokens.push(ins.opcode.name().to_string()),
                Err(e) => {
                    tracing::debug!("disassembly stopped: {}", e);
                    tokens.push(DISASM_ERROR.to_string());
                    break;
                }
            }
        }
        tokens.join(" ")
    }
}

fn value_string(data: &[u8]) -> String {
    if data.len() <= DEFAULT_MAX_NUM_LEN {
        // Any payload of at most four bytes decodes when minimality is not required.
        decode_script_num(data, DEFAULT_MAX_NUM_LEN, false)
            .map(|n| n.to_string())
            .unwrap_or_else(|_| hex::encode(data))
    } else {
        hex::encode(data)
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}

impl From<&[u8]> for Script {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.disassemble())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
