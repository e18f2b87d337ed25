use crate::Opcode;
use crate::num::encode_script_num;
use crate::script::Script;
use scriptlens_utils::errors::EncodeError;

/// Incrementally assembles a script using canonical push encodings.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    bytes: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates a builder holding an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bare opcode.
    pub fn push_opcode(&mut self, opcode: Opcode) -> &mut Self {
        self.bytes.push(opcode.to_byte());
        self
    }

    /// Appends a data push, choosing a direct push or OP_PUSHDATA1/2/4 by length.
    pub fn push_slice(&mut self, data: &[u8]) -> Result<&mut Self, EncodeError> {
        let len = data.len();
        if len < Opcode::PUSHDATA1.to_byte() as usize {
            self.bytes.push(len as u8);
        } else if let Ok(len) = u8::try_from(len) {
            self.bytes.push(Opcode::PUSHDATA1.to_byte());
            self.bytes.push(len);
        } else if let Ok(len) = u16::try_from(len) {
            self.bytes.push(Opcode::PUSHDATA2.to_byte());
            self.bytes.extend_from_slice(&len.to_le_bytes());
        } else if let Ok(len) = u32::try_from(len) {
            self.bytes.push(Opcode::PUSHDATA4.to_byte());
            self.bytes.extend_from_slice(&len.to_le_bytes());
        } else {
            return Err(EncodeError::PushTooLarge(len));
        }
        self.bytes.extend_from_slice(data);
        Ok(self)
    }

    /// Appends a number: OP_0, OP_1NEGATE and OP_1..OP_16 where possible, otherwise a minimal
    /// script-number push.
    pub fn push_int(&mut self, value: i64) -> &mut Self {
        if value == -1 {
            return self.push_opcode(Opcode::ONENEGATE);
        }
        if let Some(op) = u8::try_from(value).ok().and_then(Opcode::from_small_int) {
            return self.push_opcode(op);
        }
        let encoded = encode_script_num(value);
        // at most nine bytes, always a direct push
        self.bytes.push(encoded.len() as u8);
        self.bytes.extend_from_slice(&encoded);
        self
    }

    /// Length in bytes of the script built so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copies the bytes built so far into a script, leaving the builder usable.
    pub fn build(&self) -> Script {
        Script::from_bytes(&self.bytes)
    }

    /// Consumes the builder and returns the script.
    pub fn into_script(self) -> Script {
        Script::from(self.bytes)
    }
}
