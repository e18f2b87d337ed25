//! Signature operation counting.
//!
//! OP_CHECKSIG and OP_CHECKSIGVERIFY count one each. OP_CHECKMULTISIG and
//! OP_CHECKMULTISIGVERIFY count the key total declared by a directly preceding OP_1..OP_16 when
//! counting accurately, and [`MAX_PUBKEYS_PER_MULTISIG`] otherwise.

use crate::Opcode;
use crate::decoder::Instructions;
use crate::script::Script;

/// Key count assumed for a multisig check whose key total cannot be read statically.
pub const MAX_PUBKEYS_PER_MULTISIG: u32 = 20;

/// Counts the signature operations in `script`.
///
/// A decode failure ends the scan; the operations counted up to that point are returned.
///
/// # Arguments
/// * `script` - Script to count sigops in.
/// * `accurate` - Use a preceding OP_1..OP_16 as the multisig key count.
pub fn count_sigops(script: &Script, accurate: bool) -> u32 {
    let mut count = 0u32;
    let mut last_opcode = Opcode::INVALIDOPCODE;

    for ins in script.instructions() {
        let Ok(ins) = ins else {
            tracing::debug!("sigop scan stopped early at {} sigops", count);
            break;
        };
        match ins.opcode {
            Opcode::CHECKSIG | Opcode::CHECKSIGVERIFY => count = count.saturating_add(1),
            Opcode::CHECKMULTISIG | Opcode::CHECKMULTISIGVERIFY => {
                let keys = match last_opcode.small_int() {
                    Some(n) if accurate => u32::from(n),
                    _ => MAX_PUBKEYS_PER_MULTISIG,
                };
                count = count.saturating_add(keys);
            }
            _ => {}
        }
        last_opcode = ins.opcode;
    }

    count
}

/// Counts the signature operations a spend of `script_pubkey` by `script_sig` commits to.
///
/// For anything but pay-to-script-hash this is the accurate count of `script_pubkey`. For
/// pay-to-script-hash the last item pushed by `script_sig` is the redeem script and its accurate
/// count is returned; a `script_sig` that fails to decode or is not push-only counts zero.
pub fn count_p2sh_sigops(script_pubkey: &Script, script_sig: &Script) -> u32 {
    if !script_pubkey.is_pay_to_script_hash() {
        return count_sigops(script_pubkey, true);
    }

    let mut data: &[u8] = &[];
    for ins in Instructions::new(script_sig.as_bytes(), 0) {
        let Ok(ins) = ins else {
            return 0;
        };
        if !ins.opcode.is_push() {
            return 0;
        }
        data = ins.data;
    }

    let redeem_script = Script::from_bytes(data);
    tracing::debug!("unwrapped {}-byte redeem script", redeem_script.len());
    count_sigops(&redeem_script, true)
}
