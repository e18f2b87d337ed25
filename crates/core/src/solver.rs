//! Matching of output scripts against the standard templates.

use crate::Opcode;
use crate::decoder::Instruction;
use crate::script::Script;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest serialized public key (compressed).
const MIN_PUBKEY_LEN: usize = 33;
/// Largest serialized public key (uncompressed).
const MAX_PUBKEY_LEN: usize = 65;

/// Standard output template a script matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxOutType {
    /// Matches no template.
    NonStandard,
    /// `<pubkey> OP_CHECKSIG`.
    PubKey,
    /// `OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG`.
    PubKeyHash,
    /// `OP_HASH160 <20 bytes> OP_EQUAL`.
    ScriptHash,
    /// `m <pubkey>.. n OP_CHECKMULTISIG`.
    Multisig,
    /// `OP_RETURN` followed by pushes only.
    NullData,
}

impl fmt::Display for TxOutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NonStandard => "nonstandard",
            Self::PubKey => "pubkey",
            Self::PubKeyHash => "pubkeyhash",
            Self::ScriptHash => "scripthash",
            Self::Multisig => "multisig",
            Self::NullData => "nulldata",
        };
        f.write_str(name)
    }
}

/// Result of solving a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Template the script matched.
    pub kind: TxOutType,
    /// Extracted template parameters: the key for pay-to-pubkey, the hash for the hash
    /// templates, and `[m], keys.., [n]` for multisig.
    pub solutions: Vec<Vec<u8>>,
}

impl Solution {
    const fn nonstandard() -> Self {
        Self {
            kind: TxOutType::NonStandard,
            solutions: Vec::new(),
        }
    }
}

/// Classifies output scripts into standard templates.
pub trait Solver {
    /// Matches `script` against the templates; never fails, unmatched scripts are
    /// [`TxOutType::NonStandard`].
    fn solve(&self, script: &Script) -> Solution;
}

/// Solver recognising pay-to-pubkey, pay-to-pubkey-hash, pay-to-script-hash, null data and
/// bare multisig outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSolver;

impl Solver for StandardSolver {
    fn solve(&self, script: &Script) -> Solution {
        let bytes = script.as_bytes();

        if script.is_pay_to_script_hash() {
            return Solution {
                kind: TxOutType::ScriptHash,
                solutions: vec![bytes[2..22].to_vec()],
            };
        }

        if bytes.first() == Some(&Opcode::RETURN.to_byte()) && script.is_push_only_from(1) {
            return Solution {
                kind: TxOutType::NullData,
                solutions: Vec::new(),
            };
        }

        let Ok(ops) = script.instructions().collect::<Result<Vec<_>, _>>() else {
            return Solution::nonstandard();
        };

        match ops.as_slice() {
            [key, sig] if is_pubkey(key) && sig.opcode == Opcode::CHECKSIG => Solution {
                kind: TxOutType::PubKey,
                solutions: vec![key.data.to_vec()],
            },
            [dup, hash, push, verify, sig]
                if dup.opcode == Opcode::DUP
                    && hash.opcode == Opcode::HASH160
                    && push.opcode.carries_data()
                    && push.data.len() == 20
                    && verify.opcode == Opcode::EQUALVERIFY
                    && sig.opcode == Opcode::CHECKSIG =>
            {
                Solution {
                    kind: TxOutType::PubKeyHash,
                    solutions: vec![push.data.to_vec()],
                }
            }
            _ => solve_multisig(&ops).unwrap_or_else(Solution::nonstandard),
        }
    }
}

fn is_pubkey(ins: &Instruction<'_>) -> bool {
    ins.opcode.carries_data() && (MIN_PUBKEY_LEN..=MAX_PUBKEY_LEN).contains(&ins.data.len())
}

/// `m <key>.. n OP_CHECKMULTISIG` with 1 <= m <= n and exactly n keys.
fn solve_multisig(ops: &[Instruction<'_>]) -> Option<Solution> {
    let [first, keys @ .., n_op, last] = ops else {
        return None;
    };
    if last.opcode != Opcode::CHECKMULTISIG {
        return None;
    }
    let m = first.opcode.small_int()?;
    let n = n_op.opcode.small_int()?;
    if keys.is_empty() || keys.len() != n as usize || m > n {
        return None;
    }
    if !keys.iter().all(is_pubkey) {
        return None;
    }

    let mut solutions = Vec::with_capacity(keys.len() + 2);
    solutions.push(vec![m]);
    solutions.extend(keys.iter().map(|k| k.data.to_vec()));
    solutions.push(vec![n]);
    Some(Solution {
        kind: TxOutType::Multisig,
        solutions,
    })
}
