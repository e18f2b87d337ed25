use super::prefix::PrefixTable;
use crate::Opcode;
use crate::config::ClassifierConfig;
use crate::script::Script;
use crate::solver::{Solver, StandardSolver, TxOutType};
use std::fmt;

/// Label reported for bare multisig outputs.
pub const BARE_MULTISIG_LABEL: &str = "bare multisig";

/// Scripts shorter than this cannot carry a 4-byte prefix at offset 3.
const MIN_PREFIX_SCRIPT_LEN: usize = 7;

/// Outcome of the range classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMatch<'t> {
    /// The extracted prefix falls in a table range with this label.
    Prefix(&'t str),
    /// The script is a bare multisig output and bare multisig is not standard.
    BareMultisig,
}

/// Combined classification of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass<'t> {
    /// No classifier matched.
    NotMatched,
    /// `OP_HASH160 <20 bytes> OP_EQUAL`.
    PayToScriptHash,
    /// Pay-to-pubkey-hash whose prefix is in no table range.
    NormalPayment,
    /// Pay-to-pubkey-hash shaped script whose prefix has this label.
    Prefix(&'t str),
    /// Bare multisig output under a policy that does not accept it.
    BareMultisig,
}

impl<'t> From<RangeMatch<'t>> for ScriptClass<'t> {
    fn from(m: RangeMatch<'t>) -> Self {
        match m {
            RangeMatch::Prefix(label) => Self::Prefix(label),
            RangeMatch::BareMultisig => Self::BareMultisig,
        }
    }
}

impl fmt::Display for ScriptClass<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMatched => f.write_str("not matched"),
            Self::PayToScriptHash => f.write_str("pay-to-script-hash"),
            Self::NormalPayment => f.write_str("normal payment"),
            Self::Prefix(label) => f.write_str(label),
            Self::BareMultisig => f.write_str(BARE_MULTISIG_LABEL),
        }
    }
}

/// Classifies scripts against a prefix table and the bare multisig policy.
#[derive(Debug, Clone)]
pub struct ScriptClassifier<'t, S = StandardSolver> {
    table: &'t PrefixTable,
    bare_multisig_standard: bool,
    solver: S,
}

impl<'t> ScriptClassifier<'t> {
    /// Creates a classifier over `table` using the standard solver and the policy in `config`.
    ///
    /// The prefix ranges in `config` are not consulted; build the table with
    /// [`ClassifierConfig::custom_table`] to use them.
    pub fn new(table: &'t PrefixTable, config: &ClassifierConfig) -> Self {
        Self::with_solver(table, config, StandardSolver)
    }
}

impl<'t, S: Solver> ScriptClassifier<'t, S> {
    /// Creates a classifier with a custom solver for the bare multisig check.
    pub fn with_solver(table: &'t PrefixTable, config: &ClassifierConfig, solver: S) -> Self {
        Self {
            table,
            bare_multisig_standard: config.bare_multisig_standard,
            solver,
        }
    }

    /// The solver used for the bare multisig check.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Matches `script` against the prefix table, falling back to bare multisig detection.
    ///
    /// Scripts starting with OP_DUP and at least 7 bytes long are looked up by the big-endian
    /// `u32` at bytes 3..7; a miss there is final. Any other script is reported as bare
    /// multisig when the solver says so and bare multisig is not standard.
    pub fn classify_by_range(&self, script: &Script) -> Option<RangeMatch<'t>> {
        let bytes = script.as_bytes();

        if bytes.len() >= MIN_PREFIX_SCRIPT_LEN && bytes[0] == Opcode::DUP.to_byte() {
            let prefix = u32::from_be_bytes([bytes[3], bytes[4], bytes[5], bytes[6]]);
            let range = self.table.lookup(prefix)?;
            tracing::debug!("prefix {:#010x} matched range '{}'", prefix, range.label);
            return Some(RangeMatch::Prefix(&range.label));
        }

        if !self.bare_multisig_standard && self.solver.solve(script).kind == TxOutType::Multisig {
            tracing::debug!("bare multisig output");
            return Some(RangeMatch::BareMultisig);
        }

        None
    }

    /// Runs every classifier in priority order: pay-to-script-hash, range match, normal
    /// payment.
    pub fn classify(&self, script: &Script) -> ScriptClass<'t> {
        if script.is_pay_to_script_hash() {
            return ScriptClass::PayToScriptHash;
        }
        if let Some(m) = self.classify_by_range(script) {
            return m.into();
        }
        if script.is_normal_payment() {
            return ScriptClass::NormalPayment;
        }
        ScriptClass::NotMatched
    }
}
