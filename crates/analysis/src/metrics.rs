/// Module for summarising a script into a single serialisable report.
///
/// Gathers the structural facts (size, operation count, decodability), the pattern checks, the
/// signature-operation counts under both counting modes and the solver and classifier verdicts,
/// so callers can emit them as JSON in one go.
///
/// # Usage
/// ```rust,ignore
/// let script = Script::from_hex("76a914e2a623699e81b291c0327f408fea765d534baa2a88ac").unwrap();
/// let classifier = ScriptClassifier::new(PrefixTable::builtin(), &ClassifierConfig::standard());
/// let metrics = metrics::collect_metrics(&script, &classifier, None);
/// println!("{}", serde_json::to_string_pretty(&metrics).unwrap());
/// ```
use scriptlens_core::Script;
use scriptlens_core::detection::ScriptClassifier;
use scriptlens_core::solver::{Solver, TxOutType};
use serde::{Deserialize, Serialize};

/// Read-only facts about one script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptMetrics {
    /// Script length in bytes.
    pub byte_len: usize,
    /// Operations decoded before the end of the script or the first decode failure.
    pub op_count: usize,
    /// `false` when a push runs past the end of the script.
    pub well_formed: bool,
    /// Every opcode is OP_16 or below.
    pub push_only: bool,
    /// `OP_HASH160 <20 bytes> OP_EQUAL`.
    pub pay_to_script_hash: bool,
    /// Exact pay-to-pubkey-hash shape.
    pub normal_payment: bool,
    /// Sigops with multisig key counts read from a preceding OP_1..OP_16.
    pub sigops_accurate: u32,
    /// Sigops with every multisig counted at the maximum key count.
    pub sigops_legacy: u32,
    /// Sigops including an unwrapped pay-to-script-hash redeem script, when a script_sig was
    /// supplied.
    pub sigops_with_script_sig: Option<u32>,
    /// Template reported by the classifier's solver.
    pub output_type: TxOutType,
    /// Rendered [`scriptlens_core::detection::ScriptClass`].
    pub classification: String,
    /// Space-separated disassembly, ending in `[error]` when truncated.
    pub disassembly: String,
}

/// Collects metrics for `script`.
///
/// # Arguments
/// * `script` - Script to summarise (normally an output script).
/// * `classifier` - Classifier holding the prefix table and bare multisig policy.
/// * `script_sig` - Spending script used for the pay-to-script-hash aware sigop count.
pub fn collect_metrics<S: Solver>(
    script: &Script,
    classifier: &ScriptClassifier<'_, S>,
    script_sig: Option<&Script>,
) -> ScriptMetrics {
    let mut op_count = 0;
    let mut well_formed = true;
    for ins in script.instructions() {
        if ins.is_err() {
            well_formed = false;
            break;
        }
        op_count += 1;
    }

    let metrics = ScriptMetrics {
        byte_len: script.len(),
        op_count,
        well_formed,
        push_only: script.is_push_only(),
        pay_to_script_hash: script.is_pay_to_script_hash(),
        normal_payment: script.is_normal_payment(),
        sigops_accurate: script.sig_op_count(true),
        sigops_legacy: script.sig_op_count(false),
        sigops_with_script_sig: script_sig.map(|sig| script.sig_op_count_with_script_sig(sig)),
        output_type: classifier.solver().solve(script).kind,
        classification: classifier.classify(script).to_string(),
        disassembly: script.disassemble(),
    };

    tracing::debug!(
        "collected metrics: {} bytes, {} ops, {} sigops",
        metrics.byte_len,
        metrics.op_count,
        metrics.sigops_accurate
    );
    metrics
}
