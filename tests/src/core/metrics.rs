use scriptlens_analysis::metrics::{ScriptMetrics, collect_metrics};
use scriptlens_core::Script;
use scriptlens_core::config::ClassifierConfig;
use scriptlens_core::detection::{PrefixTable, ScriptClassifier};
use scriptlens_core::solver::TxOutType;

#[test]
fn test_metrics_for_bare_multisig() {
    crate::init_tracing();
    let script = Script::from_hex(&format!("52 21{k} 21{k} 52ae", k = "03".repeat(33))).unwrap();

    let strict = ScriptClassifier::new(PrefixTable::builtin(), &ClassifierConfig::standard());
    let m = collect_metrics(&script, &strict, None);
    assert_eq!(m.output_type, TxOutType::Multisig);
    assert_eq!(m.classification, "bare multisig");
    assert_eq!(m.sigops_accurate, 2);
    assert_eq!(m.sigops_legacy, 20);
    assert_eq!(m.op_count, 5);

    let permissive = ScriptClassifier::new(PrefixTable::builtin(), &ClassifierConfig::permissive());
    let m = collect_metrics(&script, &permissive, None);
    assert_eq!(m.output_type, TxOutType::Multisig);
    assert_eq!(m.classification, "not matched");
}

#[test]
fn test_metrics_json_shape() {
    let script = Script::from_hex("6a 0568656c6c6f").unwrap();
    let classifier = ScriptClassifier::new(PrefixTable::builtin(), &ClassifierConfig::standard());
    let m = collect_metrics(&script, &classifier, Some(&Script::new()));
    let json = serde_json::to_string_pretty(&m).unwrap();
    let back: ScriptMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["output_type"], "nulldata");
    assert_eq!(value["disassembly"], "OP_RETURN 68656c6c6f");
    assert_eq!(value["sigops_with_script_sig"], 0);
}
