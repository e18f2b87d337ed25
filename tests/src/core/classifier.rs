use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scriptlens_core::Opcode;
use scriptlens_core::Script;
use scriptlens_core::builder::ScriptBuilder;
use scriptlens_core::config::ClassifierConfig;
use scriptlens_core::detection::{PrefixRange, PrefixTable, RangeMatch, ScriptClass, ScriptClassifier};

fn p2pkh_with_prefix(prefix: u32) -> Script {
    let mut hash = [0u8; 20];
    hash[..4].copy_from_slice(&prefix.to_be_bytes());
    let mut b = ScriptBuilder::new();
    b.push_opcode(Opcode::DUP).push_opcode(Opcode::HASH160);
    b.push_slice(&hash).unwrap();
    b.push_opcode(Opcode::EQUALVERIFY)
        .push_opcode(Opcode::CHECKSIG);
    b.into_script()
}

#[test]
fn test_builtin_table_invariants() {
    let table = PrefixTable::builtin();
    assert_eq!(table.len(), 171);
    table.validate().unwrap();
    for pair in table.ranges().windows(2) {
        assert!(pair[0].end < pair[1].start);
    }
    assert!(table.ranges().iter().all(|r| r.label.starts_with("MasterPay")));
}

#[test]
fn test_every_builtin_range_and_its_neighbours() {
    crate::init_tracing();
    let table = PrefixTable::builtin();
    let classifier = ScriptClassifier::new(table, &ClassifierConfig::standard());

    for range in table.ranges() {
        for value in [range.start, range.end] {
            let script = p2pkh_with_prefix(value);
            assert_eq!(
                classifier.classify_by_range(&script),
                Some(RangeMatch::Prefix(range.label.as_str()))
            );
        }
        for value in [range.start.checked_sub(1), range.end.checked_add(1)]
            .into_iter()
            .flatten()
        {
            if table.lookup(value).is_none() {
                let script = p2pkh_with_prefix(value);
                assert_eq!(classifier.classify_by_range(&script), None);
                assert_eq!(classifier.classify(&script), ScriptClass::NormalPayment);
            }
        }
    }
}

#[test]
fn test_lookup_matches_linear_scan() {
    let table = PrefixTable::builtin();
    let mut rng = StdRng::seed_from_u64(99);
    let near: Vec<u32> = table
        .ranges()
        .iter()
        .flat_map(|r| [r.start.wrapping_sub(1), r.start, r.end, r.end.wrapping_add(1)])
        .collect();
    let values = near
        .into_iter()
        .chain((0..5_000).map(|_| rng.random::<u32>()));
    for value in values {
        let linear = table.ranges().iter().find(|r| r.contains(value));
        assert_eq!(table.lookup(value), linear, "{value:#010x}");
    }
}

#[test]
fn test_custom_table_from_config() {
    let config = ClassifierConfig {
        bare_multisig_standard: false,
        prefix_ranges: vec![
            PrefixRange::new(0xff00_0000, 0xffff_ffff, "top"),
            PrefixRange::new(0x0000_0000, 0x0000_ffff, "bottom"),
        ],
    };
    let table = config.custom_table().unwrap().unwrap();
    let classifier = ScriptClassifier::new(&table, &config);
    assert_eq!(
        classifier.classify(&p2pkh_with_prefix(0xffff_ffff)),
        ScriptClass::Prefix("top")
    );
    assert_eq!(
        classifier.classify(&p2pkh_with_prefix(0x0000_1234)),
        ScriptClass::Prefix("bottom")
    );
    assert_eq!(
        classifier.classify(&p2pkh_with_prefix(0x0001_0000)),
        ScriptClass::NormalPayment
    );
}

#[test]
fn test_short_dup_scripts_fall_through_to_multisig_check() {
    let classifier = ScriptClassifier::new(PrefixTable::builtin(), &ClassifierConfig::standard());
    // six bytes starting with OP_DUP: too short for a prefix, not multisig
    let script = Script::from_hex("76a9 0301 0203").unwrap();
    assert_eq!(classifier.classify_by_range(&script), None);
    assert_eq!(classifier.classify(&script), ScriptClass::NotMatched);
}

#[test]
fn test_random_scripts_classify_without_panicking() {
    let strict = ScriptClassifier::new(PrefixTable::builtin(), &ClassifierConfig::standard());
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..2_000 {
        let len = rng.random_range(0..=40);
        let mut bytes: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        if rng.random_bool(0.5) && !bytes.is_empty() {
            bytes[0] = Opcode::DUP.to_byte();
        }
        let script = Script::from(bytes);
        let _ = strict.classify(&script).to_string();
    }
}
