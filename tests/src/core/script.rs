use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scriptlens_core::Opcode;
use scriptlens_core::Script;
use scriptlens_core::builder::ScriptBuilder;
use scriptlens_core::script::DISASM_ERROR;

const P2PKH: &str = "76a914e2a623699e81b291c0327f408fea765d534baa2a88ac";
const P2SH: &str = "a914e2a623699e81b291c0327f408fea765d534baa2a87";

fn random_script(rng: &mut StdRng) -> Script {
    let len = rng.random_range(0..=64);
    Script::from((0..len).map(|_| rng.random::<u8>()).collect::<Vec<u8>>())
}

#[test]
fn test_queries_never_panic_on_random_input() {
    crate::init_tracing();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2_000 {
        let script = random_script(&mut rng);
        let asm = script.disassemble();
        let complete = script.instructions().all(|ins| ins.is_ok());
        assert_eq!(asm.ends_with(DISASM_ERROR), !complete, "{script:?}");
        if !complete {
            assert!(!script.is_push_only());
        }
        let _ = script.is_normal_payment();
        let _ = script.sig_op_count(true);
        let _ = script.sig_op_count_with_script_sig(&random_script(&mut rng));
    }
}

#[test]
fn test_p2sh_single_byte_perturbations() {
    let base = Script::from_hex(P2SH).unwrap();
    assert!(base.is_pay_to_script_hash());
    let mut rng = StdRng::seed_from_u64(1);
    for pos in [0usize, 1, 22] {
        let mut bytes = base.as_bytes().to_vec();
        bytes[pos] = bytes[pos].wrapping_add(rng.random_range(1..=255));
        assert!(!Script::from(bytes).is_pay_to_script_hash());
    }
    // the hash bytes are free
    let mut bytes = base.as_bytes().to_vec();
    bytes[2..22].fill(0);
    assert!(Script::from(bytes).is_pay_to_script_hash());
    assert!(!Script::from(&base.as_bytes()[..22]).is_pay_to_script_hash());
}

#[test]
fn test_normal_payment_shape() {
    let base = Script::from_hex(P2PKH).unwrap();
    assert!(base.is_normal_payment());
    for pos in [0usize, 1, 23, 24] {
        let mut bytes = base.as_bytes().to_vec();
        bytes[pos] = Opcode::NOP.to_byte();
        assert!(!Script::from(bytes).is_normal_payment(), "byte {pos}");
    }
    let mut longer = base.as_bytes().to_vec();
    longer.push(0x61);
    assert!(!Script::from(longer).is_normal_payment());
}

#[test]
fn test_push_only_variants() {
    let mut b = ScriptBuilder::new();
    b.push_int(0)
        .push_int(-1)
        .push_int(16)
        .push_opcode(Opcode::RESERVED);
    b.push_slice(&[0xaa; 80]).unwrap();
    let pushes = b.build();
    assert!(pushes.is_push_only());

    b.push_opcode(Opcode::DUP).push_int(1);
    assert!(!b.build().is_push_only());
}

#[test]
fn test_disassembly_tokens() {
    let mut b = ScriptBuilder::new();
    b.push_int(1000).push_int(-1000);
    b.push_slice(&[0xde, 0xad, 0xbe, 0xef, 0x01]).unwrap();
    b.push_opcode(Opcode::CHECKSIG);
    assert_eq!(b.build().disassemble(), "1000 -1000 deadbeef01 OP_CHECKSIG");
    assert_eq!(b.build().to_string(), b.build().disassemble());

    let truncated = Script::from_hex("51 4c05 0102").unwrap();
    assert_eq!(truncated.disassemble(), "1 [error]");
}

#[test]
fn test_config_file_roundtrip() {
    use scriptlens_core::config::ClassifierConfig;
    use scriptlens_core::detection::PrefixRange;

    let config = ClassifierConfig {
        bare_multisig_standard: true,
        prefix_ranges: vec![PrefixRange::new(1, 2, "a")],
    };
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), serde_json::to_string_pretty(&config).unwrap()).unwrap();
    assert_eq!(ClassifierConfig::load(file.path()).unwrap(), config);
}
