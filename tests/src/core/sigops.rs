use scriptlens_core::Opcode;
use scriptlens_core::Script;
use scriptlens_core::builder::ScriptBuilder;
use scriptlens_core::sigops::{MAX_PUBKEYS_PER_MULTISIG, count_p2sh_sigops, count_sigops};

// The hash is never checked when counting.
fn p2sh_output() -> Script {
    let mut b = ScriptBuilder::new();
    b.push_opcode(Opcode::HASH160);
    b.push_slice(&[0x5a; 20]).unwrap();
    b.push_opcode(Opcode::EQUAL);
    b.into_script()
}

fn spend(redeem: &Script) -> Script {
    let mut b = ScriptBuilder::new();
    b.push_int(0);
    b.push_slice(&[0x30; 72]).unwrap();
    b.push_slice(redeem.as_bytes()).unwrap();
    b.into_script()
}

#[test]
fn test_declared_key_count() {
    for n in 1..=16u8 {
        let mut b = ScriptBuilder::new();
        b.push_int(i64::from(n)).push_opcode(Opcode::CHECKMULTISIG);
        let s = b.into_script();
        assert_eq!(count_sigops(&s, true), u32::from(n));
        assert_eq!(count_sigops(&s, false), MAX_PUBKEYS_PER_MULTISIG);
    }
}

#[test]
fn test_p2sh_redeem_script_is_counted() {
    let mut b = ScriptBuilder::new();
    b.push_int(2);
    for key in [[0x02; 33], [0x03; 33], [0x02; 33]] {
        b.push_slice(&key).unwrap();
    }
    b.push_int(3).push_opcode(Opcode::CHECKMULTISIG);
    let redeem = b.into_script();

    let spk = p2sh_output();
    assert!(spk.is_pay_to_script_hash());
    assert_eq!(count_sigops(&spk, true), 0);
    assert_eq!(count_p2sh_sigops(&spk, &spend(&redeem)), 3);
    assert_eq!(spk.sig_op_count_with_script_sig(&spend(&redeem)), 3);
}

#[test]
fn test_p2sh_redeem_is_not_unwrapped_twice() {
    // The redeem script is itself P2SH-shaped; it is counted once, not unwrapped again.
    let inner = Script::from_hex("a914e2a623699e81b291c0327f408fea765d534baa2a87").unwrap();
    let spk = p2sh_output();
    assert_eq!(count_p2sh_sigops(&spk, &spend(&inner)), 0);
}

#[test]
fn test_script_sig_with_non_push_counts_zero() {
    let redeem = Script::from_hex("ac").unwrap();
    let spk = p2sh_output();
    let mut sig = spend(&redeem).as_bytes().to_vec();
    sig.insert(0, Opcode::NOP.to_byte());
    assert_eq!(count_p2sh_sigops(&spk, &Script::from(sig)), 0);
}

#[test]
fn test_long_scripts_accumulate() {
    // 0xae repeated: each OP_CHECKMULTISIG without a preceding small int counts 20
    let s = Script::from(vec![0xae; 10_000]);
    assert_eq!(count_sigops(&s, true), 200_000);
}
