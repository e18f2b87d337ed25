use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scriptlens_core::Opcode;
use scriptlens_core::decoder::{Instructions, SourceType, decode_op, input_to_bytes};
use scriptlens_core::opcode::{UNKNOWN_NAME, op_name};
use scriptlens_utils::errors::DecodeError;
use std::io::Write;

fn random_script(rng: &mut StdRng, max_len: usize) -> Vec<u8> {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| rng.random::<u8>()).collect()
}

#[test]
fn test_every_byte_has_a_name() {
    for byte in 0..=u8::MAX {
        let name = op_name(byte);
        assert!(!name.is_empty());
        assert_eq!(Opcode::parse(byte).to_byte(), byte);
        match byte {
            0x00 => assert_eq!(name, "0"),
            0x01..=0x4b => assert_eq!(name, UNKNOWN_NAME),
            0x4f => assert_eq!(name, "-1"),
            0x51..=0x60 => assert_eq!(name, (byte - 0x50).to_string()),
            0xba..=0xfe => assert_eq!(name, UNKNOWN_NAME),
            0xff => assert_eq!(name, "OP_INVALIDOPCODE"),
            _ => assert!(name.starts_with("OP_"), "{byte:#04x} -> {name}"),
        }
    }
}

#[test]
fn test_known_names() {
    assert_eq!(op_name(0x4c), "OP_PUSHDATA1");
    assert_eq!(op_name(0x50), "OP_RESERVED");
    assert_eq!(op_name(0x6e), "OP_2DUP");
    assert_eq!(op_name(0x8b), "OP_1ADD");
    assert_eq!(op_name(0xa9), "OP_HASH160");
    assert_eq!(op_name(0xae), "OP_CHECKMULTISIG");
    assert_eq!(op_name(0xb9), "OP_NOP10");
}

#[test]
fn test_random_scripts_never_overrun() {
    crate::init_tracing();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2_000 {
        let bytes = random_script(&mut rng, 96);
        let mut end = 0;
        let mut failed = false;
        for ins in Instructions::new(&bytes, 0) {
            match ins {
                Ok(ins) => {
                    assert_eq!(ins.pc, end);
                    assert!(ins.pc < bytes.len());
                    end = ins.pc + 1 + ins.data.len();
                    if ins.opcode == Opcode::PUSHDATA1 {
                        end += 1;
                    } else if ins.opcode == Opcode::PUSHDATA2 {
                        end += 2;
                    } else if ins.opcode == Opcode::PUSHDATA4 {
                        end += 4;
                    }
                    assert!(end <= bytes.len());
                }
                Err(_) => failed = true,
            }
        }
        if !failed {
            assert_eq!(end, bytes.len());
        }
    }
}

#[test]
fn test_decode_op_errors_leave_cursor() {
    let cases: [(&[u8], fn(&DecodeError) -> bool); 4] = [
        (&[0x03, 0x01], |e| matches!(e, DecodeError::TruncatedPush { declared: 3, .. })),
        (&[0x4c], |e| matches!(e, DecodeError::TruncatedLength { needed: 1, .. })),
        (&[0x4d, 0x01], |e| matches!(e, DecodeError::TruncatedLength { needed: 2, .. })),
        (&[0x4e, 0x05, 0x00, 0x00, 0x00, 0x01], |e| {
            matches!(e, DecodeError::TruncatedPush { declared: 5, available: 1, .. })
        }),
    ];
    for (bytes, check) in cases {
        let mut pc = 0;
        let err = decode_op(bytes, &mut pc).unwrap_err();
        assert!(check(&err), "{bytes:02x?}: {err}");
        assert_eq!(pc, 0);
    }
}

#[test]
fn test_listing_format() {
    let bytes = hex::decode("76a90201024c0103ac").unwrap();
    let lines: Vec<String> = Instructions::new(&bytes, 0)
        .map(|ins| ins.unwrap().to_string())
        .collect();
    assert_eq!(lines[0], "000000  OP_DUP");
    assert_eq!(lines[2], "000002  PUSHBYTES_2  0102");
    assert_eq!(lines[3], "000005  OP_PUSHDATA1 03");
    assert_eq!(lines[4], "000008  OP_CHECKSIG");
}

#[test]
fn test_input_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0x76 a9\n14").unwrap();
    let path = file.path().to_str().unwrap();
    assert_eq!(
        input_to_bytes(path, SourceType::File).unwrap(),
        vec![0x76, 0xa9, 0x14]
    );
    assert!(matches!(
        input_to_bytes("/nonexistent/script.hex", SourceType::File),
        Err(DecodeError::FileRead { .. })
    ));
    assert!(matches!(
        input_to_bytes("abc", SourceType::HexString),
        Err(DecodeError::HexDecode(_))
    ));
}
