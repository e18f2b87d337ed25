//! Script number encoding.
//!
//! Numbers are little-endian byte strings with the sign carried in the high bit of the last
//! byte. The empty string is zero.

use scriptlens_utils::errors::NumError;

/// Default maximum operand size for numeric opcodes.
pub const DEFAULT_MAX_NUM_LEN: usize = 4;

/// Widest encoding that still fits an `i64` magnitude.
const MAX_DECODABLE_LEN: usize = 8;

/// Decodes a script number.
///
/// # Arguments
/// * `bytes` - The encoded number.
/// * `max_len` - Maximum accepted length in bytes (clamped to 8).
/// * `require_minimal` - Reject encodings with a redundant trailing byte.
pub fn decode_script_num(
    bytes: &[u8],
    max_len: usize,
    require_minimal: bool,
) -> Result<i64, NumError> {
    let max = max_len.min(MAX_DECODABLE_LEN);
    if bytes.len() > max {
        return Err(NumError::TooLong {
            len: bytes.len(),
            max,
        });
    }
    if require_minimal {
        check_minimal_encoding(bytes)?;
    }

    let Some((&last, _)) = bytes.split_last() else {
        return Ok(0);
    };

    let mut magnitude: u64 = 0;
    for (i, &b) in bytes.iter().enumerate() {
        magnitude |= u64::from(b) << (8 * i);
    }

    let sign_bit = 0x80u64 << (8 * (bytes.len() - 1));
    if last & 0x80 != 0 {
        Ok(-((magnitude & !sign_bit) as i64))
    } else {
        Ok(magnitude as i64)
    }
}

/// Checks that `bytes` is the shortest encoding of its value.
pub fn check_minimal_encoding(bytes: &[u8]) -> Result<(), NumError> {
    let Some((&last, rest)) = bytes.split_last() else {
        return Ok(());
    };
    // A trailing 0x00/0x80 is only allowed when the byte before it needs its high bit.
    if last & 0x7f == 0 && rest.last().is_none_or(|b| b & 0x80 == 0) {
        return Err(NumError::NonMinimal(bytes.to_vec()));
    }
    Ok(())
}

/// Encodes `value` as a minimal script number.
pub fn encode_script_num(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut abs = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_encodings() {
        let cases: &[(i64, &[u8])] = &[
            (0, &[]),
            (1, &[0x01]),
            (-1, &[0x81]),
            (127, &[0x7f]),
            (-127, &[0xff]),
            (128, &[0x80, 0x00]),
            (-128, &[0x80, 0x80]),
            (256, &[0x00, 0x01]),
            (-32768, &[0x00, 0x80, 0x80]),
            (2147483647, &[0xff, 0xff, 0xff, 0x7f]),
        ];
        for (value, bytes) in cases {
            assert_eq!(encode_script_num(*value), *bytes, "encode {value}");
            assert_eq!(
                decode_script_num(bytes, DEFAULT_MAX_NUM_LEN, true).unwrap(),
                *value,
                "decode {bytes:02x?}"
            );
        }
    }

    #[test]
    fn non_minimal_is_accepted_unless_required() {
        assert_eq!(decode_script_num(&[0x01, 0x00], 4, false).unwrap(), 1);
        assert_eq!(decode_script_num(&[0x80], 4, false).unwrap(), 0);
        assert!(matches!(
            decode_script_num(&[0x01, 0x00], 4, true),
            Err(NumError::NonMinimal(_))
        ));
        assert!(matches!(
            decode_script_num(&[0x00], 4, true),
            Err(NumError::NonMinimal(_))
        ));
    }

    #[test]
    fn rejects_oversized_operands() {
        assert_eq!(
            decode_script_num(&[1, 2, 3, 4, 5], 4, false),
            Err(NumError::TooLong { len: 5, max: 4 })
        );
        assert_eq!(
            decode_script_num(&[0; 9], 16, false),
            Err(NumError::TooLong { len: 9, max: 8 })
        );
    }
}
