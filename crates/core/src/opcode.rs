/// Module defining the script opcode enumeration and its display names.
///
/// Every byte value decodes to exactly one `Opcode`. Named opcodes carry their own variant;
/// direct pushes (0x01–0x4b), the small integers OP_1–OP_16 and the expansion no-ops
/// OP_NOP1–OP_NOP10 are folded into parameterised variants, and everything left over lands in
/// `Other`. Parameters are range-checked [`InRange`] values, so every `Opcode` maps back to
/// exactly the byte it was parsed from. Variants whose mnemonic starts with a digit are spelled out (`TWODUP` is
/// `OP_2DUP`, `ONEADD` is `OP_1ADD`).
use std::fmt;

/// Display name returned for any byte outside the defined opcode set.
pub const UNKNOWN_NAME: &str = "OP_UNKNOWN";

/// A byte known to lie in `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InRange<const MIN: u8, const MAX: u8>(u8);

impl<const MIN: u8, const MAX: u8> InRange<MIN, MAX> {
    /// Returns `None` when `value` is outside `MIN..=MAX`.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= MIN && value <= MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The wrapped byte.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl<const MIN: u8, const MAX: u8> fmt::Display for InRange<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload length of a direct push, 1 to 75.
pub type PushLen = InRange<0x01, 0x4b>;
/// Value of OP_1 to OP_16.
pub type SmallInt = InRange<1, 16>;
/// Index of OP_NOP1 to OP_NOP10.
pub type NopIndex = InRange<1, 10>;
/// Byte with no defined opcode.
pub type UndefinedByte = InRange<0xba, 0xfe>;

const SMALL_INT_NAMES: [&str; 17] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
];

const NOP_NAMES: [&str; 11] = [
    UNKNOWN_NAME,
    "OP_NOP1",
    "OP_NOP2",
    "OP_NOP3",
    "OP_NOP4",
    "OP_NOP5",
    "OP_NOP6",
    "OP_NOP7",
    "OP_NOP8",
    "OP_NOP9",
    "OP_NOP10",
];

/// Enumeration of script opcodes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // push value
    ZERO,      // 0x00
    PUSH(PushLen), // 0x01–0x4b, pushes the next n bytes
    PUSHDATA1, // 0x4c
    PUSHDATA2, // 0x4d
    PUSHDATA4, // 0x4e
    ONENEGATE, // 0x4f
    RESERVED,  // 0x50
    NUM(SmallInt), // 0x51–0x60 (OP_1 to OP_16)
    // control
    NOP,      // 0x61
    VER,      // 0x62
    IF,       // 0x63
    NOTIF,    // 0x64
    VERIF,    // 0x65
    VERNOTIF, // 0x66
    ELSE,     // 0x67
    ENDIF,    // 0x68
    VERIFY,   // 0x69
    RETURN,   // 0x6a
    // stack ops
    TOALTSTACK,   // 0x6b
    FROMALTSTACK, // 0x6c
    TWODROP,      // 0x6d
    TWODUP,       // 0x6e
    THREEDUP,     // 0x6f
    TWOOVER,      // 0x70
    TWOROT,       // 0x71
    TWOSWAP,      // 0x72
    IFDUP,        // 0x73
    DEPTH,        // 0x74
    DROP,         // 0x75
    DUP,          // 0x76
    NIP,          // 0x77
    OVER,         // 0x78
    PICK,         // 0x79
    ROLL,         // 0x7a
    ROT,          // 0x7b
    SWAP,         // 0x7c
    TUCK,         // 0x7d
    // splice ops
    CAT,    // 0x7e
    SUBSTR, // 0x7f
    LEFT,   // 0x80
    RIGHT,  // 0x81
    SIZE,   // 0x82
    // bit logic
    INVERT,      // 0x83
    AND,         // 0x84
    OR,          // 0x85
    XOR,         // 0x86
    EQUAL,       // 0x87
    EQUALVERIFY, // 0x88
    RESERVED1,   // 0x89
    RESERVED2,   // 0x8a
    // numeric
    ONEADD,             // 0x8b
    ONESUB,             // 0x8c
    TWOMUL,             // 0x8d
    TWODIV,             // 0x8e
    NEGATE,             // 0x8f
    ABS,                // 0x90
    NOT,                // 0x91
    ZERONOTEQUAL,       // 0x92
    ADD,                // 0x93
    SUB,                // 0x94
    MUL,                // 0x95
    DIV,                // 0x96
    MOD,                // 0x97
    LSHIFT,             // 0x98
    RSHIFT,             // 0x99
    BOOLAND,            // 0x9a
    BOOLOR,             // 0x9b
    NUMEQUAL,           // 0x9c
    NUMEQUALVERIFY,     // 0x9d
    NUMNOTEQUAL,        // 0x9e
    LESSTHAN,           // 0x9f
    GREATERTHAN,        // 0xa0
    LESSTHANOREQUAL,    // 0xa1
    GREATERTHANOREQUAL, // 0xa2
    MIN,                // 0xa3
    MAX,                // 0xa4
    WITHIN,             // 0xa5
    // crypto
    RIPEMD160,           // 0xa6
    SHA1,                // 0xa7
    SHA256,              // 0xa8
    HASH160,             // 0xa9
    HASH256,             // 0xaa
    CODESEPARATOR,       // 0xab
    CHECKSIG,            // 0xac
    CHECKSIGVERIFY,      // 0xad
    CHECKMULTISIG,       // 0xae
    CHECKMULTISIGVERIFY, // 0xaf
    // expansion
    NOPN(NopIndex), // 0xb0–0xb9 (OP_NOP1 to OP_NOP10)
    // never valid in real data
    INVALIDOPCODE, // 0xff
    // Catch-all for undefined bytes
    Other(UndefinedByte),
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Opcode {
    /// Highest opcode that counts as a push for push-only checks (OP_16).
    pub const MAX_PUSH: u8 = 0x60;

    /// Parses a raw byte into an `Opcode`.
    ///
    /// # Examples
    /// ```rust,ignore
    /// assert_eq!(Opcode::parse(0x76), Opcode::DUP);
    /// assert_eq!(Opcode::parse(0x53).small_int(), Some(3));
    /// ```
    pub const fn parse(byte: u8) -> Self {
        use Opcode::*;

        match byte {
            0x00 => ZERO,
            0x01..=0x4b => PUSH(InRange(byte)),
            0x4c => PUSHDATA1,
            0x4d => PUSHDATA2,
            0x4e => PUSHDATA4,
            0x4f => ONENEGATE,
            0x50 => RESERVED,
            0x51..=0x60 => NUM(InRange(byte - 0x50)),
            0x61 => NOP,
            0x62 => VER,
            0x63 => IF,
            0x64 => NOTIF,
            0x65 => VERIF,
            0x66 => VERNOTIF,
            0x67 => ELSE,
            0x68 => ENDIF,
            0x69 => VERIFY,
            0x6a => RETURN,
            0x6b => TOALTSTACK,
            0x6c => FROMALTSTACK,
            0x6d => TWODROP,
            0x6e => TWODUP,
            0x6f => THREEDUP,
            0x70 => TWOOVER,
            0x71 => TWOROT,
            0x72 => TWOSWAP,
            0x73 => IFDUP,
            0x74 => DEPTH,
            0x75 => DROP,
            0x76 => DUP,
            0x77 => NIP,
            0x78 => OVER,
            0x79 => PICK,
            0x7a => ROLL,
            0x7b => ROT,
            0x7c => SWAP,
            0x7d => TUCK,
            0x7e => CAT,
            0x7f => SUBSTR,
            0x80 => LEFT,
            0x81 => RIGHT,
            0x82 => SIZE,
            0x83 => INVERT,
            0x84 => AND,
            0x85 => OR,
            0x86 => XOR,
            0x87 => EQUAL,
            0x88 => EQUALVERIFY,
            0x89 => RESERVED1,
            0x8a => RESERVED2,
            0x8b => ONEADD,
            0x8c => ONESUB,
            0x8d => TWOMUL,
            0x8e => TWODIV,
            0x8f => NEGATE,
            0x90 => ABS,
            0x91 => NOT,
            0x92 => ZERONOTEQUAL,
            0x93 => ADD,
            0x94 => SUB,
            0x95 => MUL,
            0x96 => DIV,
            0x97 => MOD,
            0x98 => LSHIFT,
            0x99 => RSHIFT,
            0x9a => BOOLAND,
            0x9b => BOOLOR,
            0x9c => NUMEQUAL,
            0x9d => NUMEQUALVERIFY,
            0x9e => NUMNOTEQUAL,
            0x9f => LESSTHAN,
            0xa0 => GREATERTHAN,
            0xa1 => LESSTHANOREQUAL,
            0xa2 => GREATERTHANOREQUAL,
            0xa3 => MIN,
            0xa4 => MAX,
            0xa5 => WITHIN,
            0xa6 => RIPEMD160,
            0xa7 => SHA1,
            0xa8 => SHA256,
            0xa9 => HASH160,
            0xaa => HASH256,
            0xab => CODESEPARATOR,
            0xac => CHECKSIG,
            0xad => CHECKSIGVERIFY,
            0xae => CHECKMULTISIG,
            0xaf => CHECKMULTISIGVERIFY,
            0xb0..=0xb9 => NOPN(InRange(byte - 0xaf)),
            0xff => INVALIDOPCODE,
            other => Other(InRange(other)),
        }
    }

    /// Converts the opcode to its byte representation.
    pub const fn to_byte(&self) -> u8 {
        use Opcode::*;

        match self {
            ZERO => 0x00,
            PUSH(n) => n.get(),
            PUSHDATA1 => 0x4c,
            PUSHDATA2 => 0x4d,
            PUSHDATA4 => 0x4e,
            ONENEGATE => 0x4f,
            RESERVED => 0x50,
            NUM(n) => 0x50 + n.get(),
            NOP => 0x61,
            VER => 0x62,
            IF => 0x63,
            NOTIF => 0x64,
            VERIF => 0x65,
            VERNOTIF => 0x66,
            ELSE => 0x67,
            ENDIF => 0x68,
            VERIFY => 0x69,
            RETURN => 0x6a,
            TOALTSTACK => 0x6b,
            FROMALTSTACK => 0x6c,
            TWODROP => 0x6d,
            TWODUP => 0x6e,
            THREEDUP => 0x6f,
            TWOOVER => 0x70,
            TWOROT => 0x71,
            TWOSWAP => 0x72,
            IFDUP => 0x73,
            DEPTH => 0x74,
            DROP => 0x75,
            DUP => 0x76,
            NIP => 0x77,
            OVER => 0x78,
            PICK => 0x79,
            ROLL => 0x7a,
            ROT => 0x7b,
            SWAP => 0x7c,
            TUCK => 0x7d,
            CAT => 0x7e,
            SUBSTR => 0x7f,
            LEFT => 0x80,
            RIGHT => 0x81,
            SIZE => 0x82,
            INVERT => 0x83,
            AND => 0x84,
            OR => 0x85,
            XOR => 0x86,
            EQUAL => 0x87,
            EQUALVERIFY => 0x88,
            RESERVED1 => 0x89,
            RESERVED2 => 0x8a,
            ONEADD => 0x8b,
            ONESUB => 0x8c,
            TWOMUL => 0x8d,
            TWODIV => 0x8e,
            NEGATE => 0x8f,
            ABS => 0x90,
            NOT => 0x91,
            ZERONOTEQUAL => 0x92,
            ADD => 0x93,
            SUB => 0x94,
            MUL => 0x95,
            DIV => 0x96,
            MOD => 0x97,
            LSHIFT => 0x98,
            RSHIFT => 0x99,
            BOOLAND => 0x9a,
            BOOLOR => 0x9b,
            NUMEQUAL => 0x9c,
            NUMEQUALVERIFY => 0x9d,
            NUMNOTEQUAL => 0x9e,
            LESSTHAN => 0x9f,
            GREATERTHAN => 0xa0,
            LESSTHANOREQUAL => 0xa1,
            GREATERTHANOREQUAL => 0xa2,
            MIN => 0xa3,
            MAX => 0xa4,
            WITHIN => 0xa5,
            RIPEMD160 => 0xa6,
            SHA1 => 0xa7,
            SHA256 => 0xa8,
            HASH160 => 0xa9,
            HASH256 => 0xaa,
            CODESEPARATOR => 0xab,
            CHECKSIG => 0xac,
            CHECKSIGVERIFY => 0xad,
            CHECKMULTISIG => 0xae,
            CHECKMULTISIGVERIFY => 0xaf,
            NOPN(n) => 0xaf + n.get(),
            INVALIDOPCODE => 0xff,
            Other(byte) => byte.get(),
        }
    }

    /// Returns the canonical display name of the opcode.
    ///
    /// Push values render as their number ("0", "-1", "1" … "16"); direct-push length bytes and
    /// undefined bytes render as [`UNKNOWN_NAME`].
    pub fn name(&self) -> &'static str {
        use Opcode::*;

        match self {
            // push value
            ZERO => "0",
            PUSHDATA1 => "OP_PUSHDATA1",
            PUSHDATA2 => "OP_PUSHDATA2",
            PUSHDATA4 => "OP_PUSHDATA4",
            ONENEGATE => "-1",
            RESERVED => "OP_RESERVED",
            NUM(n) => SMALL_INT_NAMES
                .get(n.get() as usize)
                .copied()
                .unwrap_or(UNKNOWN_NAME),

            // control
            NOP => "OP_NOP",
            VER => "OP_VER",
            IF => "OP_IF",
            NOTIF => "OP_NOTIF",
            VERIF => "OP_VERIF",
            VERNOTIF => "OP_VERNOTIF",
            ELSE => "OP_ELSE",
            ENDIF => "OP_ENDIF",
            VERIFY => "OP_VERIFY",
            RETURN => "OP_RETURN",

            // stack ops
            TOALTSTACK => "OP_TOALTSTACK",
            FROMALTSTACK => "OP_FROMALTSTACK",
            TWODROP => "OP_2DROP",
            TWODUP => "OP_2DUP",
            THREEDUP => "OP_3DUP",
            TWOOVER => "OP_2OVER",
            TWOROT => "OP_2ROT",
            TWOSWAP => "OP_2SWAP",
            IFDUP => "OP_IFDUP",
            DEPTH => "OP_DEPTH",
            DROP => "OP_DROP",
            DUP => "OP_DUP",
            NIP => "OP_NIP",
            OVER => "OP_OVER",
            PICK => "OP_PICK",
            ROLL => "OP_ROLL",
            ROT => "OP_ROT",
            SWAP => "OP_SWAP",
            TUCK => "OP_TUCK",

            // splice ops
            CAT => "OP_CAT",
            SUBSTR => "OP_SUBSTR",
            LEFT => "OP_LEFT",
            RIGHT => "OP_RIGHT",
            SIZE => "OP_SIZE",

            // bit logic
            INVERT => "OP_INVERT",
            AND => "OP_AND",
            OR => "OP_OR",
            XOR => "OP_XOR",
            EQUAL => "OP_EQUAL",
            EQUALVERIFY => "OP_EQUALVERIFY",
            RESERVED1 => "OP_RESERVED1",
            RESERVED2 => "OP_RESERVED2",

            // numeric
            ONEADD => "OP_1ADD",
            ONESUB => "OP_1SUB",
            TWOMUL => "OP_2MUL",
            TWODIV => "OP_2DIV",
            NEGATE => "OP_NEGATE",
            ABS => "OP_ABS",
            NOT => "OP_NOT",
            ZERONOTEQUAL => "OP_0NOTEQUAL",
            ADD => "OP_ADD",
            SUB => "OP_SUB",
            MUL => "OP_MUL",
            DIV => "OP_DIV",
            MOD => "OP_MOD",
            LSHIFT => "OP_LSHIFT",
            RSHIFT => "OP_RSHIFT",
            BOOLAND => "OP_BOOLAND",
            BOOLOR => "OP_BOOLOR",
            NUMEQUAL => "OP_NUMEQUAL",
            NUMEQUALVERIFY => "OP_NUMEQUALVERIFY",
            NUMNOTEQUAL => "OP_NUMNOTEQUAL",
            LESSTHAN => "OP_LESSTHAN",
            GREATERTHAN => "OP_GREATERTHAN",
            LESSTHANOREQUAL => "OP_LESSTHANOREQUAL",
            GREATERTHANOREQUAL => "OP_GREATERTHANOREQUAL",
            MIN => "OP_MIN",
            MAX => "OP_MAX",
            WITHIN => "OP_WITHIN",

            // crypto
            RIPEMD160 => "OP_RIPEMD160",
            SHA1 => "OP_SHA1",
            SHA256 => "OP_SHA256",
            HASH160 => "OP_HASH160",
            HASH256 => "OP_HASH256",
            CODESEPARATOR => "OP_CODESEPARATOR",
            CHECKSIG => "OP_CHECKSIG",
            CHECKSIGVERIFY => "OP_CHECKSIGVERIFY",
            CHECKMULTISIG => "OP_CHECKMULTISIG",
            CHECKMULTISIGVERIFY => "OP_CHECKMULTISIGVERIFY",

            // expansion
            NOPN(n) => NOP_NAMES
                .get(n.get() as usize)
                .copied()
                .unwrap_or(UNKNOWN_NAME),

            INVALIDOPCODE => "OP_INVALIDOPCODE",

            // Direct-push length bytes and the solver's template placeholders are not named
            // opcodes; they fall through here together with undefined bytes.
            PUSH(_) | Other(_) => UNKNOWN_NAME,
        }
    }

    /// Returns `true` if the opcode is at most OP_16, i.e. a value push (OP_RESERVED included).
    pub const fn is_push(&self) -> bool {
        self.to_byte() <= Self::MAX_PUSH
    }

    /// Returns `true` for OP_0 through OP_PUSHDATA4, the opcodes that carry a payload.
    pub const fn carries_data(&self) -> bool {
        self.to_byte() <= 0x4e
    }

    /// Returns the value of OP_1 through OP_16.
    pub const fn small_int(&self) -> Option<u8> {
        match self {
            Opcode::NUM(n) => Some(n.get()),
            _ => None,
        }
    }

    /// Returns the opcode pushing the small integer `n` (0 to 16).
    pub const fn from_small_int(n: u8) -> Option<Self> {
        match n {
            0 => Some(Opcode::ZERO),
            1..=16 => Some(Opcode::NUM(InRange(n))),
            _ => None,
        }
    }
}

/// Returns the display name of a raw opcode byte.
pub fn op_name(byte: u8) -> &'static str {
    Opcode::parse(byte).name()
}
