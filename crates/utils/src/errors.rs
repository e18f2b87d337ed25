use thiserror::Error;

/// Custom error type for decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The cursor is already at (or past) the end of the script.
    #[error("no opcode at offset {0}: end of script")]
    EndOfScript(usize),

    /// A PUSHDATA opcode is cut off before its length prefix is complete.
    #[error("length prefix of push at offset {pc} needs {needed} bytes, {available} available")]
    TruncatedLength {
        pc: usize,
        needed: usize,
        available: usize,
    },

    /// The declared push payload runs past the end of the script.
    #[error("push at offset {pc} declares {declared} bytes, {available} available")]
    TruncatedPush {
        pc: usize,
        declared: usize,
        available: usize,
    },

    /// The input is not valid hex.
    #[error("hex decode failed: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// The input file could not be read.
    #[error("could not read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised when interpreting push data as a script number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumError {
    /// The operand is longer than the allowed maximum.
    #[error("numeric value is {len} bytes, maximum is {max}")]
    TooLong { len: usize, max: usize },
    /// The operand carries a redundant trailing byte.
    #[error("numeric value {0:02x?} is not minimally encoded")]
    NonMinimal(Vec<u8>),
}

/// Errors that can occur while building a script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The payload does not fit any push encoding (more than `u32::MAX` bytes).
    #[error("push payload of {0} bytes is too large")]
    PushTooLarge(usize),
}

/// Errors reported while validating an address-prefix range table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefixTableError {
    /// A range with `start > end`.
    #[error("range {index} ends before it starts ({start:#010x} > {end:#010x})")]
    Inverted { index: usize, start: u32, end: u32 },
    /// A range starting before its predecessor.
    #[error("range {index} is not sorted by start")]
    Unsorted { index: usize },
    /// A range starting inside its predecessor.
    #[error("range {index} overlaps the previous range at {at:#010x}")]
    Overlap { index: usize, at: u32 },
}

/// Errors that can occur when loading classifier configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("could not read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The config is not valid JSON for `ClassifierConfig`.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// The configured prefix ranges do not form a valid table.
    #[error("invalid prefix table: {0}")]
    PrefixTable(#[from] PrefixTableError),
}
