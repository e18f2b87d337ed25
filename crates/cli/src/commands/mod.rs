use clap::Subcommand;
use scriptlens_core::Script;
use scriptlens_core::config::ClassifierConfig;
use scriptlens_core::decoder::{SourceType, input_to_bytes};
use scriptlens_core::detection::PrefixTable;
use scriptlens_utils::errors::{ConfigError, DecodeError, PrefixTableError};
use std::borrow::Cow;
use std::error::Error;
use std::path::Path;

pub mod classify;
pub mod decode;
pub mod metrics;
pub mod sigops;

/// The scriptlens subcommands.
#[derive(Subcommand)]
pub enum Cmd {
    /// Decode a script to an instruction listing and disassembly
    Decode(decode::DecodeArgs),

    /// Count signature operations
    Sigops(sigops::SigopsArgs),

    /// Classify an output script by pattern and address prefix
    Classify(classify::ClassifyArgs),

    /// Print all script metrics as JSON
    Metrics(metrics::MetricsArgs),
}

/// A parsed subcommand that can run to completion.
pub trait Command {
    /// Runs the subcommand, printing its result to stdout.
    fn execute(self) -> Result<(), Box<dyn Error>>;
}

impl Command for Cmd {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        match self {
            Cmd::Decode(args) => args.execute(),
            Cmd::Sigops(args) => args.execute(),
            Cmd::Classify(args) => args.execute(),
            Cmd::Metrics(args) => args.execute(),
        }
    }
}

/// Reads a script given as hex, or as `@path` to a file holding hex.
pub fn read_script(input: &str) -> Result<Script, DecodeError> {
    let bytes = match input.strip_prefix('@') {
        Some(path) => input_to_bytes(path, SourceType::File)?,
        None => input_to_bytes(input, SourceType::HexString)?,
    };
    tracing::debug!("read {}-byte script", bytes.len());
    Ok(Script::from(bytes))
}

/// Loads the classifier config from `path`, or the standard preset when none is given.
pub fn load_config(path: Option<&Path>) -> Result<ClassifierConfig, ConfigError> {
    match path {
        Some(path) => ClassifierConfig::load(path),
        None => Ok(ClassifierConfig::standard()),
    }
}

/// The prefix table `config` asks for: its custom ranges, or the compiled-in table.
pub fn prefix_table(
    config: &ClassifierConfig,
) -> Result<Cow<'static, PrefixTable>, PrefixTableError> {
    Ok(match config.custom_table()? {
        Some(table) => Cow::Owned(table),
        None => Cow::Borrowed(PrefixTable::builtin()),
    })
}
