use super::{load_config, prefix_table, read_script};
use clap::Args;
use scriptlens_core::detection::ScriptClassifier;
use std::error::Error;
use std::path::PathBuf;

/// Arguments for the `classify` subcommand.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Script as a hex string (0x...) or a file of hex prefixed with @
    pub input: String,

    /// JSON classifier config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Accept bare multisig outputs as standard
    #[arg(long)]
    bare_multisig_standard: bool,
}

impl super::Command for ClassifyArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        let script = read_script(&self.input)?;
        let mut config = load_config(self.config.as_deref())?;
        if self.bare_multisig_standard {
            config.bare_multisig_standard = true;
        }

        let table = prefix_table(&config)?;
        let classifier = ScriptClassifier::new(&table, &config);

        println!("{}", classifier.classify(&script));
        Ok(())
    }
}
