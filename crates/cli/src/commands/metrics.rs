/// Module for the `metrics` subcommand, which prints every script fact as pretty JSON.
use super::{load_config, prefix_table, read_script};
use clap::Args;
use scriptlens_analysis::metrics::collect_metrics;
use scriptlens_core::detection::ScriptClassifier;
use std::error::Error;
use std::path::PathBuf;

/// Arguments for the `metrics` subcommand.
#[derive(Args)]
pub struct MetricsArgs {
    /// Script as a hex string (0x...) or a file of hex prefixed with @
    pub input: String,

    /// Spending script for the pay-to-script-hash aware sigop count
    #[arg(long)]
    script_sig: Option<String>,

    /// JSON classifier config
    #[arg(long)]
    config: Option<PathBuf>,
}

impl super::Command for MetricsArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        let script = read_script(&self.input)?;
        let script_sig = self.script_sig.as_deref().map(read_script).transpose()?;
        let config = load_config(self.config.as_deref())?;

        let table = prefix_table(&config)?;
        let classifier = ScriptClassifier::new(&table, &config);

        let metrics = collect_metrics(&script, &classifier, script_sig.as_ref());
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        Ok(())
    }
}
