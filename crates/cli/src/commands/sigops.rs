use super::read_script;
use clap::Args;
use std::error::Error;

/// Arguments for the `sigops` subcommand.
#[derive(Args)]
pub struct SigopsArgs {
    /// Script as a hex string (0x...) or a file of hex prefixed with @
    pub input: String,

    /// Count every multisig at the maximum key count
    #[arg(long, conflicts_with = "script_sig")]
    legacy: bool,

    /// Spending script, used to unwrap a pay-to-script-hash redeem script
    #[arg(long)]
    script_sig: Option<String>,
}

impl super::Command for SigopsArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        let script = read_script(&self.input)?;

        let count = match &self.script_sig {
            Some(sig) => script.sig_op_count_with_script_sig(&read_script(sig)?),
            None => script.sig_op_count(!self.legacy),
        };
        println!("{count}");
        Ok(())
    }
}
