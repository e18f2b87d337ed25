/// Module for the `decode` subcommand, which decodes a script to an annotated listing.
///
/// Prints the one-line disassembly followed by one line per instruction with its offset,
/// mnemonic and payload. A truncated push ends the listing with the decode error.
use super::read_script;
use clap::Args;
use std::error::Error;

/// Arguments for the `decode` subcommand.
#[derive(Args)]
pub struct DecodeArgs {
    /// Script as a hex string (0x...) or a file of hex prefixed with @
    pub input: String,
}

impl super::Command for DecodeArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        let script = read_script(&self.input)?;

        println!("{}", script.disassemble());
        for ins in script.instructions() {
            match ins {
                Ok(ins) => println!("{ins}"),
                Err(e) => println!("error: {e}"),
            }
        }
        Ok(())
    }
}
