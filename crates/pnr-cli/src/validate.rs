//! # Validate Subcommand
//!
//! Checks a number and reports the verdict through the exit code, so the
//! command composes in shell pipelines.

use anyhow::bail;
use chrono::Utc;
use clap::Args;
use pnr_core::Personnummer;

use crate::CommonArgs;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print nothing; report only through the exit code.
    #[arg(long, short)]
    pub quiet: bool,
}

/// Validate the number; exit status 0 for valid, 1 for invalid.
pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let valid = Personnummer::valid_at(
        args.common.number.as_str(),
        args.common.options(),
        Utc::now(),
    );
    tracing::debug!(number = %args.common.number, valid, "validated");

    if valid {
        if !args.quiet {
            println!("valid");
        }
        Ok(())
    } else {
        if !args.quiet {
            println!("invalid");
        }
        bail!("{} is not a valid personal identity number", args.common.number);
    }
}
