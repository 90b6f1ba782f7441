//! # Format Subcommand
//!
//! Re-renders a valid number in one of the two canonical forms.

use anyhow::Context;
use chrono::Utc;
use clap::Args;
use pnr_core::Personnummer;

use crate::CommonArgs;

/// Arguments for the format subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the 12-digit long form instead of the short form.
    #[arg(long)]
    pub long: bool,
}

/// Print the canonical rendering of the number.
pub fn run(args: &FormatArgs) -> anyhow::Result<()> {
    let pnr = Personnummer::parse_at(
        args.common.number.as_str(),
        args.common.options(),
        Utc::now(),
    )
    .with_context(|| format!("cannot format {}", args.common.number))?;

    println!("{}", pnr.format(args.long));
    Ok(())
}
