//! # Inspect Subcommand
//!
//! Prints the parsed fields of a valid number, as aligned text or JSON.

use anyhow::Context;
use chrono::Utc;
use clap::Args;
use pnr_core::Personnummer;

use crate::CommonArgs;

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Emit a JSON object instead of aligned text.
    #[arg(long)]
    pub json: bool,
}

/// Print the parsed fields of the number.
pub fn run(args: &InspectArgs) -> anyhow::Result<()> {
    let now = Utc::now();
    let pnr = Personnummer::parse_at(args.common.number.as_str(), args.common.options(), now)
        .with_context(|| format!("cannot inspect {}", args.common.number))?;

    if args.json {
        let value = serde_json::json!({
            "short_format": pnr.format(false),
            "long_format": pnr.format(true),
            "birth_date": pnr.birth_date().to_string(),
            "age": pnr.age_at(now),
            "sex": if pnr.is_male() { "male" } else { "female" },
            "coordination_number": pnr.is_coordination_number(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("short format:        {}", pnr.format(false));
        println!("long format:         {}", pnr.format(true));
        println!("birth date:          {}", pnr.birth_date());
        println!("age:                 {}", pnr.age_at(now));
        println!("sex:                 {}", if pnr.is_male() { "male" } else { "female" });
        println!(
            "coordination number: {}",
            if pnr.is_coordination_number() { "yes" } else { "no" }
        );
    }

    Ok(())
}
