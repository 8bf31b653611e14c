//! Line command - convert between barcode and linha digitável.

use clap::Args;
use tracing::{debug, warn};

use boleto_core::{barcode_from_digitable_line, digitable_line};

/// Arguments for the line command.
#[derive(Args)]
pub struct LineArgs {
    /// 44-digit barcode, or a linha digitável with --reverse
    #[arg(required = true)]
    input: String,

    /// Parse a linha digitável back into its barcode
    #[arg(short, long)]
    reverse: bool,
}

pub fn run(args: LineArgs) -> anyhow::Result<()> {
    if args.reverse {
        let barcode = barcode_from_digitable_line(&args.input)?;
        debug!(bank = barcode.bank_code(), "Parsed linha digitável");
        println!("{}", barcode);
        return Ok(());
    }

    let line = digitable_line(&args.input);
    if line.is_empty() {
        warn!("Not a 44-digit barcode: {:?}", args.input);
    }
    println!("{}", line);

    Ok(())
}
