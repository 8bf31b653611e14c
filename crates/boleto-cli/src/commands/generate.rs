//! Generate command - compute one slip from a JSON record.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use tracing::{debug, info};

use boleto_core::{Boleto, PresenceValidator, RecordValidator, SlipSummary};

use super::config::load_config;

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Slip record (JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Report missing or out-of-range record fields
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub fn run(args: GenerateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Generating slip from {}", args.input.display());
    let boleto = read_record(&args.input)?;

    if args.validate {
        let issues = PresenceValidator::from_config(&config).validate(&boleto);
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let summary = boleto.summary(&config)?;
    let output = format_summary(&summary, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total generation time: {:?}", start.elapsed());

    Ok(())
}

/// Load a slip record from a JSON file.
pub fn read_record(path: &Path) -> anyhow::Result<Boleto> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid record {}: {}", path.display(), e))
}

pub fn format_summary(summary: &SlipSummary, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Csv => format_csv(summary),
        OutputFormat::Text => Ok(format_text(summary)),
    }
}

fn format_csv(summary: &SlipSummary) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "bank",
        "bank_code",
        "our_number",
        "agency_and_assignee",
        "wallet",
        "amount",
        "due_date",
        "payee",
        "payee_document",
        "payee_address",
        "payer",
        "payer_document",
        "payer_address",
        "instructions",
        "barcode",
        "digitable_line",
    ])?;

    wtr.write_record([
        &summary.bank_name,
        &summary.bank_code,
        &summary.our_number,
        &summary.agency_and_assignee,
        &summary.wallet.clone().unwrap_or_default(),
        &summary.amount.map(|a| a.to_string()).unwrap_or_default(),
        &summary.due_date.map(|d| d.to_string()).unwrap_or_default(),
        &summary.payee,
        &summary.payee_document.clone().unwrap_or_default(),
        &summary.payee_address.clone().unwrap_or_default(),
        &summary.payer,
        &summary.payer_document.clone().unwrap_or_default(),
        &summary.payer_address.clone().unwrap_or_default(),
        &summary.instructions.join(" | "),
        &summary.barcode,
        &summary.digitable_line,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Dates as printed on Brazilian slips.
fn slip_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Name followed by the CPF/CNPJ, when known.
fn party(name: &str, document: &Option<String>) -> String {
    match document {
        Some(document) => format!("{} ({})", name, document),
        None => name.to_string(),
    }
}

fn format_text(summary: &SlipSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} | {}\n", summary.bank_code, summary.digitable_line));
    output.push_str(&format!("Bank: {}\n", summary.bank_name));
    output.push_str(&format!("Payment place: {}\n", summary.payment_place));
    output.push('\n');

    output.push_str(&format!("Payee: {}\n", party(&summary.payee, &summary.payee_document)));
    if let Some(address) = &summary.payee_address {
        output.push_str(&format!("Payee address: {}\n", address));
    }
    output.push_str(&format!("Agency / assignee: {}\n", summary.agency_and_assignee));
    output.push_str(&format!("Our number: {}\n", summary.our_number));
    if let Some(wallet) = &summary.wallet {
        output.push_str(&format!("Wallet: {}\n", wallet));
    }
    output.push('\n');

    output.push_str(&format!("Payer: {}\n", party(&summary.payer, &summary.payer_document)));
    if let Some(address) = &summary.payer_address {
        output.push_str(&format!("Payer address: {}\n", address));
    }
    if let Some(date) = summary.document_date {
        output.push_str(&format!("Document date: {}\n", slip_date(date)));
    }
    if let Some(date) = summary.due_date {
        output.push_str(&format!("Due date: {}\n", slip_date(date)));
    }
    match summary.amount {
        Some(amount) => output.push_str(&format!("Amount: {} {}\n", summary.species, amount)),
        None => output.push_str(&format!("Amount: {} (filled in by payer)\n", summary.species)),
    }
    output.push('\n');

    if !summary.instructions.is_empty() {
        output.push_str("Instructions:\n");
        for instruction in &summary.instructions {
            output.push_str(&format!("  {}\n", instruction));
        }
        output.push('\n');
    }

    output.push_str(&format!("Barcode: {}\n", summary.barcode));

    output
}
