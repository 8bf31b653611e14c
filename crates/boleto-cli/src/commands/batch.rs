//! Batch command - compute slips for many record files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, warn};

use boleto_core::{BoletoConfig, SlipSummary};

use super::config::load_config;
use super::generate::{format_summary, read_record, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching JSON records
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single record.
struct ProcessResult {
    path: PathBuf,
    summary: Option<SlipSummary>,
    error: Option<String>,
}

/// One line of the summary CSV.
#[derive(Serialize)]
struct SummaryRow<'a> {
    filename: &'a str,
    status: &'a str,
    bank: &'a str,
    our_number: &'a str,
    amount: String,
    due_date: String,
    barcode: &'a str,
    digitable_line: &'a str,
    error: &'a str,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} records to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match process_single_file(&path, &config) {
            Ok(summary) => {
                results.push(ProcessResult {
                    path,
                    summary: Some(summary),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        summary: None,
                        error: Some(error_msg),
                    });
                } else {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing {} failed: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let successful: Vec<_> = results.iter().filter(|r| r.summary.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        let mut reserved = HashSet::new();
        if args.summary && matches!(args.format, OutputFormat::Csv) {
            reserved.insert("summary".to_string());
        }
        let names = output_stems(successful.iter().map(|r| r.path.as_path()), reserved);

        for (result, output_name) in successful.iter().zip(names) {
            if let Some(summary) = &result.summary {
                let output_path =
                    output_dir.join(format!("{}.{}", output_name, args.format.extension()));

                fs::write(&output_path, format_summary(summary, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} records in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed records:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// One output file stem per record. Records sharing a stem with an earlier one
/// (or with a `reserved` name) get `-2`, `-3`, ... appended.
fn output_stems<'a>(
    paths: impl IntoIterator<Item = &'a Path>,
    mut used: HashSet<String>,
) -> Vec<String> {
    paths
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("boleto");

            let mut name = stem.to_string();
            let mut n = 1;
            while !used.insert(name.clone()) {
                n += 1;
                name = format!("{stem}-{n}");
            }
            if n > 1 {
                warn!("{} is written as {} to avoid a name clash", path.display(), name);
            }
            name
        })
        .collect()
}

fn process_single_file(path: &Path, config: &BoletoConfig) -> anyhow::Result<SlipSummary> {
    let boleto = read_record(path)?;
    Ok(boleto.summary(config)?)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let row = match &result.summary {
            Some(summary) => SummaryRow {
                filename,
                status: "success",
                bank: &summary.bank_name,
                our_number: &summary.our_number,
                amount: summary.amount.map(|a| a.to_string()).unwrap_or_default(),
                due_date: summary.due_date.map(|d| d.to_string()).unwrap_or_default(),
                barcode: &summary.barcode,
                digitable_line: &summary.digitable_line,
                error: "",
            },
            None => SummaryRow {
                filename,
                status: "error",
                bank: "",
                our_number: "",
                amount: String::new(),
                due_date: String::new(),
                barcode: "",
                digitable_line: "",
                error: result.error.as_deref().unwrap_or(""),
            },
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
