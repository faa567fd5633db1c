//! Process command - extract the total from a single invoice file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use payable_core::models::config::PayableConfig;
use payable_core::{ExtractionResult, InvoiceScanner, PdfExtractor, TotalExtractor};

use super::config::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// Format named in the configuration file, falling back to text.
    pub fn from_config(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Text,
        }
    }

    /// File extension for outputs in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let result = extract_file(&args.input, &config)?;
    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.format));
    let output = format_result(&result, format, config.output.show_candidates_count)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read and scan one PDF file.
pub fn extract_file(path: &Path, config: &PayableConfig) -> anyhow::Result<ExtractionResult> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    let data = fs::read(path)?;
    let parser = PdfExtractor::with_config(config.pdf.clone());

    InvoiceScanner::new()
        .extract(&parser, &data)
        .map_err(|e| anyhow::anyhow!("Error reading PDF: {}", e))
}

pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    show_candidates_count: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)? + "\n"),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result, show_candidates_count)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["amount", "currency", "page", "label"])?;

    let currency = result.currency.map(|c| c.as_str()).unwrap_or("");
    match &result.total {
        Some(total) => {
            let page = total.page.to_string();
            wtr.write_record([total.amount.as_str(), currency, page.as_str(), total.label.as_str()])?
        }
        None => wtr.write_record(["", currency, "", ""])?,
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult, show_candidates_count: bool) -> String {
    let mut output = String::new();

    if let Some(total) = &result.total {
        match result.currency {
            Some(currency) => {
                output.push_str(&format!("Total Amount: {} {}\n", currency, total.amount))
            }
            None => output.push_str(&format!("Total Amount: {}\n", total.amount)),
        }
        output.push_str(&format!(
            "Found on page {}, labeled: '{}'\n",
            total.page, total.label
        ));
    }

    for note in result.notes() {
        output.push_str(&note);
        output.push('\n');
    }

    if show_candidates_count {
        output.push_str(&format!(
            "Candidates considered: {} across {} pages\n",
            result.candidate_count, result.page_count
        ));
    }

    output
}
