// src/main.rs
mod utils;
mod legislation;
mod document;
mod extractors;
mod rules;
mod report;
mod storage;

use std::path::PathBuf;

use clap::Parser;

use legislation::models::ActReference;
use rules::RuleStatus;
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the Act analysis pipeline
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Local document to analyze (PDF or plain text)
    #[arg(short, long, conflicts_with = "act")]
    input: Option<PathBuf>,

    /// Act to fetch from legislation.gov.uk, as year/chapter (e.g. 2025/22)
    #[arg(short, long)]
    act: Option<String>,

    /// Source label recorded in the report (defaults to the input path or Act URL)
    #[arg(short, long)]
    source: Option<String>,

    /// Output directory for report artifacts
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Also save the normalized full text alongside the report
    #[arg(long)]
    save_fulltext: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting analysis for args: {:?}", args);

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Obtain the raw document text
    let (raw, default_source) = match (&args.input, &args.act) {
        (Some(path), _) => {
            tracing::info!("Reading document from: {}", path.display());
            (
                document::read_document_text(path)?,
                path.display().to_string(),
            )
        }
        (None, Some(reference)) => {
            let act = ActReference::parse(reference)?;
            let bytes = legislation::client::download_act_pdf(&act).await?;
            (document::extract_pdf_text(&bytes)?, act.pdf_url())
        }
        (None, None) => {
            return Err(AppError::Config(
                "Either --input or --act must be given".to_string(),
            ));
        }
    };
    let source = args.source.unwrap_or(default_source);

    if raw.is_empty() {
        tracing::warn!("Extracted text is empty; the report will contain sentinel values only");
    }

    // 5. Normalize
    let text = extractors::normalize(&raw);
    tracing::info!("Normalized text: {} characters", text.len());

    if args.save_fulltext {
        let path = storage.save_fulltext(&text)?;
        tracing::info!("Saved normalized full text to: {}", path.display());
    }

    // 6. Extract the seven report fields
    let sections = extractors::extract_all(&text);

    // 7. Evaluate the compliance checklist
    let checks = rules::run_rule_checks(&sections);
    let passed = checks.iter().filter(|c| c.status == RuleStatus::Pass).count();
    let partial = checks.iter().filter(|c| c.status == RuleStatus::Partial).count();
    let failed = checks.iter().filter(|c| c.status == RuleStatus::Fail).count();
    tracing::info!(
        "Rule checks complete. Pass: {}, Partial: {}, Fail: {}",
        passed,
        partial,
        failed
    );

    // 8. Assemble and persist the report artifacts
    let report = report::assemble(&source, sections, checks);

    let path = storage.save_report(&report)?;
    tracing::info!("Saved report to: {}", path.display());

    let path = storage.save_rule_checks(&report.rule_checks)?;
    tracing::info!("Saved rule checks to: {}", path.display());

    let path = storage.save_summary(&report)?;
    tracing::info!("Saved summary to: {}", path.display());

    Ok(())
}
