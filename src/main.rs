use anyhow::Result;
use clap::{Parser, ValueEnum};
use config::VerifyConfig;
use loader::{InputResolver, ResolvedInputs};
use processor::{CatalogExtractor, Comparator, ListingExtractor, UrlValidator};
use report::{Verdict, VerificationReport};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod loader;
mod models;
mod processor;
mod report;

/// Exit status for a report with a failed verdict under `--strict`
const STRICT_FAILURE: u8 = 2;

/// Check that every article in a seller's JSON listing appears in the
/// rendered catalog page with a well-formed URL.
#[derive(Debug, Parser)]
#[command(name = "verify_articles", version)]
struct Args {
    /// Seller ID; discovered from a `<digits>.json` file in DIR when omitted
    seller_id: Option<String>,

    /// Catalog page to check (defaults to DIR/index.htm); a path given here
    /// is used as is, relative to the current directory rather than DIR
    index_path: Option<PathBuf>,

    /// Directory holding the seller JSON and the default catalog page
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// TOML configuration file (defaults to DIR/verify.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Exit with a non-zero status when verification fails
    #[arg(long)]
    strict: bool,

    /// Show per-item extraction diagnostics
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    init_logging(args.verbose);

    let config = VerifyConfig::resolve(args.config.as_deref(), &args.dir)?;
    let resolver = InputResolver::new(&args.dir, &config.catalog.default_index);
    let inputs = resolver.resolve(args.seller_id.clone(), args.index_path.clone())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.format == ReportFormat::Text {
        writeln!(out, "Verifying articles for seller ID: {}", inputs.seller_id)?;
        writeln!(out, "Using index file: {}", inputs.index_path.display())?;
    }

    let report = run_verification(&inputs, &config)?;

    match args.format {
        ReportFormat::Text => report.write_text(&mut out)?,
        ReportFormat::Json => report.write_json(&mut out)?,
    }
    out.flush()?;

    if report.verdict == Verdict::Failed {
        warn!("Verification failed for seller {}", inputs.seller_id);
    }

    Ok(ExitCode::from(exit_status(report.verdict, args.strict)))
}

/// A failed verdict only changes the exit status under `--strict`
fn exit_status(verdict: Verdict, strict: bool) -> u8 {
    match verdict {
        Verdict::Failed if strict => STRICT_FAILURE,
        _ => 0,
    }
}

/// Logs go to stderr so stdout carries only the report
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn run_verification(inputs: &ResolvedInputs, config: &VerifyConfig) -> Result<VerificationReport> {
    let listing_extractor = ListingExtractor::new();
    let catalog_extractor = CatalogExtractor::new(&config.catalog)?;
    let validator = UrlValidator::new(&config.site)?;

    let document = loader::load_seller_json(&inputs.seller_json)?;
    let listed = listing_extractor.extract_articles(&document);

    let html = loader::load_catalog_html(&inputs.index_path)?;
    let indexed = catalog_extractor.extract_articles(&html);

    info!(
        "Comparing {} listed articles against {} catalog articles",
        listed.len(),
        indexed.len()
    );

    let comparison = Comparator::new(&validator).compare(&listed, &indexed);

    Ok(VerificationReport::new(
        inputs.seller_id.as_str(),
        index_name(&inputs.index_path),
        listed.len(),
        indexed.len(),
        comparison,
    ))
}

fn index_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
