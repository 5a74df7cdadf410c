//! causelist CLI
//!
//! Local entry point for cause-list downloads and CNR lookups. For the web
//! front-end, use `causelist-web`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::Parser;

use causelist::{
    error::Result,
    models::{parse_request_date, CaseType, CauseListRequest, Config},
    pipeline,
    storage::OutputStore,
    utils::http,
};

/// eCourts Cause List & Case Details Scraper
#[derive(Parser, Debug)]
#[command(
    name = "causelist",
    version,
    about = "eCourts Cause List & Case Details Scraper"
)]
struct Cli {
    /// Fetch today's cause list
    #[arg(long)]
    today: bool,

    /// Fetch tomorrow's cause list
    #[arg(long)]
    tomorrow: bool,

    /// Fetch case details by CNR number
    #[arg(long, value_name = "CNR")]
    cnr: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Read one trimmed line from stdin after printing a prompt.
fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Collect the five request parameters that are independent of the date.
///
/// Returns None (after logging a warning) when the case type is invalid.
fn prompt_request_base() -> Result<Option<(String, String, String, Option<String>, CaseType)>> {
    let state = prompt("Enter State Name")?;
    let district = prompt("Enter District Name")?;
    let complex_name = prompt("Enter Court Complex Name")?;
    let court_input = prompt("Enter Court Name (press Enter to download all courts)")?;
    let court_name = Some(court_input).filter(|s| !s.is_empty());

    let case_type = match prompt("Enter Case Type (Civil or Criminal)")?.parse::<CaseType>() {
        Ok(case_type) => case_type,
        Err(_) => {
            log::warn!("Invalid Case Type. Please enter either 'Civil' or 'Criminal'.");
            return Ok(None);
        }
    };

    Ok(Some((state, district, complex_name, court_name, case_type)))
}

async fn run_cause_list(
    config: &Arc<Config>,
    client: &reqwest::Client,
    store: &OutputStore,
    request: &CauseListRequest,
) -> Result<()> {
    log::info!("Connecting to eCourts portal...");
    let outcome = pipeline::run_cause_list(config, client, store, request).await?;

    if outcome.pdfs.is_empty() {
        log::warn!("No PDFs found or CAPTCHA required.");
    } else {
        log::info!("Downloaded {} PDF(s).", outcome.pdfs.len());
    }
    println!("Result JSON: {}", outcome.result_path);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Arc::new(Config::load_or_default(&cli.config));
    config.validate()?;

    let client = http::create_client(&config.portal)?;
    let store = OutputStore::new(&config.output.dir);

    if let Some(cnr) = cli.cnr {
        let outcome = pipeline::run_cnr_lookup(&config, &client, &store, cnr.trim()).await?;
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if cli.today || cli.tomorrow {
        let Some((state, district, complex_name, court_name, case_type)) = prompt_request_base()?
        else {
            return Ok(());
        };

        let mut date = Local::now().date_naive();
        if cli.tomorrow {
            date = date.succ_opt().unwrap_or(date);
        }
        let request = CauseListRequest {
            state,
            district,
            complex_name,
            court_name,
            case_type,
            date: date.format("%d-%m-%Y").to_string(),
        };

        log::info!("Fetching cause list for {}...", request.date);
        run_cause_list(&config, &client, &store, &request).await?;
        return Ok(());
    }

    // Interactive mode: collect everything, including the date.
    println!("=== eCourts Cause List Downloader ===");
    let Some((state, district, complex_name, court_name, case_type)) = prompt_request_base()?
    else {
        return Ok(());
    };

    let date_input = prompt("Enter Date (DD-MM-YYYY)")?;
    if parse_request_date(&date_input).is_none() {
        log::warn!("Invalid date format. Use DD-MM-YYYY.");
        return Ok(());
    }

    let request = CauseListRequest {
        state,
        district,
        complex_name,
        court_name,
        case_type,
        date: date_input,
    };
    run_cause_list(&config, &client, &store, &request).await?;
    log::info!("Process completed successfully.");

    Ok(())
}
