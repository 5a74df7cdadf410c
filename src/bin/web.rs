//! causelist web server
//!
//! Serves the input form, runs scrapes on form submission, and hands out the
//! generated files. For one-off runs, use the `causelist` CLI.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use causelist::{error::Result, models::Config, web};

/// eCourts Cause List web front-end
#[derive(Parser, Debug)]
#[command(
    name = "causelist-web",
    version,
    about = "Web front-end for the eCourts cause-list fetcher"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the bind port from the config file
    #[arg(short, long)]
    port: Option<u16>,

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

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    let state = web::AppState::new(Arc::new(config))?;
    web::serve(state).await
}
