//! pharmafetch - PubMed papers with pharmaceutical/biotech affiliations
//!
//! Searches PubMed, keeps papers with at least one industry-affiliated
//! author and writes them as CSV to a file or stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod config;
mod pipeline;

use config::Config;
use pharmafetch_core::ProgressContext;
use pharmafetch_pubmed::EutilsClient;

#[derive(Parser)]
#[command(name = "pharmafetch")]
#[command(about = "Fetch PubMed papers with pharmaceutical/biotech company affiliations")]
#[command(version)]
struct Cli {
    /// PubMed search query (full query syntax supported)
    query: String,

    /// Write results to this CSV file instead of stdout
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Maximum number of papers to fetch [default: 100]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_results: Option<u32>,

    /// NCBI API key (raises the request rate limit)
    #[arg(long, env = config::API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Config file path (default: ./pharmafetch.toml or ~/.config/pharmafetch/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let debug = cli.debug;

    let progress = ProgressContext::new();

    // Logging:
    //   TTY:     quiet (warn) unless --debug, the spinner shows activity
    //   non-TTY: info unless --debug
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = is_tty && !debug;
    if let Err(e) = pharmafetch_core::init_logging(quiet, debug, multi) {
        eprintln!("Warning: logging already initialized: {e}");
    }

    match run(cli, &progress) {
        Ok(outcome) => {
            log::debug!("Finished: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            if debug {
                eprintln!("{e:?}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, progress: &ProgressContext) -> Result<pipeline::Outcome> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    log::debug!("Config: {config:?}");

    pharmafetch_core::set_http_config(config.http.to_http_config());

    let max_results = match cli.max_results {
        Some(n) => n as usize,
        None => config.pubmed.max_results,
    };
    anyhow::ensure!(max_results >= 1, "max_results must be at least 1");

    let client = EutilsClient::new(config.pubmed.client_config(cli.api_key));
    pipeline::run(
        &client,
        &cli.query,
        max_results,
        cli.file.as_deref(),
        progress,
    )
}
