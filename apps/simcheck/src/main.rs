//! simcheck client
//!
//! Uploads a PDF to the similarity-analysis service, renders the
//! findings in the terminal, and optionally exports the paginated PDF
//! report:
//!
//! - Local validation (type, size) before anything touches the network
//! - One in-flight request at a time, driven by the view state machine
//! - Segment highlighting and report export share one composer

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod client;
mod config;
mod state;
mod validate;
mod view;

use client::UploadClient;
use config::ClientConfig;
use state::{ViewSession, ViewState};
use view::Styling;

/// Command-line arguments for the simcheck client
#[derive(Parser, Debug)]
#[command(name = "simcheck")]
#[command(about = "Uploads a PDF for similarity analysis and renders the findings")]
struct Args {
    /// PDF document to analyze
    file: PathBuf,

    /// Base URL of the analysis service
    #[arg(
        long,
        env = "SIMCHECK_BASE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    base_url: String,

    /// Export the PDF report to PATH after rendering the results
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = report_engine::REPORT_FILE_NAME
    )]
    report: Option<PathBuf>,

    /// Disable ANSI styling in terminal output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut session = ViewSession::new();

    // Local validation; an invalid file never reaches the network.
    let bytes = validate::load_upload(&args.file)?;
    let file_name = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document.pdf")
        .to_owned();

    session.begin_upload()?;
    info!(file = %file_name, base_url = %args.base_url, "uploading document");

    let client = UploadClient::new(ClientConfig::new(&args.base_url));
    match client.analyze(&file_name, bytes).await {
        Ok(result) => session.complete(result)?,
        Err(err) => {
            error!(cause = %err, "analysis request failed");
            let message = err.user_message();
            session.fail(message)?;
            anyhow::bail!(message);
        }
    }

    if let ViewState::Results(result) = session.state() {
        print!("{}", view::format_results(result, Styling::new(!args.no_color))?);

        if let Some(path) = &args.report {
            let report = report_engine::render_report(result)?;
            std::fs::write(path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(path = %path.display(), bytes = report.len(), "report exported");
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}
