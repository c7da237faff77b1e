mod ats;
mod config;
mod errors;
mod interface;
mod jd;
mod llm;
mod resume;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::interface::Interface;
use crate::llm::ModelKind;

/// ATS scoring assistant: score resumes against job postings and compare
/// candidates for the same role.
#[derive(Debug, Parser)]
#[command(name = "jobpilot", version)]
struct Cli {
    /// LLM provider used when a job description is extracted from a URL.
    #[arg(long, value_enum, default_value = "chat-gpt")]
    model: ModelKind,

    /// Folder containing PDF resumes (overrides JOBPILOT_DATA_DIR).
    #[arg(long)]
    data_dir: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let level = if cli.verbose {
        "debug"
    } else {
        config.rust_log.as_str()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting jobpilot v{} (model: {})",
        env!("CARGO_PKG_VERSION"),
        cli.model.display_name()
    );

    let interface = Interface::new(config, cli.model);
    if let Err(e) = interface.run().await {
        // Boundary failures (file, HTTP, LLM) abort the action with a
        // readable message rather than a backtrace.
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
