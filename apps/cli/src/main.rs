mod app;
mod commands;
mod config;
mod event;
mod player;
mod runtime;
mod source;
mod surface;
mod ui;

use std::{fs::File, path::PathBuf, sync::Mutex, time::Duration};

use clap::Parser;
use readalong_highlight::SyncConfig;
use readalong_recording_client::{ContentStatus, LoadError};
use tracing_subscriber::prelude::*;

use crate::{config::Settings, source::Source};

#[derive(Parser)]
#[command(name = "readalong", about = "Follow a recording word by word")]
struct Cli {
    #[arg(long, env = "READALONG_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    #[arg(long, env = "READALONG_DOCUMENT_ID")]
    document_id: Option<String>,

    #[arg(long, env = "READALONG_RECORDING_ID")]
    recording_id: Option<String>,

    /// Read the recording payload from a JSON file instead of the server.
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Tolerance around each word's interval.
    #[arg(long, default_value_t = 50)]
    padding_ms: u64,

    /// Interval between playback clock samples.
    #[arg(long, default_value_t = 250, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    #[arg(long, default_value_t = 1.0, value_parser = parse_rate)]
    rate: f64,

    /// Print highlight changes to stdout instead of opening the viewer.
    #[arg(long)]
    headless: bool,

    /// Log whether a local word comparison agrees with the server's content check.
    #[arg(long)]
    recheck_content: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            sync: SyncConfig::from_padding_ms(self.padding_ms),
            tick: Duration::from_millis(self.tick_ms),
            rate: self.rate,
        }
    }

    fn source(&self) -> Source {
        match &self.fixture {
            Some(path) => Source::Fixture(path.clone()),
            None => Source::Remote {
                base_url: self.base_url.clone(),
                document_id: self.document_id.clone().unwrap_or_default(),
                recording_id: self.recording_id.clone().unwrap_or_default(),
            },
        }
    }
}

fn parse_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err("rate must be a positive number".to_string())
    }
}

fn init_tracing(cli: &Cli) -> std::io::Result<()> {
    let file_layer = match &cli.log_file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(File::create(path)?)),
        ),
        None => None,
    };
    // The viewer owns the terminal, so only headless runs log to stderr.
    let stderr_layer = (cli.headless && cli.log_file.is_none())
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli) {
        eprintln!("Failed to open log file: {e}");
        std::process::exit(1);
    }

    let settings = cli.settings();
    let loaded = source::fetch(&cli.source(), cli.recheck_content).await;
    if let Err(error) = &loaded {
        tracing::error!(%error, "load_failed");
    }

    if !cli.headless {
        commands::tui::run(loaded, settings).await;
        return;
    }

    let prepared = match loaded {
        Ok(prepared) => prepared,
        Err(error) => {
            if matches!(error, LoadError::ContentMismatch) {
                eprintln!("{}", ContentStatus::Mismatch);
            }
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    println!("{}", ContentStatus::Matches);
    if let Err(e) = commands::replay::replay(prepared, &settings, std::io::stdout().lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
