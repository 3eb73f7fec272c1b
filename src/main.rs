use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use hospital_simulator::api::command::USAGE;
use hospital_simulator::config::{AppConfig, ENV_DATA_DIR};
use hospital_simulator::{build_processor, logger};

/// Registers patients and schedules their first consultation.
#[derive(Debug, Parser)]
#[command(name = "hospital_simulator", version, about)]
struct Cli {
    /// Request such as `Register|Jane|Cancer|Breast`, `RegisteredPatients` or `ScheduledConsultations`.
    request: Option<String>,

    /// Optional JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the staff, equipment, room, patient and consultation files.
    #[arg(long, env = ENV_DATA_DIR)]
    data_dir: Option<PathBuf>,

    /// Directory for the log file.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Number of days after registration searched for a free slot.
    #[arg(long)]
    max_search_days: Option<u32>,

    /// Refuse to register a patient name that is already registered.
    #[arg(long)]
    reject_duplicates: bool,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())
            .with_context(|| format!("Failed to load configuration from {:?}", self.config))?;

        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir = log_dir.clone();
        }
        if let Some(days) = self.max_search_days {
            config.max_search_days = days;
        }
        if self.reject_duplicates {
            config.reject_duplicate_patients = true;
        }

        Ok(config)
    }
}

fn run(cli: &Cli, request: &str) -> anyhow::Result<String> {
    let config = cli.resolve_config()?;
    logger::init(&config.log_dir);
    log::debug!("Resolved configuration: {:?}", config);

    let mut processor = build_processor(&config).context("Failed to start the hospital simulator")?;
    Ok(processor.process_request(request))
}

fn main() {
    let cli = Cli::parse();

    let request = match cli.request.as_deref() {
        Some(request) if !request.contains('?') => request,
        _ => {
            print!("{}", USAGE);
            return;
        }
    };

    match run(&cli, request) {
        Ok(response) => println!("{}", response),
        // The exit code stays 0: callers read the outcome from the response text.
        Err(e) => println!("{:#}", e),
    }
}
