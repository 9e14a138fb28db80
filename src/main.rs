use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use timer_settings::LogLevel;
use timer_settings::core::commit::{FileStore, Outcome};
use timer_settings::core::payload::load_payload;
use timer_settings::core::state::App;
use timer_settings::tui;

#[derive(Parser)]
#[command(name = "timer-settings", about = "Interactive settings editor for the CLI timer")]
struct Args {
    /// Path to JSON state file
    #[arg(long)]
    state: PathBuf,

    /// Write logs to this file (no logging when absent)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs only go to a file
    if let Some(path) = &args.log_file {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        match File::create(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
            }
            Err(e) => eprintln!("Failed to open log file {}: {}", path.display(), e),
        }
    }

    log::info!("timer-settings starting up with state {}", args.state.display());

    let payload = match load_payload(&args.state) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Failed to load state: {e}");
            return ExitCode::from(1);
        }
    };

    let outcome = match tui::run(App::new(payload), &FileStore) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Settings UI failed: {e}");
            return ExitCode::from(1);
        }
    };

    if let Outcome::Failed(e) = &outcome {
        eprintln!("Failed to save settings: {e}");
    }
    ExitCode::from(outcome.exit_code())
}
