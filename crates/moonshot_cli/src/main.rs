//! Moonshot catalog CLI.
//!
//! # Responsibility
//! - Load the bundled datasets once and validate crew references eagerly.
//! - Render mission lists, mission details and astronaut biographies.
//!
//! # Invariants
//! - Nothing is rendered when the dataset fails integrity validation.

use clap::{Parser, Subcommand};
use log::{error, info};
use moonshot_core::view::{
    render_astronaut, render_mission_detail, render_mission_grid, render_mission_list,
};
use moonshot_core::{
    core_version, default_log_level, init_logging, load_dataset, DatasetPaths, MissionId,
    MissionService,
};
use std::error::Error;
use std::path::PathBuf;

const DEFAULT_GRID_COLUMNS: usize = 3;
/// Level used when output goes to the terminal and no level was requested.
const QUIET_LOG_LEVEL: &str = "warn";

#[derive(Parser)]
#[command(name = "moonshot")]
#[command(about = "Browse Apollo missions and their crews")]
#[command(version)]
struct Cli {
    /// Directory holding astronauts.json and missions.json
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr when omitted
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List missions, one per row
    List,

    /// Show missions as cards
    Grid {
        /// Cards per row
        #[arg(short, long, default_value_t = DEFAULT_GRID_COLUMNS)]
        columns: usize,
    },

    /// Show one mission with its crew
    Mission {
        /// Apollo flight number
        id: MissionId,
    },

    /// Show one astronaut biography
    Astronaut {
        /// Astronaut key, e.g. `armstrong`
        id: String,
    },

    /// Load and validate the datasets without rendering
    Validate,
}

fn main() {
    let cli = Cli::parse();

    let level = effective_log_level(cli.log_level.as_deref(), cli.log_dir.as_deref());
    if let Err(message) = init_logging(level, cli.log_dir.as_deref()) {
        eprintln!("error: {message}");
        std::process::exit(2);
    }

    match run(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(err) => {
            error!("event=cli_run module=cli status=error error={}", err);
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Explicit `--log-level` wins; file logging gets the build-mode default;
/// stderr logging stays at `warn` so command output is not interleaved.
fn effective_log_level<'a>(requested: Option<&'a str>, log_dir: Option<&str>) -> &'a str {
    match (requested, log_dir) {
        (Some(level), _) => level,
        (None, Some(_)) => default_log_level(),
        (None, None) => QUIET_LOG_LEVEL,
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    info!(
        "event=cli_start module=cli status=start core_version={} data_dir={}",
        core_version(),
        cli.data_dir.display()
    );
    let dataset = load_dataset(&DatasetPaths::in_dir(&cli.data_dir))?;
    let service = MissionService::new(&dataset);
    let crew_entries = service.validate_integrity()?;

    let output = match &cli.command {
        Commands::List => render_mission_list(service.list_missions()),
        Commands::Grid { columns } => render_mission_grid(service.list_missions(), *columns),
        Commands::Mission { id } => render_mission_detail(&service.mission_detail(*id)?),
        Commands::Astronaut { id } => render_astronaut(service.get_astronaut(id)?),
        Commands::Validate => format!(
            "dataset ok: {} missions, {} astronauts, {} crew entries",
            dataset.mission_count(),
            dataset.astronaut_count(),
            crew_entries
        ),
    };

    info!("event=cli_run module=cli status=ok");
    Ok(output)
}
