//! CLI for equipscope — equipment telemetry analytics from the terminal.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "equipscope")]
#[command(about = "equipscope — health, yield and stocking analytics for equipment telemetry")]
#[command(version = equipscope_core::VERSION)]
struct Cli {
    /// Log normalization details (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a batch: averages, yield, health, thermal profile, inventory
    Analyze {
        /// JSON batch file (array of rows, or an upload response with a `data` array)
        path: String,

        /// Treat the file as a history snapshot and analyze its restored rows
        #[arg(long)]
        snapshot: bool,

        /// Health points deducted per unit above 8.0 bar
        #[arg(long, default_value_t = equipscope_core::PENALTY_PER_UNIT)]
        penalty: u32,

        /// Palette JSON for the equipment-mix colours
        #[arg(long)]
        palette: Option<String>,

        /// Print the result as JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Also write the JSON result to this path
        #[arg(long)]
        output: Option<String>,
    },

    /// List equipment rows with stability status and failure forecast
    Inspect {
        /// JSON batch file
        path: String,

        /// Treat the file as a history snapshot
        #[arg(long)]
        snapshot: bool,

        /// Case-insensitive name search
        #[arg(long, default_value = "")]
        search: String,

        /// Only units above the critical pressure threshold
        #[arg(long)]
        critical: bool,

        /// Palette JSON ({"colors": {...}, "fallback": "#..."}) for the colour column
        #[arg(long)]
        palette: Option<String>,

        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Predict hours to failure for one or more pressure readings (bar)
    Predict {
        #[arg(required = true, allow_negative_numbers = true)]
        pressures: Vec<f64>,
    },

    /// Plain-text parameter report for a batch
    Report {
        /// JSON batch file
        path: String,

        /// Treat the file as a history snapshot
        #[arg(long)]
        snapshot: bool,

        /// Health points deducted per unit above 8.0 bar
        #[arg(long, default_value_t = equipscope_core::PENALTY_PER_UNIT)]
        penalty: u32,

        /// Write the report here instead of stdout
        #[arg(long)]
        output: Option<String>,
    },

    /// Capture a history snapshot (summary + rows) for a batch file
    Snapshot {
        /// JSON batch file
        path: String,

        /// File name recorded in the snapshot (default: the batch file's name)
        #[arg(long)]
        file_name: Option<String>,

        /// Write the snapshot here instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Analyze {
            path,
            snapshot,
            penalty,
            palette,
            json,
            output,
        } => commands::analyze::run(commands::analyze::AnalyzeCommandConfig {
            path: &path,
            snapshot,
            penalty,
            palette_path: palette.as_deref(),
            json,
            output: output.as_deref(),
        }),
        Commands::Inspect {
            path,
            snapshot,
            search,
            critical,
            palette,
            json,
        } => commands::inspect::run(commands::inspect::InspectCommandConfig {
            path: &path,
            snapshot,
            search: &search,
            critical_only: critical,
            palette_path: palette.as_deref(),
            json,
        }),
        Commands::Predict { pressures } => commands::predict::run(&pressures),
        Commands::Report {
            path,
            snapshot,
            penalty,
            output,
        } => commands::report::run(&path, snapshot, penalty, output.as_deref()),
        Commands::Snapshot {
            path,
            file_name,
            output,
        } => commands::snapshot::run(&path, file_name.as_deref(), output.as_deref()),
    }
}
