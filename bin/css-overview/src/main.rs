//! CSS Overview CLI
//!
//! Style usage statistics for captured web pages.
//! Turns a DevTools snapshot capture into a JSON overview report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

use css_overview::commands::{
    display_schema, display_version, execute_inspect, execute_overview, validate_args,
    validate_report_file, InspectArgs, OverviewArgs,
};

/// CSS Overview - color, font and unused-declaration statistics
#[derive(Parser, Debug)]
#[command(name = "css-overview")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build an overview report from a capture file
    Overview {
        /// Capture file (snapshot plus optional media queries and stylesheets)
        #[arg(short, long)]
        capture: PathBuf,

        /// Output path for JSON report (placed in artifacts/ by default)
        #[arg(short, long, default_value = "artifacts/overview.json")]
        output: PathBuf,

        /// TOML config file
        #[arg(long, env = "CSS_OVERVIEW_CONFIG")]
        config: Option<PathBuf>,

        /// Entries per summary section
        #[arg(long)]
        top: Option<usize>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Leave media queries out of the report
        #[arg(long)]
        no_media_queries: bool,

        /// Leave stylesheet statistics out of the report
        #[arg(long)]
        no_stylesheet_stats: bool,
    },

    /// Print the tracked computed style of one node
    Inspect {
        /// Capture file
        #[arg(short, long)]
        capture: PathBuf,

        /// Backend node id
        #[arg(short, long)]
        node: i64,

        /// Request a highlight for the node
        #[arg(long)]
        highlight: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    debug!("{:?}", cli.command);

    // Execute command
    match cli.command {
        Commands::Overview {
            capture,
            mut output,
            config,
            top,
            summary,
            no_media_queries,
            no_stylesheet_stats,
        } => {
            // Ensure output goes to artifacts/ if no directory is specified
            if output.parent().map(|p| p.as_os_str().is_empty()).unwrap_or(true) {
                output = PathBuf::from("artifacts").join(output);
            }

            let args = OverviewArgs {
                capture,
                output_json: output,
                config,
                top,
                print_summary: summary,
                skip_media_queries: no_media_queries,
                skip_stylesheet_stats: no_stylesheet_stats,
            };

            // Validate args first
            validate_args(&args)?;

            execute_overview(args)?;
        }

        Commands::Inspect {
            capture,
            node,
            highlight,
        } => {
            execute_inspect(InspectArgs {
                capture,
                node_id: node,
                highlight,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
