use crate::parser::snapshot::BackendNodeId;
use std::path::PathBuf;

/// Arguments for the overview command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct OverviewArgs {
    /// Capture file to read
    pub capture: PathBuf,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Optional TOML config file
    pub config: Option<PathBuf>,

    /// Entries per summary section (overrides config)
    pub top: Option<usize>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Leave media queries out of the report
    pub skip_media_queries: bool,

    /// Leave stylesheet statistics out of the report
    pub skip_stylesheet_stats: bool,
}

impl Default for OverviewArgs {
    fn default() -> Self {
        Self {
            capture: PathBuf::new(),
            output_json: PathBuf::from("overview.json"),
            config: None,
            top: None,
            print_summary: false,
            skip_media_queries: false,
            skip_stylesheet_stats: false,
        }
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Default)]
pub struct InspectArgs {
    /// Capture file to read
    pub capture: PathBuf,

    /// Backend node to inspect
    pub node_id: BackendNodeId,

    /// Request a highlight for the node
    pub highlight: bool,
}
