//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod inspect;
pub mod models;
pub mod overview;
pub mod utils;

// Re-export main command functions
pub use inspect::execute_inspect;
pub use models::{InspectArgs, OverviewArgs};
pub use overview::{execute_overview, validate_args};
pub use utils::{display_schema, display_version, validate_report_file};
