//! Output writers for overview reports.
//!
//! This module handles:
//! - JSON reports on disk
//! - Text summaries for the terminal

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_report, write_report};
pub use summary::render_text_summary;

use crate::utils::error::OutputError;
use std::path::Path;

/// Reject report destinations that cannot hold a file
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath(
            "No report path given".to_string(),
        ));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Report path {} is an existing directory",
            path.display()
        )));
    }

    Ok(())
}
