//! Snapshot parsing and schema definitions.
//!
//! This module handles:
//! - The DevTools layout snapshot model
//! - Named computed-style rows
//! - Capture files and other page data shapes
//! - The output report schema

pub mod capture;
pub mod protocol;
pub mod schema;
pub mod snapshot;
pub mod style;

// Re-export main types
pub use capture::{load_capture, parse_capture, CaptureFile, CapturedPage};
pub use protocol::{MediaQuery, MediaSource, RemoteObject, StyleSheetSource};
pub use schema::{to_report, ColorSummary, OverviewReport};
pub use snapshot::{BackendNodeId, DocumentSnapshot, Snapshot, StringTable};
pub use style::ComputedStyle;
