//! Capture files: a recorded page standing in for a live debugging target.
//!
//! A capture holds the snapshot plus whatever else the page would have
//! answered. A bare `{documents, strings}` snapshot is accepted as well.

use super::protocol::{MediaQuery, RemoteObject, StyleSheetSource};
use super::snapshot::{BackendNodeId, Snapshot};
use super::style::ComputedStyle;
use crate::aggregator::collect_stylesheet_stats;
use crate::model::InspectedPage;
use crate::utils::error::PageError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// On-disk capture of one page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureFile {
    pub snapshot: Snapshot,

    /// Property list the snapshot rows were captured with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_styles: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_queries: Option<Vec<MediaQuery>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheets: Option<Vec<StyleSheetSource>>,

    /// Recorded result of the stylesheet probe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet_probe: Option<RemoteObject>,
}

/// Parse a capture from JSON
///
/// # Errors
/// * `PageError::Json` - Not a capture nor a bare snapshot
pub fn parse_capture(raw: serde_json::Value) -> Result<CaptureFile, PageError> {
    // Heuristic: a bare DOMSnapshot result has top-level "documents"
    let is_bare_snapshot = raw.get("documents").is_some() && raw.get("snapshot").is_none();

    if is_bare_snapshot {
        debug!("Capture is a bare snapshot, wrapping");
        let snapshot: Snapshot = serde_json::from_value(raw)?;
        return Ok(CaptureFile {
            snapshot,
            ..Default::default()
        });
    }

    Ok(serde_json::from_value(raw)?)
}

/// Load a capture file from disk
///
/// # Errors
/// * `PageError::Io` - File cannot be opened
/// * `PageError::Json` - Invalid JSON or shape
pub fn load_capture(path: impl AsRef<Path>) -> Result<CaptureFile, PageError> {
    let path = path.as_ref();
    debug!("Reading capture from: {}", path.display());

    let file = File::open(path)?;
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    let capture = parse_capture(raw)?;

    debug!(
        "Capture loaded: {} documents, {} strings",
        capture.snapshot.documents.len(),
        capture.snapshot.strings.len()
    );

    Ok(capture)
}

/// [`InspectedPage`] backed by a capture file
#[derive(Debug, Clone)]
pub struct CapturedPage {
    capture: CaptureFile,
}

impl CapturedPage {
    pub fn new(capture: CaptureFile) -> Self {
        Self { capture }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, PageError> {
        Ok(Self::new(load_capture(path)?))
    }

    pub fn capture(&self) -> &CaptureFile {
        &self.capture
    }
}

impl InspectedPage for CapturedPage {
    fn capture_snapshot(&self, computed_styles: &[&str]) -> Result<Snapshot, PageError> {
        if let Some(recorded) = &self.capture.computed_styles {
            if !recorded.iter().map(String::as_str).eq(computed_styles.iter().copied()) {
                return Err(PageError::PropertyMismatch {
                    expected: computed_styles.iter().map(|s| s.to_string()).collect(),
                    found: recorded.clone(),
                });
            }
        }
        Ok(self.capture.snapshot.clone())
    }

    fn media_queries(&self) -> Result<Option<Vec<MediaQuery>>, PageError> {
        Ok(self.capture.media_queries.clone())
    }

    fn evaluate(&self, expression: &str) -> Result<RemoteObject, PageError> {
        debug!("Evaluating {} byte expression against capture", expression.len());

        if let Some(recorded) = &self.capture.stylesheet_probe {
            return Ok(recorded.clone());
        }

        match &self.capture.stylesheets {
            Some(sheets) => {
                let stats = collect_stylesheet_stats(sheets);
                Ok(RemoteObject::object(serde_json::to_value(stats)?))
            }
            None => {
                warn!("Capture holds no stylesheet data");
                Ok(RemoteObject::undefined())
            }
        }
    }

    fn highlight_node(&self, node_id: BackendNodeId) {
        info!("Highlight requested for node {}", node_id);
    }

    fn computed_style_for_node(
        &self,
        node_id: BackendNodeId,
    ) -> Result<Option<Vec<(String, String)>>, PageError> {
        let snapshot = &self.capture.snapshot;

        for document in &snapshot.documents {
            for (position, row) in document.style_rows() {
                let Some(node) = document.node(position, &snapshot.strings) else {
                    continue;
                };
                if node.backend_node_id != node_id {
                    continue;
                }

                let declarations = ComputedStyle::from_row(row, &snapshot.strings)
                    .declarations()
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect();
                return Ok(Some(declarations));
            }
        }

        Ok(None)
    }
}
