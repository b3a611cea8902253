//! Color canonicalization and per-color node buckets.

use crate::parser::snapshot::BackendNodeId;
use csscolorparser::Color;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Canonical color key -> set of nodes using it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorBucket(IndexMap<String, IndexSet<BackendNodeId>>);

impl ColorBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node_id` under the canonical form of `color_text`
    ///
    /// Absent values, unparsable colors and fully transparent colors are
    /// skipped. Returns the key used, if any.
    pub fn store(&mut self, color_text: Option<&str>, node_id: BackendNodeId) -> Option<String> {
        let key = canonical_color(color_text?)?;
        self.0.entry(key.clone()).or_default().insert(node_id);
        Some(key)
    }

    pub fn get(&self, key: &str) -> Option<&IndexSet<BackendNodeId>> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &IndexSet<BackendNodeId>)> {
        self.0.iter()
    }

    /// Colors ordered by node count (descending), ties in first-seen order
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> =
            self.0.iter().map(|(key, nodes)| (key.as_str(), nodes.len())).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Parse a CSS color and format it as `#RRGGBB`, or `#RRGGBBAA` when
/// partially transparent
///
/// Returns `None` for unparsable or fully transparent colors.
pub fn canonical_color(color_text: &str) -> Option<String> {
    let color: Color = color_text.trim().parse().ok()?;
    if color.a <= 0.0 {
        return None;
    }

    let [r, g, b, a] = color.to_rgba8();
    if color.a < 1.0 {
        Some(format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a))
    } else {
        Some(format!("#{:02X}{:02X}{:02X}", r, g, b))
    }
}
