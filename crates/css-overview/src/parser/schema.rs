//! Output JSON schema definitions for overview reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{
    ColorBucket, FontTree, MediaQueryGroups, NodeStyleStats, StylesheetStats, UnusedDeclarations,
};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Capture the report was built from
    pub source: String,

    /// Timestamp when report was generated
    pub generated_at: String,

    /// Laid-out elements across all documents
    pub element_count: usize,

    pub colors: ColorSummary,

    pub fonts: FontTree,

    pub unused_declarations: UnusedDeclarations,

    /// Declared media queries grouped by text
    #[serde(default)]
    pub media_queries: MediaQueryGroups,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet_stats: Option<StylesheetStats>,
}

/// Color buckets by category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorSummary {
    pub background: ColorBucket,
    pub text: ColorBucket,
    pub fill: ColorBucket,
    pub border: ColorBucket,
}

impl ColorSummary {
    /// Distinct colors across all categories
    pub fn unique_count(&self) -> usize {
        let mut keys: Vec<&String> = [&self.background, &self.text, &self.fill, &self.border]
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(|(key, _)| key))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys.len()
    }
}

/// Build a report from model results
///
/// **Public** - used by commands to create final output
pub fn to_report(
    source: impl Into<String>,
    stats: NodeStyleStats,
    media_queries: MediaQueryGroups,
    stylesheet_stats: Option<StylesheetStats>,
) -> OverviewReport {
    use chrono::Utc;

    OverviewReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.into(),
        generated_at: Utc::now().to_rfc3339(),
        element_count: stats.element_count,
        colors: ColorSummary {
            background: stats.background_colors,
            text: stats.text_colors,
            fill: stats.fill_colors,
            border: stats.border_colors,
        },
        fonts: stats.font_info,
        unused_declarations: stats.unused_declarations,
        media_queries,
        stylesheet_stats,
    }
}
