//! Aggregation of snapshot data into overview statistics.
//!
//! This module transforms captured page data into:
//! - Color buckets and the font usage tree (one pass over the snapshot)
//! - Unused-declaration findings
//! - Grouped media queries
//! - Stylesheet selector statistics

pub mod classify;
pub mod colors;
pub mod fonts;
pub mod media;
pub mod node_stats;
pub mod selectors;
pub mod unused;

// Re-export main types and functions
pub use colors::{canonical_color, ColorBucket};
pub use fonts::{FontFamilyUsage, FontTree};
pub use media::{group_media_queries, MediaQueryGroups};
pub use node_stats::{aggregate_node_styles, NodeStyleStats};
pub use selectors::{
    collect_stylesheet_stats, split_selector_group, StylesheetStats, STYLESHEET_PROBE,
};
pub use unused::{CssUnusedDeclarations, DeclarationChecker, UnusedDeclarations};
