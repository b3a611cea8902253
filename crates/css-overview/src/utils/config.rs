//! Configuration and constants for the overview.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Computed styles requested with every snapshot, in row order.
///
/// `parser::style::ComputedStyle` reads rows positionally against this list.
pub const TRACKED_PROPERTIES: [&str; 24] = [
    "background-color",
    "color",
    "fill",
    "border-top-width",
    "border-top-color",
    "border-bottom-width",
    "border-bottom-color",
    "border-left-width",
    "border-left-color",
    "border-right-width",
    "border-right-color",
    "font-family",
    "font-size",
    "font-weight",
    "line-height",
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "display",
    "width",
    "height",
    "vertical-align",
];

/// String-table index meaning "value absent"
pub const ABSENT_INDEX: i64 = -1;

/// A border with this width contributes no visible color
pub const ZERO_BORDER_WIDTH: &str = "0px";

// Tag-name allow-lists (compared lowercase)
pub const SVG_NODE_NAMES: &[&str] = &[
    "altglyph", "circle", "ellipse", "path", "polygon", "polyline", "rect", "svg", "text",
    "textpath", "tref", "tspan",
];
pub const REPLACED_CONTENT_NODE_NAMES: &[&str] = &["iframe", "video", "embed", "img"];
pub const TABLE_NODE_NAMES: &[&str] = &["tr", "td", "thead", "tbody"];

pub const DEFAULT_TOP_COLORS: usize = 10;
pub const DEFAULT_TOP_FONTS: usize = 10;
pub const MAX_SUMMARY_ENTRIES: usize = 1000;

/// Complete overview configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OverviewConfig {
    /// Terminal summary settings
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Report content settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Terminal summary settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryConfig {
    /// Colors listed per category
    #[serde(default = "default_top_colors")]
    pub top_colors: usize,

    /// Font families listed
    #[serde(default = "default_top_fonts")]
    pub top_fonts: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            top_colors: DEFAULT_TOP_COLORS,
            top_fonts: DEFAULT_TOP_FONTS,
        }
    }
}

/// Which optional sections end up in the report
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub include_media_queries: bool,

    #[serde(default = "default_true")]
    pub include_stylesheet_stats: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_media_queries: true,
            include_stylesheet_stats: true,
        }
    }
}

fn default_top_colors() -> usize {
    DEFAULT_TOP_COLORS
}

fn default_top_fonts() -> usize {
    DEFAULT_TOP_FONTS
}

fn default_true() -> bool {
    true
}

/// Load overview configuration from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
/// * `ConfigError::Invalid` - If a summary size is out of range
///
/// # Example
/// ```ignore
/// let config = load_config("overview.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<OverviewConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: OverviewConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

impl OverviewConfig {
    /// Reject summary sizes the terminal renderer cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("summary.top_colors", self.summary.top_colors),
            ("summary.top_fonts", self.summary.top_fonts),
        ] {
            if value == 0 || value > MAX_SUMMARY_ENTRIES {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 1 and {} (got {})",
                    name, MAX_SUMMARY_ENTRIES, value
                )));
            }
        }
        Ok(())
    }
}
