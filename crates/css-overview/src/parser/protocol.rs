//! Data shapes returned by the inspected page besides the snapshot.
//!
//! Field names follow the DevTools protocol so captures can be recorded
//! straight from `CSS.getMediaQueries` and `Runtime.evaluate`.

use serde::{Deserialize, Serialize};

/// Where a media query was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaSource {
    /// `@media` rule
    MediaRule,
    /// `@import ... <media>`
    ImportRule,
    /// `<link media="...">`
    LinkedSheet,
    /// `<style media="...">`
    InlineSheet,
}

/// One media query descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaQuery {
    /// Literal query text, e.g. `(min-width: 600px)`
    pub text: String,

    pub source: MediaSource,

    #[serde(default, rename = "sourceURL", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_sheet_id: Option<String>,
}

/// Result of evaluating an expression in the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteObject {
    /// JS type of the result (`object`, `undefined`, ...)
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl RemoteObject {
    /// An `undefined` result
    pub fn undefined() -> Self {
        Self {
            kind: "undefined".to_string(),
            value: None,
        }
    }

    /// An object result carrying `value` by value
    pub fn object(value: serde_json::Value) -> Self {
        Self {
            kind: "object".to_string(),
            value: Some(value),
        }
    }
}

/// A stylesheet as seen through `document.styleSheets`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSheetSource {
    /// Set for external sheets, absent for inline `<style>`
    #[serde(default)]
    pub href: Option<String>,

    /// `None` when reading the rule list throws (cross-origin sheet)
    #[serde(default)]
    pub rules: Option<Vec<CssRuleSource>>,
}

/// A CSS rule; only style rules carry a selector text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssRuleSource {
    #[serde(default)]
    pub selector_text: Option<String>,
}
