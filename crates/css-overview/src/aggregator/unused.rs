//! Detection of declarations that have no effect on the element.
//!
//! The aggregator is generic over [`DeclarationChecker`] so alternative
//! rule sets can be plugged in; [`CssUnusedDeclarations`] is the default.

use crate::parser::snapshot::BackendNodeId;
use crate::parser::style::ComputedStyle;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single flagged declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusedDeclaration {
    /// e.g. `top: 10px`
    pub declaration: String,
    pub node_id: BackendNodeId,
}

/// Reason -> flagged declarations, in encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnusedDeclarations(IndexMap<String, Vec<UnusedDeclaration>>);

impl UnusedDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, reason: impl Into<String>, property: &str, value: &str, node_id: BackendNodeId) {
        self.0.entry(reason.into()).or_default().push(UnusedDeclaration {
            declaration: format!("{}: {}", property, value),
            node_id,
        });
    }

    pub fn get(&self, reason: &str) -> Option<&[UnusedDeclaration]> {
        self.0.get(reason).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total flagged declarations across all reasons
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<UnusedDeclaration>)> {
        self.0.iter()
    }
}

/// Rule set deciding which declarations are unused
pub trait DeclarationChecker {
    /// Offsets on an element they cannot move
    fn check_position_values(
        &self,
        report: &mut UnusedDeclarations,
        node_id: BackendNodeId,
        style: &ComputedStyle<'_>,
    );

    /// Sizes on an element that ignores them
    fn check_width_and_height_values(
        &self,
        report: &mut UnusedDeclarations,
        node_id: BackendNodeId,
        style: &ComputedStyle<'_>,
    );

    /// `vertical-align` on an element it does not apply to
    fn check_vertical_alignment(
        &self,
        report: &mut UnusedDeclarations,
        node_id: BackendNodeId,
        style: &ComputedStyle<'_>,
    );
}

pub const REASON_TOP_STATIC: &str = "Top applied to a statically positioned element";
pub const REASON_LEFT_STATIC: &str = "Left applied to a statically positioned element";
pub const REASON_RIGHT_STATIC: &str = "Right applied to a statically positioned element";
pub const REASON_BOTTOM_STATIC: &str = "Bottom applied to a statically positioned element";
pub const REASON_WIDTH_INLINE: &str = "Width applied to an inline element";
pub const REASON_HEIGHT_INLINE: &str = "Height applied to an inline element";
pub const REASON_VERTICAL_ALIGN: &str =
    "Vertical alignment applied to element which is neither inline nor table-cell";

/// Default checks against computed values
#[derive(Debug, Clone, Copy, Default)]
pub struct CssUnusedDeclarations;

fn flag_unless(
    report: &mut UnusedDeclarations,
    reason: &str,
    property: &str,
    value: Option<&str>,
    expected: &str,
    node_id: BackendNodeId,
) {
    if let Some(value) = value {
        if value != expected {
            report.add(reason, property, value, node_id);
        }
    }
}

impl DeclarationChecker for CssUnusedDeclarations {
    fn check_position_values(
        &self,
        report: &mut UnusedDeclarations,
        node_id: BackendNodeId,
        style: &ComputedStyle<'_>,
    ) {
        if style.position != Some("static") {
            return;
        }

        flag_unless(report, REASON_TOP_STATIC, "top", style.top, "auto", node_id);
        flag_unless(report, REASON_LEFT_STATIC, "left", style.left, "auto", node_id);
        flag_unless(report, REASON_RIGHT_STATIC, "right", style.right, "auto", node_id);
        flag_unless(report, REASON_BOTTOM_STATIC, "bottom", style.bottom, "auto", node_id);
    }

    fn check_width_and_height_values(
        &self,
        report: &mut UnusedDeclarations,
        node_id: BackendNodeId,
        style: &ComputedStyle<'_>,
    ) {
        if style.display != Some("inline") {
            return;
        }

        flag_unless(report, REASON_WIDTH_INLINE, "width", style.width, "auto", node_id);
        flag_unless(report, REASON_HEIGHT_INLINE, "height", style.height, "auto", node_id);
    }

    fn check_vertical_alignment(
        &self,
        report: &mut UnusedDeclarations,
        node_id: BackendNodeId,
        style: &ComputedStyle<'_>,
    ) {
        let Some(display) = style.display else {
            return;
        };
        if display.starts_with("inline") || display.starts_with("table") {
            return;
        }

        flag_unless(
            report,
            REASON_VERTICAL_ALIGN,
            "vertical-align",
            style.vertical_align,
            "baseline",
            node_id,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_offsets_flagged() {
        let style = ComputedStyle {
            position: Some("static"),
            top: Some("10px"),
            left: Some("auto"),
            right: Some("auto"),
            bottom: Some("0px"),
            ..Default::default()
        };
        let mut report = UnusedDeclarations::new();

        CssUnusedDeclarations.check_position_values(&mut report, 5, &style);

        assert_eq!(report.len(), 2);
        assert_eq!(
            report.get(REASON_TOP_STATIC).unwrap(),
            &[UnusedDeclaration {
                declaration: "top: 10px".to_string(),
                node_id: 5
            }]
        );
        assert_eq!(report.get(REASON_BOTTOM_STATIC).unwrap()[0].declaration, "bottom: 0px");
    }

    #[test]
    fn test_positioned_offsets_not_flagged() {
        let style = ComputedStyle {
            position: Some("relative"),
            top: Some("10px"),
            ..Default::default()
        };
        let mut report = UnusedDeclarations::new();

        CssUnusedDeclarations.check_position_values(&mut report, 5, &style);

        assert!(report.is_empty());
    }

    #[test]
    fn test_inline_sizes_flagged() {
        let style = ComputedStyle {
            display: Some("inline"),
            width: Some("100px"),
            height: Some("auto"),
            ..Default::default()
        };
        let mut report = UnusedDeclarations::new();

        CssUnusedDeclarations.check_width_and_height_values(&mut report, 2, &style);

        assert_eq!(report.total(), 1);
        assert_eq!(report.get(REASON_WIDTH_INLINE).unwrap()[0].declaration, "width: 100px");
    }

    #[test]
    fn test_vertical_align_on_block() {
        let block = ComputedStyle {
            display: Some("block"),
            vertical_align: Some("middle"),
            ..Default::default()
        };
        let inline_block = ComputedStyle {
            display: Some("inline-block"),
            ..block
        };
        let baseline = ComputedStyle {
            vertical_align: Some("baseline"),
            ..block
        };
        let mut report = UnusedDeclarations::new();

        CssUnusedDeclarations.check_vertical_alignment(&mut report, 1, &block);
        CssUnusedDeclarations.check_vertical_alignment(&mut report, 2, &inline_block);
        CssUnusedDeclarations.check_vertical_alignment(&mut report, 3, &baseline);

        let flagged = report.get(REASON_VERTICAL_ALIGN).unwrap();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].node_id, 1);
        assert_eq!(flagged[0].declaration, "vertical-align: middle");
    }
}
