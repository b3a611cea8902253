//! Single-pass aggregation of per-element computed styles.
//!
//! Walks every layout row of every document in a snapshot and builds:
//! - Color buckets (background, text, fill, border)
//! - The font usage tree
//! - Unused-declaration findings
//!
//! Bad per-row data (dangling node index, unparsable color) is skipped,
//! never reported as an error.

use super::classify::{is_replaced_content, is_svg_node, is_table_element_with_default_styles};
use super::colors::ColorBucket;
use super::fonts::FontTree;
use super::unused::{DeclarationChecker, UnusedDeclarations};
use crate::parser::snapshot::Snapshot;
use crate::parser::style::ComputedStyle;
use crate::utils::config::ZERO_BORDER_WIDTH;
use log::debug;
use serde::{Deserialize, Serialize};

/// Aggregated style statistics for one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyleStats {
    pub background_colors: ColorBucket,
    pub text_colors: ColorBucket,
    pub fill_colors: ColorBucket,
    pub border_colors: ColorBucket,
    pub font_info: FontTree,
    pub unused_declarations: UnusedDeclarations,

    /// Layout rows across all documents, before any filtering
    pub element_count: usize,
}

/// Aggregate a snapshot
///
/// **Public** - main entry point for style statistics
///
/// # Arguments
/// * `snapshot` - Captured snapshot (rows in `TRACKED_PROPERTIES` order)
/// * `checker` - Unused-declaration rule set
///
/// # Algorithm
/// 1. Count layout rows per document
/// 2. Resolve each row's owning node and named computed style
/// 3. Store colors (fill only for SVG nodes, borders only when not `0px` wide)
/// 4. Record font usage
/// 5. Run unused-declaration checks, skipping the element kinds that
///    legitimately use the checked properties
pub fn aggregate_node_styles<C: DeclarationChecker>(snapshot: &Snapshot, checker: &C) -> NodeStyleStats {
    let strings = &snapshot.strings;
    let mut stats = NodeStyleStats::default();
    let mut skipped_rows = 0usize;

    debug!(
        "Aggregating {} documents ({} strings)",
        snapshot.documents.len(),
        strings.len()
    );

    for document in &snapshot.documents {
        stats.element_count += document.element_count();

        for (position, row) in document.style_rows() {
            let Some(node) = document.node(position, strings) else {
                skipped_rows += 1;
                continue;
            };
            let node_id = node.backend_node_id;
            let style = ComputedStyle::from_row(row, strings);
            let svg = is_svg_node(node.node_name);

            stats.background_colors.store(style.background_color, node_id);
            stats.text_colors.store(style.color, node_id);

            if svg {
                stats.fill_colors.store(style.fill, node_id);
            }

            for side in style.borders() {
                if side.width != Some(ZERO_BORDER_WIDTH) {
                    stats.border_colors.store(side.color, node_id);
                }
            }

            stats.font_info.record(&style, node_id);

            let report = &mut stats.unused_declarations;
            checker.check_position_values(report, node_id, &style);

            // SVG and replaced content size themselves despite being inline
            if !svg && !is_replaced_content(node.node_name) {
                checker.check_width_and_height_values(report, node_id, &style);
            }

            if style.vertical_align.is_some()
                && !is_table_element_with_default_styles(node.node_name, style.display)
            {
                checker.check_vertical_alignment(report, node_id, &style);
            }
        }
    }

    if skipped_rows > 0 {
        debug!("Skipped {} layout rows with no matching node", skipped_rows);
    }

    debug!(
        "Aggregated {} elements: {} background, {} text, {} fill, {} border colors, {} font families",
        stats.element_count,
        stats.background_colors.len(),
        stats.text_colors.len(),
        stats.fill_colors.len(),
        stats.border_colors.len(),
        stats.font_info.len()
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::unused::{CssUnusedDeclarations, REASON_VERTICAL_ALIGN, REASON_WIDTH_INLINE};
    use crate::parser::snapshot::{
        BackendNodeId, DocumentSnapshot, StringIndex, StringTable,
    };
    use std::cell::RefCell;

    type Row<'a> = (BackendNodeId, &'a str, &'a [(usize, &'a str)]);

    fn row<'a>(node_id: BackendNodeId, tag: &'a str, values: &'a [(usize, &'a str)]) -> Row<'a> {
        (node_id, tag, values)
    }

    /// Builds snapshots from `(node_id, tag, [(column, value)])` rows
    struct SnapshotBuilder {
        strings: Vec<String>,
    }

    impl SnapshotBuilder {
        fn new() -> Self {
            Self { strings: Vec::new() }
        }

        fn intern(&mut self, value: &str) -> StringIndex {
            if let Some(pos) = self.strings.iter().position(|s| s == value) {
                return pos as StringIndex;
            }
            self.strings.push(value.to_string());
            (self.strings.len() - 1) as StringIndex
        }

        fn document(&mut self, rows: &[Row<'_>]) -> DocumentSnapshot {
            let mut doc = DocumentSnapshot::default();
            for (i, (node_id, tag, values)) in rows.iter().enumerate() {
                doc.nodes.backend_node_id.push(*node_id);
                let tag_index = self.intern(tag);
                doc.nodes.node_name.push(tag_index);
                let mut row = vec![-1; 24];
                for (column, value) in values.iter() {
                    row[*column] = self.intern(value);
                }
                doc.layout.node_index.push(i as i64);
                doc.layout.styles.push(row);
            }
            doc
        }

        fn build(self, documents: Vec<DocumentSnapshot>) -> Snapshot {
            Snapshot {
                documents,
                strings: StringTable::from(self.strings),
            }
        }
    }

    const BACKGROUND: usize = 0;
    const COLOR: usize = 1;
    const FILL: usize = 2;
    const BORDER_TOP_WIDTH: usize = 3;
    const BORDER_TOP_COLOR: usize = 4;
    const BORDER_LEFT_WIDTH: usize = 7;
    const BORDER_LEFT_COLOR: usize = 8;
    const BORDER_BOTTOM_WIDTH: usize = 5;
    const BORDER_BOTTOM_COLOR: usize = 6;
    const BORDER_RIGHT_WIDTH: usize = 9;
    const BORDER_RIGHT_COLOR: usize = 10;
    const DISPLAY: usize = 20;
    const WIDTH: usize = 21;
    const VERTICAL_ALIGN: usize = 23;

    /// Records which checks ran for which node
    #[derive(Default)]
    struct RecordingChecker {
        calls: RefCell<Vec<(&'static str, BackendNodeId)>>,
    }

    impl DeclarationChecker for RecordingChecker {
        fn check_position_values(&self, _: &mut UnusedDeclarations, node_id: BackendNodeId, _: &ComputedStyle<'_>) {
            self.calls.borrow_mut().push(("position", node_id));
        }

        fn check_width_and_height_values(&self, _: &mut UnusedDeclarations, node_id: BackendNodeId, _: &ComputedStyle<'_>) {
            self.calls.borrow_mut().push(("size", node_id));
        }

        fn check_vertical_alignment(&self, _: &mut UnusedDeclarations, node_id: BackendNodeId, _: &ComputedStyle<'_>) {
            self.calls.borrow_mut().push(("vertical-align", node_id));
        }
    }

    impl RecordingChecker {
        fn ran(&self, check: &str, node_id: BackendNodeId) -> bool {
            self.calls.borrow().iter().any(|&(c, n)| c == check && n == node_id)
        }
    }

    #[test]
    fn test_background_and_visible_border() {
        let mut builder = SnapshotBuilder::new();
        let doc = builder.document(&[row(
            1,
            "DIV",
            &[(BACKGROUND, "red"), (BORDER_TOP_WIDTH, "1px"), (BORDER_TOP_COLOR, "blue")],
        )]);
        let snapshot = builder.build(vec![doc]);

        let stats = aggregate_node_styles(&snapshot, &CssUnusedDeclarations);

        assert_eq!(stats.background_colors.len(), 1);
        assert!(stats.background_colors.get("#FF0000").unwrap().contains(&1));
        assert_eq!(stats.border_colors.len(), 1);
        assert!(stats.border_colors.get("#0000FF").unwrap().contains(&1));
        assert_eq!(stats.element_count, 1);
    }

    #[test]
    fn test_zero_width_border_ignored() {
        let mut builder = SnapshotBuilder::new();
        let doc = builder.document(&[row(
            1,
            "DIV",
            &[(BACKGROUND, "red"), (BORDER_TOP_WIDTH, "0px"), (BORDER_TOP_COLOR, "blue")],
        )]);
        let snapshot = builder.build(vec![doc]);

        let stats = aggregate_node_styles(&snapshot, &CssUnusedDeclarations);

        assert!(stats.border_colors.is_empty());
        assert_eq!(stats.background_colors.len(), 1);
    }

    #[test]
    fn test_border_sides_independent() {
        let mut builder = SnapshotBuilder::new();
        let doc = builder.document(&[row(
            4,
            "DIV",
            &[
                (BORDER_TOP_WIDTH, "0px"),
                (BORDER_TOP_COLOR, "blue"),
                (BORDER_LEFT_WIDTH, "2px"),
                (BORDER_LEFT_COLOR, "green"),
            ],
        )]);
        let snapshot = builder.build(vec![doc]);

        let stats = aggregate_node_styles(&snapshot, &CssUnusedDeclarations);

        assert_eq!(stats.border_colors.len(), 1);
        assert!(stats.border_colors.get("#008000").is_some());
    }

    #[test]
    fn test_bottom_and_right_widths_gate_their_own_colors() {
        let mut builder = SnapshotBuilder::new();
        let doc = builder.document(&[row(
            5,
            "DIV",
            &[
                (BORDER_BOTTOM_WIDTH, "0px"),
                (BORDER_BOTTOM_COLOR, "blue"),
                (BORDER_RIGHT_WIDTH, "2px"),
                (BORDER_RIGHT_COLOR, "red"),
            ],
        )]);
        let snapshot = builder.build(vec![doc]);

        let stats = aggregate_node_styles(&snapshot, &CssUnusedDeclarations);

        assert_eq!(stats.border_colors.len(), 1);
        assert!(stats.border_colors.get("#FF0000").unwrap().contains(&5));
        assert!(stats.border_colors.get("#0000FF").is_none());
    }

    #[test]
    fn test_fill_only_for_svg_nodes() {
        let mut builder = SnapshotBuilder::new();
        let doc = builder.document(&[
            row(1, "DIV", &[(FILL, "red")]),
            row(2, "path", &[(FILL, "red")]),
            row(3, "SVG", &[(FILL, "rgba(0, 0, 255, 0.5)")]),
        ]);
        let snapshot = builder.build(vec![doc]);

        let stats = aggregate_node_styles(&snapshot, &CssUnusedDeclarations);

        let red: Vec<_> = stats.fill_colors.get("#FF0000").unwrap().iter().copied().collect();
        assert_eq!(red, vec![2]);
        assert!(stats.fill_colors.get("#0000FF80").unwrap().contains(&3));
    }

    #[test]
    fn test_transparent_text_color_dropped() {
        let mut builder = SnapshotBuilder::new();
        let doc = builder.document(&[row(1, "SPAN", &[(COLOR, "transparent"), (BACKGROUND, "nonsense")])]);
        let snapshot = builder.build(vec![doc]);

        let stats = aggregate_node_styles(&snapshot, &CssUnusedDeclarations);

        assert!(stats.text_colors.is_empty());
        assert!(stats.background_colors.is_empty());
    }

    #[test]
    fn test_element_count_sums_documents() {
        let mut builder = SnapshotBuilder::new();
        let first = builder.document(&[row(1, "DIV", &[]), row(2, "DIV", &[])]);
        let mut second = builder.document(&[row(1, "DIV", &[])]);
        // Dangling node index: still counted, never aggregated
        second.layout.node_index.push(99);
        second.layout.styles.push(vec![0; 24]);
        let snapshot = builder.build(vec![first, second]);

        let stats = aggregate_node_styles(&snapshot, &CssUnusedDeclarations);

        assert_eq!(stats.element_count, 4);
    }

    #[test]
    fn test_replaced_content_skips_size_check() {
        let mut builder = SnapshotBuilder::new();
        let doc = builder.document(&[
            row(1, "IMG", &[(DISPLAY, "inline"), (WIDTH, "100px")]),
            row(2, "Video", &[(DISPLAY, "inline"), (WIDTH, "100px")]),
            row(3, "circle", &[(DISPLAY, "inline"), (WIDTH, "100px")]),
            row(4, "SPAN", &[(DISPLAY, "inline"), (WIDTH, "100px")]),
        ]);
        let snapshot = builder.build(vec![doc]);
        let checker = RecordingChecker::default();

        aggregate_node_styles(&snapshot, &checker);

        assert!(!checker.ran("size", 1));
        assert!(!checker.ran("size", 2));
        assert!(!checker.ran("size", 3));
        assert!(checker.ran("size", 4));
        for node in 1..=4 {
            assert!(checker.ran("position", node));
        }

        let stats = aggregate_node_styles(&snapshot, &CssUnusedDeclarations);
        let flagged = stats.unused_declarations.get(REASON_WIDTH_INLINE).unwrap();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].node_id, 4);
    }

    #[test]
    fn test_table_elements_skip_vertical_align_check() {
        let mut builder = SnapshotBuilder::new();
        let doc = builder.document(&[
            row(1, "TD", &[(DISPLAY, "table-cell"), (VERTICAL_ALIGN, "middle")]),
            row(2, "td", &[(DISPLAY, "block"), (VERTICAL_ALIGN, "middle")]),
            row(3, "DIV", &[(DISPLAY, "block"), (VERTICAL_ALIGN, "middle")]),
            row(4, "DIV", &[(DISPLAY, "block")]),
        ]);
        let snapshot = builder.build(vec![doc]);
        let checker = RecordingChecker::default();

        aggregate_node_styles(&snapshot, &checker);

        assert!(!checker.ran("vertical-align", 1));
        assert!(checker.ran("vertical-align", 2));
        assert!(checker.ran("vertical-align", 3));
        assert!(!checker.ran("vertical-align", 4));

        let stats = aggregate_node_styles(&snapshot, &CssUnusedDeclarations);
        let ids: Vec<_> = stats
            .unused_declarations
            .get(REASON_VERTICAL_ALIGN)
            .unwrap()
            .iter()
            .map(|d| d.node_id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
