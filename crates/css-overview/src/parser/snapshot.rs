//! Layout snapshot data model.
//!
//! Mirrors the shape of the DevTools `DOMSnapshot.captureSnapshot` result:
//! a list of documents (each with a node table and a layout table made of
//! parallel arrays) plus one shared, deduplicated string table.

use crate::utils::config::ABSENT_INDEX;
use serde::{Deserialize, Serialize};

/// Stable identifier of a DOM node within one snapshot
pub type BackendNodeId = i64;

/// Index into the snapshot's string table (`-1` = absent)
pub type StringIndex = i64;

/// A complete page snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// One entry per document fragment (main frame, iframes, ...)
    #[serde(default)]
    pub documents: Vec<DocumentSnapshot>,

    /// String pool referenced by every index in the snapshot
    #[serde(default)]
    pub strings: StringTable,
}

/// Deduplicated string pool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable(pub Vec<String>);

impl StringTable {
    /// Resolve an index; `-1` and out-of-range indices are absent
    pub fn get(&self, index: StringIndex) -> Option<&str> {
        if index == ABSENT_INDEX {
            return None;
        }
        usize::try_from(index)
            .ok()
            .and_then(|i| self.0.get(i))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for StringTable {
    fn from(strings: Vec<String>) -> Self {
        Self(strings)
    }
}

/// One document fragment of the snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    #[serde(default)]
    pub nodes: NodeTable,

    #[serde(default)]
    pub layout: LayoutTable,
}

/// DOM node table (parallel arrays indexed by node position)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTable {
    #[serde(default)]
    pub backend_node_id: Vec<BackendNodeId>,

    /// Tag names as string-table indices
    #[serde(default)]
    pub node_name: Vec<StringIndex>,
}

/// Layout table (parallel arrays indexed by layout position)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTable {
    /// Node-table position owning each layout row
    #[serde(default)]
    pub node_index: Vec<i64>,

    /// Computed-style rows, one string index per tracked property
    #[serde(default)]
    pub styles: Vec<Vec<StringIndex>>,
}

/// A node resolved from a layout row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef<'a> {
    pub backend_node_id: BackendNodeId,
    pub node_name: &'a str,
}

impl DocumentSnapshot {
    /// Number of laid-out elements in this document
    pub fn element_count(&self) -> usize {
        self.layout.node_index.len()
    }

    /// Resolve the node owning layout row `layout_position`
    ///
    /// Returns `None` when either the layout row or the node it points at
    /// does not exist. An unresolvable tag name becomes `""`.
    pub fn node<'a>(&self, layout_position: usize, strings: &'a StringTable) -> Option<NodeRef<'a>> {
        let node_position = usize::try_from(*self.layout.node_index.get(layout_position)?).ok()?;
        let backend_node_id = *self.nodes.backend_node_id.get(node_position)?;
        let node_name = self
            .nodes
            .node_name
            .get(node_position)
            .and_then(|&index| strings.get(index))
            .unwrap_or("");

        Some(NodeRef {
            backend_node_id,
            node_name,
        })
    }

    /// Iterate layout rows as `(layout_position, style_row)`
    pub fn style_rows(&self) -> impl Iterator<Item = (usize, &[StringIndex])> {
        self.layout
            .styles
            .iter()
            .enumerate()
            .map(|(position, row)| (position, row.as_slice()))
    }
}

impl Snapshot {
    /// Total laid-out elements across all documents (not deduplicated)
    pub fn element_count(&self) -> usize {
        self.documents.iter().map(DocumentSnapshot::element_count).sum()
    }
}
