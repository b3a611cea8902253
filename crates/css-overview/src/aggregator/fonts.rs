//! Font usage tree.
//!
//! ```text
//!                 / font-size   (value -> nodes)
//! font-family ----- font-weight (value -> nodes)
//!                 \ line-height (value -> nodes)
//! ```

use crate::parser::snapshot::BackendNodeId;
use crate::parser::style::ComputedStyle;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value -> nodes using it, in encounter order (duplicates kept)
pub type ValueUsage = IndexMap<String, Vec<BackendNodeId>>;

/// Usage of one font family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilyUsage {
    #[serde(rename = "font-size")]
    pub font_size: ValueUsage,

    #[serde(rename = "font-weight")]
    pub font_weight: ValueUsage,

    #[serde(rename = "line-height")]
    pub line_height: ValueUsage,
}

impl FontFamilyUsage {
    /// Number of node references recorded under any sub-mapping
    pub fn node_references(&self) -> usize {
        [&self.font_size, &self.font_weight, &self.line_height]
            .into_iter()
            .flat_map(|usage| usage.values())
            .map(Vec::len)
            .sum()
    }
}

/// Font family -> usage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontTree(IndexMap<String, FontFamilyUsage>);

impl FontTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the font properties of one element
    ///
    /// Nothing is recorded without a font family. Absent size, weight or
    /// line-height values create no key.
    pub fn record(&mut self, style: &ComputedStyle<'_>, node_id: BackendNodeId) {
        let Some(family) = style.font_family else {
            return;
        };

        let usage = self.0.entry(family.to_string()).or_default();

        for (value, target) in [
            (style.font_size, &mut usage.font_size),
            (style.font_weight, &mut usage.font_weight),
            (style.line_height, &mut usage.line_height),
        ] {
            if let Some(value) = value {
                target.entry(value.to_string()).or_default().push(node_id);
            }
        }
    }

    pub fn get(&self, family: &str) -> Option<&FontFamilyUsage> {
        self.0.get(family)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FontFamilyUsage)> {
        self.0.iter()
    }
}
