//! Overview model over an inspected page.
//!
//! The page itself (snapshot capture, media query listing, script
//! evaluation, highlighting) sits behind [`InspectedPage`]. Its errors are
//! passed through untouched; nothing here retries.

use crate::aggregator::{
    aggregate_node_styles, group_media_queries, CssUnusedDeclarations, DeclarationChecker,
    MediaQueryGroups, NodeStyleStats, StylesheetStats, STYLESHEET_PROBE,
};
use crate::parser::protocol::{MediaQuery, RemoteObject};
use crate::parser::snapshot::{BackendNodeId, Snapshot};
use crate::utils::config::TRACKED_PROPERTIES;
use crate::utils::error::PageError;
use log::debug;

/// Collaborator giving access to one inspected page
pub trait InspectedPage {
    /// Capture a layout snapshot with the given computed styles per row
    fn capture_snapshot(&self, computed_styles: &[&str]) -> Result<Snapshot, PageError>;

    /// Media queries declared or linked by the page
    fn media_queries(&self) -> Result<Option<Vec<MediaQuery>>, PageError>;

    /// Evaluate `expression` in the page, returning the result by value
    fn evaluate(&self, expression: &str) -> Result<RemoteObject, PageError>;

    /// Visually highlight a node (fire and forget)
    fn highlight_node(&self, node_id: BackendNodeId);

    /// Tracked computed style of a node as `(property, value)` pairs
    fn computed_style_for_node(
        &self,
        node_id: BackendNodeId,
    ) -> Result<Option<Vec<(String, String)>>, PageError>;
}

/// CSS overview operations for one page
pub struct OverviewModel<P, C = CssUnusedDeclarations> {
    page: P,
    checker: C,
}

impl<P: InspectedPage> OverviewModel<P> {
    /// Model using the default unused-declaration checks
    pub fn new(page: P) -> Self {
        Self {
            page,
            checker: CssUnusedDeclarations,
        }
    }
}

impl<P: InspectedPage, C: DeclarationChecker> OverviewModel<P, C> {
    /// Model using a custom unused-declaration checker
    pub fn with_checker(page: P, checker: C) -> Self {
        Self { page, checker }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Capture a snapshot and aggregate its style statistics
    pub fn node_style_stats(&self) -> Result<NodeStyleStats, PageError> {
        let snapshot = self.page.capture_snapshot(&TRACKED_PROPERTIES)?;
        debug!("Captured snapshot with {} documents", snapshot.documents.len());
        Ok(aggregate_node_styles(&snapshot, &self.checker))
    }

    /// Declared media queries grouped by text
    pub fn media_queries(&self) -> Result<MediaQueryGroups, PageError> {
        let queries = self.page.media_queries()?;
        Ok(group_media_queries(queries.as_deref()))
    }

    /// Run the stylesheet probe in the page
    ///
    /// `Ok(None)` when the page returns anything but the expected object.
    pub fn global_stylesheet_stats(&self) -> Result<Option<StylesheetStats>, PageError> {
        let result = self.page.evaluate(STYLESHEET_PROBE)?;
        Ok(StylesheetStats::from_remote(&result))
    }

    pub fn highlight_node(&self, node_id: BackendNodeId) {
        self.page.highlight_node(node_id);
    }

    pub fn computed_style_for_node(
        &self,
        node_id: BackendNodeId,
    ) -> Result<Option<Vec<(String, String)>>, PageError> {
        self.page.computed_style_for_node(node_id)
    }
}
