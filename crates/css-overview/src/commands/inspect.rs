//! Inspect command: the tracked computed style of one node.

use crate::commands::models::InspectArgs;
use crate::model::OverviewModel;
use crate::parser::CapturedPage;
use crate::utils::error::PageError;
use anyhow::{Context, Result};
use colored::*;
use log::{debug, info};

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Capture read failures
/// * `PageError::NodeNotFound` when no laid-out row carries the node id
pub fn execute_inspect(args: InspectArgs) -> Result<()> {
    info!(
        "Inspecting node {} in {}",
        args.node_id,
        args.capture.display()
    );

    let page = CapturedPage::open(&args.capture)
        .with_context(|| format!("Failed to load capture {}", args.capture.display()))?;
    debug!(
        "Capture holds {} documents",
        page.capture().snapshot.documents.len()
    );
    let model = OverviewModel::new(page);

    let declarations = model
        .computed_style_for_node(args.node_id)
        .context("Failed to read computed style")?
        .ok_or(PageError::NodeNotFound(args.node_id))?;

    if args.highlight {
        model.highlight_node(args.node_id);
    }

    println!("{}", format!("Node {}", args.node_id).bold());
    if declarations.is_empty() {
        println!("  (no tracked properties set)");
    }
    for (property, value) in &declarations {
        println!("  {}: {}", property.cyan(), value);
    }

    Ok(())
}
