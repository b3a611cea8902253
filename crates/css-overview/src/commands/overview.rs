//! Overview command implementation.
//!
//! The overview command:
//! 1. Loads configuration
//! 2. Opens the capture file
//! 3. Aggregates node style statistics
//! 4. Groups media queries and collects stylesheet statistics
//! 5. Writes the JSON report
//! 6. Optionally prints a text summary

use crate::commands::models::OverviewArgs;
use crate::model::OverviewModel;
use crate::output::{render_text_summary, write_report};
use crate::parser::{to_report, CapturedPage};
use crate::utils::config::{load_config, OverviewConfig, MAX_SUMMARY_ENTRIES};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the overview command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Config file read or parse failures
/// * Capture read failures or a property-list mismatch
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = OverviewArgs {
///     capture: PathBuf::from("page.json"),
///     print_summary: true,
///     ..Default::default()
/// };
///
/// execute_overview(args)?;
/// ```
pub fn execute_overview(args: OverviewArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting overview for capture: {}", args.capture.display());

    let config = resolve_config(&args)?;

    info!("Loading capture...");
    let page = CapturedPage::open(&args.capture)
        .with_context(|| format!("Failed to load capture {}", args.capture.display()))?;
    let model = OverviewModel::new(page);

    info!("Aggregating node styles...");
    let stats = model
        .node_style_stats()
        .context("Failed to capture snapshot")?;
    debug!(
        "Aggregated {} elements, {} unused declaration reasons",
        stats.element_count,
        stats.unused_declarations.len()
    );

    let media_queries = if config.report.include_media_queries {
        info!("Grouping media queries...");
        model
            .media_queries()
            .context("Failed to list media queries")?
    } else {
        Default::default()
    };

    let stylesheet_stats = if config.report.include_stylesheet_stats {
        info!("Collecting stylesheet statistics...");
        let stats = model
            .global_stylesheet_stats()
            .context("Failed to evaluate stylesheet probe")?;
        if stats.is_none() {
            warn!("Stylesheet statistics unavailable for this capture");
        }
        stats
    } else {
        None
    };

    let report = to_report(
        args.capture.display().to_string(),
        stats,
        media_queries,
        stylesheet_stats,
    );

    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("{}", render_text_summary(&report, &config.summary));
    }

    info!(
        "Overview completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Load the config file (if any) and apply CLI overrides.
///
/// **Private** - internal helper for execute_overview
fn resolve_config(args: &OverviewArgs) -> Result<OverviewConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => OverviewConfig::default(),
    };

    if let Some(top) = args.top {
        config.summary.top_colors = top;
        config.summary.top_fonts = top;
    }
    if args.skip_media_queries {
        config.report.include_media_queries = false;
    }
    if args.skip_stylesheet_stats {
        config.report.include_stylesheet_stats = false;
    }

    Ok(config)
}

/// Validate overview arguments
///
/// **Public** - can be called before execute_overview for early validation
pub fn validate_args(args: &OverviewArgs) -> Result<()> {
    if args.capture.as_os_str().is_empty() {
        anyhow::bail!("Capture path cannot be empty");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("top must be greater than 0");
        }

        if top > MAX_SUMMARY_ENTRIES {
            anyhow::bail!("top is too large (max {})", MAX_SUMMARY_ENTRIES);
        }
    }

    Ok(())
}
