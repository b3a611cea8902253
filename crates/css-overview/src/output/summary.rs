//! Terminal rendering for overview reports.

use crate::aggregator::ColorBucket;
use crate::parser::schema::OverviewReport;
use crate::utils::config::SummaryConfig;
use colored::*;

const RULE: &str = "---------------------------------------------------\n";

/// Render a human-readable summary of a report for the terminal
pub fn render_text_summary(report: &OverviewReport, config: &SummaryConfig) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_colors(report, config.top_colors));
    out.push_str(&render_fonts(report, config.top_fonts));
    out.push_str(&render_unused(report));
    out.push_str(&render_media_queries(report));
    out.push_str(&render_stylesheets(report));

    out
}

fn render_header(report: &OverviewReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&"CSS Overview".bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push_str(&format!("Source:   {}\n", report.source));
    out.push_str(&format!("Elements: {}\n", report.element_count));
    out.push_str(&format!("Colors:   {} unique\n", report.colors.unique_count()));
    out.push_str(RULE);
    out
}

fn render_bucket(label: &str, bucket: &ColorBucket, top_n: usize) -> String {
    if bucket.is_empty() {
        return String::new();
    }

    let mut out = format!("\n{} ({}):\n", label.bold(), bucket.len());
    for (color, nodes) in bucket.ranked().into_iter().take(top_n) {
        out.push_str(&format!("  {:<10} {} elements\n", color, nodes));
    }
    out
}

fn render_colors(report: &OverviewReport, top_n: usize) -> String {
    let colors = &report.colors;
    [
        render_bucket("Background colors", &colors.background, top_n),
        render_bucket("Text colors", &colors.text, top_n),
        render_bucket("Fill colors", &colors.fill, top_n),
        render_bucket("Border colors", &colors.border, top_n),
    ]
    .concat()
}

fn render_fonts(report: &OverviewReport, top_n: usize) -> String {
    if report.fonts.is_empty() {
        return String::new();
    }

    let mut families: Vec<_> = report.fonts.iter().collect();
    families.sort_by(|a, b| b.1.node_references().cmp(&a.1.node_references()));

    let mut out = format!("\n{} ({}):\n", "Fonts".bold(), report.fonts.len());
    for (family, usage) in families.into_iter().take(top_n) {
        out.push_str(&format!(
            "  {}: {} sizes, {} weights, {} line heights\n",
            family,
            usage.font_size.len(),
            usage.font_weight.len(),
            usage.line_height.len()
        ));
    }
    out
}

fn render_unused(report: &OverviewReport) -> String {
    let unused = &report.unused_declarations;
    if unused.is_empty() {
        return format!("\n{} none\n", "Unused declarations:".bold());
    }

    let mut out = format!(
        "\n{} {}\n",
        "Unused declarations:".bold(),
        unused.total().to_string().yellow()
    );
    for (reason, declarations) in unused.iter() {
        out.push_str(&format!("  ⚠️  {} ({})\n", reason, declarations.len()));
    }
    out
}

fn render_media_queries(report: &OverviewReport) -> String {
    if report.media_queries.is_empty() {
        return String::new();
    }

    let mut out = format!("\n{} ({}):\n", "Media queries".bold(), report.media_queries.len());
    for (text, entries) in &report.media_queries {
        out.push_str(&format!("  {} x{}\n", text, entries.len()));
    }
    out
}

fn render_stylesheets(report: &OverviewReport) -> String {
    let Some(stats) = &report.stylesheet_stats else {
        return String::new();
    };

    let selectors = &stats.stats;
    format!(
        "\n{}\n  Style rules: {} | Inline: {} | External: {}\n  Selectors: type {} | class {} | id {} | universal {} | attribute {} | non-simple {}\n",
        "Stylesheets".bold(),
        stats.style_rules,
        stats.inline_styles,
        stats.external_sheets,
        selectors.type_selectors,
        selectors.class,
        selectors.id,
        selectors.universal,
        selectors.attribute,
        selectors.non_simple
    )
}
