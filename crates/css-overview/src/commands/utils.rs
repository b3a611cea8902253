use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        println!(
            "⚠️  Schema version {} differs from current {}",
            report.version, SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Elements: {}", report.element_count);
    println!("  Unique Colors: {}", report.colors.unique_count());
    println!("  Font Families: {}", report.fonts.len());
    println!(
        "  Unused Declarations: {}",
        report.unused_declarations.total()
    );
    println!("  Media Queries: {}", report.media_queries.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("CSS Overview Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string             - Schema version (e.g., '1.0.0')");
        println!("  source: string              - Capture the report was built from");
        println!("  generated_at: string        - ISO 8601 timestamp");
        println!("  element_count: number       - Laid-out elements across all documents");
        println!("  colors: object              - Color -> backend node ids, per category");
        println!("    background, text, fill, border");
        println!("  fonts: object               - Family -> property -> value -> node ids");
        println!("    font-size, font-weight, line-height");
        println!("  unused_declarations: object - Reason -> [{{declaration, nodeId}}]");
        println!("  media_queries: object       - Query text -> declaring media entries");
        println!("  stylesheet_stats: object?   - Rule, sheet and selector counts");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("CSS Overview v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Style usage statistics for captured web pages.");
}
