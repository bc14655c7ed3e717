//! Summary output for a completed combine run.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use crate::cli::args::ReportFormat;
use edgecombine_rs::CombineReport;

#[derive(Tabled)]
struct BlockRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "File")]
    name: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Offset")]
    offset: usize,
}

/// Render the report in the requested format.
pub fn render_report(report: &CombineReport, format: ReportFormat) -> anyhow::Result<String> {
    let rendered = match format {
        ReportFormat::Json => serde_json::to_string_pretty(report)?,
        ReportFormat::Yaml => serde_yaml::to_string(report)?,
        ReportFormat::Pretty => render_pretty(report),
    };
    Ok(rendered)
}

fn render_pretty(report: &CombineReport) -> String {
    let rows: Vec<BlockRow> = report
        .blocks
        .iter()
        .enumerate()
        .map(|(i, block)| BlockRow {
            position: i + 1,
            name: block.name.clone(),
            size: format!("{} × {}", block.dimension, block.dimension),
            offset: block.offset,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());

    let (rows, cols) = report.shape();
    format!(
        "\n{} {}\n{}\n\n{} {} {}\n",
        "✔ Combined order".bright_green().bold(),
        format!("({}):", report.ordering_description).dimmed(),
        table,
        "⭑ Saved".bright_blue().bold(),
        format!("{rows}×{cols} matrix").bold(),
        format!("→ {}", report.output_path.display()).cyan(),
    )
}

/// Print the report to stdout.
pub fn print_report(report: &CombineReport, format: ReportFormat) -> anyhow::Result<()> {
    println!("{}", render_report(report, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgecombine_rs::{BlockEntry, OrderingMode};
    use std::path::PathBuf;

    fn sample_report() -> CombineReport {
        CombineReport {
            ordering: OrderingMode::Size,
            ordering_description: OrderingMode::Size.description().to_string(),
            blocks: vec![
                BlockEntry {
                    name: "big.edge".to_string(),
                    path: PathBuf::from("/g/big.edge"),
                    dimension: 3,
                    offset: 0,
                },
                BlockEntry {
                    name: "small.edge".to_string(),
                    path: PathBuf::from("/g/small.edge"),
                    dimension: 1,
                    offset: 3,
                },
            ],
            dimension: 4,
            precision: 5,
            output_path: PathBuf::from("/g/total.edge"),
        }
    }

    #[test]
    fn pretty_report_lists_files_in_order() {
        let text = render_report(&sample_report(), ReportFormat::Pretty).unwrap();
        let big = text.find("big.edge").unwrap();
        let small = text.find("small.edge").unwrap();
        assert!(big < small);
        assert!(text.contains("size (largest first)"));
        assert!(text.contains("/g/total.edge"));
    }

    #[test]
    fn json_report_round_trips() {
        let report = sample_report();
        let text = render_report(&report, ReportFormat::Json).unwrap();
        let parsed: CombineReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, report);
    }
}
