//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use wsa_core::metrics::model::MetricTile;
use wsa_core::report::model::{NoticeLevel, Report};

/// Print a full report.
pub fn print_report(report: &Report, company: Option<&str>) {
    println!();
    println!("{}", "🚀 ClickUp Workspace Analysis".cyan().bold());
    println!("{}", format!("run {}", report.run_id).dimmed());
    println!();

    for notice in &report.notices {
        let marker: ColoredString = match notice.level {
            NoticeLevel::Info => "ℹ".blue().bold(),
            NoticeLevel::Error => "✗".red().bold(),
        };
        println!("{} {}", marker, notice.message);
    }
    if !report.notices.is_empty() {
        println!();
    }

    if let Some(metrics) = &report.metrics {
        print_heading("📊 Workspace Summary");
        print_tiles(&metrics.tiles());
        println!();
    }

    if let Some(profile) = &report.profile {
        match company {
            Some(name) => print_heading(&format!("🏢 Company Profile: {}", name)),
            None => print_heading("🏢 Company Profile"),
        }
        println!("{}", profile.trim());
        println!();
    }

    if let Some(recommendations) = &report.recommendations {
        print_heading("💡 Recommendations");
        println!("{}", recommendations.trim());
        println!();
    }

    print_heading("📚 Resources");
    for link in report.resources {
        println!("  {} {}", link.title.bold(), link.url.dimmed());
    }
    println!();

    if report.has_errors() {
        println!("{}", "Report completed with errors; see notices above.".yellow());
    }
}

fn print_heading(title: &str) {
    println!("{}", title.bold());
    println!("{}", "─".repeat(UnicodeWidthStr::width(title).max(20)));
}

/// Print tiles in as many columns as the terminal allows (at most four).
pub fn print_tiles(tiles: &[MetricTile]) {
    let cells: Vec<(String, String)> = tiles
        .iter()
        .map(|t| (format!("{} {}", t.icon, t.label), t.value.clone()))
        .collect();

    let cell_width = cells
        .iter()
        .map(|(label, value)| UnicodeWidthStr::width(label.as_str()).max(value.len()))
        .max()
        .unwrap_or(0)
        + 3;
    let columns = (term_width() / cell_width.max(1)).clamp(1, 4);

    for row in cells.chunks(columns) {
        let labels: String = row.iter().map(|(l, _)| pad_right(l, cell_width)).collect();
        let values: String = row
            .iter()
            .map(|(_, v)| pad_right(v, cell_width))
            .collect();
        println!("{}", labels.dimmed());
        println!("{}", values.bold());
        println!();
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}
