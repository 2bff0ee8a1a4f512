use crate::application::dto::{OutdatedReport, OutdatedRow};
use crate::outdated_check::domain::DependencyKind;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Spaces between columns
const COLUMN_PADDING: usize = 2;

const CURRENT_HEADER: &str = "CURRENT";
const LATEST_HEADER: &str = "LATEST";

/// TableFormatter adapter for the plain-text outdated tables
///
/// Writes one table per dependency kind that has outdated rows, followed by
/// the summary line. Headers are green and underlined; the latest column
/// keeps the severity coloring from the report, so column widths are
/// measured without ANSI escape sequences.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_table(output: &mut String, kind: DependencyKind, rows: &[OutdatedRow]) {
        let headers = [kind.table_header(), CURRENT_HEADER, LATEST_HEADER];
        let cells: Vec<[&str; 3]> = rows
            .iter()
            .map(|row| [row.name.as_str(), row.current.as_str(), row.formatted_latest.as_str()])
            .collect();

        let mut widths = headers.map(visible_width);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(visible_width(cell));
            }
        }

        let styled_headers = headers.map(|h| h.green().underline().to_string());
        output.push('\n');
        Self::write_line(output, &styled_headers.each_ref().map(String::as_str), &widths);
        for row in &cells {
            Self::write_line(output, row, &widths);
        }
    }

    fn write_line(output: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
        let mut line = String::new();
        for (cell, width) in cells.iter().zip(widths) {
            line.push_str(cell);
            let fill = width.saturating_sub(visible_width(cell)) + COLUMN_PADDING;
            line.push_str(&" ".repeat(fill));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    fn write_summary(output: &mut String, report: &OutdatedReport) -> std::fmt::Result {
        output.push('\n');
        if report.has_outdated() {
            writeln!(
                output,
                "⚠️ {} outdated packages out of {} packages.",
                report.outdated_count(),
                report.total_packages
            )
        } else {
            writeln!(
                output,
                "✅ All {} packages are up-to-date.",
                report.total_packages
            )
        }
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, report: &OutdatedReport) -> Result<String> {
        let mut output = String::new();

        for kind in [DependencyKind::Dependency, DependencyKind::DevDependency] {
            let rows = report.rows(kind);
            if !rows.is_empty() {
                Self::write_table(&mut output, kind, rows);
            }
        }

        Self::write_summary(&mut output, report)?;
        Ok(output)
    }
}

/// Number of characters a terminal displays for `text`, skipping ANSI CSI sequences
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI: ESC '[' parameters, terminated by a byte in '@'..='~'
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        width += 1;
    }
    width
}
