//! Example table component
//!
//! Renders one before/after example as a grid: a synthetic row-number
//! column followed by the example's own columns. Pagination is disabled,
//! every row is shown.

use crate::model::{get_data_dictionary, DataRow, Example};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Upper bound on the page size
pub const MAX_PAGE_SIZE: usize = 10;

/// Cells wider than this are truncated with an ellipsis
const MAX_COLUMN_WIDTH: usize = 24;

/// Width of the row-number column
const INDEX_COLUMN_WIDTH: usize = 3;

/// A formatted example ready for rendering
pub struct ExampleTable<'a> {
    columns: &'a [String],
    rows: Vec<DataRow>,
}

impl<'a> ExampleTable<'a> {
    pub fn new(example: &'a Example) -> Self {
        Self {
            columns: &example.columns,
            rows: get_data_dictionary(&example.rows, &example.columns),
        }
    }

    /// Number of rows produced by the data dictionary
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Page size the grid would use, at most `MAX_PAGE_SIZE`
    pub fn page_size(&self) -> usize {
        self.rows.len().min(MAX_PAGE_SIZE)
    }

    /// Column widths, index column first
    fn column_widths(&self) -> Vec<usize> {
        let index_width = INDEX_COLUMN_WIDTH.max(self.rows.len().to_string().len());
        let mut widths = vec![index_width];

        for column in self.columns {
            let cell_width = self
                .rows
                .iter()
                .map(|row| row.get(column).map_or(0, |v| v.width()))
                .max()
                .unwrap_or(0);
            widths.push(column.width().max(cell_width).clamp(1, MAX_COLUMN_WIDTH));
        }

        widths
    }

    /// Render the grid as lines for embedding in a scrollable panel
    pub fn render_lines(&self) -> Vec<Line<'static>> {
        if self.columns.is_empty() {
            return vec![Line::from(Span::styled(
                "  (empty example)",
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 3);

        // Header: blank over the index column
        let header_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mut header = vec![Span::raw("  "), Span::raw(fit("", widths[0])), Span::raw(" │ ")];
        for (column, width) in self.columns.iter().zip(&widths[1..]) {
            header.push(Span::styled(fit(column, *width), header_style));
            header.push(Span::raw(" │ "));
        }
        lines.push(Line::from(header));

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            format!("  {}", separator),
            Style::default().fg(Color::DarkGray),
        )));

        for (index, row) in self.rows.iter().enumerate() {
            let mut spans = vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:>width$}", index + 1, width = widths[0]),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" │ "),
            ];
            for (column, width) in self.columns.iter().zip(&widths[1..]) {
                let value = row.get(column).map(String::as_str).unwrap_or("");
                spans.push(Span::styled(
                    fit(value, *width),
                    Style::default().fg(Color::White),
                ));
                spans.push(Span::raw(" │ "));
            }
            lines.push(Line::from(spans));
        }

        if self.row_count() > self.page_size() {
            lines.push(Line::from(Span::styled(
                format!("  all {} rows shown", self.row_count()),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines
    }
}

/// Pad or truncate to an exact display width
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        let padding = width - text.width();
        return format!("{}{}", text, " ".repeat(padding));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::ExampleRow;
    use serde_json::json;

    fn example(columns: &[&str], rows: usize) -> Example {
        Example {
            columns: columns.iter().map(|s| s.to_string()).collect(),
            rows: (0..rows)
                .map(|i| ExampleRow::Tuple(vec![json!(i), json!(format!("name {}", i))]))
                .collect(),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_row_count_matches_formatter_output() {
        let ex = example(&["id", "name"], 4);
        let table = ExampleTable::new(&ex);
        assert_eq!(table.row_count(), get_data_dictionary(&ex.rows, &ex.columns).len());
    }

    #[test]
    fn test_page_size_is_capped_at_ten() {
        let small = example(&["id", "name"], 3);
        let large = example(&["id", "name"], 25);
        assert_eq!(ExampleTable::new(&small).page_size(), 3);
        assert_eq!(ExampleTable::new(&large).page_size(), 10);
        assert_eq!(ExampleTable::new(&example(&["id"], 0)).page_size(), 0);
    }

    #[test]
    fn test_every_row_is_rendered() {
        let ex = example(&["id", "name"], 12);
        let lines = ExampleTable::new(&ex).render_lines();
        // header + separator + rows + footer note
        assert_eq!(lines.len(), 2 + 12 + 1);
    }

    #[test]
    fn test_index_column_is_one_based() {
        let ex = example(&["id", "name"], 2);
        let lines = ExampleTable::new(&ex).render_lines();

        assert!(line_text(&lines[2]).trim_start().starts_with("1 │"));
        assert!(line_text(&lines[3]).trim_start().starts_with("2 │"));
    }

    #[test]
    fn test_header_lists_columns() {
        let ex = example(&["id", "name"], 1);
        let header = line_text(&ExampleTable::new(&ex).render_lines()[0]);
        assert!(header.contains("id"));
        assert!(header.contains("name"));
    }

    #[test]
    fn test_empty_columns_render_placeholder() {
        let ex = Example::default();
        let lines = ExampleTable::new(&ex).render_lines();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("日本語", 4).width(), 4);
    }
}
