//! Raw data preview - the first rows of the table, every column.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

use super::theme::{ACCENT, INFO_DIM, PRIMARY, TEXT};
use crate::dataset::Dataset;

const MIN_COLUMN_WIDTH: usize = 4;
const MAX_COLUMN_WIDTH: usize = 28;

/// Column widths from the header and preview cells, clamped to a sane range
fn column_widths(dataset: &Dataset, rows: usize) -> Vec<Constraint> {
    dataset
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let widest = dataset
                .head(rows)
                .iter()
                .filter_map(|r| r.fields.get(col))
                .map(|v| v.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0);
            let width = widest.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
            Constraint::Length(u16::try_from(width).unwrap_or(u16::MAX))
        })
        .collect()
}

/// Render the first `rows` records as a table
pub fn render_raw_data(f: &mut Frame, area: Rect, dataset: &Dataset, rows: usize) {
    let header = Row::new(dataset.headers.iter().map(String::as_str))
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let body: Vec<Row> = dataset
        .head(rows)
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let style = if idx % 2 == 0 {
                Style::default().fg(TEXT)
            } else {
                Style::default().fg(INFO_DIM)
            };
            Row::new(record.fields.iter().map(|v| v.replace('\n', " "))).style(style)
        })
        .collect();

    let table = Table::new(body, column_widths(dataset, rows)).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Raw Data (first {} of {})", rows.min(dataset.len()), dataset.len()))
            .border_style(Style::default().fg(PRIMARY)),
    );

    f.render_widget(table, area);
}
