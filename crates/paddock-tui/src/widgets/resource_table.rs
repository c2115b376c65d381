//! Column-schema-driven table rendering.
//!
//! Every resource screen renders its rows through the same path: the
//! shared [`Column`] schema provides headers, widths, and per-cell
//! text (renderer or serialized-field lookup), so a screen is fully
//! described by its column list plus endpoint closures.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table},
};
use serde::Serialize;
use throbber_widgets_tui::{Throbber, ThrobberState};

use paddock_core::{Column, ColumnWidth};

use crate::theme;

/// Layout constraints matching the schema's width hints.
pub fn constraints<T>(columns: &[Column<T>]) -> Vec<Constraint> {
    columns
        .iter()
        .map(|col| match col.width {
            ColumnWidth::Fill => Constraint::Fill(1),
            ColumnWidth::Fixed(w) => Constraint::Length(w),
            ColumnWidth::Percent(p) => Constraint::Percentage(p),
        })
        .collect()
}

/// Build the table widget for one page of rows.
pub fn build_table<T: Serialize>(columns: &[Column<T>], rows: &[T]) -> Table<'static> {
    let header = Row::new(
        columns
            .iter()
            .map(|col| Cell::from(col.header.clone()))
            .collect::<Vec<_>>(),
    )
    .style(theme::table_header());

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(
                columns
                    .iter()
                    .map(|col| Cell::from(col.cell(row)))
                    .collect::<Vec<_>>(),
            )
            .style(theme::table_row())
        })
        .collect();

    Table::new(body, constraints(columns))
        .header(header)
        .row_highlight_style(theme::table_selected())
        .highlight_symbol("▸ ")
}

/// Render the in-flight indicator shown while a fetch has not yet
/// produced rows.
pub fn render_loading(frame: &mut Frame, area: Rect, throbber: &ThrobberState) {
    let widget = Throbber::default()
        .label("fetching…")
        .style(theme::key_hint())
        .throbber_style(ratatui::style::Style::default().fg(theme::SKY_BLUE))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX);
    let mut state = throbber.clone();
    frame.render_stateful_widget(widget, centered_line(area), &mut state);
}

/// Render the caller-supplied empty-state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::styled(message.to_owned(), theme::key_hint());
    frame.render_widget(Paragraph::new(line).centered(), centered_line(area));
}

/// Render a fetch failure in place of rows.
pub fn render_failed(frame: &mut Frame, area: Rect, error: &str) {
    let line = Line::styled(
        format!("fetch failed: {error}"),
        ratatui::style::Style::default().fg(theme::ERROR_RED),
    );
    frame.render_widget(Paragraph::new(line).centered(), centered_line(area));
}

/// One-line band vertically centered in `area`.
fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect::new(area.x, y.min(area.y + area.height.saturating_sub(1)), area.width, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct ZoneRow {
        name_en: String,
        is_active: bool,
    }

    #[test]
    fn width_hints_map_to_constraints() {
        let columns: Vec<Column<ZoneRow>> = vec![
            Column::new("nameEn", "Name"),
            Column::new("isActive", "Active").width(ColumnWidth::Fixed(8)),
            Column::new("nameEn", "Name").width(ColumnWidth::Percent(30)),
        ];
        assert_eq!(
            constraints(&columns),
            vec![
                Constraint::Fill(1),
                Constraint::Length(8),
                Constraint::Percentage(30),
            ]
        );
    }
}
