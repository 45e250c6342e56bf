//! Corner-anchored indicator box.
//!
//! Collapsed, the box holds a single summary line (`▭ md - 900px`), led by
//! a device-class glyph once a width is known. Expanded, it lists every
//! breakpoint above the summary and marks the active one.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::breakpoints::BreakpointError;
use crate::indicator::IndicatorView;
use crate::models::StartingPosition;

use super::Theme;

/// Horizontal gap between the box and the screen edge.
const MARGIN_X: u16 = 2;
/// Vertical gap between the box and the screen edge.
const MARGIN_Y: u16 = 1;
/// Marker drawn in front of the active row.
const ACTIVE_MARKER: &str = "▸ ";
const INACTIVE_MARKER: &str = "  ";

/// Indicator widget
pub struct IndicatorWidget;

impl IndicatorWidget {
    /// Renders the indicator and returns the area it occupies.
    pub fn render(
        f: &mut Frame,
        view: &Result<IndicatorView, BreakpointError>,
        position: StartingPosition,
        theme: &Theme,
    ) -> Rect {
        let (lines, border_color) = match view {
            Ok(view) => (Self::view_lines(view, theme), theme.primary),
            Err(err) => (
                vec![Line::from(Span::styled(
                    format!("config error: {err}"),
                    Style::default().fg(theme.error),
                ))],
                theme.error,
            ),
        };

        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let content_height = lines.len() as u16;
        // +2 for borders, +2 for horizontal padding
        let area = anchored_rect(
            f.area(),
            content_width.saturating_add(4),
            content_height.saturating_add(2),
            position,
        );

        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.surface));

        let paragraph = Paragraph::new(lines)
            .block(block.padding(Padding::horizontal(1)))
            .style(Style::default().fg(theme.text));
        f.render_widget(paragraph, area);

        area
    }

    /// Rows for the expanded list followed by the summary line.
    fn view_lines(view: &IndicatorView, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if view.expanded {
            let name_width = view
                .entries
                .iter()
                .map(|entry| entry.name.chars().count())
                .max()
                .unwrap_or(0);
            let value_width = view
                .entries
                .iter()
                .map(|entry| entry.value.chars().count())
                .max()
                .unwrap_or(0);

            for entry in &view.entries {
                let (marker, style) = if entry.active {
                    (
                        ACTIVE_MARKER,
                        Style::default()
                            .fg(theme.accent)
                            .bg(theme.highlight_bg)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (INACTIVE_MARKER, Style::default().fg(theme.text_muted))
                };

                lines.push(Line::from(Span::styled(
                    format!(
                        "{marker}{:<name_width$}   {:>value_width$}",
                        entry.name, entry.value
                    ),
                    style,
                )));
            }
            lines.push(Line::from(""));
        }

        let summary_style = if view.below_first || view.width.is_none() {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        };
        let mut summary = Vec::new();
        if let Some(device) = view.device {
            summary.push(Span::styled(
                format!("{} ", device.glyph()),
                Style::default().fg(theme.primary),
            ));
        }
        summary.push(Span::styled(view.summary(), summary_style));
        lines.push(Line::from(summary));

        lines
    }
}

/// Places a `width` x `height` box in the given corner of `screen`.
///
/// The box is shrunk to fit when the screen is smaller than requested.
pub fn anchored_rect(screen: Rect, width: u16, height: u16, position: StartingPosition) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);

    let spare_x = screen.width - width;
    let spare_y = screen.height - height;
    let margin_x = MARGIN_X.min(spare_x);
    let margin_y = MARGIN_Y.min(spare_y);

    let x = if position.is_left() {
        screen.x + margin_x
    } else {
        screen.x + spare_x - margin_x
    };
    let y = if position.is_top() {
        screen.y + margin_y
    } else {
        screen.y + spare_y - margin_y
    };

    Rect::new(x, y, width, height)
}
