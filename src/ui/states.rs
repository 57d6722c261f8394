//! Loading, error and empty views.

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    style::Style,
    Frame,
};

use crate::ui::components::{calculate_status_height, render_status_indicator, StatusIndicatorType};
use crate::ui::theme::{COLOR_ERROR, COLOR_WARNING};

pub const LOADING_MESSAGE: &str = "Loading profile...";
pub const EMPTY_MESSAGE: &str = "No profile data available";
pub const RETRY_HINT: &str = "press r to retry";

/// Vertically centre `height` rows inside `area`.
fn centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y_offset = area.height.saturating_sub(height) / 2;
    Rect::new(area.x, area.y + y_offset, area.width, height)
}

pub fn render_loading(frame: &mut Frame, area: Rect, tick: u64) {
    let indicator = StatusIndicatorType::spinner(LOADING_MESSAGE, tick as usize);
    let paragraph =
        Paragraph::new(render_status_indicator(&indicator)).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered(area, calculate_status_height(&indicator)));
}

/// Error box showing `message` verbatim with the retry hint.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let indicator = StatusIndicatorType::error(
        "Error",
        Some(message.to_string()),
        Some(RETRY_HINT.to_string()),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ERROR));
    let paragraph = Paragraph::new(render_status_indicator(&indicator))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(
        paragraph,
        Rect::new(
            area.x,
            area.y,
            area.width,
            (calculate_status_height(&indicator) + 2).min(area.height),
        ),
    );
}

pub fn render_empty(frame: &mut Frame, area: Rect) {
    let indicator = StatusIndicatorType::warning(EMPTY_MESSAGE);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_WARNING));
    let paragraph = Paragraph::new(render_status_indicator(&indicator)).block(block);

    frame.render_widget(
        paragraph,
        Rect::new(
            area.x,
            area.y,
            area.width,
            (calculate_status_height(&indicator) + 2).min(area.height),
        ),
    );
}
