//! Screen header: title, refresh hint and endpoint.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

pub const TITLE: &str = "My Profile";

/// Cut `text` to at most `max_width` columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Render the header into `area`.
///
/// Row 1 holds the title on the left and the refresh hint on the right;
/// row 2, when there is one, shows the endpoint being queried.
pub fn render(frame: &mut Frame, area: Rect, endpoint: &str) {
    if area.height == 0 {
        return;
    }

    let title_row = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled(
            TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        title_row,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("r", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(" refresh", Style::default().fg(COLOR_DIM)),
        ]))
        .alignment(Alignment::Right),
        title_row,
    );

    if area.height > 1 {
        let subtitle_row = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::styled(
                truncate_to_width(endpoint, area.width as usize),
                Style::default().fg(COLOR_DIM),
            )),
            subtitle_row,
        );
    }
}
