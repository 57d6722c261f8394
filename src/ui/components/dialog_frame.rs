//! Centered overlay with a rounded border, a title and an optional key
//! hint on the bottom edge.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};

/// Rows taken by the top and bottom border.
const BORDER_ROWS: u16 = 2;

#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    pub title: &'a str,
    /// Rows of content, borders excluded
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
    /// Shown right-aligned in the bottom border
    pub hint: Option<&'a str>,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
            hint: None,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Outer size for `area`, never larger than `area` itself.
    fn outer_size(&self, area: Rect) -> (u16, u16) {
        let ctx = LayoutContext::from_rect(area);
        let width = if ctx.is_extra_small() {
            area.width.saturating_sub(4).min(self.max_width)
        } else {
            let percent = if ctx.is_narrow() { 80 } else { 60 };
            ctx.bounded_width(percent, self.min_width, self.max_width)
        };
        let height = self.content_height.saturating_add(BORDER_ROWS);
        (width.min(area.width), height.min(area.height))
    }

    /// The dialog rectangle, borders included, centered in `area`.
    pub fn dialog_area(&self, area: Rect) -> Rect {
        let (width, height) = self.outer_size(area);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Where content goes when the dialog is drawn over `area`.
    ///
    /// The width does not depend on `content_height`.
    pub fn content_area(&self, area: Rect) -> Rect {
        Block::bordered().inner(self.dialog_area(area))
    }
}

/// Draw the frame centered in `area` and return the content rectangle.
///
/// Content taller than the screen is clipped; scrolling is up to the caller.
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, config: &DialogFrameConfig) -> Rect {
    let dialog = config.dialog_area(area);

    let mut block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    if let Some(hint) = config.hint {
        block = block.title_bottom(
            Line::styled(format!(" {} ", hint), Style::default().fg(COLOR_DIM))
                .alignment(Alignment::Right),
        );
    }

    let inner = block.inner(dialog);
    frame.render_widget(Clear, dialog);
    frame.render_widget(block, dialog);
    inner
}
