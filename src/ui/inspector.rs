//! "Complete Profile Details" overlay.

use ratatui::{layout::Rect, style::Style, text::Line, widgets::Paragraph, Frame};

use crate::inspector::{inspector_text, wrap_rows, DetailInspector};
use crate::models::UserProfile;
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::theme::COLOR_ACCENT;

pub const INSPECTOR_TITLE: &str = "Complete Profile Details";

const INSPECTOR_HINT: &str = "j/k scroll · esc close";

fn dialog_config(content_rows: usize) -> DialogFrameConfig<'static> {
    let height = u16::try_from(content_rows).unwrap_or(u16::MAX);
    DialogFrameConfig::new(INSPECTOR_TITLE, height)
        .min_width(40)
        .max_width(100)
        .hint(INSPECTOR_HINT)
}

/// The record wrapped to the dialog's width over `area`, plus how many of
/// those rows fit on screen at once.
pub fn inspector_rows(area: Rect, profile: &UserProfile) -> (Vec<String>, u16) {
    let width = dialog_config(0).content_area(area).width;
    let rows = wrap_rows(&inspector_text(profile), width);
    let viewport = dialog_config(rows.len()).content_area(area).height;
    (rows, viewport)
}

/// Draw the pretty-printed record in a scrollable dialog over `area`.
pub fn render_inspector(
    frame: &mut Frame,
    area: Rect,
    profile: &UserProfile,
    inspector: &DetailInspector,
) {
    let (rows, viewport) = inspector_rows(area, profile);
    // The app may not have seen this size yet
    let mut view = *inspector;
    view.fit(rows.len(), viewport);

    let config = dialog_config(rows.len());
    let inner = render_dialog_frame(frame, area, &config);

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|row| Line::styled(row, Style::default().fg(COLOR_ACCENT)))
        .collect();
    let paragraph = Paragraph::new(lines).scroll((view.scroll(), 0));
    frame.render_widget(paragraph, inner);
}
