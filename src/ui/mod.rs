//! UI rendering for the profile screen
//!
//! ```text
//! ┌ My Profile ───────────────────────── r refresh ┐  header
//! │ http://localhost:5000/api/auth/me              │
//! ├────────────────────────────────────────────────┤
//! │ loading / error / empty / cards                │  body
//! ├────────────────────────────────────────────────┤
//! │ r refresh · d details · q quit                 │  footer
//! └────────────────────────────────────────────────┘
//! ```
//!
//! The inspector dialog is drawn over everything while open.

pub mod cards;
pub mod components;
pub mod footer;
pub mod header;
pub mod inspector;
pub mod layout;
pub mod states;
pub mod theme;

use ratatui::{
    layout::{Constraint, Layout, Margin},
    style::Style,
    text::Line,
    Frame,
};

use crate::app::App;
use crate::controller::ViewState;
use layout::LayoutContext;
use theme::COLOR_DIM;

/// Draw the whole screen from `app`.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area().inner(Margin::new(1, 0));
    let ctx = LayoutContext::from_rect(area);

    let [header_area, _, body_area, footer_area] = Layout::vertical([
        Constraint::Length(ctx.header_height()),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render(frame, header_area, app.controller.client().url());

    match app.state() {
        ViewState::Loading => states::render_loading(frame, body_area, app.tick_count),
        ViewState::Error(message) => states::render_error(frame, body_area, message),
        ViewState::Empty => states::render_empty(frame, body_area),
        ViewState::Loaded(profile) => cards::render_loaded(frame, body_area, profile),
    }

    frame.render_widget(
        Line::styled(footer::get_footer_hint(app), Style::default().fg(COLOR_DIM)),
        footer_area,
    );

    if let ViewState::Loaded(profile) = app.state() {
        if app.inspector.is_open() {
            inspector::render_inspector(frame, frame.area(), profile, &app.inspector);
        }
    }
}
