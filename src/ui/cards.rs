//! Profile and additional-information cards for the loaded state.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::{initials, role_color, role_icon, role_label};
use crate::models::{Role, UserProfile};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{to_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_ON_BADGE};

/// Width of the label column in card rows
const LABEL_WIDTH: usize = 14;

/// Shown for a field the record does not carry
const MISSING: &str = "-";

/// Rows of the "Complete Profile Data" panel, borders included.
pub const DATA_HINT_HEIGHT: u16 = 4;

fn field_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<width$}", label, width = LABEL_WIDTH),
            Style::default()
                .fg(COLOR_DIM)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.into(), Style::default().fg(COLOR_ACCENT)),
    ])
}

/// A filled chip in the role's colour: icon plus label.
fn role_chip(role: Option<&Role>) -> Span<'static> {
    Span::styled(
        format!(" {} {} ", role_icon(role).glyph(), role_label(role)),
        Style::default()
            .fg(COLOR_ON_BADGE)
            .bg(to_color(role_color(role)))
            .add_modifier(Modifier::BOLD),
    )
}

/// A lighter chip used in the role list: coloured text only.
fn role_tag(role: &Role) -> Span<'static> {
    Span::styled(
        format!("[{}]", role_label(Some(role))),
        Style::default().fg(to_color(role_color(Some(role)))),
    )
}

/// Lines of the main profile card.
pub fn profile_card_lines(profile: &UserProfile) -> Vec<Line<'static>> {
    let role = profile.role();
    let badge = Span::styled(
        format!(" {} ", initials(profile.name())),
        Style::default()
            .fg(COLOR_ON_BADGE)
            .bg(to_color(role_color(role)))
            .add_modifier(Modifier::BOLD),
    );

    let mut lines = vec![
        Line::from(badge),
        Line::from(""),
        Line::styled(
            profile.name().unwrap_or(MISSING).to_string(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(role_chip(role)),
        Line::from(""),
        field_line("Email", profile.email().unwrap_or(MISSING)),
        field_line("User ID", profile.id().unwrap_or(MISSING)),
    ];

    if let Some(reg_no) = profile.registration_number() {
        lines.push(field_line("Reg. Number", reg_no));
    }
    if let Some(teacher_id) = profile.staff_id() {
        lines.push(field_line("Teacher ID", teacher_id));
    }

    lines
}

/// Lines of the additional-information card.
pub fn details_card_lines(profile: &UserProfile) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(school) = profile.school() {
        lines.push(field_line("School", school.display()));
    }
    if let Some(department) = profile.department() {
        lines.push(field_line("Department", department.display()));
    }
    if profile.has_multiple_roles() {
        let mut spans = vec![Span::styled(
            format!("{:<width$}", "All Roles", width = LABEL_WIDTH),
            Style::default()
                .fg(COLOR_DIM)
                .add_modifier(Modifier::BOLD),
        )];
        for (i, role) in profile.roles().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(role_tag(role));
        }
        lines.push(Line::from(spans));
    }
    match profile.course_count() {
        0 => {}
        1 => lines.push(field_line("Courses", "1 course assigned")),
        n => lines.push(field_line("Courses", format!("{} courses assigned", n))),
    }

    if !lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(
        "Account Details",
        Style::default()
            .fg(COLOR_DIM)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(field_line("Created", profile.created_date()));
    lines.push(field_line("Last Updated", profile.updated_date()));

    lines
}

fn card_block(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
}

fn card_height(lines: &[Line]) -> u16 {
    u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines)
        .block(card_block(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_data_hint(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            "This shows your complete profile information as stored in the system.",
            Style::default().fg(COLOR_DIM),
        ),
        Line::from(vec![
            Span::styled("press ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                "d",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to view details", Style::default().fg(COLOR_DIM)),
        ]),
    ];
    render_card(frame, area, "Complete Profile Data", lines);
}

/// Render both cards and the data hint. Cards stack on narrow terminals.
pub fn render_loaded(frame: &mut Frame, area: Rect, profile: &UserProfile) {
    let ctx = LayoutContext::from_rect(area);
    let profile_lines = profile_card_lines(profile);
    let details_lines = details_card_lines(profile);

    if ctx.should_stack_panels() {
        let [profile_area, details_area, hint_area] = Layout::vertical([
            Constraint::Length(card_height(&profile_lines)),
            Constraint::Length(card_height(&details_lines)),
            Constraint::Length(DATA_HINT_HEIGHT),
        ])
        .areas(area);

        render_card(frame, profile_area, "Profile", profile_lines);
        render_card(frame, details_area, "Additional Information", details_lines);
        render_data_hint(frame, hint_area);
    } else {
        let row_height = card_height(&profile_lines).max(card_height(&details_lines));
        let [row_area, hint_area] = Layout::vertical([
            Constraint::Length(row_height),
            Constraint::Length(DATA_HINT_HEIGHT),
        ])
        .areas(area);

        let (left, _) = ctx.two_column_widths();
        let [profile_area, details_area] =
            Layout::horizontal([Constraint::Length(left), Constraint::Min(0)]).areas(row_area);

        render_card(frame, profile_area, "Profile", profile_lines);
        render_card(frame, details_area, "Additional Information", details_lines);
        render_data_hint(frame, hint_area);
    }
}
