//! Status Indicator Component
//!
//! Renders the spinner, error and warning blocks used for the non-loaded
//! view states.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING, COLOR_WARNING};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Error header, optional details and a hint on how to recover
    Error {
        header: String,
        details: Option<String>,
        hint: Option<String>,
    },
    /// Non-fatal warning
    Warning { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn error(header: impl Into<String>, details: Option<String>, hint: Option<String>) -> Self {
        Self::Error {
            header: header.into(),
            details,
            hint,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as centered-ready lines
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => vec![Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_LOADING),
            ),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_LOADING)
                    .add_modifier(Modifier::BOLD),
            ),
        ])],

        StatusIndicatorType::Error {
            header,
            details,
            hint,
        } => {
            let mut lines = vec![Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(
                    header.clone(),
                    Style::default()
                        .fg(COLOR_ERROR)
                        .add_modifier(Modifier::BOLD),
                ),
            ])];

            if let Some(detail) = details {
                lines.push(Line::from(""));
                lines.push(Line::from(detail.clone()));
            }

            if let Some(hint) = hint {
                lines.push(Line::from(""));
                lines.push(Line::styled(hint.clone(), Style::default().fg(COLOR_DIM)));
            }

            lines
        }

        StatusIndicatorType::Warning { message } => vec![Line::from(vec![
            Span::styled("\u{26A0} ", Style::default().fg(COLOR_WARNING)),
            Span::styled(message.clone(), Style::default().fg(COLOR_WARNING)),
        ])],
    }
}

/// Rows needed for a status indicator
pub fn calculate_status_height(indicator: &StatusIndicatorType) -> u16 {
    u16::try_from(render_status_indicator(indicator).len()).unwrap_or(u16::MAX)
}
