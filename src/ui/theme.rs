//! Color theme constants for the profile screen
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

use crate::display::Rgb;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for labels and hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Loading spinner
pub const COLOR_LOADING: Color = Color::Yellow;

/// Error box
pub const COLOR_ERROR: Color = Color::Red;

/// Empty-state warning
pub const COLOR_WARNING: Color = Color::Yellow;

/// Background color for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Text drawn on top of a role-coloured badge or chip
pub const COLOR_ON_BADGE: Color = Color::White;

/// Terminal colour for a display colour.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
