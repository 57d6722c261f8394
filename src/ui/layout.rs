//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers sizing
//! questions for the render functions.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width and height breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
}

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```
/// use campus_profile::ui::layout::LayoutContext;
///
/// let ctx = LayoutContext::new(70, 30);
/// assert!(ctx.should_stack_panels());
/// assert_eq!(ctx.percent_width(50), 35);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Build from a render area.
    pub fn from_rect(area: ratatui::layout::Rect) -> Self {
        Self::new(area.width, area.height)
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// A width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`, and never wider than the terminal.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max).min(self.width)
    }

    // ========================================================================
    // Breakpoints
    // ========================================================================

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Profile and information cards go on top of each other below 80 columns.
    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }

    /// Widths of the two side-by-side cards, left card first.
    ///
    /// The profile card gets 40% on medium terminals and 35% on wide ones.
    pub fn two_column_widths(&self) -> (u16, u16) {
        let left_pct = if self.width < breakpoints::MD_WIDTH { 40 } else { 35 };
        let left = self.percent_width(left_pct);
        (left, self.width.saturating_sub(left))
    }

    /// Header rows; the subtitle line is dropped on tiny terminals.
    pub fn header_height(&self) -> u16 {
        if self.is_extra_small() {
            1
        } else {
            2
        }
    }
}
