//! Full-record inspector dialog state.

use unicode_width::UnicodeWidthChar;

use crate::models::UserProfile;

/// Open/closed flag plus a scroll offset into the wrapped record.
///
/// The offset counts screen rows, not JSON lines, and stops where the
/// last row reaches the bottom of the viewport (see [`DetailInspector::fit`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailInspector {
    open: bool,
    scroll: u16,
    max_scroll: u16,
}

impl DetailInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    /// Set the scroll limit for `content_rows` wrapped rows shown through a
    /// viewport `viewport_rows` tall.
    pub fn fit(&mut self, content_rows: usize, viewport_rows: u16) {
        let hidden = content_rows.saturating_sub(usize::from(viewport_rows));
        self.max_scroll = u16::try_from(hidden).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(self.max_scroll);
    }

    /// Open at the top of the record.
    pub fn open(&mut self) {
        self.open = true;
        self.scroll = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll);
    }
}

/// The text shown in the inspector: every field of the record, in
/// arrival order, pretty-printed.
pub fn inspector_text(profile: &UserProfile) -> String {
    profile.to_pretty_json()
}

/// Hard-wrap `text` into rows at most `width` columns wide.
///
/// Every source line yields at least one row, so blank lines survive. A
/// zero width leaves lines unwrapped.
pub fn wrap_rows(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width);
    let mut rows = Vec::new();
    for line in text.lines() {
        if width == 0 {
            rows.push(line.to_string());
            continue;
        }
        let mut row = String::new();
        let mut row_width = 0;
        for ch in line.chars() {
            let ch_width = ch.width().unwrap_or(0);
            // A glyph wider than the viewport still gets a row of its own
            if row_width + ch_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += ch_width;
        }
        rows.push(row);
    }
    rows
}
