//! Context-aware keybind footer.

use crate::app::App;
use crate::controller::ViewState;

/// Footer text for the current screen.
pub fn get_footer_hint(app: &App) -> &'static str {
    if app.inspector.is_open() {
        return "j/k scroll · esc close";
    }
    match app.state() {
        ViewState::Loading => "q quit",
        ViewState::Error(_) => "r retry · q quit",
        ViewState::Empty => "r refresh · q quit",
        ViewState::Loaded(_) => "r refresh · d details · q quit",
    }
}
