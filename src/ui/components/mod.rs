//! Reusable UI Components
//!
//! - `DialogFrame` - Centered dialog overlay with rounded borders
//! - `StatusIndicator` - Spinner, error, and warning blocks

mod dialog_frame;
mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{
    calculate_status_height, get_spinner_char, render_status_indicator, StatusIndicatorType,
};
