//! Ratatui widgets for the interactive list.
//!
//! Each widget borrows view models and maps them onto cells. Scroll and
//! selection decisions are made by the renderer before the widget is built.

pub mod list;
pub mod status_bar;
pub mod toast;

pub use list::ListView;
pub use status_bar::StatusBarView;
pub use toast::ToastView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
