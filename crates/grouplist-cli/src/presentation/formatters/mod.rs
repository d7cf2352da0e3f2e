pub mod color;
pub mod labels;
pub mod text;

pub use color::{console_accent, header_background, tui_color};
pub use labels::{group_title, id_label, indicator, indicator_label, item_count_label};
pub use text::{display_width, truncate_text};
