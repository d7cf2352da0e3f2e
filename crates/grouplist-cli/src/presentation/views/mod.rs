pub mod config;
pub mod list;
pub mod tui;

pub use config::ConfigView;
pub use list::GroupListView;
