pub mod config;
pub mod list;

pub use config::present_config;
pub use list::{present_group_list, present_line, present_status_bar};
