pub mod common;
pub mod config;
pub mod list;
pub mod result;

use std::fmt;

pub use common::{StatusBadge, StatusLevel};
pub use config::ConfigViewModel;
pub use list::{
    GroupListViewModel, GroupViewModel, HeaderViewModel, ListLineViewModel, RowViewModel,
    StatusBarViewModel,
};
pub use result::CommandResultViewModel;

/// Bridge from a view model to its plain-text view.
///
/// `color` is true when the output goes to a terminal that can show the
/// accent colors.
pub trait CreateView {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a>;
}
