use serde::Serialize;

use crate::config::Config;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: Option<String>,
    pub exists: bool,
    pub config: Config,
    /// The effective settings in config file syntax.
    #[serde(skip)]
    pub toml: String,
}

impl super::CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _color: bool) -> Box<dyn std::fmt::Display + 'a> {
        use crate::presentation::views::ConfigView;
        Box::new(ConfigView::new(self))
    }
}
