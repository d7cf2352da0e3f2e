use std::fmt;

use crate::presentation::view_models::ConfigViewModel;

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ConfigView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.data.path, self.data.exists) {
            (Some(path), true) => writeln!(f, "Config file: {}", path)?,
            (Some(path), false) => writeln!(f, "Config file: {} (not found, using defaults)", path)?,
            (None, _) => writeln!(f, "Config file: (none, using defaults)")?,
        }
        writeln!(f)?;

        if self.data.config.data_path.is_none() {
            writeln!(f, "# data_path not set, using bundled data")?;
        }
        write!(f, "{}", self.data.toml)?;
        Ok(())
    }
}
