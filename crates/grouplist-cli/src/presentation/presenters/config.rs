use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::presentation::view_models::ConfigViewModel;

pub fn present_config(path: Option<&Path>, config: Config) -> Result<ConfigViewModel> {
    Ok(ConfigViewModel {
        path: path.map(|p| p.display().to_string()),
        exists: path.is_some_and(Path::exists),
        toml: config.to_toml()?,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_toml_reflects_effective_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            toast_millis: 1000,
            ..Config::default()
        };

        let vm = present_config(Some(&path), config.clone()).unwrap();

        assert!(!vm.exists);
        assert!(vm.toml.contains("toast_millis = 1000"));
        let parsed: Config = toml::from_str(&vm.toml).unwrap();
        assert_eq!(parsed, config);
    }
}
