use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::publish::stubs;

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "signature-handler.toml";

/// Where published components land when the project does not say otherwise.
const DEFAULT_COMPONENTS_DIR: &str = "resources/js/components";

/// Configuration for the installer
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root directory
    pub project_root: PathBuf,
    /// Directory components are published into
    pub components_dir: PathBuf,
    /// Asset group published by `install`
    pub stub_tag: String,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    publish: PublishSection,
}

#[derive(Debug, Default, Deserialize)]
struct PublishSection {
    tag: Option<String>,
    components_dir: Option<String>,
}

impl Config {
    /// Load configuration from the current directory
    pub fn load() -> Result<Self> {
        let project_root = std::env::current_dir()?;
        Self::load_from(&project_root)
    }

    /// Load configuration rooted at `project_root`.
    ///
    /// Reads `signature-handler.toml` when it exists; a missing file means
    /// defaults, a malformed one is an error.
    pub fn load_from(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE_NAME);
        let file: ConfigFile = if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            ConfigFile::default()
        };

        let components_dir = project_root.join(
            file.publish
                .components_dir
                .as_deref()
                .unwrap_or(DEFAULT_COMPONENTS_DIR),
        );
        let stub_tag = file
            .publish
            .tag
            .unwrap_or_else(|| stubs::SIGNATURE_HANDLER_TAG.to_string());

        Ok(Self {
            project_root: project_root.to_path_buf(),
            components_dir,
            stub_tag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(temp.path()).unwrap();

        assert_eq!(config.stub_tag, "signature-handler-stubs");
        assert_eq!(
            config.components_dir,
            temp.path().join("resources/js/components")
        );
    }

    #[test]
    fn config_file_overrides_tag_and_destination() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[publish]\ntag = \"custom-stubs\"\ncomponents_dir = \"js/vendor\"\n",
        )
        .unwrap();

        let config = Config::load_from(temp.path()).unwrap();

        assert_eq!(config.stub_tag, "custom-stubs");
        assert_eq!(config.components_dir, temp.path().join("js/vendor"));
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[publish]\ntag = \"custom-stubs\"\n",
        )
        .unwrap();

        let config = Config::load_from(temp.path()).unwrap();

        assert_eq!(config.stub_tag, "custom-stubs");
        assert_eq!(
            config.components_dir,
            temp.path().join("resources/js/components")
        );
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[publish\ntag =").unwrap();

        assert!(Config::load_from(temp.path()).is_err());
    }
}
