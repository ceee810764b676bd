use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Reads the given file. Unlike [`Config::load_default`], a missing
    /// file is an error here: the user named it explicitly.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config TOML {}", path.display()))
    }

    /// Reads the config from its default location, falling back to the
    /// built-in defaults when no file exists there.
    pub fn load_default() -> anyhow::Result<Config> {
        match default_config_path() {
            Some(path) if path.exists() => Config::load(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Where the session identifier is persisted.
    pub fn session_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.session.path {
            return Ok(path.clone());
        }
        let dir = dirs::data_dir().context("Could not determine a data directory")?;
        Ok(dir.join("moodgrid").join("session.toml"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            api: ApiConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Deserialize, Default)]
pub struct SessionConfig {
    pub path: Option<PathBuf>,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("moodgrid").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_config_toml() -> anyhow::Result<()> {
        let toml_str = r#"
version = 1

[api]
base_url = "http://192.168.1.20:5000"

[session]
path = "/tmp/moodgrid-session.toml"
"#;

        // Deserialize TOML into Config
        let cfg: Config = toml::from_str(toml_str)?;

        // Check version
        assert_eq!(cfg.version, 1);

        // Check api section
        assert_eq!(cfg.api.base_url, "http://192.168.1.20:5000");

        // Check session section
        assert_eq!(
            cfg.session.path,
            Some(PathBuf::from("/tmp/moodgrid-session.toml"))
        );

        Ok(())
    }

    #[test]
    fn test_omitted_sections_fall_back_to_defaults() -> anyhow::Result<()> {
        let toml_str = "version = 1\n";

        let cfg: Config = toml::from_str(toml_str)?;

        assert_eq!(cfg.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.session.path, None);

        let session_path = cfg.session_path()?;
        assert!(session_path.ends_with("moodgrid/session.toml"));

        Ok(())
    }

    #[test]
    fn test_explicitly_named_missing_file_is_an_error() {
        let result = Config::load(Path::new("/nonexistent/moodgrid/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_config_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "version = [not toml")?;

        assert!(Config::load(&path).is_err());

        Ok(())
    }
}
