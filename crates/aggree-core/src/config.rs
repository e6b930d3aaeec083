use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use super::error::ConfigError;
use super::state::ConsoleOptions;
use super::state::Region;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub upload: UploadConfig,
    pub export: ExportConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    pub login_latency_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_latency_ms: 1_500,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UploadConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 2_000,
            max_delay_ms: 5_000,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ExportConfig {
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    pub default_region: Region,
    pub sidebar_collapsed: bool,
}

impl Config {
    pub fn from_toml_str(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.normalize();
        Ok(config)
    }

    /// Loads `explicit` if given (it must exist), otherwise `fallback` if it
    /// exists, otherwise defaults.
    pub fn load(explicit: Option<&Path>, fallback: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match (explicit, fallback) {
            (Some(path), _) => path,
            (None, Some(path)) if path.exists() => path,
            _ => return Ok(Self::default()),
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(path, &text)
    }

    fn normalize(&mut self) {
        if self.upload.max_delay_ms < self.upload.min_delay_ms {
            self.upload.max_delay_ms = self.upload.min_delay_ms;
        }
    }

    pub fn console_options(&self) -> ConsoleOptions {
        ConsoleOptions {
            login_latency_ms: self.session.login_latency_ms,
            default_region: self.ui.default_region,
            sidebar_collapsed: self.ui.sidebar_collapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            Path::new("inline.toml"),
            "[ui]\ndefault_region = \"nigeria\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.default_region, Region::Nigeria);
        assert_eq!(config.session.login_latency_ms, 1_500);
        assert_eq!(config.upload, UploadConfig::default());
    }

    #[test]
    fn inverted_delay_window_is_clamped() {
        let config = Config::from_toml_str(
            Path::new("inline.toml"),
            "[upload]\nmin_delay_ms = 900\nmax_delay_ms = 100\n",
        )
        .unwrap();
        assert_eq!(config.upload.min_delay_ms, 900);
        assert_eq!(config.upload.max_delay_ms, 900);
    }

    #[test]
    fn missing_fallback_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(None, Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn unknown_region_fails_to_parse() {
        let err =
            Config::from_toml_str(Path::new("bad.toml"), "[ui]\ndefault_region = \"mars\"\n")
                .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
