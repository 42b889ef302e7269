use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for a download run.
///
/// Controls where files are written, whether per-URL status lines are
/// printed, how many downloads may be in flight and where failures are
/// reported.
///
/// # Examples
///
/// ```
/// use image_downloader::Config;
///
/// let config = Config::default();
/// assert_eq!(config.concurrent_downloads, 1);
/// assert!(!config.verbose);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub save_to: PathBuf,
    pub verbose: bool,
    pub concurrent_downloads: usize,
    pub failure_report: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_to: PathBuf::from("."),
            verbose: false,
            concurrent_downloads: 1,
            failure_report: None,
        }
    }
}

impl Config {
    /// Loads a configuration from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Number of downloads allowed in flight, never below one.
    pub fn concurrency(&self) -> usize {
        self.concurrent_downloads.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml("verbose = true\nsave_to = \"images\"\n").unwrap();
        assert!(config.verbose);
        assert_eq!(config.save_to, PathBuf::from("images"));
        assert_eq!(config.concurrent_downloads, 1);
        assert!(config.failure_report.is_none());
    }

    #[test]
    fn zero_concurrency_is_clamped() {
        let config = Config {
            concurrent_downloads: 0,
            ..Config::default()
        };
        assert_eq!(config.concurrency(), 1);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = Config::from_toml("concurrent_downloads = \"lots\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert!(err.to_string().starts_with("Config error:"));
    }
}
