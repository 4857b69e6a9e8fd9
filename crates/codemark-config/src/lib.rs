use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid content glob {pattern:?}: {source}")]
    GlobPatternError {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to read {path} while expanding content glob: {source}")]
    GlobReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Markdown files rendered when no files are named on the command line.
    pub content_glob: String,
    /// Where rendered pages are written.
    pub output_dir: PathBuf,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

/// The `[highlight]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Language name or alias for code blocks without a language.
    pub default_language: String,
    pub word_marker: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            default_language: "plain".to_string(),
            word_marker: "__".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);
        if let Ok(expanded) = shellexpand::full(&config.content_glob) {
            config.content_glob = expanded.into_owned();
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/codemark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Files matching `content_glob`, sorted.
    pub fn content_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let paths =
            glob::glob(&self.content_glob).map_err(|source| ConfigError::GlobPatternError {
                pattern: self.content_glob.clone(),
                source,
            })?;

        let mut files = Vec::new();
        for entry in paths {
            let path = entry.map_err(|err| ConfigError::GlobReadError {
                path: err.path().to_path_buf(),
                source: err.into_error(),
            })?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
