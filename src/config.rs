use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backend::Endpoint;
use crate::error::{Error, Result};

const APP_NAME: &str = "prompt_relay";
const CONFIG_PATH_VAR: &str = "PROMPT_RELAY_CONFIG_PATH";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "relay.log";

const DEFAULT_ICON: &str = "images/icon.png";
const DEFAULT_WRAP_WIDTH: usize = 60;
const DEFAULT_MAX_NEW_TOKENS: u32 = 46;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log_file: LogFile,
    #[serde(default)]
    pub endpoint: Endpoint,
    /// Host-owned icon referenced by every emitted item.
    #[serde(default = "default_icon")]
    pub icon: PathBuf,
    /// Column width for wrapping generated text into descriptions.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        get_config()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = read_file_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: LogFile::default(),
            endpoint: Endpoint::default(),
            icon: default_icon(),
            wrap_width: default_wrap_width(),
            generation: GenerationConfig::default(),
        }
    }
}

/// Static parameters sent with every generate request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
    #[serde(default)]
    pub auto_max_new_tokens: bool,
    #[serde(default)]
    pub max_tokens_second: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            auto_max_new_tokens: false,
            max_tokens_second: 0,
        }
    }
}

fn default_icon() -> PathBuf {
    PathBuf::from(DEFAULT_ICON)
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

fn default_max_new_tokens() -> u32 {
    DEFAULT_MAX_NEW_TOKENS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogFile(PathBuf);

impl Default for LogFile {
    fn default() -> Self {
        let path = base_dirs()
            .expect("unable to load base dirs")
            .place_state_file(LOG_FILE_NAME)
            .expect("unable to create default log file");
        LogFile(path)
    }
}

impl AsRef<Path> for LogFile {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

fn get_config() -> anyhow::Result<Config> {
    let path: PathBuf = if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        path.into()
    } else {
        base_dirs()?.place_config_file(CONFIG_FILE_NAME)?
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    Ok(Config::from_path(path)?)
}

fn base_dirs() -> anyhow::Result<xdg::BaseDirectories> {
    Ok(xdg::BaseDirectories::with_prefix(APP_NAME)?)
}

fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    std::fs::read_to_string(&path).map_err(|source| Error::ReadFile {
        source,
        path: path.as_ref().into(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(
            config.endpoint.url().as_str(),
            "http://localhost:5000/api/v1/generate"
        );
        assert_eq!(config.icon, PathBuf::from("images/icon.png"));
        assert_eq!(config.wrap_width, 60);
        assert_eq!(config.generation.max_new_tokens, 46);
        assert!(!config.generation.auto_max_new_tokens);
        assert_eq!(config.generation.max_tokens_second, 0);
    }

    #[test]
    fn partial_file_overrides_named_fields_only() {
        let config: Config = toml::from_str(
            r#"
            wrap_width = 24

            [generation]
            max_new_tokens = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.wrap_width, 24);
        assert_eq!(config.generation.max_new_tokens, 12);
        assert!(!config.generation.auto_max_new_tokens);
        assert_eq!(config.icon, PathBuf::from("images/icon.png"));
    }

    #[test]
    fn from_path_reads_a_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "endpoint = \"http://127.0.0.1:5001/api/v1/generate\""
        )
        .unwrap();

        let config = Config::from_path(file.path()).unwrap();

        assert_eq!(
            config.endpoint.url().as_str(),
            "http://127.0.0.1:5001/api/v1/generate"
        );
    }

    #[test]
    fn from_path_missing_file_is_an_error() {
        let err = Config::from_path("/definitely/not/here.toml").unwrap_err();

        assert!(matches!(err, Error::ReadFile { .. }));
    }
}
