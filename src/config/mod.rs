mod api;
mod defaults;

use crate::cli::Args;
use crate::error::{RestfulError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::ApiConfig;
pub use defaults::{
    default_base_url, parse_bool_flag, BASE_URL_ENV, DEFAULT_BASE_URL, VERBOSE_ENV,
};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

/// On-disk settings, read from YAML or JSON.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub verbose: bool,
    /// Config file the settings were read from, if any.
    pub source: Option<PathBuf>,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let source = match &args.config {
            Some(path) => Some(path.clone()),
            None => FileConfig::find_config_file(),
        };

        let file_config = match &source {
            Some(path) => FileConfig::load_from(path)
                .map_err(|e| RestfulError::Config(format!("{:#}", e)))?,
            None => FileConfig::default(),
        };

        let mut config = Self::resolve(args, &file_config, |key| env::var(key).ok())?;
        config.source = source;
        Ok(config)
    }

    /// Merge settings: CLI args > environment > config file > defaults.
    pub fn resolve<F>(args: &Args, file_config: &FileConfig, env_lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = args
            .base_url
            .clone()
            .or_else(|| env_lookup(BASE_URL_ENV))
            .or_else(|| file_config.api.base_url.clone())
            .unwrap_or_else(default_base_url);

        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(RestfulError::Config("base URL must not be empty".to_string()));
        }

        let verbose = args.verbose
            || env_lookup(VERBOSE_ENV)
                .map(|v| parse_bool_flag(&v))
                .or(file_config.general.verbose)
                .unwrap_or(false);

        Ok(Config {
            base_url,
            verbose,
            source: None,
        })
    }
}

impl FileConfig {
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str());
        let config = if matches!(extension, Some("yaml") | Some("yml")) {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML config file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON config file: {}", path.display())
            })?
        };

        Ok(config)
    }

    pub fn find_config_file() -> Option<PathBuf> {
        Self::get_config_paths().into_iter().find(|path| path.exists())
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".restful.yaml"),
            PathBuf::from(".restful.yml"),
            PathBuf::from(".restful.json"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("restful");
            paths.push(config_dir.join("restful.yaml"));
            paths.push(config_dir.join("restful.yml"));
            paths.push(config_dir.join("restful.json"));
        }

        paths
    }
}
