use std::path::{Path, PathBuf};

use const_format::concatcp;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, StudentsError};

const DEFAULT_SERVICE_ROOT: &str = "http://127.0.0.1:5000";
const COLLECTION_PATH: &str = "/students";

/// Collection endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = concatcp!(DEFAULT_SERVICE_ROOT, COLLECTION_PATH);

pub const API_URL_ENV: &str = "STUDENTS_API_URL";

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Config {
    pub api_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| StudentsError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| StudentsError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let contents = toml::to_string(self)?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StudentsError::ConfigWrite {
                path: config_path.to_path_buf(),
                source: e,
            })?;
        }

        std::fs::write(config_path, contents).map_err(|e| StudentsError::ConfigWrite {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "students")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(StudentsError::NoConfigDir)
    }

    /// Get the collection endpoint: flag, then env var, then config file, then default
    pub fn api_url(&self, explicit: Option<&str>) -> Result<Url> {
        self.resolve_api_url(explicit, std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_url(&self, explicit: Option<&str>, env: Option<String>) -> Result<Url> {
        let raw = explicit
            .map(String::from)
            .or(env)
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        parse_api_url(&raw)
    }
}

/// Parse a collection endpoint, rejecting URLs that cannot carry `/<id>`.
pub fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| StudentsError::InvalidUrl {
        url: raw.to_string(),
        source: e,
    })?;

    if url.cannot_be_a_base() {
        return Err(StudentsError::NotACollection(raw.to_string()));
    }

    Ok(url)
}
