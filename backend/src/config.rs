//! Dashboard configuration.
//!
//! Every setting has a built-in default, so the server runs without a file.
//! A `wave_rose.toml` found in one of the standard locations replaces the
//! defaults section by section; `HOST` and `PORT` override the bind address.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WaveError, WaveResult};
use crate::models::HeightBins;

/// Queensland open-data dump of the coastal wave buoy network.
pub const DEFAULT_DATA_URL: &str =
    "https://www.data.qld.gov.au/datastore/dump/2bbef99e-9974-49b9-a316-57402b00609c?bom=True";

pub const DEFAULT_SITE: &str = "Brisbane Mk4";

pub const CONFIG_FILE_NAME: &str = "wave_rose.toml";

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub sites: SiteSettings,
    #[serde(default)]
    pub bins: HeightBins,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Where the dataset is loaded from: an `http(s)://` URL or a local path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_source")]
    pub source: String,
}

/// Site allow-list and the dropdown's initial selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_allowed_sites")]
    pub allowed: Vec<String>,
    #[serde(default = "default_site")]
    pub default: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_source() -> String {
    DEFAULT_DATA_URL.to_string()
}

fn default_allowed_sites() -> Vec<String> {
    [
        "Brisbane Mk4",
        "Caloundra Mk4",
        "Gold Coast Mk4",
        "Mooloolaba Mk4",
        "North Moreton Bay Mk4",
        "Palm Beach Mk4",
        "Tweed Heads Mk4",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_site() -> String {
    DEFAULT_SITE.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            allowed: default_allowed_sites(),
            default: default_site(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl SiteSettings {
    /// Whether `site` is on the allow-list (exact match).
    pub fn is_allowed(&self, site: &str) -> bool {
        self.allowed.iter().any(|s| s == site)
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> WaveResult<Self> {
        let config: DashboardConfig = toml::from_str(content)
            .map_err(|e| WaveError::config(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> WaveResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            WaveError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `wave_rose.toml` from the first standard location that has one.
    ///
    /// Searches the current directory, `backend/`, then the parent directory.
    /// Returns `Ok(None)` when no file exists anywhere.
    pub fn from_default_location() -> WaveResult<Option<Self>> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Configuration file if present, defaults otherwise, then env overrides.
    pub fn load() -> WaveResult<Self> {
        let mut config = match Self::from_default_location()? {
            Some(config) => config,
            None => {
                log::info!("No {} found, using built-in defaults", CONFIG_FILE_NAME);
                Self::default()
            }
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `HOST` and `PORT` from the environment.
    pub fn apply_env_overrides(&mut self) -> WaveResult<()> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| WaveError::config("PORT must be a valid port number"))?;
        }
        Ok(())
    }

    /// Reject configurations the aggregator cannot honour.
    pub fn validate(&self) -> WaveResult<()> {
        if self.data.source.trim().is_empty() {
            return Err(WaveError::config("data.source must not be empty"));
        }
        if self.sites.allowed.is_empty() {
            return Err(WaveError::config("sites.allowed must list at least one site"));
        }
        for (i, site) in self.sites.allowed.iter().enumerate() {
            if self.sites.allowed[..i].contains(site) {
                return Err(WaveError::config(format!(
                    "sites.allowed lists '{}' more than once",
                    site
                )));
            }
        }
        if !self.sites.is_allowed(&self.sites.default) {
            return Err(WaveError::config(format!(
                "sites.default '{}' is not in sites.allowed",
                self.sites.default
            )));
        }
        self.bins.validate().map_err(WaveError::Config)?;
        Ok(())
    }

    /// Socket address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
