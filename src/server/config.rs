//! Parse Config from config file

use std::{fs::read_to_string, path::Path, str::FromStr};

use leptos::config::LeptosOptions;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::LevelParseError;

#[derive(Debug)]
pub enum ConfigError {
    TomlParse(toml::de::Error),
    ConfigFileRead(std::io::Error),
    ClientBuild(reqwest::Error),
    LogLevel(LevelParseError),
}
impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::TomlParse(e) => {
                write!(f, "Unable to parse config file as toml: {e}")
            }
            Self::ConfigFileRead(e) => {
                write!(f, "Unable to read config file: {e}")
            }
            Self::ClientBuild(e) => {
                write!(f, "Unable to build the http client for the book service: {e}")
            }
            Self::LogLevel(e) => {
                write!(f, "Unable to parse log_level: {e}")
            }
        }
    }
}
impl From<reqwest::Error> for ConfigError {
    fn from(value: reqwest::Error) -> Self {
        Self::ClientBuild(value)
    }
}
impl From<LevelParseError> for ConfigError {
    fn from(value: LevelParseError) -> Self {
        Self::LogLevel(value)
    }
}
impl std::error::Error for ConfigError {}

#[derive(Deserialize)]
struct UpstreamConfigData {
    /// The base url of the remote book service (e.g. https://api.example.com/api/v1)
    url: String,
}

#[derive(Deserialize)]
struct WebConfigData {
    /// The address to host the website on (e.g. 127.0.0.1:8080)
    site_addr: String,
}

#[derive(Deserialize)]
struct ConfigData {
    upstream: UpstreamConfigData,
    web: WebConfigData,
    log_level: Option<String>,
}

pub struct Config {
    /// base url of the remote book service, without a trailing slash
    pub upstream_url: String,
    /// shared client for all calls to the book service
    pub client: reqwest::Client,
    pub leptos_options: LeptosOptions,
    pub log_level: LevelFilter,
}
impl Config {
    fn try_from_config_data(value: ConfigData) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder().build()?;

        let addr = std::net::SocketAddr::from_str(&value.web.site_addr)
            .expect("Should be able to parse socket addr");

        let leptos_options = LeptosOptions::builder()
            .output_name("bookshelf")
            .site_root("target/site")
            .site_pkg_dir("pkg")
            .site_addr(addr)
            .build();
        let log_level = LevelFilter::from_str(&value.log_level.unwrap_or("INFO".to_string()))?;

        Ok(Self {
            upstream_url: value.upstream.url.trim_end_matches('/').to_string(),
            client,
            leptos_options,
            log_level,
        })
    }

    pub fn try_create() -> Result<Self, ConfigError> {
        let path = Path::new("/etc/bookshelf/config.toml");
        let content = read_to_string(path).map_err(ConfigError::ConfigFileRead)?;
        let config_data: ConfigData = toml::from_str(&content).map_err(ConfigError::TomlParse)?;
        Self::try_from_config_data(config_data)
    }
}
