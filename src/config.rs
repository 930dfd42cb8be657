use log::debug;

use crate::clients::{
    errors::{Error, Result},
    lastfm, musixmatch,
};

const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read once at start-up and handed to the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Last.fm API key. Not validated, an empty key simply fails upstream.
    pub lastfm_api_key: String,
    /// Musixmatch API key. Not validated either.
    pub musixmatch_api_key: String,
    /// Port the HTTP API listens on.
    pub port: u16,
    /// Last.fm web service root.
    pub lastfm_base_url: String,
    /// Musixmatch web service root.
    pub musixmatch_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            lastfm_api_key: String::new(),
            musixmatch_api_key: String::new(),
            port: DEFAULT_PORT,
            lastfm_base_url: lastfm::DEFAULT_BASE_URL.to_string(),
            musixmatch_base_url: musixmatch::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Read `LASTFM_API_KEY`, `MUSIXMATCH_API_KEY`, `PORT`, `LASTFM_BASE_URL` and
    /// `MUSIXMATCH_BASE_URL` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Empty values count as unset, like an empty PORT in a .env file
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let defaults = AppConfig::default();

        let port = match var("PORT") {
            Some(p) => p
                .parse()
                .map_err(|e| Error::ConfigurationError(format!("invalid PORT {p:?}: {e}")))?,
            None => defaults.port,
        };

        let config = AppConfig {
            lastfm_api_key: var("LASTFM_API_KEY").unwrap_or_default(),
            musixmatch_api_key: var("MUSIXMATCH_API_KEY").unwrap_or_default(),
            port,
            lastfm_base_url: var("LASTFM_BASE_URL").unwrap_or(defaults.lastfm_base_url),
            musixmatch_base_url: var("MUSIXMATCH_BASE_URL")
                .unwrap_or(defaults.musixmatch_base_url),
        };
        debug!(
            "Loaded configuration: port={}, lastfm={}, musixmatch={}",
            config.port, config.lastfm_base_url, config.musixmatch_base_url
        );
        Ok(config)
    }
}
