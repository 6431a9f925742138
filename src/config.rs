use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use crate::error::{AppError, Result};

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_LOG_PATH: &str = "keywords_log.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub log_path: PathBuf,
    pub tagger_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset `HOST`, `PORT` and
    /// `KEYWORD_LOG_PATH` fall back to `127.0.0.1:5001` and `keywords_log.json`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let tagger_url = lookup("NOUN_TAGGER_URL")
            .ok_or_else(|| AppError::Config("NOUN_TAGGER_URL is not set".to_string()))?;

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?,
            None => DEFAULT_PORT,
        };
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let log_path = lookup("KEYWORD_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            log_path,
            tagger_url,
        })
    }
}
