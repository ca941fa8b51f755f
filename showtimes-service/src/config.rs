use crate::utils::file::{dataset_path, discover_root};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5002;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("Cannot determine working directory: {0}")]
    WorkingDir(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `PORT`, `HOST`, `PROJECT_ROOT` and `DATA_FILE`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let data_path = match lookup("DATA_FILE") {
            Some(file) => PathBuf::from(file),
            None => {
                let root = match lookup("PROJECT_ROOT") {
                    Some(root) => PathBuf::from(root),
                    None => discover_root(&std::env::current_dir()?),
                };
                dataset_path(&root)
            }
        };

        Ok(Self {
            host,
            port,
            data_path,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
