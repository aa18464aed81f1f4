use std::env;
use std::path::PathBuf;

use crate::error::TasklyError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Name of the single persisted credential slot inside the config dir.
pub const TOKEN_FILE: &str = "auth-token";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub config_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// `api_url_flag` (from `--api-url`) wins over `TASKLY_API_URL`, which
    /// wins over the default local address. The config dir comes from
    /// `TASKLY_CONFIG_DIR`, falling back to `$HOME/.config/taskly`.
    pub fn resolve(api_url_flag: Option<&str>) -> Result<Self, TasklyError> {
        let api_url = api_url_flag
            .map(str::to_string)
            .or_else(|| env::var("TASKLY_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim_end_matches('/').to_string();

        let config_dir = match env::var_os("TASKLY_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home = env::var_os("HOME").ok_or_else(|| {
                    TasklyError::storage("Cannot determine home directory (HOME is unset)")
                })?;
                PathBuf::from(home).join(".config").join("taskly")
            }
        };

        Ok(Self {
            api_url,
            config_dir,
        })
    }

    pub fn token_path(&self) -> PathBuf {
        self.config_dir.join(TOKEN_FILE)
    }
}
