use anyhow::{bail, Context, Result};
use std::{env, time::Duration};

pub const DEFAULT_DATABASE: &str = "mongo-crud";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub connect_timeout: Duration,
}

impl Config {
    /**
     * read config from the process env
     * call dotenv() before this so values from .env are visible
     */
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongodb_uri = lookup("MONGODB_URI")
            .or_else(|| lookup("MONGO_URI"))
            .filter(|uri| !uri.trim().is_empty())
            .context("You must set MONGODB_URI (in the environment or .env)")?;

        let database_name = lookup("MONGODB_DATABASE")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let timeout_secs = match lookup("MONGODB_CONNECT_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("MONGODB_CONNECT_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_CONNECT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("MONGODB_CONNECT_TIMEOUT_SECS must be greater than 0");
        }

        Ok(Config {
            mongodb_uri,
            database_name,
            connect_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
