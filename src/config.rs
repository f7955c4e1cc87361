use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub telegram_bot_token: Option<String>,
    pub telegram_channel_id: Option<String>,
    pub notify_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "0.0.0.0:3000"),
            database_url: get_env_or("DATABASE_URL", "sqlite://hr_tests.db?mode=rwc"),
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
            telegram_channel_id: env::var("TELEGRAM_CHANNEL_ID").ok(),
            notify_timeout_secs: get_env_parse_or("NOTIFY_TIMEOUT_SECS", 10)?,
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
