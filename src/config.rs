//! Process configuration, read once from the environment at startup.

use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_MARKET_URL: &str = "https://steamcommunity.com";
pub const DEFAULT_APP_ID: u32 = 730;
pub const DEFAULT_CURRENCY: u32 = 1;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Where and how the market is queried
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSettings {
    pub base_url: String,
    pub app_id: u32,
    pub currency: u32,
}

impl Default for MarketSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MARKET_URL.to_string(),
            app_id: DEFAULT_APP_ID,
            currency: DEFAULT_CURRENCY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub channel_id: u64,
    pub command_prefix: String,
    pub market: MarketSettings,
}

impl Config {
    /// Build the config from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let raw_channel = get("DISCORD_CHANNEL_ID").ok_or(ConfigError::Missing("DISCORD_CHANNEL_ID"))?;
        let channel_id: u64 = parse_var("DISCORD_CHANNEL_ID", &raw_channel)?;
        if channel_id == 0 {
            return Err(ConfigError::Invalid {
                var: "DISCORD_CHANNEL_ID",
                value: raw_channel,
                reason: "channel id must be non-zero".to_string(),
            });
        }

        let command_prefix = get("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        let base_url = get("STEAM_MARKET_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_MARKET_URL.to_string());
        let app_id = match get("STEAM_APP_ID") {
            Some(raw) => parse_var("STEAM_APP_ID", &raw)?,
            None => DEFAULT_APP_ID,
        };
        let currency = match get("STEAM_CURRENCY") {
            Some(raw) => parse_var("STEAM_CURRENCY", &raw)?,
            None => DEFAULT_CURRENCY,
        };

        Ok(Self {
            discord_token,
            channel_id,
            command_prefix,
            market: MarketSettings {
                base_url,
                app_id,
                currency,
            },
        })
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
