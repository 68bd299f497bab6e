// ⚙️ Settings - built once at startup, passed by reference

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_APP_NAME: &str = "Finscope AI";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DESCRIPTION: &str = "Localized Financial Education API (FinScope AI MVP)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name that appears in service metadata
    pub app_name: String,

    /// Default language if the user doesn't specify one
    pub default_language: String,

    pub bind_addr: SocketAddr,

    /// Allow any origin
    pub cors_permissive: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            app_name: DEFAULT_APP_NAME.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            cors_permissive: true,
        }
    }
}

impl Settings {
    /// Read settings from the environment, loading `.env` first if present
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup (the environment, or a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let app_name = lookup("FINSCOPE_APP_NAME").unwrap_or(defaults.app_name);
        let default_language =
            lookup("FINSCOPE_DEFAULT_LANGUAGE").unwrap_or(defaults.default_language);

        let bind_addr = match lookup("FINSCOPE_BIND_ADDR") {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .with_context(|| format!("Invalid FINSCOPE_BIND_ADDR: {:?}", raw))?,
            None => defaults.bind_addr,
        };

        let cors_permissive = lookup("FINSCOPE_CORS_PERMISSIVE")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(defaults.cors_permissive);

        Ok(Settings {
            app_name,
            default_language,
            bind_addr,
            cors_permissive,
        })
    }
}
