use crate::error::{env_error, AppResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Calendar used when none is configured
pub const DEFAULT_CALENDAR_ID: &str = "primary";

/// Default path of the on-disk OAuth token cache
pub const DEFAULT_TOKEN_CACHE: &str = "token.json";

/// Main configuration structure for the viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Calendar API client ID
    pub google_client_id: String,
    /// Google Calendar API client secret
    pub google_client_secret: String,
    /// Calendar to query and mutate
    pub google_calendar_id: String,
    /// Where the OAuth token document is cached
    pub token_cache_path: String,
    /// How many years back a filter date may reach
    pub year_window_past: i32,
    /// How many years ahead a filter date may reach
    pub year_window_future: i32,
}

/// Optional overrides loaded from config/settings.toml
#[derive(Debug, Default, Deserialize)]
struct Settings {
    google_calendar_id: Option<String>,
    token_cache_path: Option<String>,
    year_window_past: Option<i32>,
    year_window_future: Option<i32>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let google_client_id =
            env::var("GOOGLE_CLIENT_ID").map_err(|_| env_error("GOOGLE_CLIENT_ID"))?;
        let google_client_secret =
            env::var("GOOGLE_CLIENT_SECRET").map_err(|_| env_error("GOOGLE_CLIENT_SECRET"))?;

        // Optional with defaults
        let mut google_calendar_id =
            env::var("GOOGLE_CALENDAR_ID").unwrap_or_else(|_| DEFAULT_CALENDAR_ID.to_string());
        let mut token_cache_path =
            env::var("TOKEN_CACHE_PATH").unwrap_or_else(|_| DEFAULT_TOKEN_CACHE.to_string());

        let mut year_window_past = env::var("YEAR_WINDOW_PAST")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(5);
        let mut year_window_future = env::var("YEAR_WINDOW_FUTURE")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(2);

        // Merge file-based overrides if present
        if let Ok(content) = fs::read_to_string("config/settings.toml") {
            if let Ok(settings) = toml::from_str::<Settings>(&content) {
                if let Some(id) = settings.google_calendar_id {
                    google_calendar_id = id;
                }
                if let Some(path) = settings.token_cache_path {
                    token_cache_path = path;
                }
                if let Some(past) = settings.year_window_past {
                    year_window_past = past;
                }
                if let Some(future) = settings.year_window_future {
                    year_window_future = future;
                }
            }
        }

        Ok(Config {
            google_client_id,
            google_client_secret,
            google_calendar_id,
            token_cache_path,
            year_window_past,
            year_window_future,
        })
    }
}
