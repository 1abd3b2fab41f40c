use crate::config::Config;
use crate::error::{google_calendar_error, AppResult};
use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Manages the OAuth token document cached on disk.
///
/// The document holds `access_token`, `refresh_token` and an `expires_at`
/// unix timestamp stamped at save time.
#[derive(Clone)]
pub struct TokenManager {
    config: Arc<RwLock<Config>>,
    cache_path: PathBuf,
    client: Client,
}

impl TokenManager {
    pub fn new(config: Arc<RwLock<Config>>, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            cache_path: cache_path.into(),
            client: Client::new(),
        }
    }

    /// Get the OAuth token, refreshing through the token endpoint if the
    /// cached one has expired
    pub async fn get_token(&self) -> AppResult<Value> {
        if self.cache_path.exists() {
            let token_str = fs::read_to_string(&self.cache_path)?;
            let token: Value = serde_json::from_str(&token_str)
                .map_err(|e| google_calendar_error(&format!("Failed to parse token JSON: {}", e)))?;

            if let Some(expiry) = token.get("expires_at").and_then(|v| v.as_i64()) {
                let now = Utc::now().timestamp();
                if expiry > now {
                    return Ok(token);
                }
                // Token is expired, refresh it
                return self.refresh_token(&token).await;
            }
        }

        // No cached token or no expiry, manual bootstrap required
        Err(google_calendar_error(
            "No valid token found. Run the get_calendar_token binary first.",
        ))
    }

    /// Refresh an expired token
    async fn refresh_token(&self, token: &Value) -> AppResult<Value> {
        let refresh_token = token
            .get("refresh_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| google_calendar_error("No refresh token in token data"))?;

        let client_id = {
            let config_read = self.config.read().await;
            config_read.google_client_id.clone()
        };

        let client_secret = {
            let config_read = self.config.read().await;
            config_read.google_client_secret.clone()
        };

        let params = [
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("refresh_token", refresh_token.to_string()),
            ("grant_type", "refresh_token".to_string()),
        ];

        let response = self
            .client
            .post("https://oauth2.googleapis.com/token")
            .form(&params)
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to refresh token: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to refresh token: HTTP {} - {}",
                status, error_body
            )));
        }

        let new_token: Value = response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse token response: {}", e)))?;

        let access_token = new_token
            .get("access_token")
            .cloned()
            .ok_or_else(|| google_calendar_error("Token response missing 'access_token' field"))?;

        // Combine new access token with existing refresh token
        let mut token_data = serde_json::Map::new();
        token_data.insert("access_token".to_string(), access_token);
        token_data.insert("refresh_token".to_string(), json!(refresh_token));

        // Calculate expiry
        let expires_in = new_token
            .get("expires_in")
            .and_then(|v| v.as_i64())
            .unwrap_or(3600);
        let expires_at = Utc::now().timestamp() + expires_in;
        token_data.insert("expires_at".to_string(), json!(expires_at));

        let token_json = json!(token_data);
        self.write_cache(&token_json)?;

        Ok(token_json)
    }

    /// Store a token document (used by the bootstrap binary)
    pub fn set_token(&self, token_json: &Value) -> AppResult<()> {
        self.write_cache(token_json)
    }

    fn write_cache(&self, token_json: &Value) -> AppResult<()> {
        if let Some(parent) = self.cache_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.cache_path, token_json.to_string())?;
        Ok(())
    }
}
