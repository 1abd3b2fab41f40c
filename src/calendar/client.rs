use super::models::CalendarEvent;
use super::token::TokenManager;
use crate::config::Config;
use crate::error::{google_calendar_error, invalid_query_error, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

/// Parameters of one events.list call
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    /// Inclusive lower bound, ISO-8601 with trailing `Z`
    pub time_min: Option<String>,
    /// Inclusive upper bound, ISO-8601 with trailing `Z`
    pub time_max: Option<String>,
    /// Free-text search forwarded as the `q` parameter
    pub text: Option<String>,
}

impl EventQuery {
    /// Reject queries that must never reach the network: blank search text
    /// and inverted time ranges. An inverted range is an error, never
    /// silently reordered.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(text) = &self.text {
            if text.trim().is_empty() {
                return Err(invalid_query_error("search text is empty"));
            }
        }
        if let (Some(min), Some(max)) = (&self.time_min, &self.time_max) {
            // ISO-8601 UTC strings order lexicographically
            if min > max {
                return Err(invalid_query_error("time range ends before it starts"));
            }
        }
        Ok(())
    }
}

/// The injected seam between the application and the calendar service
#[async_trait]
pub trait CalendarApi: Send + Sync {
    async fn list_events(&self, query: &EventQuery) -> AppResult<Vec<CalendarEvent>>;
    async fn get_event(&self, event_id: &str) -> AppResult<CalendarEvent>;
    async fn update_event(&self, event_id: &str, body: &CalendarEvent) -> AppResult<CalendarEvent>;
    async fn delete_event(&self, event_id: &str) -> AppResult<()>;
}

#[async_trait]
impl<T: CalendarApi + ?Sized> CalendarApi for Arc<T> {
    async fn list_events(&self, query: &EventQuery) -> AppResult<Vec<CalendarEvent>> {
        (**self).list_events(query).await
    }

    async fn get_event(&self, event_id: &str) -> AppResult<CalendarEvent> {
        (**self).get_event(event_id).await
    }

    async fn update_event(&self, event_id: &str, body: &CalendarEvent) -> AppResult<CalendarEvent> {
        (**self).update_event(event_id, body).await
    }

    async fn delete_event(&self, event_id: &str) -> AppResult<()> {
        (**self).delete_event(event_id).await
    }
}

#[derive(Debug, Deserialize)]
struct EventsPage {
    #[serde(default)]
    items: Vec<CalendarEvent>,
}

/// Client for the Google Calendar v3 events API
pub struct GoogleCalendarClient {
    config: Arc<RwLock<Config>>,
    token_manager: TokenManager,
    client: Client,
}

impl GoogleCalendarClient {
    pub async fn new(config: Arc<RwLock<Config>>) -> Self {
        let cache_path = {
            let config_read = config.read().await;
            config_read.token_cache_path.clone()
        };
        Self {
            token_manager: TokenManager::new(Arc::clone(&config), cache_path),
            config,
            client: Client::new(),
        }
    }

    async fn access_token(&self) -> AppResult<String> {
        let token = self.token_manager.get_token().await?;
        token
            .get("access_token")
            .and_then(|t| t.as_str())
            .map(|t| t.to_string())
            .ok_or_else(|| google_calendar_error("No access token available"))
    }

    async fn events_url(&self) -> AppResult<String> {
        let calendar_id = {
            let config_read = self.config.read().await;
            config_read.google_calendar_id.clone()
        };
        Ok(format!(
            "https://www.googleapis.com/calendar/v3/calendars/{}/events",
            calendar_id
        ))
    }

    fn require_event_id(event_id: &str) -> AppResult<()> {
        if event_id.trim().is_empty() {
            return Err(invalid_query_error("event id is empty"));
        }
        Ok(())
    }

    async fn check_status(response: reqwest::Response, action: &str) -> AppResult<reqwest::Response> {
        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to {}: HTTP {} - {}",
                action, status, error_body
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl CalendarApi for GoogleCalendarClient {
    async fn list_events(&self, query: &EventQuery) -> AppResult<Vec<CalendarEvent>> {
        query.validate()?;

        let mut url = Url::parse(&self.events_url().await?)
            .map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("singleEvents", "true");
            pairs.append_pair("orderBy", "startTime");
            if let Some(time_min) = &query.time_min {
                pairs.append_pair("timeMin", time_min);
            }
            if let Some(time_max) = &query.time_max {
                pairs.append_pair("timeMax", time_max);
            }
            if let Some(text) = &query.text {
                pairs.append_pair("q", text);
            }
        }

        debug!(url = %url, "listing events");
        let access_token = self.access_token().await?;
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to fetch events: {}", e)))?;

        let response = Self::check_status(response, "fetch events").await?;
        let page: EventsPage = response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse events response: {}", e)))?;

        Ok(page.items)
    }

    async fn get_event(&self, event_id: &str) -> AppResult<CalendarEvent> {
        Self::require_event_id(event_id)?;

        let url = format!("{}/{}", self.events_url().await?, event_id);
        let access_token = self.access_token().await?;
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to fetch event: {}", e)))?;

        let response = Self::check_status(response, "fetch event").await?;
        response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse event response: {}", e)))
    }

    async fn update_event(&self, event_id: &str, body: &CalendarEvent) -> AppResult<CalendarEvent> {
        Self::require_event_id(event_id)?;

        let url = format!("{}/{}", self.events_url().await?, event_id);
        let access_token = self.access_token().await?;
        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .json(body)
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to update event: {}", e)))?;

        let response = Self::check_status(response, "update event").await?;
        response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse update response: {}", e)))
    }

    async fn delete_event(&self, event_id: &str) -> AppResult<()> {
        Self::require_event_id(event_id)?;

        let url = format!("{}/{}", self.events_url().await?, event_id);
        let access_token = self.access_token().await?;
        let response = self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to delete event: {}", e)))?;

        Self::check_status(response, "delete event").await?;
        Ok(())
    }
}
