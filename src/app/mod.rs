mod view;

pub use view::{CliView, View};

use crate::calendar::models::Reminders;
use crate::calendar::periods::{self, compute_range};
use crate::calendar::validate::DateTokens;
use crate::calendar::{CalendarApi, CalendarEvent, EventQuery};
use crate::error::{invalid_query_error, AppResult};
use tracing::info;

/// Which time window the next reload asks for. One mode at a time; picking
/// a new one replaces the old, so past and specific-period can never both
/// apply.
#[derive(Debug, Clone)]
pub enum FilterMode {
    /// Events from now on, unbounded end
    Upcoming,
    /// Events from the given date at midnight through now
    PastSince(DateTokens),
    /// Events in the window of a day/month/year selector (slots may be "All")
    Period {
        day: String,
        month: String,
        year: String,
    },
    /// No time bounds at all (plain search)
    AllTime,
}

/// Filter state a reload is built from
#[derive(Debug, Clone)]
pub struct EventFilter {
    pub search: Option<String>,
    pub mode: FilterMode,
}

impl EventFilter {
    pub fn upcoming() -> Self {
        Self {
            search: None,
            mode: FilterMode::Upcoming,
        }
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            mode: FilterMode::AllTime,
        }
    }
}

/// Application state: the injected API client and the last-fetched event
/// list, which select/delete actions index into.
pub struct App<A: CalendarApi> {
    api: A,
    events: Vec<CalendarEvent>,
}

impl<A: CalendarApi> App<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn event(&self, index: usize) -> Option<&CalendarEvent> {
        self.events.get(index)
    }

    /// Translate filter state into list-call parameters
    pub fn build_query(filter: &EventFilter) -> EventQuery {
        let (time_min, time_max) = match &filter.mode {
            FilterMode::Upcoming => (Some(periods::utc_now_timestamp()), None),
            FilterMode::PastSince(tokens) => (
                Some(format!(
                    "{}-{:0>2}-{:0>2}T00:00:00.000000Z",
                    tokens.year, tokens.month, tokens.day
                )),
                Some(periods::utc_now_timestamp()),
            ),
            FilterMode::Period { day, month, year } => {
                let range = compute_range(day, month, year);
                (range.start, range.end)
            }
            FilterMode::AllTime => (None, None),
        };

        EventQuery {
            time_min,
            time_max,
            text: filter.search.clone(),
        }
    }

    /// Issue one list call for the filter and replace the loaded event list
    pub async fn reload(&mut self, filter: &EventFilter) -> AppResult<&[CalendarEvent]> {
        let query = Self::build_query(filter);
        self.events = self.api.list_events(&query).await?;
        info!(count = self.events.len(), "loaded events");
        Ok(&self.events)
    }

    /// Delete the event at `index` in the loaded list
    pub async fn delete_event(&mut self, index: usize) -> AppResult<()> {
        let event = self
            .events
            .get(index)
            .ok_or_else(|| invalid_query_error("no event at that position"))?;
        self.api.delete_event(&event.id).await?;
        self.events.remove(index);
        Ok(())
    }

    /// Remove one reminder from the event at `event_index` and push the
    /// rewritten event back through an update call.
    ///
    /// Removing the default reminder turns the policy into "no reminders";
    /// removing an override keeps the remaining overrides in order.
    pub async fn delete_reminder(
        &mut self,
        event_index: usize,
        reminder_index: usize,
    ) -> AppResult<()> {
        let event = self
            .events
            .get_mut(event_index)
            .ok_or_else(|| invalid_query_error("no event at that position"))?;

        let reminders = event.reminders.get_or_insert_with(Reminders::default);
        if reminders.use_default {
            *reminders = Reminders {
                use_default: false,
                overrides: Vec::new(),
            };
        } else {
            if reminder_index >= reminders.overrides.len() {
                return Err(invalid_query_error("no reminder at that position"));
            }
            reminders.overrides.remove(reminder_index);
        }

        let id = event.id.clone();
        let body = event.clone();
        let updated = self.api.update_event(&id, &body).await?;
        self.events[event_index] = updated;
        Ok(())
    }

    /// Drop the whole reminder configuration of an event: fetch it, replace
    /// `reminders` with an empty non-default policy, update.
    pub async fn clear_reminders(&self, event_id: &str) -> AppResult<CalendarEvent> {
        let mut event = self.api.get_event(event_id).await?;
        event.reminders = Some(Reminders {
            use_default: false,
            overrides: Vec::new(),
        });
        self.api.update_event(event_id, &event).await
    }
}
