pub mod client;
pub mod format;
pub mod models;
pub mod periods;
pub mod token;
pub mod validate;

pub use client::{CalendarApi, EventQuery, GoogleCalendarClient};
pub use models::CalendarEvent;
pub use periods::PeriodRange;
pub use validate::{DateTokens, YearWindow};
