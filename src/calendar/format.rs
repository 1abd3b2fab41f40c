use super::models::CalendarEvent;
use crate::error::{invalid_event_error, AppResult};

/// The service's fixed default reminder. The API never returns the default
/// configuration itself, so the line is hard-coded.
pub const DEFAULT_REMINDER: &str = "Popup 10 minutes before event starts";

/// Placeholder title for list lines when an event has no summary
pub const NO_TITLE: &str = "No title";

/// Render the detail pane text for one event.
///
/// The title is the one mandatory field; everything else is included only
/// when present. Line order is fixed: Title, Visibility, Status, Created,
/// Creator, Start, End, Location, Attendees.
pub fn format_event_details(event: &CalendarEvent) -> AppResult<String> {
    let summary = event
        .summary
        .as_deref()
        .ok_or_else(|| invalid_event_error("event has no title"))?;

    let mut lines = vec![format!("Title: {}", summary)];

    if let Some(visibility) = &event.visibility {
        lines.push(format!("Visibility: {}", visibility));
    }
    if let Some(status) = &event.status {
        lines.push(format!("Status: {}", status));
    }
    if let Some(created) = &event.created {
        lines.push(format!("Created: {}", created));
    }
    if let Some(email) = event.creator.as_ref().and_then(|c| c.email.as_deref()) {
        lines.push(format!("Creator: {}", email));
    }
    if let Some(start) = event.start_display() {
        lines.push(format!("Start: {}", start));
    }
    if let Some(end) = event.end_display() {
        lines.push(format!("End: {}", end));
    }
    if let Some(location) = &event.location {
        lines.push(format!("Location: {}", location));
    }
    if let Some(attendees) = &event.attendees {
        let emails: Vec<&str> = attendees.iter().filter_map(|a| a.email.as_deref()).collect();
        if !emails.is_empty() {
            lines.push(format!("Attendees: {}", emails.join(", ")));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    Ok(text)
}

/// Reminder pane lines for one event.
///
/// With `useDefault` set the result is exactly the one default line, no
/// matter what overrides the record also carries. Otherwise one line per
/// override. An event without a reminders field yields nothing.
pub fn format_reminder_list(event: &CalendarEvent) -> Vec<String> {
    let Some(reminders) = &event.reminders else {
        return Vec::new();
    };
    if reminders.use_default {
        return vec![DEFAULT_REMINDER.to_string()];
    }
    reminders
        .overrides
        .iter()
        .map(|o| format!("{} {} minutes before event starts", o.method, o.minutes))
        .collect()
}

/// One-line list entry: `"{summary},{start}"`, with a placeholder title
pub fn summary_line(event: &CalendarEvent) -> String {
    format!(
        "{},{}",
        event.summary.as_deref().unwrap_or(NO_TITLE),
        event.start_display().unwrap_or("")
    )
}

/// One-line reminder entries with the event title prefixed, as printed by
/// the command loop's `-r` views
pub fn reminder_lines(event: &CalendarEvent) -> Vec<String> {
    let title = event.summary.as_deref().unwrap_or(NO_TITLE);
    let Some(reminders) = &event.reminders else {
        return Vec::new();
    };
    if reminders.use_default {
        return vec![format!(
            "{},Reminder through popup 10 minutes before event starts",
            title
        )];
    }
    reminders
        .overrides
        .iter()
        .map(|o| {
            format!(
                "{},Reminder through {} {} minutes before event starts",
                title, o.method, o.minutes
            )
        })
        .collect()
}
