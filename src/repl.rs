use crate::app::{App, EventFilter, FilterMode, View};
use crate::calendar::format;
use crate::calendar::validate::{verify_date, YearWindow};
use crate::calendar::CalendarApi;
use crate::error::{other_error, AppResult, Error};
use chrono::Utc;
use inquire::{Confirm, InquireError, Select, Text};
use tracing::error;

/// Commands the loop understands
const DIRECTIVES: [&str; 10] = [
    "upcoming -e",
    "past -e",
    "search -e",
    "upcoming -r",
    "past -r",
    "search -r",
    "delete -r",
    "help",
    "navigate",
    "exit",
];

fn print_help() {
    println!("Commands available:");
    for directive in DIRECTIVES {
        println!("{}", directive);
    }
    println!("-e is for events, while -r is for reminders");
    println!();
}

fn report(err: &Error) {
    error!("{}", err);
    println!("Error: {}", err);
}

/// Text prompt; cancellation (Esc/Ctrl-C) becomes `None`
fn prompt_text(message: &str) -> AppResult<Option<String>> {
    match Text::new(message).prompt() {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(other_error(&format!("Prompt failed: {}", e))),
    }
}

/// Selection prompt returning the chosen index
fn prompt_select(message: &str, options: Vec<String>) -> AppResult<Option<usize>> {
    match Select::new(message, options).raw_prompt() {
        Ok(choice) => Ok(Some(choice.index)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(other_error(&format!("Prompt failed: {}", e))),
    }
}

fn prompt_confirm(message: &str) -> AppResult<Option<bool>> {
    match Confirm::new(message).with_default(false).prompt() {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(other_error(&format!("Prompt failed: {}", e))),
    }
}

/// Keep asking for a past date until it validates or the user cancels
fn prompt_past_date(window: &YearWindow) -> AppResult<Option<EventFilter>> {
    loop {
        let Some(text) = prompt_text("Enter the date how long in the past (DD/MM/YYYY):")? else {
            return Ok(None);
        };
        match verify_date(&text, window) {
            Some(tokens) => {
                return Ok(Some(EventFilter {
                    search: None,
                    mode: FilterMode::PastSince(tokens),
                }))
            }
            None => println!("Wrong format please try again"),
        }
    }
}

/// Prompt the day/month/year selectors for the navigate command
fn prompt_period(window: &YearWindow) -> AppResult<Option<EventFilter>> {
    let wildcard = "All".to_string();

    let mut days = vec![wildcard.clone()];
    days.extend((1..=31).map(|d| d.to_string()));
    let Some(day_index) = prompt_select("Date:", days.clone())? else {
        return Ok(None);
    };

    let mut months = vec![wildcard.clone()];
    months.extend((1..=12).map(|m| m.to_string()));
    let Some(month_index) = prompt_select("Month:", months.clone())? else {
        return Ok(None);
    };

    let mut years = vec![wildcard];
    years.extend((window.min..=window.max).map(|y| y.to_string()));
    let Some(year_index) = prompt_select("Year:", years.clone())? else {
        return Ok(None);
    };

    Ok(Some(EventFilter {
        search: None,
        mode: FilterMode::Period {
            day: days[day_index].clone(),
            month: months[month_index].clone(),
            year: years[year_index].clone(),
        },
    }))
}

/// The interactive command loop
pub async fn run<A: CalendarApi, V: View>(
    app: &mut App<A>,
    view: &mut V,
    window: YearWindow,
) -> AppResult<()> {
    println!("Welcome to calview, a Google Calendar viewer");
    println!(
        "Today's date (YYYY-MM-DD): {}",
        Utc::now().format("%Y-%m-%d")
    );
    print_help();

    loop {
        let Some(command) = prompt_text("command>")? else {
            break;
        };

        match command.trim() {
            "upcoming -e" => match app.reload(&EventFilter::upcoming()).await {
                Ok(events) => view.render_event_list(events),
                Err(e) => report(&e),
            },
            "upcoming -r" => match app.reload(&EventFilter::upcoming()).await {
                Ok(events) => {
                    let lines: Vec<String> =
                        events.iter().flat_map(format::reminder_lines).collect();
                    view.render_reminders(&lines);
                }
                Err(e) => report(&e),
            },
            "past -e" => {
                if let Some(filter) = prompt_past_date(&window)? {
                    match app.reload(&filter).await {
                        Ok(events) => view.render_event_list(events),
                        Err(e) => report(&e),
                    }
                }
            }
            "past -r" => {
                if let Some(filter) = prompt_past_date(&window)? {
                    match app.reload(&filter).await {
                        Ok(events) => {
                            let lines: Vec<String> =
                                events.iter().flat_map(format::reminder_lines).collect();
                            view.render_reminders(&lines);
                        }
                        Err(e) => report(&e),
                    }
                }
            }
            "search -e" => {
                if let Some(query) = prompt_text("Enter search query:")? {
                    match app.reload(&EventFilter::search(query)).await {
                        Ok(events) => view.render_event_list(events),
                        Err(e) => report(&e),
                    }
                }
            }
            "search -r" => {
                if let Some(query) = prompt_text("Enter search query:")? {
                    match app.reload(&EventFilter::search(query)).await {
                        Ok(events) => {
                            let lines: Vec<String> =
                                events.iter().flat_map(format::reminder_lines).collect();
                            view.render_reminders(&lines);
                        }
                        Err(e) => report(&e),
                    }
                }
            }
            "delete -r" => {
                if let Err(e) = delete_reminders_flow(app, view).await {
                    report(&e);
                }
            }
            "navigate" => {
                if let Err(e) = navigate_flow(app, view, &window).await {
                    report(&e);
                }
            }
            "help" => print_help(),
            "exit" => break,
            _ => println!("Invalid command. Please try again!"),
        }
    }

    Ok(())
}

/// `delete -r`: find an event by name and drop its reminder configuration
async fn delete_reminders_flow<A: CalendarApi, V: View>(
    app: &mut App<A>,
    view: &mut V,
) -> AppResult<()> {
    let Some(query) = prompt_text("Full name of the event whose reminders to delete:")? else {
        return Ok(());
    };

    let events = app.reload(&EventFilter::search(query)).await?;
    if events.is_empty() {
        println!("No event selected");
        return Ok(());
    }
    view.render_event_list(events);

    let options: Vec<String> = events.iter().map(format::summary_line).collect();
    let Some(index) = prompt_select("Select an event:", options)? else {
        println!("No event selected");
        return Ok(());
    };

    let event_id = app
        .event(index)
        .map(|e| e.id.clone())
        .unwrap_or_default();
    app.clear_reminders(&event_id).await?;
    println!("Deleted reminder successfully");
    Ok(())
}

/// `navigate`: load a specific period, then optionally inspect and delete
/// one of its events
async fn navigate_flow<A: CalendarApi, V: View>(
    app: &mut App<A>,
    view: &mut V,
    window: &YearWindow,
) -> AppResult<()> {
    let Some(filter) = prompt_period(window)? else {
        return Ok(());
    };

    let events = app.reload(&filter).await?;
    view.render_event_list(events);

    if events.is_empty() {
        return Ok(());
    }

    if !matches!(prompt_confirm("View an event?")?, Some(true)) {
        return Ok(());
    }

    let options: Vec<String> = events.iter().map(format::summary_line).collect();
    let Some(index) = prompt_select("Select an event:", options)? else {
        println!("No event selected");
        return Ok(());
    };

    if let Some(event) = app.event(index) {
        match format::format_event_details(event) {
            Ok(text) => view.render_details(&text),
            Err(e) => report(&e),
        }
        view.render_reminders(&format::format_reminder_list(event));
    }

    if matches!(prompt_confirm("Delete this event?")?, Some(true)) {
        app.delete_event(index).await?;
        println!("Deleted event successfully");
    }

    Ok(())
}
