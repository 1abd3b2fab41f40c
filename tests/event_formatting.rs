use calview::calendar::format::{
    format_event_details, format_reminder_list, reminder_lines, summary_line, DEFAULT_REMINDER,
};
use calview::calendar::models::{
    Attendee, CalendarEvent, Creator, EventTime, ReminderOverride, Reminders,
};

fn timed(date_time: &str) -> EventTime {
    EventTime {
        date_time: Some(date_time.to_string()),
        ..Default::default()
    }
}

fn all_day(date: &str) -> EventTime {
    EventTime {
        date: Some(date.to_string()),
        ..Default::default()
    }
}

fn base_event() -> CalendarEvent {
    CalendarEvent {
        id: "evt1".to_string(),
        summary: Some("Team sync".to_string()),
        status: Some("confirmed".to_string()),
        created: Some("2020-09-01T08:00:00Z".to_string()),
        creator: Some(Creator {
            email: Some("owner@example.com".to_string()),
            ..Default::default()
        }),
        start: Some(timed("2020-10-03T09:00:00+10:00")),
        end: Some(timed("2020-10-03T10:00:00+10:00")),
        ..Default::default()
    }
}

#[test]
fn details_render_all_lines_in_order() {
    let mut event = base_event();
    event.visibility = Some("private".to_string());
    event.location = Some("Building 42".to_string());
    event.attendees = Some(vec![
        Attendee {
            email: Some("a@example.com".to_string()),
            ..Default::default()
        },
        Attendee {
            email: Some("b@example.com".to_string()),
            ..Default::default()
        },
    ]);

    let text = format_event_details(&event).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Title: Team sync",
            "Visibility: private",
            "Status: confirmed",
            "Created: 2020-09-01T08:00:00Z",
            "Creator: owner@example.com",
            "Start: 2020-10-03T09:00:00+10:00",
            "End: 2020-10-03T10:00:00+10:00",
            "Location: Building 42",
            "Attendees: a@example.com, b@example.com",
        ]
    );
}

#[test]
fn optional_lines_are_omitted_entirely() {
    let text = format_event_details(&base_event()).unwrap();
    assert!(!text.contains("Visibility:"));
    assert!(!text.contains("Location:"));
    assert!(!text.contains("Attendees:"));
}

#[test]
fn attendee_list_has_no_trailing_separator() {
    let mut event = base_event();
    event.attendees = Some(vec![
        Attendee {
            email: Some("first@example.com".to_string()),
            ..Default::default()
        },
        Attendee {
            email: Some("second@example.com".to_string()),
            ..Default::default()
        },
    ]);

    let text = format_event_details(&event).unwrap();
    let attendees_line = text
        .lines()
        .find(|l| l.starts_with("Attendees:"))
        .unwrap();
    assert!(attendees_line.ends_with("second@example.com"));
}

#[test]
fn missing_title_is_a_hard_error() {
    let mut event = base_event();
    event.summary = None;
    assert!(format_event_details(&event).is_err());
}

#[test]
fn all_day_times_fall_back_to_the_date_form() {
    let mut event = base_event();
    event.start = Some(all_day("2020-10-03"));
    event.end = Some(all_day("2020-10-04"));

    let text = format_event_details(&event).unwrap();
    assert!(text.contains("Start: 2020-10-03\n"));
    assert!(text.contains("End: 2020-10-04\n"));
}

#[test]
fn default_reminder_wins_even_with_overrides_present() {
    let mut event = base_event();
    event.reminders = Some(Reminders {
        use_default: true,
        overrides: vec![ReminderOverride {
            method: "email".to_string(),
            minutes: 30,
        }],
    });

    assert_eq!(
        format_reminder_list(&event),
        vec![DEFAULT_REMINDER.to_string()]
    );
}

#[test]
fn overrides_render_one_line_each() {
    let mut event = base_event();
    event.reminders = Some(Reminders {
        use_default: false,
        overrides: vec![
            ReminderOverride {
                method: "email".to_string(),
                minutes: 30,
            },
            ReminderOverride {
                method: "popup".to_string(),
                minutes: 10,
            },
        ],
    });

    assert_eq!(
        format_reminder_list(&event),
        vec![
            "email 30 minutes before event starts".to_string(),
            "popup 10 minutes before event starts".to_string(),
        ]
    );
}

#[test]
fn no_reminders_field_renders_nothing() {
    assert!(format_reminder_list(&base_event()).is_empty());
}

#[test]
fn summary_line_prefers_timed_start_and_falls_back_on_title() {
    let event = base_event();
    assert_eq!(summary_line(&event), "Team sync,2020-10-03T09:00:00+10:00");

    let mut untitled = base_event();
    untitled.summary = None;
    untitled.start = Some(all_day("2020-10-03"));
    assert_eq!(summary_line(&untitled), "No title,2020-10-03");
}

#[test]
fn reminder_lines_carry_the_event_title() {
    let mut event = base_event();
    event.reminders = Some(Reminders {
        use_default: true,
        overrides: Vec::new(),
    });
    assert_eq!(
        reminder_lines(&event),
        vec!["Team sync,Reminder through popup 10 minutes before event starts".to_string()]
    );

    event.reminders = Some(Reminders {
        use_default: false,
        overrides: vec![ReminderOverride {
            method: "email".to_string(),
            minutes: 5,
        }],
    });
    assert_eq!(
        reminder_lines(&event),
        vec!["Team sync,Reminder through email 5 minutes before event starts".to_string()]
    );
}
