use calview::calendar::models::CalendarEvent;
use serde_json::{json, Value};

#[test]
fn event_parses_the_vendor_shape() {
    let raw = json!({
        "id": "abc123",
        "etag": "\"3181161784712000\"",
        "htmlLink": "https://www.google.com/calendar/event?eid=abc",
        "summary": "Dentist",
        "status": "confirmed",
        "created": "2020-09-01T08:00:00.000Z",
        "creator": { "email": "me@example.com", "self": true },
        "visibility": "private",
        "location": "Clinic",
        "start": { "dateTime": "2020-10-03T09:00:00+10:00", "timeZone": "Australia/Melbourne" },
        "end": { "date": "2020-10-04" },
        "attendees": [
            { "email": "a@example.com", "responseStatus": "accepted" },
            { "email": "b@example.com", "responseStatus": "needsAction" }
        ],
        "reminders": {
            "useDefault": false,
            "overrides": [ { "method": "email", "minutes": 30 } ]
        }
    });

    let event: CalendarEvent = serde_json::from_value(raw).unwrap();
    assert_eq!(event.id, "abc123");
    assert_eq!(event.summary.as_deref(), Some("Dentist"));
    assert_eq!(event.start_display(), Some("2020-10-03T09:00:00+10:00"));
    assert_eq!(event.end_display(), Some("2020-10-04"));
    let reminders = event.reminders.as_ref().unwrap();
    assert!(!reminders.use_default);
    assert_eq!(reminders.overrides[0].method, "email");
    assert_eq!(reminders.overrides[0].minutes, 30);
    assert_eq!(
        event.attendees.as_ref().unwrap()[1].response_status.as_deref(),
        Some("needsAction")
    );
}

#[test]
fn unknown_vendor_fields_survive_a_mutation_round_trip() {
    let raw = json!({
        "id": "abc123",
        "etag": "\"3181161784712000\"",
        "htmlLink": "https://www.google.com/calendar/event?eid=abc",
        "summary": "Dentist",
        "sequence": 2,
        "start": { "dateTime": "2020-10-03T09:00:00+10:00", "timeZone": "Australia/Melbourne" },
        "end": { "dateTime": "2020-10-03T10:00:00+10:00" },
        "reminders": { "useDefault": true }
    });

    let mut event: CalendarEvent = serde_json::from_value(raw).unwrap();

    // The reminder rewrite an update call sends
    event.reminders = Some(calview::calendar::models::Reminders {
        use_default: false,
        overrides: Vec::new(),
    });

    let out: Value = serde_json::to_value(&event).unwrap();
    assert_eq!(out["etag"], json!("\"3181161784712000\""));
    assert_eq!(out["sequence"], json!(2));
    assert_eq!(out["start"]["timeZone"], json!("Australia/Melbourne"));
    assert_eq!(out["reminders"]["useDefault"], json!(false));
    // camelCase on the wire
    assert_eq!(out["start"]["dateTime"], json!("2020-10-03T09:00:00+10:00"));
}

#[test]
fn absent_optional_fields_are_not_serialized() {
    let event = CalendarEvent {
        id: "e1".to_string(),
        summary: Some("Bare".to_string()),
        ..Default::default()
    };
    let out: Value = serde_json::to_value(&event).unwrap();
    let obj = out.as_object().unwrap();
    assert!(!obj.contains_key("visibility"));
    assert!(!obj.contains_key("location"));
    assert!(!obj.contains_key("attendees"));
    assert!(!obj.contains_key("reminders"));
}
