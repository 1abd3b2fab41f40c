use calview::calendar::periods::{compute_range, utc_now_timestamp, PeriodRange, WILDCARD};
use chrono::Utc;

#[test]
fn wildcard_year_is_unbounded() {
    assert_eq!(
        compute_range("12", "10", WILDCARD),
        PeriodRange::default()
    );
    assert_eq!(
        compute_range(WILDCARD, WILDCARD, WILDCARD),
        PeriodRange {
            start: None,
            end: None
        }
    );
}

#[test]
fn wildcard_month_selects_whole_year() {
    // Day is irrelevant once the month is wildcarded
    let range = compute_range("15", WILDCARD, "2020");
    assert_eq!(range.start.as_deref(), Some("2020-01-01T23:59:59Z"));
    assert_eq!(range.end.as_deref(), Some("2020-12-31T23:59:59Z"));
}

#[test]
fn wildcard_day_selects_whole_month() {
    let range = compute_range(WILDCARD, "10", "2020");
    assert!(range.start.unwrap().contains("2020-10-01"));
    assert!(range.end.unwrap().contains("2020-10-31"));
}

#[test]
fn wildcard_day_february_stays_at_28_even_in_leap_years() {
    let range = compute_range(WILDCARD, "2", "2020");
    assert_eq!(range.end.as_deref(), Some("2020-02-28T23:59:59Z"));
}

#[test]
fn concrete_selector_collapses_to_one_day() {
    let range = compute_range("12", "12", "2020");
    assert_eq!(range.start.as_deref(), Some("2020-12-12T23:59:59Z"));
    assert_eq!(range.start, range.end);
}

#[test]
fn concrete_leap_day_is_accepted() {
    let range = compute_range("29", "2", "2020");
    assert_eq!(range.start.as_deref(), Some("2020-02-29T23:59:59Z"));
}

#[test]
fn impossible_date_recovers_to_now_and_open_end() {
    // September has 30 days
    let range = compute_range("31", "9", "2020");
    let today_prefix = Utc::now().format("%Y-%m-%d").to_string();
    assert!(range.start.unwrap().starts_with(&today_prefix));
    assert_eq!(range.end, None);
}

#[test]
fn feb_29_outside_leap_years_recovers() {
    let range = compute_range("29", "2", "2021");
    let today_prefix = Utc::now().format("%Y-%m-%d").to_string();
    assert!(range.start.unwrap().starts_with(&today_prefix));
    assert_eq!(range.end, None);
}

#[test]
fn now_timestamp_carries_utc_marker() {
    let stamp = utc_now_timestamp();
    assert!(stamp.ends_with('Z'));
    // microsecond precision between seconds and the marker
    assert!(stamp.contains('.'));
}
