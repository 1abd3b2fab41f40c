use chrono::{NaiveDate, Utc};

/// Sentinel used by the day/month/year selectors to mean "no constraint"
pub const WILDCARD: &str = "All";

/// Inclusive query window in ISO-8601 with a literal trailing `Z`.
///
/// `None` on both ends means no time filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

// Fixed month lengths for the wildcard-day path. February stays at 28
// here even in leap years; only the concrete-day path goes through real
// date construction and accepts Feb 29.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn days_in_month(month: u32) -> u32 {
    DAYS_IN_MONTH[(month - 1) as usize]
}

/// Current UTC instant as a naive ISO-8601 string with microseconds and `Z`
pub fn utc_now_timestamp() -> String {
    format!("{}Z", Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f"))
}

fn end_of_day(year: i32, month: u32, day: u32) -> Option<String> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let stamp = date.and_hms_opt(23, 59, 59)?;
    Some(format!("{}Z", stamp.format("%Y-%m-%dT%H:%M:%S")))
}

/// Compute the query window for a day/month/year selector.
///
/// Each selector slot is either a concrete number or [`WILDCARD`]. A
/// wildcard year makes the whole range unbounded; a wildcard month selects
/// the entire year; a wildcard day selects the entire month. With all three
/// concrete the range collapses to that single day at 23:59:59.
///
/// An impossible concrete date (e.g. "31" in a 30-day month) is recovered
/// locally: start becomes the current UTC instant and the end is left open.
pub fn compute_range(day: &str, month: &str, year: &str) -> PeriodRange {
    if year == WILDCARD {
        return PeriodRange::default();
    }

    let (start_month, start_day, end_month, end_day);
    if month == WILDCARD {
        start_month = "1".to_string();
        start_day = "1".to_string();
        end_month = "12".to_string();
        end_day = "31".to_string();
    } else {
        start_month = month.to_string();
        end_month = month.to_string();
        if day == WILDCARD {
            start_day = "1".to_string();
            end_day = month
                .parse::<u32>()
                .ok()
                .filter(|m| (1..=12).contains(m))
                .map(|m| days_in_month(m).to_string())
                .unwrap_or_default();
        } else {
            start_day = day.to_string();
            end_day = day.to_string();
        }
    }

    let constructed = (|| {
        let y = year.parse::<i32>().ok()?;
        let start = end_of_day(y, start_month.parse().ok()?, start_day.parse().ok()?)?;
        let end = end_of_day(y, end_month.parse().ok()?, end_day.parse().ok()?)?;
        Some((start, end))
    })();

    match constructed {
        Some((start, end)) => PeriodRange {
            start: Some(start),
            end: Some(end),
        },
        // Defined recovery, not an error: fall back to "from now on"
        None => PeriodRange {
            start: Some(utc_now_timestamp()),
            end: None,
        },
    }
}
