use chrono::{Datelike, Utc};

/// Separators accepted in filter dates, tried in this order
const SEPARATORS: [char; 3] = ['-', '/', '.'];

/// Day/month/year tokens of a validated filter date, kept as entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTokens {
    pub day: String,
    pub month: String,
    pub year: String,
}

/// Inclusive range of years a filter date may fall in
#[derive(Debug, Clone, Copy)]
pub struct YearWindow {
    pub min: i32,
    pub max: i32,
}

impl YearWindow {
    /// Window reaching `past` years back and `future` years ahead of today
    pub fn from_offsets(past: i32, future: i32) -> Self {
        let current = Utc::now().year();
        Self {
            min: current - past,
            max: current + future,
        }
    }

    fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::from_offsets(5, 2)
    }
}

/// Parse a free-text `DD-MM-YYYY`-family date into its tokens.
///
/// Separators are tried in the order `-`, `/`, `.`; the first one that
/// splits the input into exactly three parts wins, whatever separator the
/// user actually meant. Mixed-separator strings are therefore not rejected
/// structurally; their tokens simply fail the integer parse below.
///
/// Day and month must be plausible (1-31, 1-12) and the year must fall in
/// `window`. Whether the day exists in that particular month is deliberately
/// not checked here; the period calculator deals with that.
///
/// Returns `None` for anything invalid so callers can fall back to an
/// unfiltered query instead of failing.
pub fn verify_date(text: &str, window: &YearWindow) -> Option<DateTokens> {
    let mut tokens: Option<Vec<&str>> = None;
    for sep in SEPARATORS {
        let parts: Vec<&str> = text.split(sep).collect();
        if parts.len() == 3 {
            tokens = Some(parts);
            break;
        }
    }
    let tokens = tokens?;

    let day = tokens[0].trim().parse::<u32>().ok()?;
    let month = tokens[1].trim().parse::<u32>().ok()?;
    let year = tokens[2].trim().parse::<i32>().ok()?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !window.contains(year) {
        return None;
    }

    Some(DateTokens {
        day: tokens[0].trim().to_string(),
        month: tokens[1].trim().to_string(),
        year: tokens[2].trim().to_string(),
    })
}
