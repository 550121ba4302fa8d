//! Date presentation helpers shared by the post and comment views.

use chrono::{DateTime, Utc};

/// Formats a timestamp as a long date, e.g. "January 15, 2024".
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats how long ago `date` was, relative to the current time.
pub fn format_distance_to_now(date: DateTime<Utc>) -> String {
    format_distance(date, Utc::now())
}

/// Formats how long ago `date` was, relative to an explicit `now`.
///
/// Months are 30 days and years are 12 such months, matching the rendered
/// copy rather than calendar arithmetic.
pub fn format_distance(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - date).num_seconds().max(0);
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = hours / 24;
    if days < 30 {
        return plural(days, "day");
    }
    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }
    plural(months / 12, "year")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
