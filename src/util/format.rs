//! Display formatting for durations, prices, and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Human duration from minutes: `"45 min"`, `"2 h 05 min"`.
pub fn duration(minutes: i32) -> String {
    if minutes <= 0 {
        return "—".to_owned();
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours == 0 {
        format!("{rest} min")
    } else {
        format!("{hours} h {rest:02} min")
    }
}

/// Price display: free courses say so, everything else keeps the backend's
/// decimal string.
pub fn price(amount: &str) -> String {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.abs() < f64::EPSILON => "Free".to_owned(),
        _ => format!("${}", amount.trim()),
    }
}

/// Date portion of an ISO-8601 timestamp, or the input unchanged when it
/// does not look like one.
pub fn date(timestamp: &str) -> &str {
    match timestamp.split_once('T') {
        Some((date, _)) if date.len() == 10 => date,
        _ => timestamp,
    }
}

/// Progress percentage clamped and rounded for display.
pub fn percent(progress: f64) -> String {
    let clamped = progress.clamp(0.0, 100.0);
    format!("{}%", clamped.round())
}
