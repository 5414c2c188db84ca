//! Countdown durations embedded in challenge text.
//!
//! Dares such as "Tiens la planche pendant 30 secondes" carry their own
//! time limit. The first `<integer> second(s)` or `<integer> minute(s)`
//! phrase wins; French `seconde(s)` is accepted alongside English.

use regex::Regex;
use std::sync::OnceLock;

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b([0-9]+)\s*(minutes?|secondes?|seconds?)\b")
            .expect("duration pattern is a valid regex")
    })
}

/// Extract a countdown, in seconds, from challenge text.
///
/// ```
/// use truth_or_dare::challenge::extract_duration;
///
/// assert_eq!(extract_duration("Fais 10 pompes"), None);
/// assert_eq!(extract_duration("Tiens la planche pendant 30 secondes"), Some(30));
/// assert_eq!(extract_duration("Reste silencieux pendant 1 minute"), Some(60));
/// ```
#[must_use]
pub fn extract_duration(text: &str) -> Option<u32> {
    let caps = duration_pattern().captures(text)?;
    let value: u32 = caps[1].parse().ok()?;
    let unit = caps[2].to_lowercase();

    if unit.starts_with("minute") {
        value.checked_mul(60)
    } else {
        Some(value)
    }
}

/// Format a remaining time for the timer display.
///
/// One minute or more renders as `m:ss`, anything shorter as `Ns`.
///
/// ```
/// use truth_or_dare::challenge::format_remaining;
///
/// assert_eq!(format_remaining(75), "1:15");
/// assert_eq!(format_remaining(9), "9s");
/// ```
#[must_use]
pub fn format_remaining(seconds: u32) -> String {
    if seconds >= 60 {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    } else {
        format!("{seconds}s")
    }
}
