//! Brew time formatting

/// Format a duration in seconds as `mm:ss`
pub fn format_brew_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Parse a `mm:ss` brew time into seconds
///
/// Returns `None` for anything else, including seconds above 59 and
/// durations too large to count in seconds.
pub fn parse_brew_time(text: &str) -> Option<u64> {
    let (minutes, seconds) = text.trim().split_once(':')?;
    let minutes: u64 = minutes.trim().parse().ok()?;
    let seconds: u64 = seconds.trim().parse().ok()?;

    if seconds >= 60 {
        return None;
    }
    minutes.checked_mul(60)?.checked_add(seconds)
}
