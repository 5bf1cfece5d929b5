//! Human-readable relative timestamps for feed payloads.

use chrono::{DateTime, FixedOffset, Utc};

/// Format how long ago a timestamp occurred, e.g. `"3 hours ago"`.
///
/// Resolution degrades from days to hours to minutes to seconds; the
/// largest non-zero unit wins. Future timestamps clamp to `"0 seconds ago"`.
#[must_use]
pub fn relative_time(created_at: DateTime<FixedOffset>) -> String {
    relative_to(created_at, Utc::now().into())
}

/// Format the delta between `created_at` and an explicit `now`.
#[must_use]
pub fn relative_to(created_at: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> String {
    let seconds = (now - created_at).num_seconds().max(0);

    let days = seconds / 86_400;
    if days > 0 {
        return format!("{days} day{} ago", plural(days));
    }

    let hours = seconds / 3600;
    if hours > 0 {
        return format!("{hours} hour{} ago", plural(hours));
    }

    let minutes = seconds / 60;
    if minutes > 0 {
        return format!("{minutes} minute{} ago", plural(minutes));
    }

    format!("{seconds} second{} ago", plural(seconds))
}

const fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<FixedOffset> {
        Utc::now().into()
    }

    #[test]
    fn test_seconds() {
        let n = now();
        assert_eq!(relative_to(n - Duration::seconds(1), n), "1 second ago");
        assert_eq!(relative_to(n - Duration::seconds(42), n), "42 seconds ago");
    }

    #[test]
    fn test_minutes_and_hours() {
        let n = now();
        assert_eq!(relative_to(n - Duration::minutes(1), n), "1 minute ago");
        assert_eq!(relative_to(n - Duration::minutes(59), n), "59 minutes ago");
        assert_eq!(relative_to(n - Duration::hours(5), n), "5 hours ago");
    }

    #[test]
    fn test_days_win_over_hours() {
        let n = now();
        assert_eq!(relative_to(n - Duration::hours(49), n), "2 days ago");
    }

    #[test]
    fn test_future_clamps_to_zero() {
        let n = now();
        assert_eq!(relative_to(n + Duration::hours(1), n), "0 seconds ago");
    }
}
