//! Relative-time formatting.

use chrono::{DateTime, Utc};

/// Format how long ago `then` was, relative to `now`.
///
/// Buckets match what a profile page shows: anything under an hour reads
/// "less than an hour ago", then hours, days, and finally weeks.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if hours < 1 {
        "less than an hour ago".to_string()
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 7 {
        format!("{} day{} ago", days, plural(days))
    } else {
        let weeks = days / 7;
        format!("{} week{} ago", weeks, plural(weeks))
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
