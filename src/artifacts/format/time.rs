//! Modification time rendering and age classification

use chrono::{DateTime, Local, Utc};

/// Inclusive upper bounds, in seconds of age, of the nine time buckets.
pub const AGE_THRESHOLDS: [i64; 9] = [
    0,        // in the future
    60,       // less than a minute old
    3600,     // less than an hour old
    86400,    // less than a day old
    604800,   // less than a week old
    2419200,  // less than 28 days old
    15724800, // less than 26 weeks old
    31449600, // less than a year old
    62899200, // less than two years old
];

/// Index into a 9-step time ramp, `None` past the two-year mark.
pub fn age_bucket(age_secs: i64) -> Option<usize> {
    AGE_THRESHOLDS
        .iter()
        .position(|threshold| age_secs <= *threshold)
}

/// Age in whole seconds of `at` relative to `now`; negative for future timestamps.
pub fn age_secs(at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.timestamp() - at.timestamp()
}

/// `day month   hour:minute` in the local zone, e.g. ` 2 Jan   15:04`.
pub fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%e %b   %H:%M").to_string()
}
