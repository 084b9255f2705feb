//! Uniform view over a platform stat record
//!
//! Every target OS exposes a different native stat structure. The listing only ever talks to
//! [`PlatformStat`]; the concrete implementation is picked at build time through [`NativeStat`].

use chrono::{DateTime, Utc};
use std::fmt::Debug;

/// Read-only metadata captured once per entry.
pub trait PlatformStat: Debug {
    /// Full mode word, file type bits included (`st_mode` layout).
    fn mode(&self) -> u32;
    fn links(&self) -> u64;
    fn uid(&self) -> u32;
    fn gid(&self) -> u32;
    /// Resolved owner name, or the decimal uid when the lookup failed.
    fn owner(&self) -> &str;
    /// Resolved group name, or the decimal gid when the lookup failed.
    fn group(&self) -> &str;
    fn atime(&self) -> DateTime<Utc>;
    fn mtime(&self) -> DateTime<Utc>;
    fn ctime(&self) -> DateTime<Utc>;
    fn size(&self) -> u64;
    fn blocks(&self) -> u64;
    fn block_size(&self) -> u64;
}

#[cfg(unix)]
pub type NativeStat = super::unix_stat::UnixStat;

#[cfg(windows)]
pub type NativeStat = super::windows_stat::WindowsStat;

/// Converts a seconds/nanoseconds pair into an instant, clamping invalid values to the epoch.
pub(crate) fn instant(secs: i64, nsecs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, nsecs.clamp(0, 999_999_999) as u32).unwrap_or_default()
}
