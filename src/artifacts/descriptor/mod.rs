//! Directory entries and their platform metadata
//!
//! - `entry_kind`: closed classification of an entry from its mode word
//! - `file_descriptor`: the per-row record built during collection
//! - `platform_stat`: the metadata capability shared by every platform
//! - `unix_stat` / `windows_stat`: the build-time selected implementations

pub mod entry_kind;
pub mod file_descriptor;
pub mod platform_stat;
#[cfg(unix)]
pub mod unix_stat;
#[cfg(windows)]
pub mod windows_stat;
