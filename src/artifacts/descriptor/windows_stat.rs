use crate::artifacts::descriptor::platform_stat::{PlatformStat, instant};
use chrono::{DateTime, Utc};
use std::fs::Metadata;
use std::os::windows::fs::MetadataExt;

const FILE_ATTRIBUTE_READONLY: u32 = 0x1;
/// 100ns ticks between 1601-01-01 and 1970-01-01.
const EPOCH_OFFSET_TICKS: i64 = 116_444_736_000_000_000;
const TICKS_PER_SECOND: i64 = 10_000_000;
const SUBSTITUTE_BLOCK_SIZE: u64 = 4096;

/// Stat record backed by the Win32 file attributes.
///
/// Substitutions on this platform:
/// - `mode` is synthesized: `0o40755` for directories, `0o120777` for symlinks, `0o100644`
///   for files, with the write bits cleared for read-only entries
/// - `links` is always 1
/// - `uid`/`gid` are 0 and render as `0`
/// - `ctime` reports the creation time
/// - `blocks` counts 512-byte units rounded up, `block_size` is 4096
#[derive(Debug, Clone)]
pub struct WindowsStat {
    mode: u32,
    owner: String,
    group: String,
    atime: DateTime<Utc>,
    mtime: DateTime<Utc>,
    ctime: DateTime<Utc>,
    size: u64,
}

impl WindowsStat {
    pub fn new(metadata: &Metadata) -> Self {
        let mut mode = if metadata.file_type().is_symlink() {
            0o120777
        } else if metadata.is_dir() {
            0o40755
        } else {
            0o100644
        };
        if metadata.file_attributes() & FILE_ATTRIBUTE_READONLY != 0 {
            mode &= !0o222;
        }

        WindowsStat {
            mode,
            owner: "0".to_string(),
            group: "0".to_string(),
            atime: from_ticks(metadata.last_access_time()),
            mtime: from_ticks(metadata.last_write_time()),
            ctime: from_ticks(metadata.creation_time()),
            size: metadata.file_size(),
        }
    }
}

fn from_ticks(ticks: u64) -> DateTime<Utc> {
    let since_epoch = ticks as i64 - EPOCH_OFFSET_TICKS;
    instant(
        since_epoch.div_euclid(TICKS_PER_SECOND),
        since_epoch.rem_euclid(TICKS_PER_SECOND) * 100,
    )
}

impl PlatformStat for WindowsStat {
    fn mode(&self) -> u32 {
        self.mode
    }

    fn links(&self) -> u64 {
        1
    }

    fn uid(&self) -> u32 {
        0
    }

    fn gid(&self) -> u32 {
        0
    }

    fn owner(&self) -> &str {
        &self.owner
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn atime(&self) -> DateTime<Utc> {
        self.atime
    }

    fn mtime(&self) -> DateTime<Utc> {
        self.mtime
    }

    fn ctime(&self) -> DateTime<Utc> {
        self.ctime
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn blocks(&self) -> u64 {
        self.size.div_ceil(512)
    }

    fn block_size(&self) -> u64 {
        SUBSTITUTE_BLOCK_SIZE
    }
}
