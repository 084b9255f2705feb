use crate::artifacts::descriptor::platform_stat::{PlatformStat, instant};
use chrono::{DateTime, Utc};
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use uzers::{Groups, Users, UsersCache};

/// Stat record backed by `MetadataExt` (Linux, macOS and the BSDs).
///
/// Every accessor is native on these targets, so nothing is substituted.
#[derive(Debug, Clone)]
pub struct UnixStat {
    mode: u32,
    links: u64,
    uid: u32,
    gid: u32,
    owner: String,
    group: String,
    atime: DateTime<Utc>,
    mtime: DateTime<Utc>,
    ctime: DateTime<Utc>,
    size: u64,
    blocks: u64,
    block_size: u64,
}

impl UnixStat {
    pub fn new(metadata: &Metadata, identities: &UsersCache) -> Self {
        let uid = metadata.uid();
        let gid = metadata.gid();

        UnixStat {
            mode: metadata.mode(),
            links: metadata.nlink(),
            uid,
            gid,
            owner: owner_name(uid, identities),
            group: group_name(gid, identities),
            atime: instant(metadata.atime(), metadata.atime_nsec()),
            mtime: instant(metadata.mtime(), metadata.mtime_nsec()),
            ctime: instant(metadata.ctime(), metadata.ctime_nsec()),
            size: metadata.size(),
            blocks: metadata.blocks(),
            block_size: metadata.blksize(),
        }
    }
}

fn owner_name(uid: u32, identities: &UsersCache) -> String {
    identities
        .get_user_by_uid(uid)
        .map(|user| user.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| uid.to_string())
}

fn group_name(gid: u32, identities: &UsersCache) -> String {
    identities
        .get_group_by_gid(gid)
        .map(|group| group.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| gid.to_string())
}

impl PlatformStat for UnixStat {
    fn mode(&self) -> u32 {
        self.mode
    }

    fn links(&self) -> u64 {
        self.links
    }

    fn uid(&self) -> u32 {
        self.uid
    }

    fn gid(&self) -> u32 {
        self.gid
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
        self.blocks
    }

    fn block_size(&self) -> u64 {
        self.block_size
    }
}
