use crate::artifacts::descriptor::entry_kind::EntryKind;
use crate::artifacts::descriptor::platform_stat::PlatformStat;
use derive_new::new;
use std::path::{Path, PathBuf};

/// One listing row's subject: a directory entry paired with its captured metadata.
#[derive(Debug, new)]
pub struct FileDescriptor {
    /// Base name, `.` and `..` for the synthetic entries
    name: String,
    /// Absolute, lexically clean path used for VCS lookups
    full_path: PathBuf,
    kind: EntryKind,
    /// Symlink target, read at collection time
    link_target: Option<PathBuf>,
    stat: Box<dyn PlatformStat>,
}

impl FileDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    pub fn link_target(&self) -> Option<&Path> {
        self.link_target.as_deref()
    }

    pub fn stat(&self) -> &dyn PlatformStat {
        self.stat.as_ref()
    }
}
