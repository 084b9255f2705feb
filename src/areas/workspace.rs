use crate::artifacts::descriptor::entry_kind::EntryKind;
use crate::artifacts::descriptor::file_descriptor::FileDescriptor;
use crate::artifacts::descriptor::platform_stat::{NativeStat, PlatformStat};
use crate::errors::ListingError;
use crate::options::FilterOptions;
use std::fs::Metadata;
use std::path::{Component, Path, PathBuf};

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// The listed directory and the identity lookups shared by every entry in it.
pub struct Workspace {
    path: Box<Path>,
    #[cfg(unix)]
    identities: uzers::UsersCache,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace {
            path,
            #[cfg(unix)]
            identities: uzers::UsersCache::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One descriptor per visible entry, in enumeration order.
    ///
    /// Under `all` the synthetic `.` and `..` come first and skip the filters. Entries are
    /// lstat'ed; an entry whose metadata cannot be read is left out.
    pub fn collect(&self, filter: &FilterOptions) -> Result<Vec<FileDescriptor>, ListingError> {
        let entries = std::fs::read_dir(&self.path).map_err(|source| ListingError::ReadDir {
            path: self.path.to_path_buf(),
            source,
        })?;

        let mut descriptors = Vec::new();

        if filter.all {
            let dir: &Path = &self.path;
            let parent = dir.parent().unwrap_or(dir);
            for (name, path) in [(CURRENT_DIR, dir), (PARENT_DIR, parent)] {
                match std::fs::metadata(path) {
                    Ok(metadata) => descriptors.push(self.descriptor(name, path, &metadata)),
                    Err(error) => log::debug!("skipping {name:?}: {error}"),
                }
            }
        }

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    log::debug!("skipping unreadable entry in {:?}: {error}", self.path);
                    continue;
                }
            };

            // the path keeps the raw name, only the rendered name is lossy
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let metadata = match std::fs::symlink_metadata(&path) {
                Ok(metadata) => metadata,
                Err(error) => {
                    log::debug!("skipping {path:?}: {error}");
                    continue;
                }
            };

            if !Self::is_visible(&name, metadata.is_dir(), filter) {
                continue;
            }

            descriptors.push(self.descriptor(&name, &path, &metadata));
        }

        Ok(descriptors)
    }

    fn is_visible(name: &str, is_dir: bool, filter: &FilterOptions) -> bool {
        if filter.directories_only {
            is_dir && (!name.starts_with('.') || filter.show_hidden())
        } else if filter.no_directories && is_dir {
            false
        } else {
            !name.starts_with('.') || filter.show_hidden()
        }
    }

    fn descriptor(&self, name: &str, path: &Path, metadata: &Metadata) -> FileDescriptor {
        let stat = self.stat(metadata);
        let kind = EntryKind::from(stat.mode());
        let link_target = match kind {
            EntryKind::Symlink => std::fs::read_link(path).ok(),
            _ => None,
        };

        FileDescriptor::new(name.to_string(), path.to_path_buf(), kind, link_target, stat)
    }

    #[cfg(unix)]
    fn stat(&self, metadata: &Metadata) -> Box<dyn PlatformStat> {
        Box::new(NativeStat::new(metadata, &self.identities))
    }

    #[cfg(windows)]
    fn stat(&self, metadata: &Metadata) -> Box<dyn PlatformStat> {
        Box::new(NativeStat::new(metadata))
    }
}

/// The directory to list: `arg` as is when absolute, otherwise joined to `cwd`; lexically
/// cleaned either way. No argument means `cwd`.
pub fn resolve_target(arg: Option<&Path>, cwd: &Path) -> PathBuf {
    match arg {
        Some(path) if path.is_absolute() => clean(path),
        Some(path) => clean(&cwd.join(path)),
        None => clean(cwd),
    }
}

/// Lexical normalization: drops `.` components and folds `..` into the preceding name.
/// Symlinks are not consulted.
pub fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(component),
            },
            other => cleaned.push(other),
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(CURRENT_DIR)
    } else {
        cleaned
    }
}
