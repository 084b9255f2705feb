use crate::artifacts::descriptor::entry_kind::{EntryKind, ModeBits, permission_string};
use crate::artifacts::descriptor::file_descriptor::FileDescriptor;
use crate::artifacts::format::field::{Field, RenderRow};
use crate::artifacts::format::palette::{
    self, Background, DEFAULT_MARKER, MUTED_GRAY, Paint, VCS_MARKERS,
};
use crate::artifacts::format::size::{SizeFormatter, size_bucket};
use crate::artifacts::format::time::{age_bucket, age_secs, format_time};
use crate::artifacts::status::vcs_status::{StatusCode, VcsStatus};
use crate::options::FormatOptions;
use chrono::{DateTime, Utc};

/// Styling class of an entry name, derived once from its kind and mode bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameClass {
    Directory,
    WritableDirectory,
    StickyWritableDirectory,
    Symlink,
    Socket,
    NamedPipe,
    BlockDevice,
    CharDevice,
    Executable,
    Setuid,
    Setgid,
    Plain,
}

impl NameClass {
    pub fn classify(kind: EntryKind, mode: u32) -> Self {
        let bits = ModeBits::from(mode);

        match kind {
            EntryKind::Directory if bits.contains(ModeBits::OTHER_WRITE) => {
                if bits.contains(ModeBits::STICKY) {
                    NameClass::StickyWritableDirectory
                } else {
                    NameClass::WritableDirectory
                }
            }
            EntryKind::Directory => NameClass::Directory,
            EntryKind::Symlink => NameClass::Symlink,
            EntryKind::Socket => NameClass::Socket,
            EntryKind::NamedPipe => NameClass::NamedPipe,
            EntryKind::BlockDevice => NameClass::BlockDevice,
            EntryKind::CharDevice => NameClass::CharDevice,
            EntryKind::Regular if bits.contains(ModeBits::OWNER_EXEC) => {
                if bits.contains(ModeBits::SETUID) {
                    NameClass::Setuid
                } else if bits.contains(ModeBits::SETGID) {
                    NameClass::Setgid
                } else {
                    NameClass::Executable
                }
            }
            EntryKind::Regular => NameClass::Plain,
        }
    }

    /// Name colors by class.
    ///
    /// Symlink, socket and pipe names are foreground only, with no background fill. Char
    /// devices get their own background (3) instead of sharing the block device style.
    pub fn paint(&self) -> Paint {
        match self {
            NameClass::Directory | NameClass::Plain => Paint::none(),
            NameClass::WritableDirectory => Paint::fg_on(0, 3),
            NameClass::StickyWritableDirectory => Paint::fg_on(0, 2),
            NameClass::Symlink => Paint::fg(5),
            NameClass::Socket => Paint::fg(2),
            NameClass::NamedPipe => Paint::fg(3),
            NameClass::BlockDevice => Paint::fg_on(4, 6),
            NameClass::CharDevice => Paint::fg_on(4, 3),
            NameClass::Executable => Paint::fg(1),
            NameClass::Setuid => Paint::fg_on(0, 1),
            NameClass::Setgid => Paint::fg_on(0, 6),
        }
    }
}

/// Turns a descriptor and its VCS status into a row of styled cells.
///
/// All ages are measured against the single `now` captured at construction, so every row of a
/// run shares the same reference point.
pub struct LineFormatter<'f> {
    options: FormatOptions,
    sizes: &'f dyn SizeFormatter,
    now: DateTime<Utc>,
}

impl<'f> LineFormatter<'f> {
    pub fn new(options: FormatOptions, sizes: &'f dyn SizeFormatter, now: DateTime<Utc>) -> Self {
        LineFormatter {
            options,
            sizes,
            now,
        }
    }

    fn background(&self) -> Background {
        self.options.background
    }

    pub fn format(&self, descriptor: &FileDescriptor, status: &VcsStatus) -> RenderRow {
        let stat = descriptor.stat();

        RenderRow {
            permissions: Field::plain(permission_string(stat.mode())),
            links: Field::plain(stat.links().to_string()),
            owner: Field::painted(stat.owner(), Paint::fg(MUTED_GRAY)),
            group: Field::painted(stat.group(), Paint::fg(MUTED_GRAY)),
            size: self.size_field(stat.size()),
            time: Field::painted(format_time(stat.mtime()), self.time_paint(stat.mtime())),
            vcs: self.vcs_field(status),
            name: self.name_field(descriptor, &status.branch),
        }
    }

    pub fn size_paint(&self, size: u64) -> Paint {
        let ramp = self.background().pick(palette::DARK_SIZE, palette::LIGHT_SIZE);
        Paint::fg(ramp[size_bucket(size)])
    }

    fn size_field(&self, size: u64) -> Field {
        let text = if self.options.human_readable {
            self.sizes.format(size, self.options.unit_base)
        } else {
            size.to_string()
        };

        Field::painted(text, self.size_paint(size))
    }

    pub fn time_paint(&self, at: DateTime<Utc>) -> Paint {
        let background = self.background();
        let ramp = background.pick(palette::DARK_TIME, palette::LIGHT_TIME);

        let color = match age_bucket(age_secs(at, self.now)) {
            Some(bucket) => ramp[bucket],
            None => background.pick(palette::DARK_TIME_OLDEST, palette::LIGHT_TIME_OLDEST),
        };
        Paint::fg(color)
    }

    pub fn vcs_field(&self, status: &VcsStatus) -> Field {
        match status.code.as_str() {
            StatusCode::DISABLED => Field::plain(""),
            StatusCode::NOT_REPOSITORY => Field::plain(" "),
            code => {
                let marker = VCS_MARKERS.get(code).copied().unwrap_or(DEFAULT_MARKER);
                let color = self.background().pick(marker.dark, marker.light);
                Field::painted(marker.glyph, Paint::fg(color))
            }
        }
    }

    pub fn name_field(&self, descriptor: &FileDescriptor, branch: &str) -> Field {
        let class = NameClass::classify(descriptor.kind(), descriptor.stat().mode());
        let field = Field::painted(descriptor.name(), class.paint());

        match descriptor.kind() {
            EntryKind::Directory if !branch.is_empty() => {
                field.push(" ", Paint::none()).push(branch, Paint::fg(MUTED_GRAY))
            }
            EntryKind::Symlink => {
                let target = descriptor
                    .link_target()
                    .map(|target| target.display().to_string())
                    .unwrap_or_default();
                field.push(format!(" -> {target}"), Paint::none())
            }
            _ => field,
        }
    }
}
