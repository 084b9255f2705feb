use bitflags::bitflags;

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

bitflags! {
    /// Permission and special bits of a mode word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModeBits: u32 {
        const SETUID = 0o4000;
        const SETGID = 0o2000;
        const STICKY = 0o1000;
        const OWNER_READ = 0o400;
        const OWNER_WRITE = 0o200;
        const OWNER_EXEC = 0o100;
        const GROUP_READ = 0o040;
        const GROUP_WRITE = 0o020;
        const GROUP_EXEC = 0o010;
        const OTHER_READ = 0o004;
        const OTHER_WRITE = 0o002;
        const OTHER_EXEC = 0o001;
    }
}

impl From<u32> for ModeBits {
    fn from(mode: u32) -> Self {
        ModeBits::from_bits_truncate(mode)
    }
}

/// Kind of a directory entry, classified once from its mode word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Socket,
    NamedPipe,
    BlockDevice,
    CharDevice,
}

impl EntryKind {
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    fn type_char(&self) -> char {
        match self {
            EntryKind::Regular => '-',
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::Socket => 's',
            EntryKind::NamedPipe => 'p',
            EntryKind::BlockDevice => 'b',
            EntryKind::CharDevice => 'c',
        }
    }
}

impl From<u32> for EntryKind {
    fn from(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFDIR => EntryKind::Directory,
            S_IFLNK => EntryKind::Symlink,
            S_IFSOCK => EntryKind::Socket,
            S_IFIFO => EntryKind::NamedPipe,
            S_IFBLK => EntryKind::BlockDevice,
            S_IFCHR => EntryKind::CharDevice,
            S_IFREG => EntryKind::Regular,
            _ => EntryKind::Regular,
        }
    }
}

/// Renders a mode word the way `ls -l` does, e.g. `drwxr-xr-x` or `-rwsr-x--T`.
pub fn permission_string(mode: u32) -> String {
    let kind = EntryKind::from(mode);
    let bits = ModeBits::from(mode);

    let triad = |read: ModeBits, write: ModeBits, exec: ModeBits, special: ModeBits, mark: char| {
        let exec_char = match (bits.contains(exec), bits.contains(special)) {
            (true, true) => mark,
            (false, true) => mark.to_ascii_uppercase(),
            (true, false) => 'x',
            (false, false) => '-',
        };
        [
            if bits.contains(read) { 'r' } else { '-' },
            if bits.contains(write) { 'w' } else { '-' },
            exec_char,
        ]
    };

    let mut perms = String::with_capacity(10);
    perms.push(kind.type_char());
    perms.extend(triad(
        ModeBits::OWNER_READ,
        ModeBits::OWNER_WRITE,
        ModeBits::OWNER_EXEC,
        ModeBits::SETUID,
        's',
    ));
    perms.extend(triad(
        ModeBits::GROUP_READ,
        ModeBits::GROUP_WRITE,
        ModeBits::GROUP_EXEC,
        ModeBits::SETGID,
        's',
    ));
    perms.extend(triad(
        ModeBits::OTHER_READ,
        ModeBits::OTHER_WRITE,
        ModeBits::OTHER_EXEC,
        ModeBits::STICKY,
        't',
    ));

    perms
}
