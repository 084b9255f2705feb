use bitflags::bitflags;

bitflags! {
    /// Sort keys requested for a run.
    ///
    /// Keys are applied in declaration order, each one re-sorting the previous result, so a
    /// later key takes precedence over an earlier one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SortKeys: u8 {
        const SIZE = 0b0001;
        const MTIME = 0b0010;
        const ATIME = 0b0100;
        const CTIME = 0b1000;
    }
}

impl Default for SortKeys {
    fn default() -> Self {
        Self::empty()
    }
}

impl SortKeys {
    /// Parses a `--sort` word: `s` size, `t` modification time, `c` change time, `a` access
    /// time. Any other character (including `n` for "none") selects nothing.
    pub fn parse_word(word: &str) -> Self {
        let mut keys = Self::empty();

        for c in word.chars() {
            match c {
                's' => keys |= Self::SIZE,
                't' => keys |= Self::MTIME,
                'c' => keys |= Self::CTIME,
                'a' => keys |= Self::ATIME,
                other => log::debug!("ignoring sort character {other:?}"),
            }
        }

        keys
    }

    pub fn is_ambiguous(&self) -> bool {
        self.iter().count() > 1
    }
}
