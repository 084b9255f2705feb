//! Run configuration
//!
//! Built once from the parsed command line and passed by reference through collection,
//! sorting and formatting. Nothing here changes after construction.

use crate::artifacts::format::palette::Background;
use crate::artifacts::format::size::UnitBase;
use crate::artifacts::sort::sort_key::SortKeys;
use derive_new::new;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct FilterOptions {
    /// `-a`: dot entries plus the synthetic `.` and `..`
    pub all: bool,
    /// `-A`: dot entries without `.` and `..`
    pub almost_all: bool,
    pub directories_only: bool,
    pub no_directories: bool,
}

impl FilterOptions {
    pub fn show_hidden(&self) -> bool {
        self.all || self.almost_all
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct SortOptions {
    pub keys: SortKeys,
    pub reverse: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct FormatOptions {
    pub human_readable: bool,
    pub unit_base: UnitBase,
    pub background: Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ListingOptions {
    pub filter: FilterOptions,
    pub sort: SortOptions,
    pub format: FormatOptions,
    /// Resolve git status per entry
    pub vcs: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        ListingOptions {
            filter: FilterOptions::default(),
            sort: SortOptions::default(),
            format: FormatOptions::default(),
            vcs: true,
        }
    }
}
