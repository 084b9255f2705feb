//! Listing data structures and algorithms
//!
//! - `core`: shared utilities (logging, column writer)
//! - `descriptor`: directory entries and their platform metadata
//! - `format`: row formatting and color classification
//! - `sort`: sorting policy over descriptors
//! - `status`: version-control status values

pub mod core;
pub mod descriptor;
pub mod format;
pub mod sort;
pub mod status;
