//! The moving parts of one listing run
//!
//! - `git`: version-control status through the `git` binary
//! - `listing`: the run itself, owning the target, options and output sink
//! - `workspace`: directory enumeration and filtering

pub mod git;
pub mod listing;
pub mod workspace;
