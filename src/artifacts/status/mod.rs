//! Version-control status values
//!
//! - `vcs_status`: status tokens and the per-entry status record

pub mod vcs_status;
