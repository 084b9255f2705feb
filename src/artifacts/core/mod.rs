//! Core utilities and shared types
//!
//! - `logging`: stderr logger for the `log` facade
//! - `tab_writer`: column-aligning `Write` adapter used for the listing

pub mod logging;
pub mod tab_writer;
