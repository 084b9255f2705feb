//! Command implementations
//!
//! `list` drives collection, sorting, status resolution and rendering for a `Listing`.

pub mod list;
