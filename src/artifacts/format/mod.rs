//! Row formatting and color classification
//!
//! - `field`: styled spans, cells and the row they form
//! - `line_formatter`: descriptor + VCS status to row
//! - `palette`: color ramps, VCS markers and the background switch
//! - `size`: size buckets and human-readable rendering through `numfmt`
//! - `time`: modification time text and age buckets

pub mod field;
pub mod line_formatter;
pub mod palette;
pub mod size;
pub mod time;
