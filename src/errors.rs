//! Error types raised by the listing pipeline
//!
//! Only conditions that abort a run are modelled here. Semantic VCS states such as
//! "not a repository" or "clean" are plain values and never surface as errors.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("cannot read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot change directory to {path:?}: {reason}")]
    NotADirectory { path: PathBuf, reason: String },
    #[error(transparent)]
    Vcs(#[from] VcsError),
}

#[derive(Debug, Error)]
pub enum VcsError {
    #[error("failed to run `git {args}`: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`git {args}` exited with {status}: {stderr}")]
    Failed {
        args: String,
        status: ExitStatus,
        stderr: String,
    },
}
