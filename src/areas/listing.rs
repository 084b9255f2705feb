use crate::areas::git::Git;
use crate::areas::workspace::Workspace;
use crate::artifacts::format::size::{Numfmt, SizeFormatter};
use crate::errors::ListingError;
use crate::options::ListingOptions;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// One run of the listing: the target directory, its collaborators and the output sink.
pub struct Listing {
    path: Box<Path>,
    options: ListingOptions,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    git: Git,
    sizes: Box<dyn SizeFormatter>,
}

impl Listing {
    /// Fails with `NotADirectory` when `path` cannot be entered as a directory.
    pub fn new(
        path: &Path,
        options: ListingOptions,
        writer: Box<dyn std::io::Write>,
    ) -> Result<Self, ListingError> {
        let metadata = std::fs::metadata(path).map_err(|error| ListingError::NotADirectory {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;

        if !metadata.is_dir() {
            return Err(ListingError::NotADirectory {
                path: path.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }

        Ok(Listing {
            path: path.into(),
            options,
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into()),
            git: Git::new(path.to_path_buf()),
            sizes: Box::new(Numfmt),
        })
    }

    /// Replaces the human-readable size renderer.
    pub fn with_sizes(mut self, sizes: Box<dyn SizeFormatter>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &ListingOptions {
        &self.options
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    pub fn sizes(&self) -> &dyn SizeFormatter {
        self.sizes.as_ref()
    }
}
