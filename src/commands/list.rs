use crate::areas::listing::Listing;
use crate::artifacts::core::tab_writer::TabWriter;
use crate::artifacts::descriptor::file_descriptor::FileDescriptor;
use crate::artifacts::format::line_formatter::LineFormatter;
use crate::artifacts::sort;
use crate::artifacts::status::vcs_status::VcsStatus;
use crate::errors::ListingError;
use anyhow::Context;
use chrono::Utc;
use std::io::Write;

impl Listing {
    /// Collects, sorts, formats and writes every row, then the block total.
    ///
    /// Rows are held by the column writer until the last one is formatted, so a fatal error
    /// part-way through leaves the output empty.
    pub fn list(&self) -> anyhow::Result<()> {
        let options = *self.options();

        let mut descriptors = self.workspace().collect(&options.filter)?;
        sort::sort(&mut descriptors, options.sort.keys, options.sort.reverse);

        let inside_repository = options.vcs && self.git().is_inside_work_tree();
        log::debug!(
            "listing {:?}: {} entries, inside repository: {inside_repository}",
            self.path(),
            descriptors.len()
        );

        let formatter = LineFormatter::new(options.format, self.sizes(), Utc::now());
        let mut writer = self.writer();
        let mut table = TabWriter::new(&mut *writer);
        let mut blocks = 0u64;

        for descriptor in descriptors.iter() {
            blocks += descriptor.stat().blocks();

            let status = if options.vcs {
                self.vcs_status(descriptor, inside_repository)
                    .with_context(|| {
                        format!("cannot resolve git status of {:?}", descriptor.full_path())
                    })?
            } else {
                VcsStatus::disabled()
            };

            let row = formatter.format(descriptor, &status);
            writeln!(table, "{}", row.to_line())?;
        }

        table.flush()?;
        drop(table);

        writeln!(writer, "total {blocks}")?;
        writer.flush()?;

        Ok(())
    }

    fn vcs_status(
        &self,
        descriptor: &FileDescriptor,
        inside_repository: bool,
    ) -> Result<VcsStatus, ListingError> {
        let path = descriptor.full_path();
        let status = self.git().resolve(path, descriptor.is_dir(), inside_repository)?;

        Ok(status)
    }
}
