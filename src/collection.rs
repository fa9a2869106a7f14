//! Result collection - snapshot discovery and score-ordered listing

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::record::ResultRecord;
use crate::Result;

/// Every snapshot found under the session's result directories.
///
/// Built once at startup and only read afterwards. Records are owned here
/// for the life of the process; the listing hands out borrows.
#[derive(Debug)]
pub struct ResultCollection {
    records: Vec<ResultRecord>,
}

impl ResultCollection {
    /// Build a collection by scanning `dirs` for files named `*.json`.
    ///
    /// The scan is non-recursive and discovery order is whatever the
    /// filesystem reports; it is not normalized. One record is loaded per
    /// discovered path, in discovery order. A single unreadable or malformed
    /// file fails the whole build - there is no partial collection.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if a directory cannot be listed or a file cannot be
    /// read; [`Error::MalformedInput`] if any discovered file fails to parse.
    ///
    /// [`Error::Io`]: crate::Error::Io
    /// [`Error::MalformedInput`]: crate::Error::MalformedInput
    pub fn from_dirs<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        let mut paths = Vec::new();

        for dir in dirs {
            let dir = dir.as_ref();
            let before = paths.len();

            for entry in fs::read_dir(dir)? {
                let path = entry?.path();
                let is_result = path
                    .file_name()
                    .is_some_and(|name| name.to_string_lossy().ends_with(".json"));
                if is_result {
                    paths.push(path);
                }
            }

            debug!(
                "{}: discovered {} result files",
                dir.display(),
                paths.len() - before
            );
        }

        let mut records = Vec::with_capacity(paths.len());
        for path in &paths {
            records.push(ResultRecord::load(path)?);
        }

        Ok(Self { records })
    }

    /// All records, in discovery order.
    #[must_use]
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Number of loaded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the scan found no result files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records sorted ascending by (MSE, epoch, source path).
    ///
    /// The score comparison uses `f64::total_cmp`, so the order is a total
    /// order and two collections built from the same files in different
    /// discovery orders produce identical listings, NaN scores included.
    #[must_use]
    pub fn sorted_records(&self) -> Vec<&ResultRecord> {
        let mut listing: Vec<&ResultRecord> = self.records.iter().collect();

        listing.sort_by(|a, b| {
            a.mse()
                .total_cmp(&b.mse())
                .then_with(|| a.epoch().cmp(&b.epoch()))
                .then_with(|| a.source_path().cmp(b.source_path()))
        });

        listing
    }
}
