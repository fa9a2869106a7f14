//! Result record - one parsed training-result snapshot
//!
//! A snapshot file is a single JSON document written by the trainer after a
//! validation pass: the epoch number, the mean squared error over the pass,
//! and three flat arrays interleaving per-control targets, per-control
//! outputs, and per-cell hidden states sample by sample. Loading a file
//! deinterleaves the flat arrays into one series per control and one series
//! per cell so they can be plotted directly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Wire schema of one snapshot file.
///
/// Every key is required; a missing or mistyped key surfaces as a serde error
/// which [`ResultRecord::load`] wraps as [`Error::MalformedInput`].
#[derive(Debug, Deserialize)]
struct RawResult {
    epoch: u64,
    mse: f64,
    ctrls: Vec<CtrlName>,
    cell_count: usize,
    sample_count: u64,
    targets: Vec<f64>,
    outputs: Vec<f64>,
    cell_states: Vec<f64>,
}

/// A `ctrls` entry. The trainer records controller numbers; hand-labeled
/// files use strings. Both normalize to the string form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CtrlName {
    Name(String),
    Number(u64),
}

impl From<CtrlName> for String {
    fn from(ctrl: CtrlName) -> Self {
        match ctrl {
            CtrlName::Name(name) => name,
            CtrlName::Number(number) => number.to_string(),
        }
    }
}

/// Split a flat sample-major array into `width` per-channel series.
///
/// Values are consumed round-robin: sample 0 contributes one value to each
/// of the `width` channels in order, then sample 1, and so on. A trailing
/// group that does not fill all channels is dropped; callers decide whether
/// that deserves a warning. `width == 0` yields no series.
#[must_use]
pub fn deinterleave(flat: &[f64], width: usize) -> Vec<Vec<f64>> {
    if width == 0 {
        return Vec::new();
    }

    let samples = flat.len() / width;
    let mut series = vec![Vec::with_capacity(samples); width];

    for group in flat.chunks_exact(width) {
        for (channel, &value) in series.iter_mut().zip(group) {
            channel.push(value);
        }
    }

    series
}

/// One parsed training-result snapshot.
///
/// Immutable once constructed. The owning [`ResultCollection`] holds every
/// record for the life of the session; rendering borrows one transiently.
///
/// [`ResultCollection`]: crate::collection::ResultCollection
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    source_path: PathBuf,
    epoch: u64,
    mse: f64,
    ctrl_names: Vec<String>,
    cell_count: usize,
    sample_count: u64,
    targets_by_ctrl: Vec<Vec<f64>>,
    outputs_by_ctrl: Vec<Vec<f64>>,
    cell_states: Vec<Vec<f64>>,
}

impl ResultRecord {
    /// Load one snapshot from `path`.
    ///
    /// Reads the whole file, parses it as JSON, validates the structural
    /// invariants, and deinterleaves the flat arrays. On success the source
    /// path, epoch, and MSE are echoed to stdout (diagnostic only).
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be read; [`Error::MalformedInput`]
    /// if it is not valid JSON, a required key is missing or mistyped, the
    /// `targets` and `outputs` arrays differ in length, `ctrls` is empty, or
    /// `cell_count` is zero.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let data = fs::read_to_string(path)?;
        let raw: RawResult =
            serde_json::from_str(&data).map_err(|e| Error::malformed(path, e.to_string()))?;

        let record = Self::from_raw(path, raw)?;

        println!("{}", record.source_path.display());
        println!("epoch: {}", record.epoch);
        println!("MSE: {}", record.mse);

        Ok(record)
    }

    /// Validate a raw document and reshape its flat arrays.
    fn from_raw(path: &Path, raw: RawResult) -> Result<Self> {
        let ctrl_names: Vec<String> = raw.ctrls.into_iter().map(String::from).collect();

        if ctrl_names.is_empty() {
            return Err(Error::malformed(path, "ctrls must not be empty"));
        }
        if raw.cell_count == 0 {
            return Err(Error::malformed(path, "cell_count must be positive"));
        }
        if raw.targets.len() != raw.outputs.len() {
            return Err(Error::malformed(
                path,
                format!(
                    "targets has {} values but outputs has {}",
                    raw.targets.len(),
                    raw.outputs.len()
                ),
            ));
        }

        let ctrl_count = ctrl_names.len();

        let ctrl_remainder = raw.targets.len() % ctrl_count;
        if ctrl_remainder != 0 {
            warn!(
                "{}: dropping {} trailing target/output values that do not fill a group of {} controls",
                path.display(),
                ctrl_remainder,
                ctrl_count
            );
        }

        let cell_remainder = raw.cell_states.len() % raw.cell_count;
        if cell_remainder != 0 {
            warn!(
                "{}: dropping {} trailing cell-state values that do not fill a group of {} cells",
                path.display(),
                cell_remainder,
                raw.cell_count
            );
        }

        let targets_by_ctrl = deinterleave(&raw.targets, ctrl_count);
        let outputs_by_ctrl = deinterleave(&raw.outputs, ctrl_count);
        let cell_states = deinterleave(&raw.cell_states, raw.cell_count);

        let derived_samples = targets_by_ctrl.first().map_or(0, Vec::len);
        if raw.sample_count != derived_samples as u64 {
            debug!(
                "{}: sample_count is {} but {} samples were derived",
                path.display(),
                raw.sample_count,
                derived_samples
            );
        }

        Ok(Self {
            source_path: path.to_path_buf(),
            epoch: raw.epoch,
            mse: raw.mse,
            ctrl_names,
            cell_count: raw.cell_count,
            sample_count: raw.sample_count,
            targets_by_ctrl,
            outputs_by_ctrl,
            cell_states,
        })
    }

    /// Path of the file this record was loaded from.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Training epoch the snapshot was taken at.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Mean squared error of the snapshot. Lower is better.
    #[must_use]
    pub const fn mse(&self) -> f64 {
        self.mse
    }

    /// Control channel names in declared order.
    #[must_use]
    pub fn ctrl_names(&self) -> &[String] {
        &self.ctrl_names
    }

    /// Number of control channels (the interleave width of `targets` and
    /// `outputs`).
    #[must_use]
    pub fn ctrl_count(&self) -> usize {
        self.ctrl_names.len()
    }

    /// Number of recurrent cell state channels.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Sample count as recorded by the trainer. Informational only; the
    /// series lengths are derived from the arrays themselves.
    #[must_use]
    pub const fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Target series per control, in declared control order.
    #[must_use]
    pub fn targets_by_ctrl(&self) -> &[Vec<f64>] {
        &self.targets_by_ctrl
    }

    /// Output series per control, in declared control order.
    #[must_use]
    pub fn outputs_by_ctrl(&self) -> &[Vec<f64>] {
        &self.outputs_by_ctrl
    }

    /// Target series for the named control.
    #[must_use]
    pub fn targets_for(&self, ctrl: &str) -> Option<&[f64]> {
        self.series_for(&self.targets_by_ctrl, ctrl)
    }

    /// Output series for the named control.
    #[must_use]
    pub fn outputs_for(&self, ctrl: &str) -> Option<&[f64]> {
        self.series_for(&self.outputs_by_ctrl, ctrl)
    }

    /// Hidden-state series per cell, indexed by cell.
    #[must_use]
    pub fn cell_states(&self) -> &[Vec<f64>] {
        &self.cell_states
    }

    fn series_for<'a>(&self, series: &'a [Vec<f64>], ctrl: &str) -> Option<&'a [f64]> {
        let idx = self.ctrl_names.iter().position(|name| name == ctrl)?;
        series.get(idx).map(Vec::as_slice)
    }
}
