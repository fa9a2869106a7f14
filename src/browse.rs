//! Rendering step - build and display the figures for one record
//!
//! Two figures per record: targets and outputs overlaid per control, and the
//! per-cell hidden-state traces. The display surface is a directory of
//! rendered PNGs whose lifetime is the rendering call: render, block on one
//! line of input as the dismiss signal, remove.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::plot::Figure;
use crate::record::ResultRecord;
use crate::Result;

/// Pixel size of rendered figures.
const FIGURE_SIZE: (u32, u32) = (1200, 700);

/// Build the "Targets and Outputs" figure: for every control, the target and
/// output series as labeled lines, captioned with the record's epoch and MSE.
#[must_use]
pub fn targets_outputs_figure(record: &ResultRecord) -> Figure {
    let mut figure = Figure::new("Targets and Outputs");
    figure.set_caption(format!("epoch {}, MSE = {}", record.epoch(), record.mse()));

    let per_ctrl = record
        .targets_by_ctrl()
        .iter()
        .zip(record.outputs_by_ctrl());

    for (ctrl, (targets, outputs)) in record.ctrl_names().iter().zip(per_ctrl) {
        figure.add_series(format!("ctrl {ctrl} target"), targets.clone());
        figure.add_series(format!("ctrl {ctrl} output"), outputs.clone());
    }

    figure
}

/// Build the "Cell States" figure: one unlabeled line per cell.
#[must_use]
pub fn cell_states_figure(record: &ResultRecord) -> Figure {
    let mut figure = Figure::new("Cell States");

    for states in record.cell_states() {
        figure.add_unlabeled_series(states.clone());
    }

    figure
}

/// Render both figures for `record` into `display_dir` and block until
/// dismissed.
///
/// The rendered file paths are echoed to `out` so the user can open them.
/// One line from `input` (or end-of-input) dismisses the display, after
/// which the rendered files are removed.
///
/// # Errors
///
/// [`Error::Render`] if a figure fails to draw; [`Error::Io`] on console or
/// cleanup failures.
///
/// [`Error::Render`]: crate::Error::Render
/// [`Error::Io`]: crate::Error::Io
pub fn browse_record<R: BufRead, W: Write>(
    record: &ResultRecord,
    display_dir: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let figures = [targets_outputs_figure(record), cell_states_figure(record)];

    let mut rendered = Vec::with_capacity(figures.len());
    for figure in &figures {
        let path = display_dir.join(figure_file_name(figure.title()));
        figure.render_png(&path, FIGURE_SIZE)?;
        rendered.push(path);
    }

    for path in &rendered {
        writeln!(out, "Rendered {}", path.display())?;
    }
    write!(out, "Press enter to dismiss: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    for path in &rendered {
        fs::remove_file(path)?;
    }

    Ok(())
}

/// File name for a rendered figure, derived from its title.
fn figure_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.png")
}
