//! Chart handles and plotters rendering glue
//!
//! A [`Figure`] is an explicit value: build it, add series, render it to a
//! PNG. There is no implicit current-figure state anywhere; whoever holds
//! the handle owns the chart.

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use crate::{Error, Result};

/// One line series: y-values plotted against their positional index.
#[derive(Debug, Clone)]
pub struct Series {
    label: Option<String>,
    values: Vec<f64>,
}

impl Series {
    /// Legend label, if the series has one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The y-values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| (index as f64, value))
            .collect()
    }
}

/// A titled group of line series that renders as one chart.
#[derive(Debug, Clone)]
pub struct Figure {
    title: String,
    caption: Option<String>,
    series: Vec<Series>,
}

impl Figure {
    /// Create an empty figure named `title`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: None,
            series: Vec::new(),
        }
    }

    /// Set the caption drawn above the chart. Falls back to the title when
    /// unset.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = Some(caption.into());
    }

    /// Append a labeled series.
    pub fn add_series(&mut self, label: impl Into<String>, values: Vec<f64>) {
        self.series.push(Series {
            label: Some(label.into()),
            values,
        });
    }

    /// Append a series without a legend entry.
    pub fn add_unlabeled_series(&mut self, values: Vec<f64>) {
        self.series.push(Series {
            label: None,
            values,
        });
    }

    /// Figure name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Caption override, if set.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// The series in draw order.
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Render the figure as a PNG file of `size` pixels at `path`.
    ///
    /// Every series is drawn as a line over its positional index; a legend
    /// is added when any series is labeled.
    ///
    /// # Errors
    ///
    /// [`Error::Render`] if the chart backend fails.
    pub fn render_png(&self, path: &Path, size: (u32, u32)) -> Result<()> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let caption = self.caption.as_deref().unwrap_or(&self.title);
        let (x_range, y_range) = axis_ranges(&self.series);

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc("sample")
            .y_desc("value")
            .draw()
            .map_err(render_error)?;

        let mut any_labeled = false;

        for (index, series) in self.series.iter().enumerate() {
            let color = Palette99::pick(index).to_rgba();
            let drawn = chart
                .draw_series(LineSeries::new(series.points(), color))
                .map_err(render_error)?;

            if let Some(label) = series.label() {
                any_labeled = true;
                drawn.label(label).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color)
                });
            }
        }

        if any_labeled {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
        Ok(())
    }
}

fn render_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}

/// Axis ranges covering every series, padded so flat lines stay visible.
///
/// The x range spans the longest series; the y range spans the finite values
/// of all series with 5% headroom. Degenerate inputs fall back to unit
/// ranges.
fn axis_ranges(series: &[Series]) -> (Range<f64>, Range<f64>) {
    let max_len = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    let x_range = if max_len > 1 {
        0.0..(max_len - 1) as f64
    } else {
        0.0..1.0
    };

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for value in series.iter().flat_map(|s| s.values.iter().copied()) {
        if value.is_finite() {
            y_min = y_min.min(value);
            y_max = y_max.max(value);
        }
    }

    let y_range = if y_min > y_max {
        0.0..1.0
    } else if y_min == y_max {
        (y_min - 0.5)..(y_max + 0.5)
    } else {
        let pad = (y_max - y_min) * 0.05;
        (y_min - pad)..(y_max + pad)
    };

    (x_range, y_range)
}
