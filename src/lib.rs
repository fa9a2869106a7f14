//! # Results Browser
//!
//! Interactive browser for JSON training-result snapshots. A snapshot holds
//! one epoch's validation outcome: its mean squared error plus the target,
//! output, and cell-state time series recorded during the pass. The browser
//! scans one or more result directories, lists every snapshot sorted by
//! score, lets the user pick one, and renders its series as line charts.
//!
//! ## Example
//!
//! ```rust,no_run
//! use results_browser::collection::ResultCollection;
//!
//! let collection = ResultCollection::from_dirs(&["training_results"])?;
//!
//! for record in collection.sorted_records() {
//!     println!("epoch {}: MSE {}", record.epoch(), record.mse());
//! }
//! # Ok::<(), results_browser::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod browse;
pub mod collection;
pub mod error;
pub mod plot;
pub mod record;
pub mod session;

pub use error::{Error, Result};
