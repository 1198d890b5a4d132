//! FreqPlot crate root: re-exports and module wiring.
//!
//! This crate provides an interactive letter-frequency bar chart built on
//! egui/eframe. The chart loads a `letter,frequency` CSV once, renders one
//! horizontal bar per category via `egui_plot`, and wires up three controls
//! that animate bar visibility and fill:
//! - a numeric cutoff box plus a "Filter Data" button that collapses bars
//!   below the cutoff and recolors the rest,
//! - a "Reset Filter" button that restores the baseline look,
//! - a fill-color dropdown consumed by the next filter pass.
//!
//! Modules:
//! - `dataset`: the CSV-backed data model
//! - `palette`: the fixed fill palette and baseline fill
//! - `state`: chart state and the filter/reset/fill/cutoff operations
//! - `cutoff`: the validated numeric-cutoff text field
//! - `controllers`: external control of the chart from non-UI code
//! - `events`: chart events delivered to controller subscribers
//! - `config`: shared configuration
//! - `app`: the eframe application and run helpers

pub mod app;
pub mod config;
pub mod controllers;
pub mod cutoff;
pub mod dataset;
pub mod events;
pub mod palette;
pub mod state;

mod transition;
mod ui;

// Public re-exports for a compact external API
pub use app::{run_freqplot, FreqPlotApp};
pub use config::{Controllers, FeatureFlags, FreqPlotConfig};
pub use controllers::{ChartController, ChartRequest};
pub use cutoff::CutoffField;
pub use dataset::{DataRow, Dataset, DatasetError};
pub use events::ChartEvent;
pub use palette::{FillColor, BASELINE_FILL};
pub use state::{BarVisual, ChartState};
