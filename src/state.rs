//! Chart state and the four interaction operations.
//!
//! [`ChartState`] owns the loaded dataset plus the two mutable interaction
//! fields (`active_fill`, `cutoff`) and one [`BarVisual`] per row. The
//! operations only ever rewrite per-bar *targets*; the rendering layer
//! animates displayed attributes toward them, so rapid repeated operations
//! are resolved by the transition engine (last retarget wins).
//!
//! Each mutating method returns the [`ChartEvent`] describing it; the app
//! forwards those to controller subscribers.

use egui::Color32;

use crate::dataset::Dataset;
use crate::events::ChartEvent;
use crate::palette::{FillColor, BASELINE_FILL};

/// Target visual attributes for one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarVisual {
    /// Category label, unique across the chart.
    pub label: String,
    /// The row's measured frequency (natural bar length).
    pub frequency: f64,
    /// Target bar length in data units; the frequency→pixel mapping is the
    /// plot's linear scale. `0.0` means visually collapsed.
    pub target_width: f64,
    /// Target fill color.
    pub fill: Color32,
}

/// Single-instance chart state, session-scoped.
pub struct ChartState {
    dataset: Dataset,
    active_fill: FillColor,
    cutoff: f64,
    bars: Vec<BarVisual>,
}

impl ChartState {
    /// Build the initial state: every bar at its natural width in the
    /// baseline fill, cutoff `0.0`, default fill selection.
    pub fn new(dataset: Dataset) -> Self {
        let bars = dataset
            .rows()
            .iter()
            .map(|row| BarVisual {
                label: row.label.clone(),
                frequency: row.frequency,
                target_width: row.frequency,
                fill: BASELINE_FILL,
            })
            .collect();
        Self {
            dataset,
            active_fill: FillColor::default(),
            cutoff: 0.0,
            bars,
        }
    }

    /// The immutable dataset backing the chart.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Per-bar visual targets, one per dataset row, in row order.
    pub fn bars(&self) -> &[BarVisual] {
        &self.bars
    }

    /// The fill that the next filter pass will paint kept bars with.
    pub fn active_fill(&self) -> FillColor {
        self.active_fill
    }

    /// The threshold the next filter pass will partition against.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Partition the bars by the current cutoff: rows with
    /// `frequency < cutoff` collapse to zero width (fill untouched), rows
    /// with `frequency >= cutoff` restore to their natural width in the
    /// active fill read at invocation time.
    ///
    /// Strict `<` vs `>=` dichotomy; every bar receives exactly one target
    /// update. Dataset and cutoff are unchanged.
    pub fn apply_filter(&mut self) -> ChartEvent {
        let fill = self.active_fill.color32();
        let mut collapsed = 0usize;
        let mut restored = 0usize;
        for bar in &mut self.bars {
            if bar.frequency < self.cutoff {
                bar.target_width = 0.0;
                collapsed += 1;
            } else {
                bar.target_width = bar.frequency;
                bar.fill = fill;
                restored += 1;
            }
        }
        tracing::debug!(
            cutoff = self.cutoff,
            fill = self.active_fill.label(),
            collapsed,
            restored,
            "filter applied"
        );
        ChartEvent::FilterApplied {
            cutoff: self.cutoff,
            fill: self.active_fill,
            collapsed,
            restored,
        }
    }

    /// Unconditional restoration: every bar back to its natural width in the
    /// baseline fill. Ignores both the cutoff and the active fill; invoking
    /// it repeatedly produces the same terminal state.
    pub fn reset(&mut self) -> ChartEvent {
        for bar in &mut self.bars {
            bar.target_width = bar.frequency;
            bar.fill = BASELINE_FILL;
        }
        tracing::debug!("reset applied");
        ChartEvent::ResetApplied
    }

    /// Select the fill used by subsequent filter passes. No bar is repainted
    /// until the next [`apply_filter`](Self::apply_filter).
    pub fn set_active_fill(&mut self, fill: FillColor) -> ChartEvent {
        self.active_fill = fill;
        ChartEvent::FillChanged(fill)
    }

    /// Store a new cutoff for subsequent filter passes. No bar is updated
    /// until the next [`apply_filter`](Self::apply_filter).
    ///
    /// Callers are expected to validate first (see [`crate::cutoff`] for the
    /// text-input path); the value is stored as given.
    pub fn set_cutoff(&mut self, cutoff: f64) -> ChartEvent {
        self.cutoff = cutoff;
        ChartEvent::CutoffChanged(cutoff)
    }
}
