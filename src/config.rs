//! Configuration types for the bar chart UI.

use crate::controllers::ChartController;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to embed a
/// minimal, chart-only view.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the controls row (filter/reset buttons, fill dropdown, cutoff box).
    pub controls: bool,
    /// Show category labels on the vertical axis.
    pub category_tick_labels: bool,
    /// Show numeric labels on the frequency axis.
    pub frequency_tick_labels: bool,
    /// Show the plot grid.
    pub grid: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            controls: true,
            category_tick_labels: true,
            frequency_tick_labels: true,
            grid: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Controllers sub-config
// ─────────────────────────────────────────────────────────────────────────────

/// Optional programmatic controllers attached to the chart.
#[derive(Clone, Default)]
pub struct Controllers {
    pub chart: Option<ChartController>,
}

// ─────────────────────────────────────────────────────────────────────────────
// FreqPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the chart window.
#[derive(Clone)]
pub struct FreqPlotConfig {
    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the chart.
    pub headline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Animation / band geometry ────────────────────────────────────────────
    /// Transition duration in seconds for filter/reset retargets.
    pub animation_secs: f32,
    /// Fraction of each category band left as inter-bar padding.
    pub band_padding: f32,
    /// Fraction of the remaining band a bar actually fills.
    pub bar_fill_ratio: f32,

    // ── Feature flags ────────────────────────────────────────────────────────
    /// Toggle individual UI features on/off.
    pub features: FeatureFlags,

    // ── Programmatic controllers ─────────────────────────────────────────────
    /// External controllers for programmatic interaction.
    pub controllers: Controllers,
}

impl Default for FreqPlotConfig {
    fn default() -> Self {
        Self {
            title: "FreqPlot".to_string(),
            headline: None,
            native_options: None,

            animation_secs: 1.25,
            band_padding: 0.3,
            bar_fill_ratio: 0.8,

            features: FeatureFlags::default(),
            controllers: Controllers::default(),
        }
    }
}
