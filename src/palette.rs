//! Fill palette for the bar chart.
//!
//! The filter operation paints kept bars with one of a fixed, three-entry
//! palette selected from a dropdown; the reset operation always returns to
//! [`BASELINE_FILL`]. The enum shape (`all()` + `label()`) is what the
//! combo-box UI consumes.

use egui::Color32;

/// Baseline bar fill restored by the reset operation (steelblue).
///
/// Not part of [`FillColor`]: the dropdown only offers the filter palette.
pub const BASELINE_FILL: Color32 = Color32::from_rgb(0x46, 0x82, 0xb4);

/// Selectable fill color for bars kept by a filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillColor {
    #[default]
    Green,
    Orange,
    Pink,
}

impl FillColor {
    /// All selectable entries in dropdown order (useful for combo-box UIs).
    pub fn all() -> &'static [FillColor] {
        &[FillColor::Green, FillColor::Orange, FillColor::Pink]
    }

    /// Human-readable label (capitalized color name).
    pub fn label(&self) -> &'static str {
        match self {
            FillColor::Green => "Green",
            FillColor::Orange => "Orange",
            FillColor::Pink => "Pink",
        }
    }

    /// The fill as an egui color.
    pub fn color32(&self) -> Color32 {
        match self {
            FillColor::Green => Color32::from_rgb(0x1b, 0x9e, 0x77),
            FillColor::Orange => Color32::from_rgb(0xd9, 0x5f, 0x02),
            FillColor::Pink => Color32::from_rgb(0xe7, 0x29, 0x8a),
        }
    }

    /// Hex string form, e.g. `"#1b9e77"`.
    pub fn hex(&self) -> &'static str {
        match self {
            FillColor::Green => "#1b9e77",
            FillColor::Orange => "#d95f02",
            FillColor::Pink => "#e7298a",
        }
    }
}
