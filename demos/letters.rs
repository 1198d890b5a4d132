//! Example: the classic English letter-frequency histogram.
//!
//! Builds the dataset in memory (relative frequency of each letter in
//! percent) and opens the chart with the default controls: type a cutoff,
//! pick a fill color, then click "Filter Data" and "Reset Filter" to watch
//! the bars animate.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example letters
//! ```

use freqplot::{run_freqplot, DataRow, Dataset, FreqPlotConfig};

const FREQUENCIES: &[(&str, f64)] = &[
    ("A", 8.167),
    ("B", 1.492),
    ("C", 2.782),
    ("D", 4.253),
    ("E", 12.702),
    ("F", 2.228),
    ("G", 2.015),
    ("H", 6.094),
    ("I", 6.966),
    ("J", 0.153),
    ("K", 0.772),
    ("L", 4.025),
    ("M", 2.406),
    ("N", 6.749),
    ("O", 7.507),
    ("P", 1.929),
    ("Q", 0.095),
    ("R", 5.987),
    ("S", 6.327),
    ("T", 9.056),
    ("U", 2.758),
    ("V", 0.978),
    ("W", 2.360),
    ("X", 0.150),
    ("Y", 1.974),
    ("Z", 0.074),
];

fn main() -> eframe::Result<()> {
    let rows = FREQUENCIES.iter().map(|(letter, frequency)| DataRow {
        label: (*letter).to_string(),
        frequency: *frequency,
    });
    let dataset = Dataset::from_rows(rows).expect("static dataset is valid");

    let mut cfg = FreqPlotConfig::default();
    cfg.title = "Letter Frequency".to_string();
    cfg.headline = Some("Relative frequency of English letters (%)".to_string());
    run_freqplot(dataset, cfg)
}
