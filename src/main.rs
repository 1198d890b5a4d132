//! freqplot binary: load a `letter,frequency` CSV and run the chart UI.
//!
//! Usage:
//!   freqplot [path/to/data.csv]
//!
//! Defaults to `data.csv` in the current directory. Load failures are
//! reported to stderr and exit nonzero instead of rendering an empty chart.

use std::path::PathBuf;

use freqplot::{run_freqplot, Dataset, FreqPlotConfig};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut csv_path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        if csv_path.is_none() {
            csv_path = Some(PathBuf::from(arg));
        }
    }
    let csv_path = csv_path.unwrap_or_else(|| PathBuf::from("data.csv"));

    let dataset = match Dataset::from_csv_path(&csv_path) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("[freqplot] Failed to load {:?}: {}", csv_path, err);
            std::process::exit(1);
        }
    };
    tracing::info!(path = %csv_path.display(), rows = dataset.len(), "dataset ready");

    let mut cfg = FreqPlotConfig::default();
    cfg.title = "Letter Frequency".to_string();
    cfg.headline = Some("Letter frequency".to_string());
    run_freqplot(dataset, cfg)
}
