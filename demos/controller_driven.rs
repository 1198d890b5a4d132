//! Example: drive the chart programmatically through a ChartController.
//!
//! The UI must run on the main thread (winit requirement), so a worker
//! thread plays a scripted interaction: raise the cutoff, filter, switch
//! fill colors, filter again, then reset — while a subscriber prints every
//! chart event to stderr.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example controller_driven
//! ```

use std::thread;
use std::time::Duration;

use freqplot::{run_freqplot, ChartController, DataRow, Dataset, FillColor, FreqPlotConfig};

fn main() -> eframe::Result<()> {
    let rows = [("A", 5.0), ("B", 2.0), ("C", 9.0), ("D", 3.5), ("E", 0.4)]
        .into_iter()
        .map(|(letter, frequency)| DataRow {
            label: letter.to_string(),
            frequency,
        });
    let dataset = Dataset::from_rows(rows).expect("static dataset is valid");

    let controller = ChartController::new();

    // Event observer: print every state mutation.
    let events = controller.subscribe();
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            eprintln!("[controller_driven] {:?}", event);
        }
    });

    // Scripted interaction loop.
    let script = controller.clone();
    thread::spawn(move || loop {
        thread::sleep(Duration::from_secs(2));
        script.set_cutoff(3.0);
        script.request_filter();

        thread::sleep(Duration::from_secs(2));
        script.set_fill(FillColor::Pink);
        script.request_filter();

        thread::sleep(Duration::from_secs(2));
        script.set_fill(FillColor::Orange);
        script.set_cutoff(0.5);
        script.request_filter();

        thread::sleep(Duration::from_secs(2));
        script.request_reset();
        script.set_fill(FillColor::Green);
    });

    let mut cfg = FreqPlotConfig::default();
    cfg.title = "FreqPlot — controller driven".to_string();
    cfg.headline = Some("Scripted filter/reset/fill interaction".to_string());
    cfg.controllers.chart = Some(controller);
    run_freqplot(dataset, cfg)
}
