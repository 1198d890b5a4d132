//! The eframe application: frame loop, request draining and run helpers.

use eframe::egui;

use crate::config::FreqPlotConfig;
use crate::controllers::{ChartController, ChartRequest};
use crate::cutoff::CutoffField;
use crate::dataset::Dataset;
use crate::events::ChartEvent;
use crate::state::ChartState;
use crate::ui;

/// Interactive letter-frequency bar chart application.
///
/// One instance owns the whole chart state; every mutation happens on the
/// UI thread, either from the controls row or from controller requests
/// drained at the start of the frame.
pub struct FreqPlotApp {
    state: ChartState,
    cutoff_field: CutoffField,
    cfg: FreqPlotConfig,
    controller: Option<ChartController>,
}

impl FreqPlotApp {
    /// Build the app from a loaded dataset. Publishes
    /// [`ChartEvent::DatasetLoaded`] to any attached controller.
    pub fn new(dataset: Dataset, cfg: FreqPlotConfig) -> Self {
        let controller = cfg.controllers.chart.clone();
        let app = Self {
            state: ChartState::new(dataset),
            cutoff_field: CutoffField::new(),
            cfg,
            controller,
        };
        app.publish(&ChartEvent::DatasetLoaded {
            rows: app.state.bars().len(),
        });
        app
    }

    /// Read access to the chart state (bars, cutoff, active fill).
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    /// Drain queued controller requests in FIFO order.
    ///
    /// Called once per frame before rendering; public so embedders and
    /// tests can pump the chart without a running event loop.
    pub fn pump_requests(&mut self) {
        let Some(ctrl) = self.controller.clone() else {
            return;
        };
        for request in ctrl.take_requests() {
            let event = match request {
                ChartRequest::ApplyFilter => self.state.apply_filter(),
                ChartRequest::Reset => self.state.reset(),
                ChartRequest::SetFill(fill) => self.state.set_active_fill(fill),
                ChartRequest::SetCutoff(value) => {
                    if value.is_finite() && value >= 0.0 {
                        self.state.set_cutoff(value)
                    } else {
                        ChartEvent::CutoffRejected {
                            input: value.to_string(),
                        }
                    }
                }
            };
            self.publish(&event);
        }
    }

    fn publish(&self, event: &ChartEvent) {
        if let Some(ctrl) = &self.controller {
            ctrl.publish(event);
        }
    }

    fn handle_actions(&mut self, actions: ui::ControlActions) {
        if let Some(fill) = actions.fill_selected {
            let event = self.state.set_active_fill(fill);
            self.publish(&event);
        }
        if actions.cutoff_committed {
            match self.cutoff_field.commit() {
                Some(value) => {
                    let event = self.state.set_cutoff(value);
                    self.publish(&event);
                }
                None => {
                    self.publish(&ChartEvent::CutoffRejected {
                        input: self.cutoff_field.text.clone(),
                    });
                }
            }
        }
        if actions.filter_clicked {
            let event = self.state.apply_filter();
            self.publish(&event);
        }
        if actions.reset_clicked {
            let event = self.state.reset();
            self.publish(&event);
        }
    }
}

impl eframe::App for FreqPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_requests();

        if self.cfg.features.controls {
            egui::TopBottomPanel::top("controls").show(ctx, |ui| {
                if let Some(headline) = self.cfg.headline.clone() {
                    ui.heading(headline);
                }
                let actions =
                    ui::controls_row(ui, self.state.active_fill(), &mut self.cutoff_field);
                self.handle_actions(actions);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::bar_chart(ui, &self.state, &self.cfg);
        });

        // Keep repainting while transitions are in flight.
        ctx.request_repaint_after(std::time::Duration::from_millis(16));
    }
}

/// Run the chart UI until the window is closed.
pub fn run_freqplot(dataset: Dataset, cfg: FreqPlotConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let native_options = cfg.native_options.clone().unwrap_or_else(|| {
        let mut opts = eframe::NativeOptions::default();
        opts.viewport = egui::ViewportBuilder::default().with_inner_size([700.0, 600.0]);
        opts
    });
    let app = FreqPlotApp::new(dataset, cfg);
    eframe::run_native(&title, native_options, Box::new(|_cc| Ok(Box::new(app))))
}
