//! UI rendering: the controls row and the bar chart itself.
//!
//! Rendering is split from [`crate::app`] so the frame loop stays a thin
//! drain-then-draw sequence. The plot delegates scale mapping, axis ticks
//! and data-bound bar elements to `egui_plot`; this module only decides the
//! per-bar band position, animated length and animated fill.

use eframe::egui;
use egui::Color32;
use egui_plot::{Bar, BarChart, Plot};

use crate::config::FreqPlotConfig;
use crate::cutoff::CutoffField;
use crate::palette::FillColor;
use crate::state::ChartState;
use crate::transition;

/// Which handlers fired during this frame's controls render.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct ControlActions {
    pub filter_clicked: bool,
    pub reset_clicked: bool,
    pub fill_selected: Option<FillColor>,
    pub cutoff_committed: bool,
}

/// Render the controls row and report which controls were activated.
pub(crate) fn controls_row(
    ui: &mut egui::Ui,
    active_fill: FillColor,
    cutoff: &mut CutoffField,
) -> ControlActions {
    let mut actions = ControlActions::default();
    ui.horizontal(|ui| {
        if ui.button("Filter Data").clicked() {
            actions.filter_clicked = true;
        }
        if ui.button("Reset Filter").clicked() {
            actions.reset_clicked = true;
        }

        ui.separator();
        ui.label("Fill");
        egui::ComboBox::from_id_salt("fill_color")
            .selected_text(active_fill.label())
            .show_ui(ui, |ui| {
                for fill in FillColor::all() {
                    if ui
                        .selectable_label(active_fill == *fill, fill.label())
                        .clicked()
                    {
                        actions.fill_selected = Some(*fill);
                    }
                }
            });

        ui.separator();
        ui.label("Cutoff:");
        let response = ui.add(egui::TextEdit::singleline(&mut cutoff.text).desired_width(64.0));
        // Commit on enter/focus-loss, matching a change/blur-style input.
        if response.lost_focus() {
            actions.cutoff_committed = true;
        }
        if let Some(err) = cutoff.error() {
            ui.colored_label(Color32::LIGHT_RED, err);
        }
    });
    actions
}

/// Render the horizontal bar chart, animating each bar toward its target
/// width and fill.
pub(crate) fn bar_chart(ui: &mut egui::Ui, state: &ChartState, cfg: &FreqPlotConfig) {
    let ctx = ui.ctx().clone();
    let n = state.bars().len();
    let thickness = ((1.0 - cfg.band_padding) * cfg.bar_fill_ratio) as f64;

    let bars: Vec<Bar> = state
        .bars()
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let id = egui::Id::new("freq_bar").with(&bar.label);
            let width = transition::animate_width(&ctx, id, bar.target_width, cfg.animation_secs);
            let fill = transition::animate_fill(&ctx, id, bar.fill, cfg.animation_secs);
            // First row renders in the top band, so the category axis reads
            // top to bottom in file order.
            let band = (n - 1 - i) as f64;
            Bar::new(band, width)
                .name(&bar.label)
                .width(thickness)
                .fill(fill)
        })
        .collect();

    let mut plot = Plot::new("freq_chart")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(cfg.features.grid)
        .include_x(0.0)
        .include_x(state.dataset().max_frequency())
        .include_y(-0.5)
        .include_y(n.max(1) as f64 - 0.5);

    if cfg.features.category_tick_labels {
        let labels: Vec<String> = state.bars().iter().map(|b| b.label.clone()).collect();
        plot = plot.y_axis_formatter(move |mark, _range| {
            let band = mark.value.round();
            if band < 0.0 || (mark.value - band).abs() > 1e-6 {
                return String::new();
            }
            let n = labels.len();
            let band = band as usize;
            if band < n {
                labels[n - 1 - band].clone()
            } else {
                String::new()
            }
        });
    } else {
        plot = plot.y_axis_formatter(|_mark, _range| String::new());
    }
    if !cfg.features.frequency_tick_labels {
        plot = plot.x_axis_formatter(|_mark, _range| String::new());
    }

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new("letters", bars).horizontal());
    });
}
