use freqplot::{BarVisual, ChartState, DataRow, Dataset, FillColor, BASELINE_FILL};

fn dataset(rows: &[(&str, f64)]) -> Dataset {
    Dataset::from_rows(rows.iter().map(|(label, frequency)| DataRow {
        label: (*label).to_string(),
        frequency: *frequency,
    }))
    .expect("test dataset is valid")
}

fn abc_state() -> ChartState {
    ChartState::new(dataset(&[("A", 5.0), ("B", 2.0), ("C", 9.0)]))
}

#[test]
fn initial_bars_use_baseline_fill_and_natural_width() {
    let state = abc_state();
    for bar in state.bars() {
        assert_eq!(bar.target_width, bar.frequency);
        assert_eq!(bar.fill, BASELINE_FILL);
    }
    assert_eq!(state.cutoff(), 0.0);
    assert_eq!(state.active_fill(), FillColor::Green);
}

#[test]
fn filter_partitions_on_strict_less_than() {
    let mut state = abc_state();
    state.set_cutoff(3.0);
    state.apply_filter();

    let bars = state.bars();
    assert_eq!(bars[0].target_width, 5.0);
    assert_eq!(bars[0].fill, FillColor::Green.color32());
    assert_eq!(bars[1].target_width, 0.0, "B (2.0) is below the cutoff");
    assert_eq!(
        bars[1].fill, BASELINE_FILL,
        "collapsed bars keep their previous fill"
    );
    assert_eq!(bars[2].target_width, 9.0);
    assert_eq!(bars[2].fill, FillColor::Green.color32());
}

#[test]
fn frequency_equal_to_cutoff_is_kept() {
    let mut state = ChartState::new(dataset(&[("A", 5.0)]));
    state.set_cutoff(5.0);
    state.apply_filter();
    assert_eq!(state.bars()[0].target_width, 5.0);
    assert_eq!(state.bars()[0].fill, FillColor::Green.color32());
}

#[test]
fn default_cutoff_collapses_nothing() {
    let mut state = abc_state();
    state.apply_filter();
    for bar in state.bars() {
        assert_eq!(bar.target_width, bar.frequency);
        assert_eq!(bar.fill, FillColor::Green.color32());
    }
}

#[test]
fn filter_leaves_dataset_and_cutoff_untouched() {
    let mut state = abc_state();
    state.set_cutoff(3.0);
    let rows_before = state.dataset().rows().to_vec();
    state.apply_filter();
    assert_eq!(state.dataset().rows(), rows_before.as_slice());
    assert_eq!(state.cutoff(), 3.0);
}

#[test]
fn reset_restores_baseline_after_filter() {
    let mut state = abc_state();
    state.set_cutoff(3.0);
    state.set_active_fill(FillColor::Pink);
    state.apply_filter();
    state.reset();

    let widths: Vec<f64> = state.bars().iter().map(|b| b.target_width).collect();
    assert_eq!(widths, vec![5.0, 2.0, 9.0]);
    for bar in state.bars() {
        assert_eq!(bar.fill, BASELINE_FILL);
    }
}

#[test]
fn reset_is_idempotent() {
    let mut state = abc_state();
    state.set_cutoff(3.0);
    state.apply_filter();

    state.reset();
    let once: Vec<BarVisual> = state.bars().to_vec();
    state.reset();
    assert_eq!(state.bars(), once.as_slice());
}

#[test]
fn reset_ignores_cutoff_and_active_fill() {
    let mut state = abc_state();
    state.set_cutoff(100.0);
    state.set_active_fill(FillColor::Orange);
    state.apply_filter();
    // Everything is collapsed now; reset must restore regardless.
    state.reset();
    for bar in state.bars() {
        assert_eq!(bar.target_width, bar.frequency);
        assert_eq!(bar.fill, BASELINE_FILL);
    }
    assert_eq!(state.cutoff(), 100.0, "reset does not touch the cutoff");
    assert_eq!(state.active_fill(), FillColor::Orange);
}

#[test]
fn fill_change_is_deferred_until_next_filter() {
    let mut state = abc_state();
    state.apply_filter();
    state.set_active_fill(FillColor::Pink);
    for bar in state.bars() {
        assert_eq!(
            bar.fill,
            FillColor::Green.color32(),
            "selecting a fill must not repaint existing bars"
        );
    }
    state.apply_filter();
    for bar in state.bars() {
        assert_eq!(bar.fill, FillColor::Pink.color32());
    }
}

#[test]
fn refilter_after_fill_change_recolors_only_kept_rows() {
    let mut state = abc_state();
    state.set_cutoff(3.0);
    state.apply_filter();

    state.set_active_fill(FillColor::Orange);
    state.apply_filter();

    let bars = state.bars();
    assert_eq!(bars[0].fill, FillColor::Orange.color32());
    assert_eq!(bars[2].fill, FillColor::Orange.color32());
    assert_eq!(bars[1].target_width, 0.0);
    assert_eq!(
        bars[1].fill, BASELINE_FILL,
        "the collapsed row is never painted with the active fill"
    );
}

#[test]
fn second_palette_entry_applies_on_filter_with_default_cutoff() {
    let mut state = abc_state();
    state.set_active_fill(FillColor::Orange);
    state.apply_filter();
    for bar in state.bars() {
        assert!(bar.target_width > 0.0);
        assert_eq!(bar.fill, FillColor::Orange.color32());
    }
}

#[test]
fn zero_frequency_row_is_kept_at_zero_width() {
    let mut state = ChartState::new(dataset(&[("Q", 0.0), ("R", 4.0)]));
    state.apply_filter();
    let bars = state.bars();
    // 0.0 >= 0.0 takes the keep branch: painted, but naturally zero wide.
    assert_eq!(bars[0].target_width, 0.0);
    assert_eq!(bars[0].fill, FillColor::Green.color32());
    assert_eq!(bars[1].target_width, 4.0);
}
