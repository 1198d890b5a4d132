use egui::Color32;
use freqplot::{FillColor, BASELINE_FILL};

#[test]
fn palette_has_exactly_three_entries_in_dropdown_order() {
    assert_eq!(
        FillColor::all(),
        &[FillColor::Green, FillColor::Orange, FillColor::Pink]
    );
}

#[test]
fn labels_are_capitalized_color_names() {
    let labels: Vec<&str> = FillColor::all().iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["Green", "Orange", "Pink"]);
}

#[test]
fn hex_values_match_colors() {
    for fill in FillColor::all() {
        let hex = fill.hex();
        let r = u8::from_str_radix(&hex[1..3], 16).unwrap();
        let g = u8::from_str_radix(&hex[3..5], 16).unwrap();
        let b = u8::from_str_radix(&hex[5..7], 16).unwrap();
        assert_eq!(fill.color32(), Color32::from_rgb(r, g, b), "{hex}");
    }
}

#[test]
fn default_fill_is_the_first_entry() {
    assert_eq!(FillColor::default(), FillColor::Green);
    assert_eq!(FillColor::Green.hex(), "#1b9e77");
}

#[test]
fn baseline_is_steelblue_and_not_selectable() {
    assert_eq!(BASELINE_FILL, Color32::from_rgb(0x46, 0x82, 0xb4));
    assert!(FillColor::all().iter().all(|c| c.color32() != BASELINE_FILL));
}
