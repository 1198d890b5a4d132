use freqplot::CutoffField;

#[test]
fn commits_a_valid_number() {
    let mut field = CutoffField::new();
    field.text = "2.5".to_string();
    assert_eq!(field.commit(), Some(2.5));
    assert_eq!(field.committed(), 2.5);
    assert!(field.error().is_none());
}

#[test]
fn tolerates_surrounding_whitespace() {
    let mut field = CutoffField::new();
    field.text = "  3 ".to_string();
    assert_eq!(field.commit(), Some(3.0));
}

#[test]
fn empty_input_commits_the_default_threshold() {
    let mut field = CutoffField::new();
    field.text = "7".to_string();
    field.commit();
    field.text = String::new();
    assert_eq!(field.commit(), Some(0.0));
    assert_eq!(field.committed(), 0.0);
}

#[test]
fn malformed_input_keeps_the_previous_value() {
    let mut field = CutoffField::new();
    field.text = "4".to_string();
    field.commit();

    field.text = "abc".to_string();
    assert_eq!(field.commit(), None);
    assert_eq!(field.committed(), 4.0, "rejected input must not change the cutoff");
    assert!(field.error().is_some());
}

#[test]
fn negative_input_is_rejected() {
    let mut field = CutoffField::new();
    field.text = "-1".to_string();
    assert_eq!(field.commit(), None);
    assert_eq!(field.committed(), 0.0);
    assert!(field.error().unwrap().contains("non-negative"));
}

#[test]
fn nan_and_infinity_are_rejected() {
    for text in ["NaN", "inf", "-inf"] {
        let mut field = CutoffField::new();
        field.text = text.to_string();
        assert_eq!(field.commit(), None, "{text} must not commit");
        assert!(field.error().is_some());
    }
}

#[test]
fn successful_commit_clears_a_previous_error() {
    let mut field = CutoffField::new();
    field.text = "oops".to_string();
    field.commit();
    assert!(field.error().is_some());

    field.text = "1.25".to_string();
    assert_eq!(field.commit(), Some(1.25));
    assert!(field.error().is_none());
}
