//! Numeric-cutoff input field with commit-time validation.
//!
//! The committed value only changes on a successful parse; malformed input
//! keeps the previous value and records an error message the UI displays
//! inline, instead of silently storing an unusable threshold.

/// Text-field state for the numeric cutoff.
#[derive(Debug, Clone, Default)]
pub struct CutoffField {
    /// Raw text as typed by the user. Bound to the UI text edit.
    pub text: String,
    committed: f64,
    error: Option<String>,
}

impl CutoffField {
    /// Fresh field: empty text, committed cutoff `0.0`, no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last successfully committed cutoff.
    pub fn committed(&self) -> f64 {
        self.committed
    }

    /// Validation error from the last commit attempt, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Parse and commit the current text, returning the newly committed
    /// value on success.
    ///
    /// Empty input commits `0.0` (the default threshold). Input that is not
    /// a finite, non-negative number leaves the committed value unchanged
    /// and records an error.
    pub fn commit(&mut self) -> Option<f64> {
        let raw = self.text.trim();
        if raw.is_empty() {
            self.committed = 0.0;
            self.error = None;
            return Some(0.0);
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => {
                self.committed = value;
                self.error = None;
                Some(value)
            }
            Ok(value) => {
                self.error = Some(format!(
                    "cutoff must be a non-negative number, got {value}"
                ));
                None
            }
            Err(_) => {
                self.error = Some(format!("not a number: {raw:?}"));
                None
            }
        }
    }
}
