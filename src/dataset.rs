//! Dataset types and CSV loading for the bar chart.
//!
//! The chart is fed by a row-oriented CSV file with a `letter,frequency`
//! header, one row per category. Rows are deserialized into [`DataRow`] and
//! validated once at load time; after that the dataset is immutable for the
//! lifetime of the app. Load failures are surfaced as [`DatasetError`]
//! instead of silently rendering an empty chart.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

/// One record per category: a unique label and its measured frequency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataRow {
    /// Category identifier (e.g. a letter). Must be unique across the dataset.
    #[serde(rename = "letter")]
    pub label: String,
    /// Measured quantity; non-negative and finite.
    pub frequency: f64,
}

/// Errors raised while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate label {0:?}: bar/axis correspondence requires unique labels")]
    DuplicateLabel(String),
    #[error("row {row} ({label:?}): frequency {frequency} is negative")]
    NegativeFrequency {
        row: usize,
        label: String,
        frequency: f64,
    },
    #[error("row {row} ({label:?}): frequency is not a finite number")]
    NonFiniteFrequency { row: usize, label: String },
}

/// Ordered collection of [`DataRow`]s, immutable after load.
///
/// Row order is the file order and determines the band position of each bar
/// on the category axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<DataRow>,
    max_frequency: f64,
}

impl Dataset {
    /// Build a dataset from in-memory rows, applying the same validation as
    /// a CSV load. Intended for demos and tests.
    pub fn from_rows<I>(rows: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = DataRow>,
    {
        let rows: Vec<DataRow> = rows.into_iter().collect();

        let mut max_frequency = 0.0_f64;
        {
            let mut seen = std::collections::HashSet::new();
            for (i, row) in rows.iter().enumerate() {
                if !row.frequency.is_finite() {
                    return Err(DatasetError::NonFiniteFrequency {
                        row: i + 1,
                        label: row.label.clone(),
                    });
                }
                if row.frequency < 0.0 {
                    return Err(DatasetError::NegativeFrequency {
                        row: i + 1,
                        label: row.label.clone(),
                        frequency: row.frequency,
                    });
                }
                if !seen.insert(row.label.as_str()) {
                    return Err(DatasetError::DuplicateLabel(row.label.clone()));
                }
                max_frequency = max_frequency.max(row.frequency);
            }
        }

        tracing::debug!(rows = rows.len(), max_frequency, "dataset loaded");
        Ok(Self {
            rows,
            max_frequency,
        })
    }

    /// Load from a CSV file with a `letter,frequency` header.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_csv_reader(file)
    }

    /// Load from any CSV reader with a `letter,frequency` header.
    ///
    /// Cell whitespace is trimmed; a malformed numeric cell is a load error,
    /// not a silent NaN.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows = Vec::new();
        for record in rdr.deserialize() {
            let row: DataRow = record?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// The rows in file order.
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Upper bound of the linear frequency scale domain (`0.0` when empty).
    ///
    /// The domain is `[0, max_frequency]`, computed once at load time.
    pub fn max_frequency(&self) -> f64 {
        self.max_frequency
    }

    /// Category labels in file order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.label.as_str())
    }
}
