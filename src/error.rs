use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load failures
// ---------------------------------------------------------------------------

/// Why a CSV file could not be turned into a table.
///
/// A failed load never touches previously loaded data; the caller shows the
/// error and keeps whatever table it had.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed CSV near row {row}")]
    Malformed {
        /// 1-based data row (header excluded).
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("no \"Timestamp\" column in header: {found:?}")]
    MissingTimestamp { found: Vec<String> },

    #[error("row {row}: {value:?} is not a recognizable timestamp")]
    BadTimestamp { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Plot request failures
// ---------------------------------------------------------------------------

/// Why a plot request could not be satisfied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlotError {
    #[error("load a CSV file before plotting")]
    NoData,

    #[error("select at least one column to plot")]
    NoSelection,

    #[error("reference line {index}: {input:?} is not a valid number")]
    BadReferenceLine {
        /// 1-based index of the offending reference-line field.
        index: usize,
        input: String,
    },

    #[error("column {0:?} is not present in the loaded data")]
    UnknownColumn(String),
}

// ---------------------------------------------------------------------------
// User-facing notices
// ---------------------------------------------------------------------------

/// Severity of a [`Notice`], picked by the error kind that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A dismissible modal message shown for a failed user action.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn load_error(err: LoadError) -> Self {
        // Route through anyhow to render the full cause chain.
        let chain = anyhow::Error::new(err);
        Notice {
            level: NoticeLevel::Error,
            title: "Error loading file".to_string(),
            message: format!("{chain:#}"),
        }
    }

    pub fn plot_error(err: &PlotError) -> Self {
        let (level, title) = match err {
            PlotError::NoData => (NoticeLevel::Warning, "No data"),
            PlotError::NoSelection => (NoticeLevel::Warning, "No selection"),
            PlotError::BadReferenceLine { .. } => {
                (NoticeLevel::Error, "Invalid reference line")
            }
            PlotError::UnknownColumn(_) => (NoticeLevel::Error, "Error generating plot"),
        };
        Notice {
            level,
            title: title.to_string(),
            message: err.to_string(),
        }
    }
}
