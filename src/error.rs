use std::io;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error kinds
// ---------------------------------------------------------------------------

/// Everything that can go wrong between a file path and a summary table.
///
/// An empty filter result is deliberately NOT an error: asking for a target
/// that is absent from the file yields an empty [`SummaryTable`] instead.
///
/// [`SummaryTable`]: crate::summary::SummaryTable
#[derive(Debug, Error)]
pub enum Error {
    /// The input file is missing or unreadable.
    #[error("reading input file: {0}")]
    Io(#[from] io::Error),

    /// The file could not be parsed as a delimited table.
    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent at the point of use.
    #[error("missing required column: '{0}'")]
    MissingColumn(String),

    /// A cell that must be numeric is not.
    #[error("column '{column}' holds non-numeric value '{value}'")]
    NonNumeric { column: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Column name carried by a [`Error::MissingColumn`], if that is the kind.
    pub fn missing_column(&self) -> Option<&str> {
        match self {
            Error::MissingColumn(name) => Some(name),
            _ => None,
        }
    }
}
