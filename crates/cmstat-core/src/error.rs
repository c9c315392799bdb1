// ── Core error types ──
//
// Every failure of a query is terminal: callers get either a fully
// assembled record or the first error hit along the way.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Retrieval ────────────────────────────────────────────────────
    #[error("Could not fetch modem page: {0}")]
    Fetch(#[from] cmstat_api::Error),

    // ── Extraction ───────────────────────────────────────────────────
    #[error("Required table '{label}' not found")]
    TableNotFound { label: String },

    #[error("Bad value in row '{row}': {source}")]
    Parse {
        row: String,
        #[source]
        source: ParseError,
    },

    #[error("Table '{table}' has {found} columns, expected {expected}")]
    ColumnMismatch {
        table: String,
        expected: usize,
        found: usize,
    },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` if the failure happened before any HTML was read.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Returns `true` if the modem did not answer within the timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Fetch(e) if e.is_timeout())
    }

    /// Returns `true` if the modem does not serve a requested page.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Fetch(e) if e.is_not_found())
    }
}

/// A cell whose text could not be coerced into the expected type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, got {value:?}")]
pub struct ParseError {
    pub expected: &'static str,
    pub value: String,
}

impl ParseError {
    pub(crate) fn new(expected: &'static str, value: impl Into<String>) -> Self {
        Self {
            expected,
            value: value.into(),
        }
    }

    /// Attach the row label the bad cell came from.
    pub(crate) fn in_row(self, row: &str) -> CoreError {
        CoreError::Parse {
            row: row.to_owned(),
            source: self,
        }
    }
}
