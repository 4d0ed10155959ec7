//! Error type shared by the forecast stages.

use thiserror::Error;

/// Errors produced while thinning wind grids, running forecasts, or
/// building overlays.
#[derive(Debug, Error)]
pub enum DriftError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriftError {
    /// Shorthand for a malformed-record error at a 1-based line.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}
