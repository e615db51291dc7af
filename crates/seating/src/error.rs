//! Errors raised when building seats or testing distancing.

use std::fmt;

/// Errors surfaced by seat construction and the distancing test.
#[derive(Clone, Debug, PartialEq)]
pub enum SeatError {
    /// Column number is beyond the bank's seats-per-row capacity.
    InvalidColumn { column: i64, max_columns: u32 },
    /// Row label is not one of the bank's row labels.
    InvalidRow { label: String },
    /// A distancing threshold of zero (the ellipse test divides by it).
    ZeroThreshold { x_thresh: f64, y_thresh: f64 },
}

impl fmt::Display for SeatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatError::InvalidColumn {
                column,
                max_columns,
            } => write!(
                f,
                "column {column} cannot be beyond the limits of the seating bank (max {max_columns})"
            ),
            SeatError::InvalidRow { label } => {
                write!(f, "row {label:?} not in seating bank row labels")
            }
            SeatError::ZeroThreshold { x_thresh, y_thresh } => write!(
                f,
                "distancing thresholds must be non-zero (x_thresh={x_thresh}, y_thresh={y_thresh})"
            ),
        }
    }
}

impl std::error::Error for SeatError {}
