//! Seats within a seating bank: placement and pairwise distancing.
//!
//! Coordinates
//! - `x = column_pitch * column` (offset along the row from the bank edge).
//! - `y = row_pitch * row_index` (offset from the first row).
//! - Pitches are copied into the seat at construction; all later geometry
//!   uses the seat's own copies, so seats from different banks can still be
//!   compared (no cross-bank validation).
//!
//! Distancing
//! - The other seat is distant when `(dx/x_thresh)² + (dy/y_thresh)² >= 1`,
//!   i.e. on or outside the ellipse centred on this seat.

mod zone;

pub use zone::ExclusionZone;

use nalgebra::Vector2;

use crate::bank::SeatingBank;
use crate::error::SeatError;

/// A single seat of a `SeatingBank`.
///
/// Invariants:
/// - `row` indexes `bank.row_labels()`.
/// - `column <= bank.max_columns()`. Zero and negative columns pass the
///   check and are kept as given.
/// - `width == bank.column_pitch()`, `depth == bank.row_pitch()`.
#[derive(Clone, Copy, Debug)]
pub struct Seat<'a> {
    bank: &'a SeatingBank,
    row: usize,
    column: i64,
    width: f64,
    depth: f64,
}

impl<'a> Seat<'a> {
    /// Resolve `(row_label, column)` against `bank`.
    ///
    /// Errors: `InvalidColumn` if `column > max_columns` (checked first),
    /// `InvalidRow` if the label is unknown.
    pub fn new(bank: &'a SeatingBank, row_label: &str, column: i64) -> Result<Self, SeatError> {
        let max_columns = bank.max_columns();
        if column > i64::from(max_columns) {
            tracing::debug!(column, max_columns, "seat column out of range");
            return Err(SeatError::InvalidColumn {
                column,
                max_columns,
            });
        }
        let Some(row) = bank.row_index(row_label) else {
            tracing::debug!(row_label, "seat row label not in bank");
            return Err(SeatError::InvalidRow {
                label: row_label.to_string(),
            });
        };
        Ok(Self {
            bank,
            row,
            column,
            width: bank.column_pitch(),
            depth: bank.row_pitch(),
        })
    }

    #[inline]
    pub fn bank(&self) -> &'a SeatingBank {
        self.bank
    }
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }
    #[inline]
    pub fn column(&self) -> i64 {
        self.column
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Label of the row this seat resolved to.
    #[inline]
    pub fn row_label(&self) -> &'a str {
        &self.bank.row_labels()[self.row]
    }

    /// X offset from the edge of the bank, in metres.
    #[inline]
    pub fn get_x(&self) -> f64 {
        self.width * self.column as f64
    }

    /// Y offset from the first row of the bank, in metres.
    #[inline]
    pub fn get_y(&self) -> f64 {
        self.depth * self.row as f64
    }

    /// `(get_x(), get_y())` as a vector.
    #[inline]
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.get_x(), self.get_y())
    }

    /// Absolute X and Y separation from `other`, in metres.
    pub fn distance_from(&self, other: &Seat<'_>) -> (f64, f64) {
        let d = (self.position() - other.position()).abs();
        (d.x, d.y)
    }

    /// True if `other` is on or outside the exclusion ellipse around `self`.
    /// NaN geometry (e.g. a NaN pitch or threshold) is never distant.
    ///
    /// `x_thresh` is the along-row threshold, `y_thresh` the across-row one
    /// (metres). Either squaring to zero yields `SeatError::ZeroThreshold`.
    pub fn is_socially_distant_from(
        &self,
        other: &Seat<'_>,
        x_thresh: f64,
        y_thresh: f64,
    ) -> Result<bool, SeatError> {
        self.is_distant_within(other, ExclusionZone::new(x_thresh, y_thresh))
    }

    /// `is_socially_distant_from` with thresholds taken from `zone`.
    pub fn is_distant_within(
        &self,
        other: &Seat<'_>,
        zone: ExclusionZone,
    ) -> Result<bool, SeatError> {
        let (x, y) = self.distance_from(other);
        zone.clears(x, y)
    }
}
