//! Elliptical exclusion zone around a seat.

use crate::error::SeatError;

/// Distancing thresholds (metres): semi-axes of the exclusion ellipse.
///
/// - `x_thresh`: along the row (horizontal).
/// - `y_thresh`: across rows (vertical).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExclusionZone {
    pub x_thresh: f64,
    pub y_thresh: f64,
}

impl ExclusionZone {
    #[inline]
    pub fn new(x_thresh: f64, y_thresh: f64) -> Self {
        Self { x_thresh, y_thresh }
    }

    /// Same threshold on both axes.
    #[inline]
    pub fn circular(radius: f64) -> Self {
        Self::new(radius, radius)
    }

    /// `E = dx²/x_thresh² + dy²/y_thresh²`; `E < 1` is strictly inside.
    ///
    /// Fails with `ZeroThreshold` when either squared threshold is zero,
    /// including thresholds so small that their square underflows.
    pub fn ellipse_value(&self, dx: f64, dy: f64) -> Result<f64, SeatError> {
        let xx = self.x_thresh * self.x_thresh;
        let yy = self.y_thresh * self.y_thresh;
        if xx == 0.0 || yy == 0.0 {
            return Err(SeatError::ZeroThreshold {
                x_thresh: self.x_thresh,
                y_thresh: self.y_thresh,
            });
        }
        Ok(dx * dx / xx + dy * dy / yy)
    }

    /// True if the offset `(dx, dy)` lies on or outside the ellipse (`E >= 1`).
    /// A NaN `E` is never clear.
    #[inline]
    pub fn clears(&self, dx: f64, dy: f64) -> Result<bool, SeatError> {
        Ok(self.ellipse_value(dx, dy)? >= 1.0)
    }

    /// Negation of `clears`: strictly inside the ellipse, or NaN geometry.
    #[inline]
    pub fn excludes(&self, dx: f64, dy: f64) -> Result<bool, SeatError> {
        Ok(!self.clears(dx, dy)?)
    }
}
