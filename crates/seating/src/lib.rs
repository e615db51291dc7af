//! Seating banks and social-distancing geometry.
//!
//! Model
//! - A `SeatingBank` is a uniform grid: rows spaced by `row_pitch`, seats in a
//!   row spaced by `column_pitch`, at most `max_columns` seats per row.
//! - A `Seat` borrows its bank and resolves a (row label, column) pair into
//!   metric offsets `(x, y)` from the bank's reference corner.
//! - Two seats are socially distant when the other seat lies on or outside
//!   the ellipse with semi-axes `(x_thresh, y_thresh)` centred on this seat.
//!
//! Everything is immutable after construction and free of I/O.

pub mod bank;
pub mod error;
pub mod seat;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bank::SeatingBank;
pub use error::SeatError;
pub use seat::{ExclusionZone, Seat};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bank::SeatingBank;
    pub use crate::error::SeatError;
    pub use crate::seat::{ExclusionZone, Seat};
    pub use nalgebra::Vector2 as Vec2;
}
