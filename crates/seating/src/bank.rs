//! Seating bank geometry (value type).

use crate::error::SeatError;
use crate::seat::Seat;

/// Physical layout of a uniform grid of seats.
///
/// Invariants:
/// - Immutable after construction; fields are only readable.
/// - Row index is the position of a label in `row_labels` (row 0 first).
/// - No range checks: zero/negative pitches or an empty label list are
///   accepted and simply produce degenerate geometry.
///
/// Comparison is structural and lexicographic over
/// `(row_pitch, column_pitch, max_columns, row_labels)`.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct SeatingBank {
    row_pitch: f64,
    column_pitch: f64,
    max_columns: u32,
    row_labels: Vec<String>,
}

impl SeatingBank {
    /// `row_pitch`/`column_pitch` in metres; `max_columns` seats per row.
    pub fn new<I, S>(row_pitch: f64, column_pitch: f64, max_columns: u32, row_labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            row_pitch,
            column_pitch,
            max_columns,
            row_labels: row_labels.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn row_pitch(&self) -> f64 {
        self.row_pitch
    }
    #[inline]
    pub fn column_pitch(&self) -> f64 {
        self.column_pitch
    }
    #[inline]
    pub fn max_columns(&self) -> u32 {
        self.max_columns
    }
    #[inline]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// First index of `label` in the row labels.
    #[inline]
    pub fn row_index(&self, label: &str) -> Option<usize> {
        self.row_labels.iter().position(|l| l == label)
    }

    /// Shorthand for `Seat::new(self, row_label, column)`.
    pub fn seat(&self, row_label: &str, column: i64) -> Result<Seat<'_>, SeatError> {
        Seat::new(self, row_label, column)
    }

    /// All seats, row-major: rows in label order, columns `1..=max_columns`.
    ///
    /// A repeated label yields seats of its first occurrence, same as `seat`.
    pub fn seats(&self) -> impl Iterator<Item = Seat<'_>> + '_ {
        self.row_labels.iter().flat_map(move |label| {
            (1..=i64::from(self.max_columns)).filter_map(move |c| self.seat(label, c).ok())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn abc(row_pitch: f64, column_pitch: f64, max_columns: u32) -> SeatingBank {
        SeatingBank::new(row_pitch, column_pitch, max_columns, ["A", "B", "C"])
    }

    #[test]
    fn structural_equality() {
        assert_eq!(abc(1.0, 0.5, 10), abc(1.0, 0.5, 10));
        assert_ne!(abc(1.0, 0.5, 10), abc(1.0, 0.5, 9));
        // Label order is significant.
        assert_ne!(
            abc(1.0, 0.5, 10),
            SeatingBank::new(1.0, 0.5, 10, ["C", "B", "A"])
        );
    }

    #[test]
    fn ordering_is_fieldwise_in_declaration_order() {
        // row_pitch dominates everything after it
        assert!(abc(0.9, 9.0, 99) < abc(1.0, 0.1, 1));
        // tie on row_pitch -> column_pitch decides
        assert!(abc(1.0, 0.4, 99) < abc(1.0, 0.5, 1));
        // tie on pitches -> max_columns decides
        assert!(abc(1.0, 0.5, 9) < abc(1.0, 0.5, 10));
        // tie on scalars -> labels compared lexicographically
        let ab = SeatingBank::new(1.0, 0.5, 10, ["A", "B"]);
        assert_eq!(ab.partial_cmp(&abc(1.0, 0.5, 10)), Some(Ordering::Less));
        let b = SeatingBank::new(1.0, 0.5, 10, ["B"]);
        assert!(b > abc(1.0, 0.5, 10));
    }

    #[test]
    fn nan_pitch_is_incomparable() {
        assert_eq!(abc(f64::NAN, 0.5, 10).partial_cmp(&abc(1.0, 0.5, 10)), None);
    }

    #[test]
    fn degenerate_values_are_accepted() {
        let b = SeatingBank::new(-1.0, 0.0, 0, Vec::<String>::new());
        assert_eq!(b.row_pitch(), -1.0);
        assert_eq!(b.column_pitch(), 0.0);
        assert_eq!(b.max_columns(), 0);
        assert!(b.row_labels().is_empty());
        assert_eq!(b.seats().count(), 0);
    }

    #[test]
    fn row_index_is_first_match() {
        let b = SeatingBank::new(1.0, 1.0, 2, ["A", "B", "A"]);
        assert_eq!(b.row_index("A"), Some(0));
        assert_eq!(b.row_index("B"), Some(1));
        assert_eq!(b.row_index("Z"), None);
    }

    #[test]
    fn seats_enumerates_row_major() {
        let b = abc(1.0, 0.5, 3);
        let coords: Vec<(usize, i64)> = b.seats().map(|s| (s.row(), s.column())).collect();
        assert_eq!(coords.len(), 9);
        assert_eq!(coords[0], (0, 1));
        assert_eq!(coords[2], (0, 3));
        assert_eq!(coords[3], (1, 1));
        assert_eq!(coords[8], (2, 3));
    }
}
