//! Print which seats of a small bank conflict with a chosen seat.
//!
//! Usage:
//!   cargo run -p seating --example bank_report -- [ROW] [COLUMN]
//!
//! Output: one line per row, `X` = chosen seat, `#` = inside its exclusion
//! zone, `.` = distant. Rejected seat lookups are logged at debug level.

use anyhow::{Context, Result};
use seating::{ExclusionZone, Seat, SeatingBank};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let row = std::env::args().nth(1).unwrap_or_else(|| "B".to_string());
    let column: i64 = std::env::args()
        .nth(2)
        .map(|c| c.parse::<i64>())
        .transpose()
        .context("column must be an integer")?
        .unwrap_or(4);

    let bank = SeatingBank::new(1.0, 0.5, 8, ["A", "B", "C", "D"]);
    let zone = ExclusionZone::new(1.0, 1.5);
    let centre = Seat::new(&bank, &row, column)
        .with_context(|| format!("seat {row}{column} is not in the bank"))?;
    tracing::info!(row, column, x = centre.get_x(), y = centre.get_y(), "centre");

    for label in bank.row_labels() {
        let mut line = format!("{label} ");
        for c in 1..=i64::from(bank.max_columns()) {
            let s = bank.seat(label, c)?;
            let mark = if s.row() == centre.row() && s.column() == centre.column() {
                'X'
            } else if centre.is_distant_within(&s, zone)? {
                '.'
            } else {
                '#'
            };
            line.push(mark);
        }
        println!("{line}");
    }
    Ok(())
}
