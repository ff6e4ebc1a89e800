//! Anchor date parsing and the forward/backward schedule computation.

use std::collections::HashMap;

use jiff::civil::Date;
use jiff::Span;

use crate::error::{PlannerError, Result};
use crate::models::{DateType, Plant, Schedule, ScheduleEntry};

/// Parses an anchor date in exactly the `YYYY-MM-DD` format: four-digit
/// year, zero-padded two-digit month and day, hyphen-separated. The value
/// must also be a real calendar date.
pub fn parse_anchor_date(text: &str) -> Result<Date> {
    let err = || PlannerError::DateFormat {
        input: text.to_string(),
    };

    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(err());
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return Err(err());
    }

    let year: i16 = text[0..4].parse().map_err(|_| err())?;
    let month: i8 = text[5..7].parse().map_err(|_| err())?;
    let day: i8 = text[8..10].parse().map_err(|_| err())?;

    Date::new(year, month, day).map_err(|_| err())
}

/// Computes one schedule entry per selected index.
///
/// The anchor date text is parsed strictly (see [`parse_anchor_date`]). Data
/// rows are indexed by their id field; each selected index resolves to the
/// row whose id equals its decimal form, and indices with no matching id are
/// dropped without error (validation already filtered them, so in practice
/// this does not trigger). Entries come back in selection order, one per
/// resolved row, with the corresponding date computed as anchor plus total
/// growth time for a planting anchor and anchor minus total growth time for
/// a harvest anchor.
pub fn compute_schedule(
    rows: &[Vec<String>],
    indices: &[usize],
    date_type: DateType,
    date_text: &str,
) -> Result<Schedule> {
    let anchor = parse_anchor_date(date_text)?;

    // id -> row lookup over the data rows (header excluded)
    let by_id: HashMap<&str, &Vec<String>> = rows
        .iter()
        .skip(1)
        .filter_map(|row| row.first().map(|id| (id.trim(), row)))
        .collect();

    let mut entries = Vec::with_capacity(indices.len());
    for idx in indices {
        let Some(row) = by_id.get(idx.to_string().as_str()) else {
            continue;
        };
        let plant = Plant::from_row(row);
        let total = i64::from(plant.total_growth_time());
        let offset = match date_type {
            DateType::Planting => total,
            DateType::Harvest => -total,
        };

        entries.push(ScheduleEntry {
            plant_name: plant.name,
            date_type,
            anchor_date: anchor,
            corresponding_date: shift_date(anchor, offset)?,
        });
    }

    Ok(Schedule { date_type, entries })
}

/// Moves a calendar date by a signed number of days, crossing month and year
/// boundaries as needed.
fn shift_date(date: Date, days: i64) -> Result<Date> {
    let out_of_range = || PlannerError::DateOutOfRange {
        date: date.to_string(),
        days,
    };
    let span = Span::new().try_days(days).map_err(|_| out_of_range())?;
    date.checked_add(span).map_err(|_| out_of_range())
}
