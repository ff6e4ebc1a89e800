//! Collection wrapper types for formatted output.

use std::fmt;

use crate::catalog::Catalog;
use crate::models::{Schedule, StoredRecord};
use crate::store::LEDGER_HEADER;

/// Renders the catalog as the selection menu: id and name only, split into
/// two columns of equal height so a long catalog stays on one screen.
pub struct CatalogTable<'a>(pub &'a Catalog);

impl<'a> fmt::Display for CatalogTable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self
            .0
            .data_rows()
            .iter()
            .map(|row| {
                let id = row.first().map(String::as_str).unwrap_or("");
                let name = row.get(1).map(String::as_str).unwrap_or("");
                format!("{id}. {name}")
            })
            .collect();

        if items.is_empty() {
            return writeln!(f, "The plant catalog is empty.");
        }

        // Split into two columns; the first gets the extra item on odd counts
        let half = (items.len() + 1) / 2;
        let (left, right) = items.split_at(half);
        let width = left.iter().map(String::len).max().unwrap_or(0) + 5;

        for (i, item) in left.iter().enumerate() {
            match right.get(i) {
                Some(other) => writeln!(f, "{item:<width$}{other}")?,
                None => writeln!(f, "{item}")?,
            }
        }

        Ok(())
    }
}

/// Renders a computed schedule as a markdown table, with the anchor column
/// labeled by the date kind the user supplied.
pub struct ScheduleTable<'a>(pub &'a Schedule);

impl<'a> fmt::Display for ScheduleTable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plants were resolved for this selection.");
        }

        let date_type = self.0.date_type;
        writeln!(
            f,
            "| Plant | {} | {} |",
            date_type.label(),
            date_type.corresponding_label()
        )?;
        writeln!(f, "|---|---|---|")?;
        for entry in &self.0.entries {
            writeln!(
                f,
                "| {} | {} | {} |",
                entry.plant_name, entry.anchor_date, entry.corresponding_date
            )?;
        }

        Ok(())
    }
}

/// Renders stored records as a markdown table with the ledger's column
/// labels.
pub struct RecordList<'a>(pub &'a [StoredRecord]);

impl<'a> fmt::Display for RecordList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No saved results found.");
        }

        let [email, plant, date_type, date, corresponding] = LEDGER_HEADER;
        writeln!(f, "| {email} | {plant} | {date_type} | {date} | {corresponding} |")?;
        writeln!(f, "|---|---|---|---|---|")?;
        for record in self.0 {
            let [email, plant, date_type, date, corresponding] = record.to_row();
            writeln!(f, "| {email} | {plant} | {date_type} | {date} | {corresponding} |")?;
        }

        Ok(())
    }
}
