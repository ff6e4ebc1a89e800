//! Record insert and lookup queries.

use jiff::civil::Date;
use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{DateType, ScheduleEntry, StoredRecord},
    store::RecordStore,
};

const INSERT_RECORD_SQL: &str = "INSERT INTO records (email, plant, date_type, anchor_date, corresponding_date) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_RECORDS_BY_EMAIL_SQL: &str = "SELECT email, plant, date_type, anchor_date, corresponding_date FROM records WHERE email = ?1 ORDER BY id ASC";

fn conversion_error(index: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}

impl super::Database {
    /// Appends one schedule record to the ledger table.
    pub fn append_record(&mut self, record: &StoredRecord) -> Result<()> {
        self.connection
            .execute(
                INSERT_RECORD_SQL,
                params![
                    record.email,
                    record.entry.plant_name,
                    record.entry.date_type.as_str(),
                    record.entry.anchor_date.to_string(),
                    record.entry.corresponding_date.to_string(),
                ],
            )
            .db_context("Failed to insert record")?;
        Ok(())
    }

    /// Retrieves every record stored under `email`, oldest first. Email
    /// matching is exact and case-sensitive.
    pub fn records_by_email(&self, email: &str) -> Result<Vec<StoredRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_RECORDS_BY_EMAIL_SQL)
            .db_context("Failed to prepare query")?;

        let records = stmt
            .query_map(params![email], |row| {
                let date_type_str: String = row.get(2)?;
                let date_type = date_type_str.parse::<DateType>().map_err(|_| {
                    conversion_error(2, format!("Invalid date type: {date_type_str}"))
                })?;

                let anchor: String = row.get(3)?;
                let anchor_date = anchor
                    .parse::<Date>()
                    .map_err(|e| conversion_error(3, e.to_string()))?;

                let corresponding: String = row.get(4)?;
                let corresponding_date = corresponding
                    .parse::<Date>()
                    .map_err(|e| conversion_error(4, e.to_string()))?;

                Ok(StoredRecord {
                    email: row.get(0)?,
                    entry: ScheduleEntry {
                        plant_name: row.get(1)?,
                        date_type,
                        anchor_date,
                        corresponding_date,
                    },
                })
            })
            .db_context("Failed to query records")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read record row")?;

        Ok(records)
    }
}

impl RecordStore for super::Database {
    fn append(&mut self, record: &StoredRecord) -> Result<()> {
        self.append_record(record)
    }

    fn records_for_email(&self, email: &str) -> Result<Vec<StoredRecord>> {
        self.records_by_email(email)
    }
}
