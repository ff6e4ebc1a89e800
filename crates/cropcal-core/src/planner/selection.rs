//! Selection validation: mapping user-entered indices to catalog rows.

use crate::error::{PlannerError, Result};

/// Validates a comma-separated string of catalog indices against the raw
/// catalog grid (header row at position 0).
///
/// Each token is trimmed and parsed as an integer. Any token that is
/// non-numeric, negative, or out of bounds for the grid rejects the whole
/// batch; the caller re-collects the entire input string rather than
/// retrying per token.
///
/// An in-bounds index is accepted only when the addressed row's id field
/// textually contains the decimal form of the index; otherwise the token is
/// skipped without error. With well-formed catalogs (ids numbered 1..N below
/// a header) every in-bounds data index matches its own row.
///
/// On success returns the validated indices in the order entered, duplicates
/// preserved.
pub fn validate_selection(rows: &[Vec<String>], raw_input: &str) -> Result<Vec<usize>> {
    let mut selected = Vec::new();

    for token in raw_input.split(',') {
        let token = token.trim();
        let index: i64 = token.parse().map_err(|_| PlannerError::SelectionFormat {
            token: token.to_string(),
        })?;

        if index < 0 {
            return Err(PlannerError::SelectionNegative { index });
        }

        let idx = index as usize;
        if idx >= rows.len() {
            return Err(PlannerError::SelectionRange { index });
        }

        let id_matches = rows[idx]
            .first()
            .is_some_and(|id| id.contains(&index.to_string()));
        if id_matches {
            selected.push(idx);
        }
    }

    Ok(selected)
}
