//! Plant model definition and growth-time aggregation.

use serde::{Deserialize, Serialize};

/// One plant from the catalog, with its growth-stage durations in days.
///
/// Every stage is optional: `None` means the stage does not apply to this
/// plant's lifecycle (legumes and leafy greens, for example, have no fruit
/// development stage). Catalog data quality cannot be guaranteed, so
/// construction never fails; a duration that does not parse as an integer
/// simply becomes `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plant {
    /// Catalog identifier as it appears in the source row
    pub id: String,

    /// Display name of the plant
    pub name: String,

    /// Classification label (e.g. "Legume", "Root Vegetable")
    pub category: String,

    /// Days to germinate
    pub germination: Option<u32>,

    /// Days in the seedling stage
    pub seedling_stage: Option<u32>,

    /// Days of vegetative growth
    pub vegetative_growth: Option<u32>,

    /// Days of flowering or root development
    pub flowering_root_development: Option<u32>,

    /// Days of fruit development
    pub fruit_development: Option<u32>,

    /// Free-text description, may be empty
    pub description: String,
}

impl Plant {
    /// Builds a plant from a positional sequence of raw string fields in the
    /// fixed catalog order: id, name, category, germination, seedling stage,
    /// vegetative growth, flowering/root development, fruit development,
    /// description.
    ///
    /// Short rows are padded with empty fields, and duration fields are
    /// parsed best-effort, so this always produces a valid entry even from
    /// partially malformed input.
    pub fn from_row(row: &[String]) -> Self {
        let field = |i: usize| row.get(i).map(String::as_str).unwrap_or("");

        Self {
            id: field(0).trim().to_string(),
            name: field(1).trim().to_string(),
            category: field(2).trim().to_string(),
            germination: parse_days(field(3)),
            seedling_stage: parse_days(field(4)),
            vegetative_growth: parse_days(field(5)),
            flowering_root_development: parse_days(field(6)),
            fruit_development: parse_days(field(7)),
            description: field(8).trim().to_string(),
        }
    }

    /// The five stage durations in lifecycle order.
    pub fn stages(&self) -> [Option<u32>; 5] {
        [
            self.germination,
            self.seedling_stage,
            self.vegetative_growth,
            self.flowering_root_development,
            self.fruit_development,
        ]
    }

    /// Total growth time in days: the sum of all present stage durations,
    /// treating absent stages as zero. All stages absent totals 0.
    pub fn total_growth_time(&self) -> u32 {
        self.stages().iter().flatten().sum()
    }
}

/// Best-effort integer parse for a duration field. Non-numeric, empty, or
/// negative input yields `None`, never an error and never zero.
fn parse_days(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_from_row_parses_all_fields() {
        let plant = Plant::from_row(&row(&[
            "3",
            "Tomato",
            "Fruit Vegetable",
            "7",
            "14",
            "30",
            "0",
            "45",
            "Needs full sun",
        ]));

        assert_eq!(plant.id, "3");
        assert_eq!(plant.name, "Tomato");
        assert_eq!(plant.category, "Fruit Vegetable");
        assert_eq!(plant.germination, Some(7));
        assert_eq!(plant.seedling_stage, Some(14));
        assert_eq!(plant.vegetative_growth, Some(30));
        assert_eq!(plant.flowering_root_development, Some(0));
        assert_eq!(plant.fruit_development, Some(45));
        assert_eq!(plant.description, "Needs full sun");
    }

    #[test]
    fn test_total_growth_time_sums_present_stages() {
        let plant = Plant::from_row(&row(&[
            "3", "Tomato", "Fruit Vegetable", "7", "14", "30", "0", "45", "",
        ]));
        assert_eq!(plant.total_growth_time(), 96);
    }

    #[test]
    fn test_malformed_durations_become_absent() {
        let plant = Plant::from_row(&row(&[
            "5", "Basil", "Herb", "seven", "", "30", "n/a", "20", "",
        ]));
        assert_eq!(plant.germination, None);
        assert_eq!(plant.seedling_stage, None);
        assert_eq!(plant.vegetative_growth, Some(30));
        assert_eq!(plant.flowering_root_development, None);
        assert_eq!(plant.fruit_development, Some(20));
        assert_eq!(plant.total_growth_time(), 50);
    }

    #[test]
    fn test_all_stages_absent_totals_zero() {
        let plant = Plant::from_row(&row(&["9", "Mystery", "Unknown", "", "", "", "", "", ""]));
        assert_eq!(plant.total_growth_time(), 0);
    }

    #[test]
    fn test_short_row_is_padded() {
        let plant = Plant::from_row(&row(&["2", "Carrot"]));
        assert_eq!(plant.id, "2");
        assert_eq!(plant.name, "Carrot");
        assert_eq!(plant.category, "");
        assert_eq!(plant.stages(), [None; 5]);
        assert_eq!(plant.description, "");
    }

    #[test]
    fn test_negative_duration_becomes_absent() {
        let plant = Plant::from_row(&row(&["4", "Pea", "Legume", "-3", "10", "25", "12", "", ""]));
        assert_eq!(plant.germination, None);
        assert_eq!(plant.total_growth_time(), 47);
    }
}
