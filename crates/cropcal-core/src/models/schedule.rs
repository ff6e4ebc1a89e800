//! Schedule models: the anchor-date kind and computed result rows.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Which of the two dates the user supplied as the anchor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
    /// The anchor is a planting date; the corresponding date is the harvest
    #[default]
    Planting,

    /// The anchor is a harvest date; the corresponding date is the planting
    Harvest,
}

impl FromStr for DateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planting" | "planting date" => Ok(DateType::Planting),
            "harvest" | "harvest date" => Ok(DateType::Harvest),
            _ => Err(format!("Invalid date type: {s}")),
        }
    }
}

impl DateType {
    /// Stable string representation used for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateType::Planting => "planting",
            DateType::Harvest => "harvest",
        }
    }

    /// Human-readable label for the anchor date, as rendered in result
    /// tables and written to the results ledger.
    pub fn label(&self) -> &'static str {
        match self {
            DateType::Planting => "Planting Date",
            DateType::Harvest => "Harvest Date",
        }
    }

    /// Label for the computed counterpart date.
    pub fn corresponding_label(&self) -> &'static str {
        match self {
            DateType::Planting => "Harvest Date",
            DateType::Harvest => "Planting Date",
        }
    }
}

/// One computed schedule row for a single plant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Name of the plant, copied from the matched catalog entry
    pub plant_name: String,

    /// Which date the user supplied
    pub date_type: DateType,

    /// The user-supplied calendar date
    pub anchor_date: Date,

    /// Anchor date plus (planting) or minus (harvest) the plant's total
    /// growth time
    pub corresponding_date: Date,
}

/// The ordered result set of one schedule computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    /// The anchor kind shared by every entry
    pub date_type: DateType,

    /// One entry per selected plant, in selection order
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// True when the computation resolved no plants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
