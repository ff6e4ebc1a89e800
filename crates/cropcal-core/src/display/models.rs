//! Display implementations for domain models.

use std::fmt;

use crate::models::{DateType, Plant, ScheduleEntry};

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Renders an optional stage duration, substituting `N/A` for stages that
/// do not apply to the plant.
fn days_or_na(days: Option<u32>) -> String {
    match days {
        Some(days) => format!("{days} days"),
        None => "N/A".to_string(),
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Germination Time: {}", days_or_na(self.germination))?;
        writeln!(f, "- Seedling Stage Time: {}", days_or_na(self.seedling_stage))?;
        writeln!(
            f,
            "- Vegetative Growth Time: {}",
            days_or_na(self.vegetative_growth)
        )?;
        writeln!(
            f,
            "- Flowering/Root Development Time: {}",
            days_or_na(self.flowering_root_development)
        )?;
        writeln!(
            f,
            "- Fruit Development Time: {}",
            days_or_na(self.fruit_development)
        )?;
        writeln!(f, "- Total Growth Time: {} days", self.total_growth_time())?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        Ok(())
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}, {} {}",
            self.plant_name,
            self.date_type.label(),
            self.anchor_date,
            self.date_type.corresponding_label(),
            self.corresponding_date
        )
    }
}
