//! Command handlers wiring the planner to terminal output.

use anyhow::{bail, Result};
use cropcal_core::{CatalogTable, PlanRequest, Planner, RecordList, ScheduleTable};
use log::info;

use crate::interactive;
use crate::renderer::TerminalRenderer;

/// Command dispatcher holding the planner and renderer for one invocation.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Render the catalog as the two-column selection menu.
    pub fn show_catalog(&self) -> Result<()> {
        self.renderer.render("# Plant Catalog\n\n")?;
        self.renderer
            .render(&format!("{}", CatalogTable(self.planner.catalog())))
    }

    /// Render one plant's growth-stage summary.
    pub fn show_plant(&self, id: &str) -> Result<()> {
        match self.planner.catalog().plant_by_id(id) {
            Some(plant) => self.renderer.render(&format!("{plant}")),
            None => bail!("No plant found with id {id}"),
        }
    }

    /// Compute and render a schedule; optionally store it under an email.
    pub fn plan(&mut self, request: &PlanRequest, email: Option<&str>) -> Result<()> {
        let schedule = self.planner.plan(request)?;

        self.renderer.render("# Your Crop Schedule\n\n")?;
        self.renderer
            .render(&format!("{}", ScheduleTable(&schedule)))?;

        if let Some(email) = email {
            let written = self.planner.store_results(email, &schedule)?;
            info!("stored {written} records for {email}");
            self.renderer
                .render(&format!("\nSaved {written} result(s) under {email}.\n"))?;
        }

        Ok(())
    }

    /// Render the stored records for an email, as a table or as JSON.
    pub fn lookup(&self, email: &str, json: bool) -> Result<()> {
        let records = self.planner.records_for(email)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        self.renderer
            .render(&format!("# Saved Results for {email}\n\n"))?;
        self.renderer.render(&format!("{}", RecordList(&records)))
    }

    /// Run the menu-driven planner session.
    pub fn interactive(&mut self) -> Result<()> {
        interactive::run(&mut self.planner, &self.renderer)
    }
}
