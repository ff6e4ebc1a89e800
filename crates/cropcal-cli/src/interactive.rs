//! Menu-driven planner session.
//!
//! The re-prompt-until-valid loops live here, not in the core: every typed
//! input error (bad index batch, bad date) is printed and the whole input
//! string is collected again. EOF on stdin ends the session cleanly at any
//! prompt.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use cropcal_core::{CatalogTable, DateType, Planner, RecordList, ScheduleTable};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Run the interactive session over stdin.
pub fn run(planner: &mut Planner, renderer: &TerminalRenderer) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    session(planner, renderer, &mut input)
}

fn session<R: BufRead>(
    planner: &mut Planner,
    renderer: &TerminalRenderer,
    input: &mut R,
) -> Result<()> {
    renderer.clear_screen();
    renderer.render("# Welcome to the Crop Calendar Planner!\n")?;

    loop {
        renderer.render("\n1. Plan a schedule\n2. Look up saved results\n3. Exit\n\n")?;
        let Some(choice) = prompt(input, "Choose an option: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                if plan_flow(planner, renderer, input)?.is_none() {
                    return Ok(());
                }
            }
            "2" => {
                if lookup_flow(planner, renderer, input)?.is_none() {
                    return Ok(());
                }
            }
            "3" | "q" | "exit" => {
                renderer.render("\nHappy gardening!\n")?;
                return Ok(());
            }
            other => renderer.render(&format!("'{other}' is not a menu option.\n"))?,
        }
    }
}

/// One planning pass: catalog, selection, date type, date, results, save.
/// Returns `None` when stdin ends mid-flow.
fn plan_flow<R: BufRead>(
    planner: &mut Planner,
    renderer: &TerminalRenderer,
    input: &mut R,
) -> Result<Option<()>> {
    renderer.render("\n# Plant Catalog\n\n")?;
    renderer.render(&format!("{}\n", CatalogTable(planner.catalog())))?;

    let indices = loop {
        let Some(raw) = prompt(input, "Enter plant numbers (comma-separated): ")? else {
            return Ok(None);
        };
        match planner.validate_selection(&raw) {
            Ok(indices) if !indices.is_empty() => break indices,
            Ok(_) => renderer.render("No plants matched that selection, try again.\n")?,
            Err(e) if e.is_reprompt() => renderer.render(&format!("{e}\n"))?,
            Err(e) => return Err(e.into()),
        }
    };

    let date_type = loop {
        let Some(choice) =
            prompt(input, "Do you have a (1) planting date or a (2) harvest date? ")?
        else {
            return Ok(None);
        };
        match choice.as_str() {
            "1" => break DateType::Planting,
            "2" => break DateType::Harvest,
            _ => renderer.render("Enter 1 or 2.\n")?,
        }
    };

    let schedule = loop {
        let message = format!("Enter your {} (YYYY-MM-DD): ", date_type.label().to_lowercase());
        let Some(date) = prompt(input, &message)? else {
            return Ok(None);
        };
        match planner.compute_schedule(&indices, date_type, &date) {
            Ok(schedule) => break schedule,
            Err(e) if e.is_reprompt() => renderer.render(&format!("{e}\n"))?,
            Err(e) => return Err(e.into()),
        }
    };

    renderer.render("\n# Your Crop Schedule\n\n")?;
    renderer.render(&format!("{}\n", ScheduleTable(&schedule)))?;

    let Some(save) = prompt(input, "Save these results? (y/n): ")? else {
        return Ok(None);
    };
    if save.eq_ignore_ascii_case("y") || save.eq_ignore_ascii_case("yes") {
        let email = loop {
            let Some(email) = prompt(input, "Enter your email: ")? else {
                return Ok(None);
            };
            if email.contains('@') {
                break email;
            }
            renderer.render("That does not look like an email address.\n")?;
        };
        let written = planner.store_results(&email, &schedule)?;
        debug!("stored {written} records for {email}");
        renderer.render(&format!("Saved {written} result(s) under {email}.\n"))?;
    }

    Ok(Some(()))
}

/// Look up saved results for an email. Returns `None` when stdin ends.
fn lookup_flow<R: BufRead>(
    planner: &mut Planner,
    renderer: &TerminalRenderer,
    input: &mut R,
) -> Result<Option<()>> {
    let Some(email) = prompt(input, "\nEnter the email to look up: ")? else {
        return Ok(None);
    };
    let records = planner.records_for(&email)?;

    renderer.render(&format!("\n# Saved Results for {email}\n\n"))?;
    renderer.render(&format!("{}\n", RecordList(&records)))?;
    Ok(Some(()))
}

/// Print a prompt and read one trimmed line. `None` means EOF.
fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
