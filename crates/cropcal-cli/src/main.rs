//! Cropcal CLI Application
//!
//! Command-line interface for the cropcal gardening planner.

mod args;
mod cli;
mod interactive;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use cropcal_core::{PlanRequest, PlannerBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        database_file,
        ledger_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_catalog_file(catalog_file)
        .with_database_path(database_file)
        .with_ledger_file(ledger_file)
        .build()
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Cropcal started");

    let mut cli = Cli::new(planner, renderer);

    match command {
        Some(Catalog) => cli.show_catalog(),
        Some(Show(args)) => cli.show_plant(&args.id),
        Some(Plan(args)) => cli.plan(&PlanRequest::from(&args), args.email.as_deref()),
        Some(Lookup(args)) => cli.lookup(&args.email, args.json),
        Some(Interactive) | None => cli.interactive(),
    }
}
