//! Command-line argument definitions using clap.
//!
//! The argument structs here are thin wrappers over the core parameter
//! types: clap-specific concerns (flags, help text, value enums) stay in
//! this module and conversions into `cropcal-core` types are explicit, so
//! the core stays free of CLI framework derives.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use cropcal_core::{DateType, PlanRequest};

/// Main command-line interface for the cropcal gardening planner
///
/// Cropcal computes planting and harvest dates from a plant catalog: pick
/// plants, supply either a planting date or a harvest date, and the
/// counterpart date is computed from each plant's growth-stage durations.
/// Results can be saved under an email address and looked up later.
#[derive(Parser)]
#[command(version, about, name = "cropcal")]
pub struct Args {
    /// Path to a CSV plant catalog with the builtin column layout.
    /// Defaults to the catalog shipped with the binary
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cropcal/cropcal.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Keep saved results in a CSV sheet ledger at this path instead of
    /// the SQLite database
    #[arg(long, global = true, conflicts_with = "database_file")]
    pub ledger_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the cropcal CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List the plant catalog
    #[command(aliases = ["c", "ls"])]
    Catalog,
    /// Show a plant's growth-stage summary
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Compute a planting/harvest schedule
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Show saved schedules for an email
    #[command(alias = "l")]
    Lookup(LookupArgs),
    /// Run the menu-driven planner session
    #[command(alias = "i")]
    Interactive,
}

/// Show details of a specific plant
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Catalog id of the plant to show
    pub id: String,
}

/// Compute a schedule for selected plants
#[derive(clap::Args)]
pub struct PlanArgs {
    /// Comma-separated catalog numbers, e.g. "1,3"
    #[arg(short, long)]
    pub select: String,

    /// Which date you are supplying
    #[arg(short = 't', long, value_enum, default_value_t = DateTypeArg::Planting)]
    pub date_type: DateTypeArg,

    /// The anchor date in YYYY-MM-DD form
    #[arg(short, long)]
    pub date: String,

    /// Also save the results under this email
    #[arg(short, long)]
    pub email: Option<String>,
}

impl From<&PlanArgs> for PlanRequest {
    fn from(args: &PlanArgs) -> Self {
        PlanRequest {
            selection: args.select.clone(),
            date_type: args.date_type.into(),
            date: args.date.clone(),
        }
    }
}

/// Show saved schedules for an email
#[derive(clap::Args)]
pub struct LookupArgs {
    /// Email the results were saved under (matched exactly)
    pub email: String,

    /// Print records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Command-line representation of the anchor-date kind
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DateTypeArg {
    /// The supplied date is a planting date
    Planting,
    /// The supplied date is a harvest date
    Harvest,
}

impl From<DateTypeArg> for DateType {
    fn from(val: DateTypeArg) -> Self {
        match val {
            DateTypeArg::Planting => DateType::Planting,
            DateTypeArg::Harvest => DateType::Harvest,
        }
    }
}

impl std::fmt::Display for DateTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateTypeArg::Planting => write!(f, "planting"),
            DateTypeArg::Harvest => write!(f, "harvest"),
        }
    }
}
