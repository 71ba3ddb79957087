//! Command argument definitions
//!
//! This module contains the top-level parser and the argument structs used by
//! the commands.

use crate::commands::Commands;
use chrono::NaiveDate;
use clap::{Args, Parser};
use memoria::models::Gender;

#[derive(Parser)]
#[command(name = "memoria-cli")]
#[command(about = "Manage memorial records and their relatives", long_about = None)]
#[command(version = memoria::VERSION)]
pub struct Cli {
    /// Custom data directory for storage
    #[arg(long, short, global = true)]
    pub data_dir: Option<String>,

    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true)]
    pub output: String,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct AddRecordArgs {
    /// Given name
    pub first_name: String,

    /// Surname
    pub last_name: String,

    /// City, used together with the surname to build the identifier
    pub city: String,

    /// Region or prefecture
    #[arg(long)]
    pub region: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: Option<NaiveDate>,

    /// Date of death (YYYY-MM-DD)
    #[arg(long)]
    pub death_date: Option<NaiveDate>,

    /// Gender (male or female)
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Short message shown under the name
    #[arg(long)]
    pub message: Option<String>,

    /// Place of birth
    #[arg(long)]
    pub birth_place: Option<String>,

    #[arg(long)]
    pub profession: Option<String>,

    #[arg(long)]
    pub education: Option<String>,

    /// Where the person is buried
    #[arg(long)]
    pub cemetery: Option<String>,

    /// Free-text family history
    #[arg(long)]
    pub genealogy: Option<String>,
}

#[derive(Args)]
pub struct GetRecordArgs {
    /// Memorial ID
    pub id: String,
}

#[derive(Args)]
pub struct DeleteRecordArgs {
    /// Memorial ID
    pub id: String,
}

#[derive(Args)]
pub struct CandleArgs {
    /// Memorial ID
    pub id: String,
}

#[derive(Args)]
pub struct RelativesArgs {
    /// Memorial ID
    pub id: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Part of the memorial ID
    #[arg(long)]
    pub id: Option<String>,

    /// Part of the surname, Greek or Latin
    #[arg(long)]
    pub last_name: Option<String>,

    /// Part of the given name, Greek or Latin
    #[arg(long)]
    pub first_name: Option<String>,

    /// Part of the city, Greek or Latin
    #[arg(long)]
    pub city: Option<String>,

    /// Maximum number of results (defaults to the configured limit)
    #[arg(long, short)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct AddRelationshipArgs {
    /// Memorial the relationship is attached to
    pub source: String,

    /// The relative
    pub target: String,

    /// Relation of the relative to the source (e.g. father, spouse, nephew_niece)
    pub relation_type: String,

    /// Also attach the reciprocal relationship to the relative
    #[arg(long)]
    pub mirror: bool,
}

#[derive(Args)]
pub struct RemoveRelationshipArgs {
    /// Memorial the relationship is attached to
    pub source: String,

    /// The relative to remove
    pub target: String,
}

#[derive(Args)]
pub struct InverseArgs {
    /// Relation type to look up
    pub relation_type: String,
}

#[derive(Args)]
pub struct SlugArgs {
    /// Text to transliterate
    pub text: String,
}
