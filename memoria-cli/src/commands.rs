//! Command enum definitions
//!
//! This module contains all CLI command enums that define the command structure.

use crate::args::*;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Display version information
    Version,

    /// Memorial record commands
    #[command(subcommand)]
    Record(RecordCommands),

    /// Find candidate relatives by partial ID, name or city
    #[command(long_about = r#"
Find memorials to link as relatives. Every filter is a case-insensitive
partial match, and Greek and Latin spellings match each other.

At least one filter is required; results are capped at the configured limit
(5 by default).

EXAMPLES:
  # Everyone whose surname contains "papad"
  memoria-cli search --last-name papad

  # Greek input works too
  memoria-cli search --last-name Παπαδ --city Αθήνα
"#)]
    Search(SearchArgs),

    /// Relationship commands
    #[command(subcommand)]
    Relationship(RelationshipCommands),

    /// Show how text is transliterated into identifiers
    Slug(SlugArgs),
}

#[derive(Subcommand)]
pub enum RecordCommands {
    /// Create a new memorial
    #[command(long_about = r#"
Create a memorial. The identifier is built from the transliterated surname and
city, the partner code, and a sequence number counting the memorials that
already share that surname and city.

EXAMPLES:
  # Creates papadopoulosathensA1 in an empty store
  memoria-cli record add Nikos Papadopoulos Athens

  # With dates
  memoria-cli record add Maria Georgiou Patra --birth-date 1931-04-02 --death-date 2019-11-20

  # Page details
  memoria-cli record add Maria Georgiou Patra --gender female --profession Teacher --cemetery "St. Nicholas"
"#)]
    Add(AddRecordArgs),

    /// Show a memorial by ID
    #[command(alias = "show")]
    Get(GetRecordArgs),

    /// Delete a memorial and its relationships
    #[command(alias = "rm")]
    Delete(DeleteRecordArgs),

    /// List the relatives of a memorial
    Relatives(RelativesArgs),

    /// Light a candle on a memorial
    Candle(CandleArgs),
}

#[derive(Subcommand)]
pub enum RelationshipCommands {
    /// Link a relative to a memorial
    #[command(long_about = r#"
Attach <target> to <source> as a relative of the given type. The type says
what the target is to the source: "father" means <target> is the father of
<source>.

With --mirror the reciprocal relationship is attached to <target> as well
(father becomes child, spouse stays spouse). Types without an inverse, such
as nephew_niece, are only attached to <source>.

EXAMPLES:
  memoria-cli relationship add ioannouvolosA2 ioannouvolosA1 father --mirror
"#)]
    Add(AddRelationshipArgs),

    /// Unlink a relative from a memorial
    #[command(alias = "rm")]
    Remove(RemoveRelationshipArgs),

    /// Show the reciprocal of a relation type
    Inverse(InverseArgs),

    /// List every relation type and its reciprocal
    Types,
}
