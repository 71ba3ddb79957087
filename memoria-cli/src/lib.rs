pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;

pub use args::Cli;
pub use commands::{Commands, RecordCommands, RelationshipCommands};
pub use context::MemoriaCliContext;
pub use output::{
    CliColors, format_error, format_info, format_relation, format_success, format_warning,
    output_error, print_candidate_list, print_json, print_record, print_relatives,
    print_save_outcome,
};
