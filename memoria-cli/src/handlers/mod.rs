//! Command handlers for the Memoria CLI

pub mod record;
pub mod relationship;
pub mod search;
pub mod slug;

pub use record::handle_record_command;
pub use relationship::handle_relationship_command;
pub use search::handle_search_command;
pub use slug::handle_slug_command;
