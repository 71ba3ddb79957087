//! Relative search command handler

use crate::args::SearchArgs;
use crate::context::MemoriaCliContext;
use crate::output::*;
use memoria::prelude::*;

pub async fn handle_search_command(
    args: SearchArgs,
    ctx: &MemoriaCliContext,
    output_format: &str,
) -> memoria::Result<()> {
    let filters = RelativeFilters {
        id: args.id,
        last_name: args.last_name,
        first_name: args.first_name,
        city: args.city,
    };

    if filters.is_empty() {
        if output_format == "json" {
            print_json(&Vec::<Candidate>::new());
        } else {
            println!(
                "{}",
                format_warning("Give at least one of --id, --last-name, --first-name or --city.")
            );
        }
        return Ok(());
    }

    let limit = args.limit.unwrap_or(ctx.config.search.result_limit);
    let candidates = RelativeSearch::new(ctx.store.as_ref(), limit)
        .search(&filters)
        .await?;

    if output_format == "json" {
        print_json(&candidates);
    } else {
        print_candidate_list(&candidates);
    }

    Ok(())
}
