use crate::args::SlugArgs;
use crate::output::*;
use colored::Colorize;
use memoria::identity::{search_key, slug, transliterate};
use serde_json::json;

pub async fn handle_slug_command(args: SlugArgs, output_format: &str) -> memoria::Result<()> {
    let latin = transliterate(&args.text);
    let slugged = slug(&args.text);
    let key = search_key(&args.text);

    if output_format == "json" {
        print_json(&json!({
            "input": args.text,
            "transliterated": latin,
            "slug": slugged,
            "search_key": key,
        }));
    } else {
        println!("{}: {}", "Input".bold(), args.text);
        println!("{}: {}", "Transliterated".bold(), latin);
        println!("{}: {}", "Slug".bold(), slugged.color(CliColors::accent()));
        println!("{}: {}", "Search key".bold(), key.color(CliColors::muted()));
    }

    Ok(())
}
