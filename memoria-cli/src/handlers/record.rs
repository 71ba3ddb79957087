//! Memorial record command handlers

use crate::commands::RecordCommands;
use crate::context::MemoriaCliContext;
use crate::output::*;
use colored::Colorize;
use memoria::prelude::*;
use serde_json::json;

pub async fn handle_record_command(
    cmd: RecordCommands,
    ctx: &MemoriaCliContext,
    output_format: &str,
) -> memoria::Result<()> {
    match cmd {
        RecordCommands::Add(args) => {
            let mut draft = MemorialDraft::new(args.first_name, args.last_name, args.city);
            draft.region = args.region;
            draft.birth_date = args.birth_date;
            draft.death_date = args.death_date;
            draft.gender = args.gender;
            draft.message = args.message;
            draft.birth_place = args.birth_place;
            draft.profession = args.profession;
            draft.education = args.education;
            draft.cemetery = args.cemetery;
            draft.genealogy = args.genealogy;

            let mut session = EditSession::create(draft);
            let outcome = session.save(ctx.store.as_ref(), &ctx.config).await?;

            if output_format == "json" {
                print_json(&outcome);
            } else {
                print_save_outcome(&outcome);
            }
        }

        RecordCommands::Get(args) => match ctx.store.get_by_id(&args.id).await? {
            Some(record) => {
                if output_format == "json" {
                    print_json(&record);
                } else {
                    print_record(&record);
                }
            }
            None => return Err(MemoriaError::NotFound(args.id)),
        },

        RecordCommands::Delete(args) => {
            let deleted = delete_memorial(ctx.store.as_ref(), &args.id).await?;
            if output_format == "json" {
                print_json(&json!({ "id": args.id, "deleted": deleted }));
            } else if deleted {
                println!(
                    "{}",
                    format_success(&format!(
                        "Memorial '{}' deleted successfully.",
                        args.id.color(CliColors::accent())
                    ))
                );
            } else {
                println!(
                    "{}",
                    format_warning(&format!("Memorial '{}' not found.", args.id))
                );
            }
        }

        RecordCommands::Candle(args) => {
            let candles = ctx.store.increment_candles(&args.id).await?;
            if output_format == "json" {
                print_json(&json!({ "id": args.id, "candles": candles }));
            } else {
                println!(
                    "{}",
                    format_success(&format!(
                        "Candle lit for '{}' ({} in total).",
                        args.id.color(CliColors::accent()),
                        candles
                    ))
                );
            }
        }

        RecordCommands::Relatives(args) => {
            let relatives = resolve_relatives(ctx.store.as_ref(), &args.id).await?;
            if output_format == "json" {
                print_json(&relatives);
            } else {
                print_relatives(&args.id, &relatives);
            }
        }
    }

    Ok(())
}
