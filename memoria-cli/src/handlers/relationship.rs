//! Relationship command handlers

use crate::commands::RelationshipCommands;
use crate::context::MemoriaCliContext;
use crate::output::*;
use memoria::prelude::*;
use serde_json::json;

pub async fn handle_relationship_command(
    cmd: RelationshipCommands,
    ctx: &MemoriaCliContext,
    output_format: &str,
) -> memoria::Result<()> {
    match cmd {
        RelationshipCommands::Add(args) => {
            let relation: RelationType = args.relation_type.parse()?;
            let store = ctx.store.as_ref();

            let mut source = EditSession::load(store, &args.source).await?;

            if args.mirror {
                let mut target = EditSession::load(store, &args.target).await?;
                let pair =
                    source.stage_relative_with_mirror(&mut target, relation, &ctx.relation_map)?;
                let outcome = source.save(store, &ctx.config).await?;
                let mirror_outcome = if pair.mirror.is_some() {
                    Some(target.save(store, &ctx.config).await?)
                } else {
                    None
                };

                if output_format == "json" {
                    print_json(&json!({
                        "forward": pair.forward,
                        "mirror": pair.mirror,
                    }));
                } else {
                    print_save_outcome(&outcome);
                    match mirror_outcome {
                        Some(mirror_outcome) => print_save_outcome(&mirror_outcome),
                        None => println!(
                            "{}",
                            format_warning(&format!(
                                "'{}' has no reciprocal relation; only '{}' was updated.",
                                relation.label(),
                                args.source
                            ))
                        ),
                    }
                }
            } else {
                let target = ctx
                    .store
                    .get_by_id(&args.target)
                    .await?
                    .ok_or_else(|| MemoriaError::NotFound(args.target.clone()))?;
                let edge = source.stage_relative(&Candidate::from(&target), relation)?;
                let outcome = source.save(store, &ctx.config).await?;

                if output_format == "json" {
                    print_json(&edge);
                } else {
                    print_save_outcome(&outcome);
                }
            }
        }

        RelationshipCommands::Remove(args) => {
            let mut session = EditSession::load(ctx.store.as_ref(), &args.source).await?;
            let removed = session.remove_relative(&args.target);
            if removed.is_some() {
                session.save(ctx.store.as_ref(), &ctx.config).await?;
            }

            if output_format == "json" {
                print_json(&json!({
                    "source": args.source,
                    "target": args.target,
                    "removed": removed.is_some(),
                }));
            } else if removed.is_some() {
                println!(
                    "{}",
                    format_success(&format!(
                        "Removed '{}' from the relatives of '{}'.",
                        args.target, args.source
                    ))
                );
            } else {
                println!(
                    "{}",
                    format_warning(&format!(
                        "'{}' is not a relative of '{}'.",
                        args.target, args.source
                    ))
                );
            }
        }

        RelationshipCommands::Inverse(args) => {
            let relation: RelationType = args.relation_type.parse()?;
            let inverse = ctx.relation_map.inverse(relation);
            let symmetric = ctx
                .relation_map
                .get(relation)
                .is_some_and(|def| def.symmetric);

            if output_format == "json" {
                print_json(&json!({
                    "relation": relation,
                    "inverse": inverse,
                    "symmetric": symmetric,
                }));
            } else {
                match inverse {
                    Some(_) if symmetric => println!(
                        "{} {}",
                        format_relation(relation),
                        format_info("is its own reciprocal.")
                    ),
                    Some(inverse) => println!(
                        "{} ↔ {}",
                        format_relation(relation),
                        format_relation(inverse)
                    ),
                    None => println!(
                        "{}",
                        format_info(&format!("'{}' has no reciprocal relation.", relation.label()))
                    ),
                }
            }
        }

        RelationshipCommands::Types => {
            let defs = ctx.relation_map.list();
            if output_format == "json" {
                print_json(&defs);
            } else {
                print_relation_types(&defs);
            }
        }
    }

    Ok(())
}
