//! Integration tests for the Memoria CLI
//!
//! Handlers are driven directly against a JSON file store in a temporary
//! directory, then the store is inspected.

use clap::Parser;
use memoria::config::ConfigBuilder;
use memoria::prelude::*;
use memoria_cli::args::*;
use memoria_cli::handlers::*;
use memoria_cli::{Cli, Commands, MemoriaCliContext, RecordCommands, RelationshipCommands};
use tempfile::TempDir;

/// Helper to create an isolated test CLI context
async fn create_test_context() -> (MemoriaCliContext, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let config = ConfigBuilder::new()
        .with_data_dir(temp_dir.path())
        .with_storage_backend(StorageBackend::JsonFile)
        .build()
        .expect("Failed to build config");

    let ctx = MemoriaCliContext::with_config(config)
        .await
        .expect("Failed to open context");

    (ctx, temp_dir)
}

async fn add_record(ctx: &MemoriaCliContext, first: &str, last: &str, city: &str) {
    let args = AddRecordArgs {
        first_name: first.to_string(),
        last_name: last.to_string(),
        city: city.to_string(),
        region: None,
        birth_date: None,
        death_date: None,
        gender: None,
        message: None,
        birth_place: None,
        profession: None,
        education: None,
        cemetery: None,
        genealogy: None,
    };
    handle_record_command(RecordCommands::Add(args), ctx, "json")
        .await
        .expect("Failed to add record");
}

async fn add_relationship(ctx: &MemoriaCliContext, source: &str, target: &str, relation: &str, mirror: bool) -> memoria::Result<()> {
    let args = AddRelationshipArgs {
        source: source.to_string(),
        target: target.to_string(),
        relation_type: relation.to_string(),
        mirror,
    };
    handle_relationship_command(RelationshipCommands::Add(args), ctx, "json").await
}

#[tokio::test]
async fn test_record_add_assigns_sequential_ids() {
    let (ctx, _temp_dir) = create_test_context().await;

    add_record(&ctx, "Nikos", "Papadopoulos", "Athens").await;
    add_record(&ctx, "Eleni", "Papadopoulos", "Athens").await;
    add_record(&ctx, "Γιώργος", "Ιωαννίδης", "Βόλος").await;

    assert!(ctx.store.get_by_id("papadopoulosathensA1").await.unwrap().is_some());
    assert!(ctx.store.get_by_id("papadopoulosathensA2").await.unwrap().is_some());
    let greek = ctx.store.get_by_id("ioannidisbolosA1").await.unwrap().unwrap();
    assert_eq!(greek.first_name, "Γιώργος");
}

#[tokio::test]
async fn test_record_add_rejects_blank_city() {
    let (ctx, _temp_dir) = create_test_context().await;

    let args = AddRecordArgs {
        first_name: "Nikos".to_string(),
        last_name: "Papadopoulos".to_string(),
        city: "   ".to_string(),
        region: None,
        birth_date: None,
        death_date: None,
        gender: None,
        message: None,
        birth_place: None,
        profession: None,
        education: None,
        cemetery: None,
        genealogy: None,
    };
    let result = handle_record_command(RecordCommands::Add(args), &ctx, "json").await;

    assert!(matches!(result, Err(MemoriaError::Validation(_))));
}

#[tokio::test]
async fn test_record_get_missing_is_not_found() {
    let (ctx, _temp_dir) = create_test_context().await;

    let args = GetRecordArgs {
        id: "nobodynowhereA1".to_string(),
    };
    let result = handle_record_command(RecordCommands::Get(args), &ctx, "json").await;

    assert!(matches!(result, Err(MemoriaError::NotFound(id)) if id == "nobodynowhereA1"));
}

#[tokio::test]
async fn test_relationship_add_with_mirror() {
    let (ctx, _temp_dir) = create_test_context().await;
    add_record(&ctx, "Kostas", "Papadopoulos", "Athens").await;
    add_record(&ctx, "Nikos", "Papadopoulos", "Athens").await;

    add_relationship(&ctx, "papadopoulosathensA2", "papadopoulosathensA1", "father", true)
        .await
        .unwrap();

    let forward = ctx.store.edges_for("papadopoulosathensA2").await.unwrap();
    assert_eq!(forward.len(), 1);
    assert_eq!(forward[0].target_id, "papadopoulosathensA1");
    assert_eq!(forward[0].relation_type, RelationType::Father);

    let mirror = ctx.store.edges_for("papadopoulosathensA1").await.unwrap();
    assert_eq!(mirror.len(), 1);
    assert_eq!(mirror[0].target_id, "papadopoulosathensA2");
    assert_eq!(mirror[0].relation_type, RelationType::Child);
}

#[tokio::test]
async fn test_relationship_add_without_inverse_only_updates_source() {
    let (ctx, _temp_dir) = create_test_context().await;
    add_record(&ctx, "Maria", "Georgiou", "Patra").await;
    add_record(&ctx, "Anna", "Georgiou", "Patra").await;

    add_relationship(&ctx, "georgioupatraA1", "georgioupatraA2", "nephew_niece", true)
        .await
        .unwrap();

    assert_eq!(ctx.store.edges_for("georgioupatraA1").await.unwrap().len(), 1);
    assert!(ctx.store.edges_for("georgioupatraA2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_relationship_add_errors() {
    let (ctx, _temp_dir) = create_test_context().await;
    add_record(&ctx, "Maria", "Georgiou", "Patra").await;

    let unknown_type = add_relationship(&ctx, "georgioupatraA1", "georgioupatraA1", "landlord", false).await;
    assert!(matches!(unknown_type, Err(MemoriaError::Validation(_))));

    let missing_target = add_relationship(&ctx, "georgioupatraA1", "ghostA1", "father", false).await;
    assert!(matches!(missing_target, Err(MemoriaError::NotFound(_))));

    let self_link = add_relationship(&ctx, "georgioupatraA1", "georgioupatraA1", "father", false).await;
    assert!(matches!(self_link, Err(MemoriaError::Validation(_))));

    assert!(ctx.store.edges_for("georgioupatraA1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_relationship_remove() {
    let (ctx, _temp_dir) = create_test_context().await;
    add_record(&ctx, "Kostas", "Papadopoulos", "Athens").await;
    add_record(&ctx, "Nikos", "Papadopoulos", "Athens").await;
    add_relationship(&ctx, "papadopoulosathensA2", "papadopoulosathensA1", "father", false)
        .await
        .unwrap();

    let args = RemoveRelationshipArgs {
        source: "papadopoulosathensA2".to_string(),
        target: "papadopoulosathensA1".to_string(),
    };
    handle_relationship_command(RelationshipCommands::Remove(args), &ctx, "json")
        .await
        .unwrap();

    assert!(ctx.store.edges_for("papadopoulosathensA2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_record_delete_removes_edges_and_hides_relative() {
    let (ctx, _temp_dir) = create_test_context().await;
    add_record(&ctx, "Kostas", "Papadopoulos", "Athens").await;
    add_record(&ctx, "Nikos", "Papadopoulos", "Athens").await;
    add_relationship(&ctx, "papadopoulosathensA2", "papadopoulosathensA1", "father", true)
        .await
        .unwrap();

    let args = DeleteRecordArgs {
        id: "papadopoulosathensA1".to_string(),
    };
    handle_record_command(RecordCommands::Delete(args), &ctx, "json")
        .await
        .unwrap();

    assert!(ctx.store.get_by_id("papadopoulosathensA1").await.unwrap().is_none());
    assert!(ctx.store.edges_for("papadopoulosathensA1").await.unwrap().is_empty());

    let relatives = resolve_relatives(ctx.store.as_ref(), "papadopoulosathensA2")
        .await
        .unwrap();
    assert!(relatives.is_empty());

    let args = RelativesArgs {
        id: "papadopoulosathensA2".to_string(),
    };
    handle_record_command(RecordCommands::Relatives(args), &ctx, "table")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_search_and_inverse_commands_succeed() {
    let (ctx, _temp_dir) = create_test_context().await;
    add_record(&ctx, "Γιώργος", "Ιωαννίδης", "Βόλος").await;

    let args = SearchArgs {
        id: None,
        last_name: Some("ioann".to_string()),
        first_name: None,
        city: None,
        limit: None,
    };
    handle_search_command(args, &ctx, "table").await.unwrap();

    let blank = SearchArgs {
        id: None,
        last_name: Some("  ".to_string()),
        first_name: None,
        city: None,
        limit: None,
    };
    handle_search_command(blank, &ctx, "json").await.unwrap();

    let args = InverseArgs {
        relation_type: "Spouse".to_string(),
    };
    handle_relationship_command(RelationshipCommands::Inverse(args), &ctx, "table")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_record_add_with_page_details() {
    let (ctx, _temp_dir) = create_test_context().await;

    let args = AddRecordArgs {
        first_name: "Maria".to_string(),
        last_name: "Georgiou".to_string(),
        city: "Patra".to_string(),
        region: Some("Achaia".to_string()),
        birth_date: chrono::NaiveDate::from_ymd_opt(1931, 4, 2),
        death_date: chrono::NaiveDate::from_ymd_opt(2019, 4, 1),
        gender: Some(Gender::Female),
        message: Some("Forever in our hearts".to_string()),
        birth_place: Some("Aigio".to_string()),
        profession: Some("Teacher".to_string()),
        education: Some("  ".to_string()),
        cemetery: Some("St. Nicholas".to_string()),
        genealogy: None,
    };
    handle_record_command(RecordCommands::Add(args), &ctx, "json")
        .await
        .unwrap();

    let record = ctx.store.get_by_id("georgioupatraA1").await.unwrap().unwrap();
    assert_eq!(record.gender, Some(Gender::Female));
    assert_eq!(record.profession.as_deref(), Some("Teacher"));
    assert_eq!(record.cemetery.as_deref(), Some("St. Nicholas"));
    assert_eq!(record.education, None);
    assert_eq!(record.age_at_death(), Some(87));

    let args = GetRecordArgs {
        id: "georgioupatraA1".to_string(),
    };
    handle_record_command(RecordCommands::Get(args), &ctx, "table")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_record_candle_counts_up() {
    let (ctx, _temp_dir) = create_test_context().await;
    add_record(&ctx, "Nikos", "Papadopoulos", "Athens").await;

    for _ in 0..3 {
        let args = CandleArgs {
            id: "papadopoulosathensA1".to_string(),
        };
        handle_record_command(RecordCommands::Candle(args), &ctx, "json")
            .await
            .unwrap();
    }
    let record = ctx.store.get_by_id("papadopoulosathensA1").await.unwrap().unwrap();
    assert_eq!(record.candles, 3);

    let missing = CandleArgs {
        id: "ghostA1".to_string(),
    };
    let result = handle_record_command(RecordCommands::Candle(missing), &ctx, "json").await;
    assert!(matches!(result, Err(MemoriaError::NotFound(_))));
}

#[tokio::test]
async fn test_relation_types_listing() {
    let (ctx, _temp_dir) = create_test_context().await;

    handle_relationship_command(RelationshipCommands::Types, &ctx, "table")
        .await
        .unwrap();
    handle_relationship_command(RelationshipCommands::Types, &ctx, "json")
        .await
        .unwrap();

    let symmetric: Vec<_> = ctx
        .relation_map
        .list()
        .into_iter()
        .filter(|def| def.symmetric)
        .map(|def| def.relation)
        .collect();
    assert_eq!(
        symmetric,
        vec![RelationType::Sibling, RelationType::Spouse, RelationType::Cousin]
    );
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let (ctx, temp_dir) = create_test_context().await;
    add_record(&ctx, "Nikos", "Papadopoulos", "Athens").await;
    drop(ctx);

    let config = ConfigBuilder::new()
        .with_data_dir(temp_dir.path())
        .with_storage_backend(StorageBackend::JsonFile)
        .build()
        .unwrap();
    let reopened = MemoriaCliContext::with_config(config).await.unwrap();

    assert!(reopened.store.get_by_id("papadopoulosathensA1").await.unwrap().is_some());
}

#[test]
fn test_parse_record_add() {
    let cli = Cli::try_parse_from([
        "memoria-cli",
        "--output",
        "json",
        "record",
        "add",
        "Maria",
        "Georgiou",
        "Patra",
        "--birth-date",
        "1931-04-02",
    ])
    .unwrap();

    assert_eq!(cli.output, "json");
    match cli.command {
        Commands::Record(RecordCommands::Add(args)) => {
            assert_eq!(args.last_name, "Georgiou");
            assert_eq!(
                args.birth_date,
                chrono::NaiveDate::from_ymd_opt(1931, 4, 2)
            );
            assert!(args.death_date.is_none());
        }
        _ => panic!("expected record add"),
    }
}

#[test]
fn test_parse_relationship_add_mirror_and_aliases() {
    let cli = Cli::try_parse_from([
        "memoria-cli",
        "relationship",
        "add",
        "a1",
        "b1",
        "spouse",
        "--mirror",
    ])
    .unwrap();
    match cli.command {
        Commands::Relationship(RelationshipCommands::Add(args)) => {
            assert!(args.mirror);
            assert_eq!(args.relation_type, "spouse");
        }
        _ => panic!("expected relationship add"),
    }

    let cli = Cli::try_parse_from(["memoria-cli", "record", "rm", "a1"]).unwrap();
    assert!(matches!(cli.command, Commands::Record(RecordCommands::Delete(_))));
}

#[test]
fn test_parse_record_details_and_candle() {
    let cli = Cli::try_parse_from([
        "memoria-cli",
        "record",
        "add",
        "Maria",
        "Georgiou",
        "Patra",
        "--gender",
        "female",
        "--birth-place",
        "Aigio",
        "--cemetery",
        "St. Nicholas",
    ])
    .unwrap();
    match cli.command {
        Commands::Record(RecordCommands::Add(args)) => {
            assert_eq!(args.gender, Some(Gender::Female));
            assert_eq!(args.birth_place.as_deref(), Some("Aigio"));
            assert_eq!(args.cemetery.as_deref(), Some("St. Nicholas"));
        }
        _ => panic!("expected record add"),
    }

    let bad_gender = Cli::try_parse_from([
        "memoria-cli", "record", "add", "Maria", "Georgiou", "Patra", "--gender", "unknown",
    ]);
    assert!(bad_gender.is_err());

    let cli = Cli::try_parse_from(["memoria-cli", "record", "candle", "georgioupatraA1"]).unwrap();
    assert!(matches!(cli.command, Commands::Record(RecordCommands::Candle(_))));
}

#[test]
fn test_parse_rejects_bad_date() {
    let result = Cli::try_parse_from([
        "memoria-cli",
        "record",
        "add",
        "Maria",
        "Georgiou",
        "Patra",
        "--birth-date",
        "02/04/1931",
    ]);
    assert!(result.is_err());
}
