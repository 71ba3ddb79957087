use clap::Parser;
use memoria_cli::handlers::*;
use memoria_cli::{Cli, Commands, MemoriaCliContext, output_error};
use tracing::{Level, debug};

#[tokio::main]
async fn main() {
    let cli_args = Cli::parse();

    let output_format = std::env::var("MEMORIA_CLI_OUTPUT").unwrap_or_else(|_| cli_args.output.clone());

    let is_quiet = cli_args.quiet
        || std::env::var("MEMORIA_CLI_QUIET")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

    let log_level = if is_quiet {
        Level::ERROR
    } else if cli_args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    // stderr keeps json output on stdout parseable
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli_args, &output_format).await {
        output_error(&e.to_string(), &output_format);
        std::process::exit(1);
    }
}

async fn run(cli_args: Cli, output_format: &str) -> memoria::Result<()> {
    match cli_args.command {
        Commands::Version => {
            println!("Memoria CLI v{}", memoria::VERSION);
        }

        Commands::Slug(args) => {
            handle_slug_command(args, output_format).await?;
        }

        command => {
            let ctx = MemoriaCliContext::new(cli_args.data_dir).await?;
            debug!(
                records = %ctx.config.storage.records_path().display(),
                backend = %ctx.config.storage.backend,
                "Opened record store"
            );

            match command {
                Commands::Record(cmd) => handle_record_command(cmd, &ctx, output_format).await?,
                Commands::Search(args) => handle_search_command(args, &ctx, output_format).await?,
                Commands::Relationship(cmd) => {
                    handle_relationship_command(cmd, &ctx, output_format).await?
                }
                Commands::Version | Commands::Slug(_) => {}
            }
        }
    }

    Ok(())
}
