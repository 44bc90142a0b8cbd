mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "memberphotos")]
#[command(about = "Resolve member photo captions and URLs to bioguide IDs")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve photo captions against a legislator roster
    Resolve(commands::resolve::ResolveArgs),
    /// Extract bioguide IDs from legacy detail-page URLs
    ExtractId(commands::extract_id::ExtractIdArgs),
    /// Remove members from a roster and print the remaining YAML
    Remove(commands::remove::RemoveArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("memberphotos=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    match &cli.command {
        Commands::Resolve(args) => commands::resolve::run(args, &format)?,
        Commands::ExtractId(args) => commands::extract_id::run(args, &format)?,
        Commands::Remove(args) => commands::remove::run(args)?,
    }

    Ok(())
}
