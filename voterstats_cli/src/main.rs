mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use voterstats_lib::types::ApiError;
use voterstats_lib::{FallbackSnapshot, ServiceConfig, VoterStatsService};

use crate::commands::Context;
use crate::output::{print_json, OutputFormat};

#[derive(Parser)]
#[command(name = "voterstats")]
#[command(about = "Florida voter registration and national party identification data")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Skip the network and serve the bundled fallback snapshot
    #[arg(long, global = true)]
    offline: bool,

    /// Always fetch source pages, bypassing the body cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Statewide totals and top counties
    Florida(commands::florida::FloridaArgs),
    /// Rank and filter Florida counties
    Counties(commands::counties::CountiesArgs),
    /// Statewide party composition
    Composition(commands::composition::CompositionArgs),
    /// National party identification by gender or age
    National(commands::national::NationalArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("voterstats=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "md" | "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut config = ServiceConfig::from_env();
    if cli.no_cache {
        config.cache_ttl = None;
    }
    if let Commands::Florida(args) = &cli.command {
        config.check_consistency |= args.check_consistency;
    }
    let service = VoterStatsService::new(config, FallbackSnapshot::bundled())?;
    let ctx = Context {
        service: &service,
        offline: cli.offline,
        format: &format,
    };

    let result = match &cli.command {
        Commands::Florida(args) => commands::florida::run(args, &ctx).await,
        Commands::Counties(args) => commands::counties::run(args, &ctx).await,
        Commands::Composition(args) => commands::composition::run(args, &ctx).await,
        Commands::National(args) => commands::national::run(args, &ctx).await,
    };

    if let (Err(e), OutputFormat::Json) = (&result, &format) {
        print_json(&ApiError::new("request_failed", e.to_string()));
    }
    result
}
