use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seqpeek::{FixtureProvider, SeqpeekPipeline, ViewConfig, ViewContext, ViewRequest};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seqpeek", about = "Assemble protein mutation track bundles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the view context for a gene against a fixture document.
    View {
        /// Fixture document (`{"genes": {...}, "proteins": {...}}`).
        #[arg(long)]
        fixtures: PathBuf,
        /// Gene symbol (sanitized and upper-cased).
        #[arg(long)]
        gene: Option<String>,
        /// Tumor type; repeat for several.
        #[arg(long = "tumor")]
        tumor_types: Vec<String>,
        /// Aggregate all tumor types into one summary track.
        #[arg(long)]
        summary_only: bool,
        /// View configuration document.
        #[arg(long)]
        config: Option<PathBuf>,
        /// JSON array of gene symbols for autocomplete.
        #[arg(long)]
        gene_list: Option<PathBuf>,
        /// Print only the plot bundle instead of the whole context.
        #[arg(long)]
        bundle_only: bool,
        /// Indent the JSON output.
        #[arg(long)]
        pretty: bool,
        /// Print the BLAKE3 fingerprint of the bundle instead of JSON.
        #[arg(long)]
        fingerprint: bool,
    },
    /// List the permitted tumor types.
    TumorTypes {
        /// View configuration document.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::View {
            fixtures,
            gene,
            tumor_types,
            summary_only,
            config,
            gene_list,
            bundle_only,
            pretty,
            fingerprint,
        } => {
            let config = load_config(config.as_ref(), gene_list.as_ref())?;
            let request = ViewRequest {
                gene,
                tumor_types,
                summary_only,
            };
            let context = run_view(config, fixtures, &request)?;
            print_context(&context, bundle_only, pretty, fingerprint)?
        }
        Commands::TumorTypes { config } => {
            let config = load_config(config.as_ref(), None)?;
            for tumor_type in &config.tumor_types {
                println!("{}", tumor_type);
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>, gene_list: Option<&PathBuf>) -> Result<ViewConfig> {
    let config = match path {
        Some(path) => ViewConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => ViewConfig::default(),
    };
    Ok(match gene_list {
        Some(path) => config.with_gene_list_file(path),
        None => config,
    })
}

fn run_view(config: ViewConfig, fixtures: PathBuf, request: &ViewRequest) -> Result<ViewContext> {
    let provider = FixtureProvider::from_path(&fixtures)
        .with_context(|| format!("failed to read fixtures from {}", fixtures.display()))?;

    let context = SeqpeekPipeline::new(config)
        .context("invalid view configuration")?
        .run(&provider, request)
        .context("pipeline run failed")?;
    info!(outcome = ?context.outcome, "view assembled");
    Ok(context)
}

fn print_context(
    context: &ViewContext,
    bundle_only: bool,
    pretty: bool,
    fingerprint: bool,
) -> Result<()> {
    if fingerprint {
        match &context.data_bundle {
            Some(bundle) => println!("{}", bundle.fingerprint()?),
            None => println!("no bundle ({:?})", context.outcome),
        }
        return Ok(());
    }

    let json = match (bundle_only, pretty) {
        (true, true) => serde_json::to_string_pretty(&context.data_bundle)?,
        (true, false) => serde_json::to_string(&context.data_bundle)?,
        (false, true) => serde_json::to_string_pretty(context)?,
        (false, false) => serde_json::to_string(context)?,
    };
    println!("{}", json);
    Ok(())
}
