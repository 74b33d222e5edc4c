#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the resource directory tools.

use std::path::PathBuf;

use casa_resources_cli::{edit_coverage, interactive, report, summary};
use casa_resources_geography::GeographyCatalog;
use casa_resources_store::{JsonFileStore, list_resources};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "casa_resources", about = "Community resource directory tools")]
struct Cli {
    /// Directory holding the collection JSON files (overrides `CASA_DATA_DIR`)
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List regions and counties in the geography catalog
    Regions,
    /// Show which cities carry a ZIP code
    Zip {
        /// Five-digit ZIP code
        code: String,
    },
    /// List resources with their ids
    Resources,
    /// Show where a resource provides service
    Summary {
        /// Resource id
        resource_id: String,
    },
    /// Interactively edit the cities, counties, and regions a resource serves
    EditCoverage {
        /// Resource id
        resource_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    casa_resources_cli_utils::init_logger();
    let cli = Cli::parse();

    let store = cli
        .data_dir
        .map_or_else(JsonFileStore::from_env, JsonFileStore::new);
    log::debug!("Using data directory {}", store.data_dir().display());
    let catalog = GeographyCatalog::massachusetts();

    let Some(command) = cli.command else {
        return interactive::run(&store, catalog).await;
    };

    match command {
        Commands::Regions => print!("{}", report::render_regions(catalog)),
        Commands::Zip { code } => print!("{}", report::render_zip_lookup(catalog, code.trim())),
        Commands::Resources => {
            let resources = list_resources(&store).await?;
            println!("{:<38} NAME", "ID");
            println!("{}", "-".repeat(60));
            for resource in &resources {
                println!("{:<38} {}", resource.id, resource.name);
            }
        }
        Commands::Summary { resource_id } => {
            print!("{}", summary(&store, catalog, &resource_id).await?);
        }
        Commands::EditCoverage { resource_id } => {
            if edit_coverage(&store, catalog, &resource_id).await? {
                log::info!("Coverage saved.");
            }
        }
    }

    Ok(())
}
