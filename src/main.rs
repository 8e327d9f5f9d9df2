// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use stocklist_lib::catalog::Catalog;
use stocklist_lib::filter::{visible_products, FilterState};
use stocklist_lib::view::{self, ProductRow, NO_RESULTS_MESSAGE};

#[derive(Debug, Parser)]
#[command(name = "stocklist", about = "Stocklist desktop application", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect the embedded catalog without starting the desktop shell.
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

#[derive(Debug, Subcommand)]
enum CatalogCommand {
    /// Print every product with its resolved category and owner.
    Dump {
        /// Emit raw JSON rows instead of the table view.
        #[arg(long)]
        json: bool,
    },
    /// Run one filter pass over the catalog and print the visible rows.
    Filter {
        /// Owner id to filter by; 0 selects all owners.
        #[arg(long, default_value_t = 0)]
        owner: i64,
        /// Case-insensitive substring to match against product names.
        #[arg(long, default_value = "")]
        query: String,
        /// Comma-separated category ids, or "all" for every category.
        /// An empty list hides every product.
        #[arg(long, default_value = "all")]
        categories: String,
        /// Emit raw JSON rows instead of the table view.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    stocklist_lib::init_logging();

    let cli = Cli::parse();
    if let Some(command) = cli.command {
        match handle_cli(command) {
            Ok(code) => process::exit(code),
            Err(err) => {
                eprintln!("Error: {err:#}");
                process::exit(1);
            }
        }
    }

    tracing::debug!(target: "stocklist", "app booted");
    stocklist_lib::run()
}

fn handle_cli(command: Commands) -> Result<i32> {
    match command {
        Commands::Catalog(catalog) => handle_catalog_command(catalog),
    }
}

fn handle_catalog_command(command: CatalogCommand) -> Result<i32> {
    let catalog = stocklist_lib::fixtures::catalog().context("load embedded catalog fixtures")?;
    match command {
        CatalogCommand::Dump { json } => {
            let rows = view::rows(&catalog.products);
            print_rows(&rows, json)?;
            Ok(0)
        }
        CatalogCommand::Filter {
            owner,
            query,
            categories,
            json,
        } => {
            let filter = filter_from_args(&catalog, owner, &query, &categories)?;
            let rows = view::rows(&visible_products(&catalog.products, &filter));
            print_rows(&rows, json)?;
            Ok(0)
        }
    }
}

fn filter_from_args(
    catalog: &Catalog,
    owner: i64,
    query: &str,
    categories: &str,
) -> Result<FilterState> {
    let state = FilterState::all_visible(catalog.category_ids())
        .set_owner(owner)
        .set_query(query);
    if categories.trim() == "all" {
        return Ok(state);
    }
    let ids = categories
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .with_context(|| format!("parse category id {part:?}"))
        })
        .collect::<Result<Vec<i64>>>()?;
    Ok(state.select_all(ids))
}

fn print_rows(rows: &[ProductRow], json: bool) -> Result<()> {
    if json {
        let serialized = serde_json::to_string_pretty(rows).context("serialize product rows")?;
        println!("{serialized}");
        return Ok(());
    }

    if rows.is_empty() {
        println!("{NO_RESULTS_MESSAGE}");
        return Ok(());
    }

    println!("{:<6} {:<20} {:<22} {}", "ID", "Product", "Category", "User");
    for row in rows {
        println!(
            "{:<6} {:<20} {:<22} {}",
            row.id,
            row.name,
            row.category_label.as_deref().unwrap_or("-"),
            row.owner_name.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
