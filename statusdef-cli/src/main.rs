//! Status definition authoring tool.
//!
//! Edits the category and item definition registries persisted in a SQLite
//! database and prints the format strings derived from them.
//!
//! Usage:
//!   statusdef --db defs.db import definitions.json
//!   statusdef --db defs.db items --category CV
//!   statusdef --db defs.db preview --category CV --key HP --part current --part max

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use statusdef_cli::{ImportBundle, PromptConfirm, import_bundle, render_categories, render_items};
use statusdef_model::{EntryType, ItemDefinitionPart, PartDataType};
use statusdef_store::{AutoConfirm, ConfirmDelete, DefinitionStore, SqliteStore, StoreConfig};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "statusdef")]
#[command(about = "Author status categories and item definitions")]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "statusdef.toml")]
    config: PathBuf,

    /// SQLite database, overriding the config
    #[arg(long)]
    db: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List categories sorted by order
    Categories,
    /// List item definitions with their formats
    Items {
        /// Only items filed under this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Upsert categories and items from a JSON file
    Import { file: PathBuf },
    /// Print the stored format of an item
    Format { key: String },
    /// Re-derive every stored format
    Refresh,
    /// Build an item draft and print its format
    Preview {
        #[arg(long)]
        category: String,
        #[arg(long)]
        key: String,
        #[arg(long, default_value = "")]
        name: String,
        /// Part keys, in order
        #[arg(long = "part")]
        parts: Vec<String>,
        /// Make the item a list
        #[arg(long)]
        list: bool,
        #[arg(long)]
        separator: Option<String>,
        #[arg(long)]
        secondary_separator: Option<String>,
        /// Commit the draft after previewing
        #[arg(long)]
        save: bool,
    },
    /// Delete a category; its items keep their category key
    DeleteCategory {
        key: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete an item definition
    DeleteItem {
        key: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let mut config = StoreConfig::load_from(&args.config);
    if let Some(db) = args.db {
        config.database_path = Some(db);
    }
    debug!(?config, "Resolved configuration");

    let backend = config.open_store().context("Failed to open definition database")?;
    let mut store = DefinitionStore::open(backend).context("Failed to load definitions")?;

    run(args.command, &config, &mut store)
}

fn run(command: Command, config: &StoreConfig, store: &mut DefinitionStore<SqliteStore>) -> Result<()> {
    match command {
        Command::Categories => println!("{}", render_categories(store.catalog())),
        Command::Items { category } => {
            if !store.select_category(category.as_deref()) {
                bail!("Unknown category: {}", category.unwrap_or_default());
            }
            println!("{}", render_items(store.catalog()));
        }
        Command::Import { file } => {
            let contents = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let bundle: ImportBundle = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", file.display()))?;
            let report = import_bundle(store, bundle)?;
            info!(
                categories = report.categories_saved,
                items = report.items_saved,
                rejected = report.rejected.len(),
                "Import finished"
            );
            for rejected in &report.rejected {
                println!("rejected {rejected}");
            }
        }
        Command::Format { key } => match store.catalog().items().get(&key) {
            Some(item) => println!("{}", item.format),
            None => bail!("Unknown item: {key}"),
        },
        Command::Refresh => {
            let changed = store.refresh_formats()?;
            println!("{changed} format(s) updated");
        }
        Command::Preview {
            category,
            key,
            name,
            parts,
            list,
            separator,
            secondary_separator,
            save,
        } => {
            let mut session = config.session();
            let editor = session.open_new_item(&category);
            let draft = editor.draft_mut();
            draft.key = key;
            draft.name = name;
            if list {
                draft.entry_type = EntryType::List;
            }
            if let Some(separator) = separator {
                draft.separator = separator;
            }
            draft.secondary_separator = secondary_separator;
            draft.parts = parts
                .into_iter()
                .map(|part| ItemDefinitionPart::new(part.clone(), part, PartDataType::String))
                .collect();

            println!("{}", editor.preview(store.catalog().categories()));
            if save && !store.commit_item_draft(&mut session)? {
                bail!("Item not saved: key and name must be non-empty");
            }
        }
        Command::DeleteCategory { key, yes } => {
            let removed = store.delete_category_confirmed(&key, &*confirmer(config, yes))?;
            report_delete("category", &key, removed.is_some());
        }
        Command::DeleteItem { key, yes } => {
            let removed = store.delete_item_confirmed(&key, &*confirmer(config, yes))?;
            report_delete("item", &key, removed.is_some());
        }
    }
    Ok(())
}

fn confirmer(config: &StoreConfig, yes: bool) -> Box<dyn ConfirmDelete> {
    if yes || !config.confirm_deletes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(PromptConfirm::new(io::stdin().lock(), io::stdout()))
    }
}

fn report_delete(kind: &str, key: &str, removed: bool) {
    if removed {
        println!("Deleted {kind} '{key}'");
    } else {
        println!("Nothing deleted");
    }
}
