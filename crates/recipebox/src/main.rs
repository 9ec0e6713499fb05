//! `recipebox` - CLI for the recipe organizer
//!
//! This binary renders the recipe store and turns commands into store calls.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use recipebox::cli::{
    is_confirmed, render, AddCommand, Cli, Command, ConfigCommand, EditCommand, OutputFormat,
    RecentCommand, RemoveCommand, ShowCommand,
};
use recipebox::{init_logging, Config, Error, Recipe, RecipeStore};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e.downcast_ref::<Error>().map_or(1, Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Config subcommands load the file themselves so a broken file can be inspected
    match cli.command {
        Command::Config(cmd) => handle_config(cli.config, cmd),
        command => dispatch(&Config::load_from(cli.config)?, command),
    }
}

fn dispatch(config: &Config, command: Command) -> Result<()> {
    match command {
        Command::List(cmd) => {
            let store = open_store(config)?;
            print_recipes(&cmd.listing().apply(store.recipes()), cmd.format)
        }
        Command::Search(cmd) => {
            let store = open_store(config)?;
            print_recipes(&cmd.listing().apply(store.recipes()), cmd.format)
        }
        Command::Show(cmd) => handle_show(config, &cmd),
        Command::Add(cmd) => handle_add(config, cmd),
        Command::Edit(cmd) => handle_edit(config, &cmd),
        Command::Remove(cmd) => handle_remove(config, &cmd),
        Command::Recent(cmd) => handle_recent(config, &cmd),
        Command::Categories => handle_categories(config),
        Command::Status(cmd) => handle_status(config, cmd.json),
        Command::Config(cmd) => handle_config(None, cmd),
    }
}

fn open_store(config: &Config) -> Result<RecipeStore> {
    RecipeStore::open(
        config.recipe_path(),
        config.recent_path(),
        config.storage.recent_capacity,
    )
    .context("failed to open recipe store")
}

fn print_recipes(rows: &[&Recipe], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render::recipe_table(rows)),
        OutputFormat::Plain => {
            if !rows.is_empty() {
                println!("{}", render::recipe_lines(rows));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
    }
    Ok(())
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> Result<()> {
    let mut store = open_store(config)?;
    let recipe = store
        .view(&cmd.name)?
        .ok_or_else(|| Error::not_found(&cmd.name))?;

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(recipe)?),
        OutputFormat::Plain | OutputFormat::Table => {
            println!("{}", render::recipe_details(recipe));
        }
    }
    Ok(())
}

fn handle_add(config: &Config, cmd: AddCommand) -> Result<()> {
    config.check_category(&cmd.category)?;

    let mut store = open_store(config)?;
    let recipe = Recipe::new(cmd.name, cmd.category, cmd.ingredients, cmd.instructions);
    let name = recipe.name.clone();
    store.add(recipe)?;

    println!("Added recipe '{name}'.");
    Ok(())
}

fn handle_edit(config: &Config, cmd: &EditCommand) -> Result<()> {
    if let Some(category) = &cmd.category {
        config.check_category(category)?;
    }

    let mut store = open_store(config)?;
    let current = store
        .get(&cmd.name)
        .ok_or_else(|| Error::not_found(&cmd.name))?;
    let recipe = cmd.apply(current);
    let new_name = recipe.name.clone();
    store.update(&cmd.name, recipe)?;

    if cmd.renames() {
        println!("Updated recipe '{}' (now '{new_name}').", cmd.name);
    } else {
        println!("Updated recipe '{new_name}'.");
    }
    Ok(())
}

fn handle_remove(config: &Config, cmd: &RemoveCommand) -> Result<()> {
    let mut store = open_store(config)?;
    if !store.contains(&cmd.name) {
        return Err(Error::not_found(&cmd.name).into());
    }

    if !cmd.yes {
        print!("{}", cmd.prompt());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !is_confirmed(&input) {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.remove(&cmd.name)?;
    println!("Removed recipe '{}'.", cmd.name);
    Ok(())
}

fn handle_recent(config: &Config, cmd: &RecentCommand) -> Result<()> {
    let mut store = open_store(config)?;
    if cmd.clear {
        store.clear_recent()?;
        println!("Cleared recently viewed recipes.");
        return Ok(());
    }

    match cmd.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&store.recent().to_vec())?
            );
        }
        OutputFormat::Plain | OutputFormat::Table => {
            println!("{}", render::recent_list(store.recent().iter()));
        }
    }
    Ok(())
}

fn handle_categories(config: &Config) -> Result<()> {
    let store = open_store(config)?;
    for category in store.categories_with(&config.catalog.categories) {
        println!("{category}");
    }
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> Result<()> {
    let store = open_store(config)?;
    let stats = store.stats();

    if json {
        let status = serde_json::json!({
            "recipe_path": store.recipe_path(),
            "recent_path": store.recent_path(),
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!(
            "{}",
            render::status(
                &store.recipe_path().display().to_string(),
                &store.recent_path().display().to_string(),
                &stats,
            )
        );
    }
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Recipe table:       {}", config.recipe_path().display());
                println!("  Recent table:       {}", config.recent_path().display());
                println!("  Recent capacity:    {}", config.storage.recent_capacity);
                println!();
                println!("[Catalog]");
                println!(
                    "  Categories:         {}",
                    config.catalog.categories.join(", ")
                );
                println!(
                    "  Custom categories:  {}",
                    config.catalog.allow_custom_categories
                );
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path)).context("configuration is invalid")?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
