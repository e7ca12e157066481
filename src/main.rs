use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::{Commands, ListFormat};
use config::Config;
use roster::domain::{FieldUpdate, Record};
use roster::shell::{Shell, render};
use roster::storage::{CsvStore, DirectoryStore};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roster")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("roster.log");

    // Log to a file so stdout stays clean for the menu
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    let data_file = cli.file.clone().unwrap_or_else(|| config.data_file.clone());
    info!("Using directory file: {}", data_file.display());

    if cli.is_verbose() {
        println!("{} {}", "Directory file:".yellow(), data_file.display());
    }

    let store = CsvStore::new(&data_file, config.locale);

    match &cli.command {
        None => run_shell(store, config),
        Some(Commands::List { format }) => handle_list_command(&store, *format, config),
        Some(Commands::Add {
            name,
            surname,
            address,
            phone,
            group_id,
        }) => handle_add_command(&store, Record::new(name, surname, address, *phone, *group_id)),
        Some(Commands::Update { index, field, value }) => handle_update_command(&store, *index, field, value),
        Some(Commands::UpdateByName { name, surname, set }) => {
            handle_update_by_name_command(&store, name, surname, set)
        }
    }
}

fn run_shell(store: CsvStore, config: &Config) -> Result<()> {
    info!("Launching interactive shell");
    let stdin = io::stdin();
    let mut shell = Shell::new(store, stdin.lock(), io::stdout())
        .with_locale(config.locale)
        .with_clear_screen(config.clear_screen);
    shell.run().context("Interactive shell failed")
}

fn handle_list_command(store: &CsvStore, format: ListFormat, config: &Config) -> Result<()> {
    info!("Listing records as {:?}", format);
    let records = store.list()?;
    match format {
        ListFormat::Table => render::table(&mut io::stdout(), &records, config.locale)?,
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(())
}

fn handle_add_command(store: &CsvStore, record: Record) -> Result<()> {
    store.create(&record)?;
    render::success(
        &mut io::stdout(),
        &format!("Record {} {} added", record.name, record.surname),
    )?;
    Ok(())
}

fn handle_update_command(store: &CsvStore, index: usize, field: &str, value: &str) -> Result<()> {
    let record = store.update_by_index(index, field, value)?;
    render::success(
        &mut io::stdout(),
        &format!("Record {} updated ({} {})", index, record.name, record.surname),
    )?;
    Ok(())
}

fn handle_update_by_name_command(store: &CsvStore, name: &str, surname: &str, updates: &[FieldUpdate]) -> Result<()> {
    let index = store.update_by_name_pair(name, surname, updates)?;
    render::success(&mut io::stdout(), &format!("Record {} updated", index))?;
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
