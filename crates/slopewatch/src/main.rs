//! `slopewatch` - CLI for environmental monitoring
//!
//! Drives the record store, history, checklist and risk-area views from the
//! command line.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use slopewatch::cli::{
    ActionsCommand, Cli, Command, ConfigCommand, HistoryCommand, RecordCommand, RisksCommand,
};
use slopewatch::mitigation::Checklist;
use slopewatch::risk::{RiskLevel, RiskMap};
use slopewatch::{
    init_logging, AirQualityBand, Config, DataEntryForm, FileStore, HistoryView, RecordStore,
    SortOrder, TemperatureBand,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Record(cmd) => handle_record(&open_store(&config), cmd).await,
        Command::History(cmd) => handle_history(&open_store(&config), &cmd).await,
        Command::Delete(cmd) => {
            if open_store(&config).remove(&cmd.id).await? {
                println!("Record {} deleted.", cmd.id);
            } else {
                println!("No record with id {}.", cmd.id);
            }
            Ok(())
        }
        Command::Clear(cmd) => {
            if !cmd.yes {
                println!("This will delete every stored reading and cannot be undone.");
                println!("Use --yes to confirm.");
                return Ok(());
            }
            open_store(&config).clear().await?;
            println!("History cleared.");
            Ok(())
        }
        Command::Stats(cmd) => handle_stats(&open_store(&config), cmd.json).await,
        Command::Actions(cmd) => handle_actions(&cmd),
        Command::Risks(cmd) => handle_risks(&cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_store(config: &Config) -> RecordStore {
    let backend = Arc::new(FileStore::new(config.data_dir()));
    RecordStore::with_settings(backend, config.storage.key.clone(), config.storage.retention)
}

async fn handle_record(store: &RecordStore, cmd: RecordCommand) -> anyhow::Result<()> {
    let mut form = DataEntryForm::with_inputs(
        cmd.temperature.unwrap_or_default(),
        cmd.humidity.unwrap_or_default(),
        cmd.pressure.unwrap_or_default(),
        cmd.air_quality.unwrap_or_default(),
    );

    let record = form.submit(store).await?;
    println!("Environmental data saved (id {}).", record.id);
    Ok(())
}

async fn handle_history(store: &RecordStore, cmd: &HistoryCommand) -> anyhow::Result<()> {
    let mut view = HistoryView::new();
    view.refresh(store).await?;
    if view.order() != SortOrder::from(cmd.order) {
        view.toggle_order();
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(view.records())?);
        return Ok(());
    }

    if view.records().is_empty() {
        println!("No readings recorded yet.");
        return Ok(());
    }

    println!(
        "{:<15} {:<17} {:>8} {:>9} {:>9} {:>5}  Status",
        "Id", "Recorded", "Temp °C", "Humid. %", "hPa", "AQI"
    );
    for record in view.records() {
        println!(
            "{:<15} {:<17} {:>8.1} {:>9.1} {:>9.1} {:>5.0}  {} / {}",
            record.id,
            record.recorded_at.format("%Y-%m-%d %H:%M"),
            record.temperature,
            record.humidity,
            record.pressure,
            record.air_quality_index,
            TemperatureBand::of(record.temperature),
            AirQualityBand::of(record.air_quality_index),
        );
    }
    Ok(())
}

async fn handle_stats(store: &RecordStore, json: bool) -> anyhow::Result<()> {
    let mut view = HistoryView::new();
    view.refresh(store).await?;
    let stats = view.statistics();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let Some(stats) = stats else {
        println!("No readings recorded yet.");
        return Ok(());
    };

    println!("Statistics over {} readings", stats.total_records);
    println!("----------------------------");
    println!("Temperature:   {:.1} °C", stats.temperature);
    println!("Humidity:      {:.1} %", stats.humidity);
    println!("Pressure:      {:.1} hPa", stats.pressure);
    println!("Air quality:   {:.0}", stats.air_quality_index);
    Ok(())
}

fn handle_actions(cmd: &ActionsCommand) -> anyhow::Result<()> {
    let mut checklist = Checklist::default();
    for id in &cmd.complete {
        if !checklist.complete(*id) {
            bail!("no mitigation action with id {id}");
        }
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&checklist)?);
        return Ok(());
    }

    println!(
        "Progress: {}/{} ({}%)",
        checklist.completed_count(),
        checklist.actions().len(),
        checklist.progress_percent()
    );
    println!();
    for action in checklist.actions() {
        println!(
            "[{}] {:>2}. {} ({}, {})",
            if action.completed { "x" } else { " " },
            action.id,
            action.title,
            action.priority,
            action.category
        );
        println!("       {}", action.description);
    }
    Ok(())
}

fn handle_risks(cmd: &RisksCommand) -> anyhow::Result<()> {
    let map = RiskMap::default();
    let areas = map.filter(cmd.level.map(RiskLevel::from));

    if cmd.json {
        let output = serde_json::json!({
            "summary": map.summary(),
            "areas": areas,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let summary = map.summary();
    println!("Monitored areas:    {}", summary.total);
    for level in RiskLevel::ALL {
        println!("  {:<16}  {}", level.to_string(), summary.count(level));
    }
    println!("People affected:    {}", summary.affected_population);
    println!();
    println!("Risk areas ({})", areas.len());
    for area in areas {
        println!(
            "{:>2}. {} [{}] {}% probability, {} people, assessed {}",
            area.id,
            area.name,
            area.level,
            area.probability,
            area.affected_population,
            area.last_assessment
        );
        println!("    Factors: {}", area.risk_factors.join(", "));
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data directory:  {}", config.data_dir().display());
                println!("  Key:             {}", config.storage.key);
                println!("  Retention:       {}", config.storage.retention);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
