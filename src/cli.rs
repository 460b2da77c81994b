use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use roofmap_core::prelude::*;

use crate::{catalogue::load_store, config::Config};

/// Maintenance tool for the roof installation catalogue.
#[derive(Debug, Parser)]
#[command(name = "roofmap", version, about)]
pub struct Cli {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the catalogue and count its records per category
    Check {
        /// Catalogue file (defaults to the configured one)
        file: Option<PathBuf>,
    },
    /// List the records of a category in catalogue order
    List {
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Show the details of a single record
    Show { id: String },
    /// Show the fixed anchor point
    Anchor,
    /// Show the effective map settings
    Settings,
}

pub fn run(cli: Cli) -> Result<()> {
    let Cli { config, command } = cli;
    let cfg = Config::try_load_from_file_or_default(config.as_deref())?;
    let mut out = io::stdout().lock();
    match command {
        Command::Check { file } => {
            let file = file.unwrap_or(cfg.catalogue.file);
            let store = load_store(&file)?;
            log::info!("Catalogue {} is valid", file.display());
            check(&store, &mut out)?;
        }
        Command::List { category } => {
            let store = load_store(&cfg.catalogue.file)?;
            list(&store, category.as_deref(), &mut out)?;
        }
        Command::Show { id } => {
            let store = load_store(&cfg.catalogue.file)?;
            let record = store
                .get(&id)
                .ok_or_else(|| anyhow!("Record {id:?} not found"))?;
            show(record, &mut out)?;
        }
        Command::Anchor => {
            anchor(&cfg.map.anchor, &mut out)?;
        }
        Command::Settings => {
            settings(&cfg.map, &mut out)?;
        }
    }
    Ok(())
}

fn check(store: &RecordStore, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} records", store.len())?;
    for (category, count) in store.count_by_category() {
        writeln!(out, "{:<10} {count}", category.name())?;
    }
    Ok(())
}

fn list(store: &RecordStore, category: Option<&str>, out: &mut impl Write) -> io::Result<()> {
    let mut state = SelectionState::new();
    state.set_category_name(category.unwrap_or_default());
    if let (Some(name), None) = (category, state.active_category()) {
        log::warn!("Unknown category {name:?}");
    }
    let records = store.filtered(state.active_category());
    if let Some(empty) = EmptyState::of(state.active_category(), records.len()) {
        return writeln!(out, "{}", empty.message());
    }
    writeln!(out, "{}", count_label(records.len()))?;
    for r in records {
        writeln!(out, "{}\t{}\t{}", r.id, r.name, r.address)?;
    }
    Ok(())
}

fn show(record: &LocationRecord, out: &mut impl Write) -> io::Result<()> {
    let RecordDetails {
        name,
        address,
        category,
        description,
        images,
        map_link,
    } = RecordDetails::from(record);
    writeln!(out, "{name}")?;
    writeln!(out, "{address}")?;
    writeln!(out, "{} {category}", labels::CATEGORY)?;
    if let Some(description) = description {
        writeln!(out, "{description}")?;
    }
    if let Some(images) = images {
        writeln!(out, "{}", images.join(" "))?;
    }
    writeln!(out, "{map_link}")
}

fn anchor(anchor: &AnchorPoint, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", anchor.name)?;
    writeln!(out, "{}", anchor.address)?;
    writeln!(out, "{}", anchor.external_map_link())
}

fn settings(map: &MapSettings, out: &mut impl Write) -> io::Result<()> {
    let MapSettings {
        center,
        zoom,
        popup_delay,
        tile_layer_url,
        attribution,
        anchor,
    } = map;
    writeln!(out, "center       {center}")?;
    writeln!(out, "zoom         {zoom}")?;
    writeln!(out, "popup-delay  {popup_delay:?}")?;
    writeln!(out, "tile-url     {tile_layer_url}")?;
    writeln!(out, "attribution  {attribution}")?;
    writeln!(out, "anchor       {} ({})", anchor.name, anchor.pos)
}
