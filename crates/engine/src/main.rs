//! HVA - Loads, imports and reports on an animal hotel.
//!
//! Usage: `hva [IMPORT_FILE [SAVE_FILE]]`. Arguments override the
//! `HVA_IMPORT_FILE` and `HVA_SAVE_FILE` settings.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hva_engine::config::{load_dotenv_from_repo_root, DEFAULT_LOG_FILTER};
use hva_engine::{EngineConfig, HotelManager};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root.
    load_dotenv_from_repo_root();
    let config = EngineConfig::from_env().with_args(std::env::args().skip(1));

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting HVA");

    let mut manager = HotelManager::new();

    if let Some(save_file) = &config.save_file {
        if save_file.exists() {
            manager
                .load(save_file)
                .with_context(|| format!("loading {}", save_file.display()))?;
        } else {
            manager.set_filename(save_file);
        }
    }

    if let Some(import_file) = &config.import_file {
        let report = manager.import_file(import_file)?;
        for failure in &report.failures {
            eprintln!("line {}: {}", failure.line, failure.error);
        }
    }

    print_hotel(&manager)?;

    if manager.changed() && manager.filename().is_some() {
        manager.save().context("saving hotel")?;
    }

    Ok(())
}

fn print_hotel(manager: &HotelManager) -> anyhow::Result<()> {
    let hotel = manager.hotel();
    for habitat in hotel.habitat_views() {
        println!("{}", habitat);
    }
    for animal in hotel.animals() {
        println!("{}", animal);
    }
    for employee in hotel.employees() {
        println!("{}", employee);
    }
    for vaccine in hotel.vaccines() {
        println!("{}", vaccine);
    }
    for vaccination in hotel.vaccinations() {
        println!("{}", vaccination);
    }
    println!("{}", manager.global_satisfaction()?);
    Ok(())
}
