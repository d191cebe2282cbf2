use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use log::info;
use portmanteau_core::config::Config;
use portmanteau_core::persistence::save_pairs;
use portmanteau_core::PortmanteauEngine;

fn main() -> Result<()> {
    let config = Config::parse();

    let mut logger_builder = env_logger::Builder::from_default_env();
    logger_builder.filter_level(config.log_level);
    logger_builder.init();
    info!("Configuration: {:?}", config);

    let sounds = config.sounds().context("Failed to load sound configuration")?;
    let engine = PortmanteauEngine::from_files(
        &sounds,
        config.frequency_filter(),
        &config.dictionary,
        &config.frequency_list,
    )
    .context("Failed to build the pronunciation index")?;

    let pairs = engine.find_pairs().context("Portmanteau search failed")?;
    save_pairs(&pairs, config.format, &config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    eprintln!(
        "{} {} candidate pairs from {} pronunciations -> {}",
        "done:".green().bold(),
        pairs.len(),
        engine.index.len(),
        config.output.display().to_string().cyan()
    );
    Ok(())
}
