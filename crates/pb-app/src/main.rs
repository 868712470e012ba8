use anyhow::Result;
use clap::Parser;
use pb_core::config::{Polarity, TranscodeConfig};

pub mod cli;
pub mod output;
pub mod picker;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider la source
    cli.validate_source()?;

    // 4. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4b. Appliquer les overrides CLI
    if let Some(ref name) = cli.polarity {
        match Polarity::from_name(name) {
            Some(p) => config.polarity = p,
            None => log::warn!("Polarité inconnue '{name}', utilisation du défaut."),
        }
    }
    let size_text = cli
        .size
        .clone()
        .unwrap_or_else(|| config.size.to_string());

    // 5. Résoudre l'image (--image ou sélecteur)
    let image_path = pipeline::resolve_image_path(&cli)?;

    // 6. Transcoder puis émettre
    let mut sink = output::sink_for(cli.output.as_deref());
    pipeline::run(image_path.as_deref(), &size_text, &config, sink.as_mut())
}

/// Config file if present, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<TranscodeConfig> {
    if cli.config.exists() {
        pb_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(TranscodeConfig::default())
    }
}
