use std::path::PathBuf;

use clap::Parser;

/// pixbraille — convertit une image en texte Braille Unicode.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source : chemin vers une image (PNG, JPEG, BMP, GIF).
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Choisir l'image via un sélecteur de fichiers natif. Requiert --features picker.
    #[arg(long, default_value_t = false)]
    pub pick: bool,

    /// Taille : nombre de cellules le long de l'axe dominant (entier > 0).
    ///
    /// Kept as raw text; validation happens in the transcoder.
    #[arg(short, long, allow_hyphen_values = true)]
    pub size: Option<String>,

    /// Polarité : "negative" (le fond lève les points) ou "positive".
    #[arg(long)]
    pub polarity: Option<String>,

    /// Fichier de sortie. Défaut : stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that at most one image source is provided.
    ///
    /// Having none is not an error here; the transcoder reports
    /// `NoImageLoaded`.
    ///
    /// # Errors
    /// Returns an error if both `--image` and `--pick` are given.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        if self.image.is_some() && self.pick {
            anyhow::bail!("Une seule source à la fois. Spécifiez --image OU --pick.");
        }
        Ok(())
    }
}
