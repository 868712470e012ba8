use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Configuration du transcodage, chargée depuis TOML.
///
/// Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use pb_core::config::{Polarity, TranscodeConfig};
/// let config = TranscodeConfig::default();
/// assert_eq!(config.size, 40);
/// assert_eq!(config.polarity, Polarity::Negative);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TranscodeConfig {
    /// Cellules le long de l'axe dominant, quand la CLI n'en fournit pas.
    pub size: u32,
    /// Quelle classe de pixels lève un point.
    pub polarity: Polarity,
    /// Filtre de rééchantillonnage du Rescaler.
    pub resize_filter: ResizeFilter,
}

impl Default for TranscodeConfig {
    fn default() -> Self {
        Self {
            size: 40,
            polarity: Polarity::Negative,
            resize_filter: ResizeFilter::CatmullRom,
        }
    }
}

/// Pixel class that raises a Braille dot.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum Polarity {
    /// Background (white) pixels raise dots: a photo-negative silhouette.
    #[default]
    Negative,
    /// Ink (black) pixels raise dots.
    Positive,
}

impl Polarity {
    /// Parse a CLI token (`negative` / `positive`, case-insensitive).
    ///
    /// # Example
    /// ```
    /// use pb_core::config::Polarity;
    /// assert_eq!(Polarity::from_name("Positive"), Some(Polarity::Positive));
    /// assert_eq!(Polarity::from_name("sepia"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "negative" => Some(Self::Negative),
            "positive" => Some(Self::Positive),
            _ => None,
        }
    }

    /// True when a pixel of this class raises its dot.
    #[inline(always)]
    #[must_use]
    pub fn raises(self, background: bool) -> bool {
        match self {
            Self::Negative => background,
            Self::Positive => !background,
        }
    }
}

/// Convolution filter used when rescaling.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum ResizeFilter {
    /// Bilinear.
    Bilinear,
    /// Bicubic (Catmull-Rom).
    #[default]
    CatmullRom,
    /// Mitchell–Netravali cubic.
    Mitchell,
    /// Lanczos, 3 lobes.
    Lanczos3,
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    transcode: Option<TranscodeSection>,
}

/// Transcode section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct TranscodeSection {
    size: Option<u32>,
    polarity: Option<Polarity>,
    resize_filter: Option<ResizeFilter>,
}

/// Parse du TOML et fusion avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the text is not valid TOML or sets `size = 0`.
///
/// # Example
/// ```
/// use pb_core::config::{parse_config, Polarity};
/// let config = parse_config("[transcode]\npolarity = \"Positive\"\n").unwrap();
/// assert_eq!(config.polarity, Polarity::Positive);
/// assert_eq!(config.size, 40);
/// ```
pub fn parse_config(content: &str) -> Result<TranscodeConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = TranscodeConfig::default();
    if let Some(t) = file.transcode {
        if let Some(v) = t.size {
            if v == 0 {
                return Err(CoreError::Config("size doit être > 0".into()).into());
            }
            config.size = v;
        }
        if let Some(v) = t.polarity {
            config.polarity = v;
        }
        if let Some(v) = t.resize_filter {
            config.resize_filter = v;
        }
    }
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use pb_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<TranscodeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Config rejetée : {}", path.display()))?;
    log::debug!("Config chargée depuis {} : {config:?}", path.display());
    Ok(config)
}
