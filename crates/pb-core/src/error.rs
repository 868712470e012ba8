use thiserror::Error;

use crate::pattern::DotPattern;

/// Errors originating from the transcoding core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Size field is missing, non-numeric, zero, or negative.
    #[error("Taille invalide : {input:?} (entier positif attendu)")]
    InvalidSize {
        /// Raw text supplied by the caller.
        input: String,
    },

    /// A transcode was requested before any image was loaded.
    #[error("Aucune image chargée")]
    NoImageLoaded,

    /// The image file could not be decoded.
    #[error("Impossible de décoder {path} : {reason}")]
    ImageDecode {
        /// Path of the rejected file.
        path: String,
        /// Decoder message.
        reason: String,
    },

    /// A computed dot pattern has no glyph in the Braille table.
    ///
    /// Never produced by a well-formed table; indicates a programming error.
    #[error("Motif {0} absent de la table Braille")]
    InternalTableGap(DotPattern),

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u64,
        /// Height value.
        height: u64,
    },

    /// The resampling backend rejected the operation.
    #[error("Échec du redimensionnement : {0}")]
    Resize(String),

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
