use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pb_braille::Transcoder;
use pb_core::config::TranscodeConfig;
use pb_core::frame::{Bitmap, TranscodedText};
use pb_core::traits::{Sink, Source};
use pb_source::image::ImageSource;
use pb_source::resize::Resizer;

use crate::cli::Cli;

/// Chemin de l'image : --image, ou --pick via le sélecteur.
///
/// # Errors
/// Returns an error if `--pick` is used without the `picker` feature.
pub fn resolve_image_path(cli: &Cli) -> Result<Option<PathBuf>> {
    if let Some(ref path) = cli.image {
        return Ok(Some(path.clone()));
    }
    if cli.pick {
        return crate::picker::pick_image();
    }
    Ok(None)
}

/// Décode l'image choisie. Les échecs sont journalisés puis propagés.
///
/// # Errors
/// Returns the decode error, with the path in its context.
pub fn load_source(path: Option<&Path>) -> Result<Option<ImageSource>> {
    let Some(path) = path else {
        return Ok(None);
    };
    match ImageSource::new(path) {
        Ok(source) => {
            let (w, h) = source.native_size();
            log::info!("Source : {} ({w}×{h})", path.display());
            Ok(Some(source))
        }
        Err(e) => {
            log::error!("Image rejetée : {e:#}");
            Err(e)
        }
    }
}

/// Rescale → binarize → encode with the resolved config.
///
/// # Errors
/// Returns `NoImageLoaded`, `InvalidSize`, or a rescale failure.
pub fn transcode(
    bitmap: Option<&Bitmap>,
    size_text: &str,
    config: &TranscodeConfig,
) -> Result<TranscodedText> {
    let mut transcoder = Transcoder::new(Resizer::new(config.resize_filter), config.polarity);
    let text = transcoder
        .transcode_request(bitmap, size_text)
        .context("Transcodage impossible")?;
    log::info!(
        "Transcodé : {} lignes × {} cellules",
        text.row_count(),
        text.column_count()
    );
    Ok(text)
}

/// Pipeline complet : source → texte → sink.
///
/// # Errors
/// Fails fast on the first error; nothing is emitted in that case.
pub fn run(
    image_path: Option<&Path>,
    size_text: &str,
    config: &TranscodeConfig,
    sink: &mut dyn Sink,
) -> Result<()> {
    let source = load_source(image_path)?;
    let bitmap = source.as_ref().map(|s| s.bitmap());
    let text = transcode(bitmap.as_deref(), size_text, config)?;
    sink.emit(&text)
}
