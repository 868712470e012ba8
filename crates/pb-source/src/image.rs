use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use pb_core::error::CoreError;
use pb_core::frame::Bitmap;
use pb_core::traits::Source;

/// Extensions proposées par le sélecteur de fichiers.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpeg", "jpg", "gif", "bmp"];

/// Source d'image statique, décodée une seule fois.
///
/// # Example
/// ```no_run
/// use pb_source::image::ImageSource;
/// use std::path::Path;
/// let source = ImageSource::new(Path::new("test.png")).unwrap();
/// ```
pub struct ImageSource {
    bitmap: Arc<Bitmap>,
}

impl ImageSource {
    /// Load an image from disk and create a source.
    ///
    /// # Errors
    /// Returns an error (wrapping `CoreError::ImageDecode`) if the file
    /// cannot be read or decoded.
    pub fn new(path: &Path) -> Result<Self> {
        Ok(Self {
            bitmap: Arc::new(load_image(path)?),
        })
    }
}

impl Source for ImageSource {
    fn bitmap(&self) -> Arc<Bitmap> {
        Arc::clone(&self.bitmap)
    }

    fn native_size(&self) -> (u32, u32) {
        (self.bitmap.width(), self.bitmap.height())
    }
}

/// Décode un fichier PNG/JPEG/GIF/BMP en bitmap RGB.
///
/// Alpha is composited over black, so transparent areas read as ink. GIF
/// animations yield their first frame.
///
/// # Errors
/// Returns an error if the image cannot be loaded.
///
/// # Example
/// ```no_run
/// use pb_source::image::load_image;
/// use std::path::Path;
/// let bitmap = load_image(Path::new("test.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<Bitmap> {
    let img = image::open(path).map_err(|e| CoreError::ImageDecode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::info!("Image chargée : {} ({width}×{height})", path.display());
    Bitmap::from_raw(width, height, over_black(rgba.as_raw()))
        .with_context(|| format!("Impossible de charger {}", path.display()))
}

/// RGBA8 → RGB8 composité sur fond noir (`c * a / 255`).
fn over_black(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        let a = u16::from(px[3]);
        for &c in &px[..3] {
            rgb.push((u16::from(c) * a / 255) as u8);
        }
    }
    rgb
}
