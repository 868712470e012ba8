use std::sync::Arc;

use crate::error::CoreError;
use crate::frame::{Bitmap, TranscodedText};
use crate::size::CellSize;

/// Fournit le bitmap décodé au pipeline.
///
/// Implémenté par : `ImageSource`.
///
/// # Example
/// ```
/// use pb_core::traits::Source;
/// use pb_core::frame::Bitmap;
/// use std::sync::Arc;
///
/// struct Fixed(Arc<Bitmap>);
/// impl Source for Fixed {
///     fn bitmap(&self) -> Arc<Bitmap> { Arc::clone(&self.0) }
///     fn native_size(&self) -> (u32, u32) { (self.0.width(), self.0.height()) }
/// }
/// ```
pub trait Source {
    /// Le bitmap source, tel que décodé.
    fn bitmap(&self) -> Arc<Bitmap>;

    /// Dimensions natives de la source (avant resize).
    fn native_size(&self) -> (u32, u32);
}

/// Redimensionne un bitmap vers la grille de cellules demandée.
///
/// # Example
/// ```
/// use pb_core::traits::Rescale;
/// use pb_core::frame::Bitmap;
/// use pb_core::size::CellSize;
/// use pb_core::CoreError;
///
/// struct Identity;
/// impl Rescale for Identity {
///     fn rescale(&mut self, src: &Bitmap, _size: CellSize) -> Result<Bitmap, CoreError> {
///         Ok(src.clone())
///     }
/// }
/// ```
pub trait Rescale {
    /// Produit un nouveau bitmap dont l'axe dominant couvre `size` cellules.
    ///
    /// # Errors
    /// Returns an error if the target dimensions are unusable or the
    /// resampling backend fails.
    fn rescale(&mut self, src: &Bitmap, size: CellSize) -> Result<Bitmap, CoreError>;
}

/// Consomme le texte final (stdout, fichier).
pub trait Sink {
    /// Émet le texte tel quel, sans métadonnées de formatage.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    fn emit(&mut self, text: &TranscodedText) -> anyhow::Result<()>;
}
