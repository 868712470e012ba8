use pb_core::config::Polarity;
use pb_core::error::CoreError;
use pb_core::frame::{Bitmap, TranscodedText};
use pb_core::size::CellSize;
use pb_core::traits::Rescale;

use crate::binarize::binarize;
use crate::encode::encode_cells;

/// Rescaler → Binarizer → CellEncoder.
///
/// Owns its rescaler; each call allocates its own intermediate buffers.
///
/// # Example
/// ```
/// use pb_core::config::Polarity;
/// use pb_core::frame::Bitmap;
/// use pb_core::size::CellSize;
/// use pb_core::traits::Rescale;
/// use pb_core::CoreError;
/// use pb_braille::Transcoder;
///
/// struct Identity;
/// impl Rescale for Identity {
///     fn rescale(&mut self, src: &Bitmap, _: CellSize) -> Result<Bitmap, CoreError> {
///         Ok(src.clone())
///     }
/// }
///
/// let mut t = Transcoder::new(Identity, Polarity::Negative);
/// let text = t.transcode(&Bitmap::filled(2, 3, (255, 255, 255)), CellSize::new(1).unwrap()).unwrap();
/// assert_eq!(text.to_string(), "⠿\n");
/// ```
pub struct Transcoder<R> {
    rescaler: R,
    polarity: Polarity,
}

impl<R: Rescale> Transcoder<R> {
    /// Create a transcoder around a rescaler.
    #[must_use]
    pub fn new(rescaler: R, polarity: Polarity) -> Self {
        Self { rescaler, polarity }
    }

    /// Transcode a bitmap at a validated size.
    ///
    /// # Errors
    /// Propagates rescaler failures and `InternalTableGap`.
    pub fn transcode(
        &mut self,
        bitmap: &Bitmap,
        size: CellSize,
    ) -> Result<TranscodedText, CoreError> {
        let scaled = self.rescaler.rescale(bitmap, size)?;
        log::debug!(
            "Rescale {}×{} → {}×{} (size {size}, {:?})",
            bitmap.width(),
            bitmap.height(),
            scaled.width(),
            scaled.height(),
            self.polarity
        );

        let bin = binarize(&scaled);
        let text = encode_cells(&bin, self.polarity)?;
        log::debug!(
            "Encodé {} lignes × {} cellules",
            text.row_count(),
            text.column_count()
        );
        Ok(text)
    }

    /// Boundary entry point: optional image plus the raw size field.
    ///
    /// Checks run before any work: missing image first, then size.
    ///
    /// # Errors
    /// Returns `NoImageLoaded`, `InvalidSize`, or any error from
    /// [`Transcoder::transcode`].
    pub fn transcode_request(
        &mut self,
        bitmap: Option<&Bitmap>,
        size_text: &str,
    ) -> Result<TranscodedText, CoreError> {
        let bitmap = bitmap.ok_or(CoreError::NoImageLoaded)?;
        let size: CellSize = size_text.parse()?;
        self.transcode(bitmap, size)
    }
}
