use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};
use pb_core::config::ResizeFilter;
use pb_core::constants::{CELL_HEIGHT, CELL_WIDTH, MAX_RESCALED_PIXELS};
use pb_core::error::CoreError;
use pb_core::frame::Bitmap;
use pb_core::size::CellSize;
use pb_core::traits::Rescale;

/// Dimensions cibles pour que l'axe dominant couvre `size` cellules.
///
/// `scale = max(w / 2, h / 3) / size`, puis `ceil(w / scale) × ceil(h / scale)`.
/// Computed in integers: the dominant axis is exactly `2 * size` or
/// `3 * size` pixels, the other axis is rounded up. The result keeps the
/// aspect ratio and is not necessarily a multiple of the cell geometry.
///
/// # Errors
/// Returns `InvalidDimensions` for an empty source or a target larger than
/// `MAX_RESCALED_PIXELS`.
///
/// # Example
/// ```
/// use pb_core::size::CellSize;
/// use pb_source::resize::target_dimensions;
/// let size = CellSize::new(10).unwrap();
/// assert_eq!(target_dimensions(200, 300, size).unwrap(), (20, 30));
/// assert_eq!(target_dimensions(300, 100, size).unwrap(), (20, 7));
/// ```
pub fn target_dimensions(width: u32, height: u32, size: CellSize) -> Result<(u32, u32), CoreError> {
    let invalid = |w: u128, h: u128| CoreError::InvalidDimensions {
        width: u64::try_from(w).unwrap_or(u64::MAX),
        height: u64::try_from(h).unwrap_or(u64::MAX),
    };
    if width == 0 || height == 0 {
        return Err(invalid(u128::from(width), u128::from(height)));
    }

    // u128 : w * 3 * size déborde u64 pour les très grandes tailles.
    let w = u128::from(width);
    let h = u128::from(height);
    let n = u128::from(size.get());
    let cw = u128::from(CELL_WIDTH);
    let ch = u128::from(CELL_HEIGHT);

    // w / 2 >= h / 3  <=>  w * 3 >= h * 2
    let (tw, th) = if w * ch >= h * cw {
        (cw * n, (h * cw * n).div_ceil(w))
    } else {
        ((w * ch * n).div_ceil(h), ch * n)
    };

    if tw * th > u128::from(MAX_RESCALED_PIXELS) {
        return Err(invalid(tw, th));
    }
    match (u32::try_from(tw), u32::try_from(th)) {
        (Ok(tw), Ok(th)) => Ok((tw, th)),
        _ => Err(invalid(tw, th)),
    }
}

/// Resizer réutilisable wrappant fast_image_resize.
///
/// # Example
/// ```
/// use pb_core::config::ResizeFilter;
/// use pb_source::resize::Resizer;
/// let r = Resizer::new(ResizeFilter::CatmullRom);
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
}

impl Resizer {
    /// Create a resizer with the given convolution filter.
    #[must_use]
    pub fn new(filter: ResizeFilter) -> Self {
        let filter = match filter {
            ResizeFilter::Bilinear => FilterType::Bilinear,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Mitchell => FilterType::Mitchell,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        };
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(filter)),
        }
    }

    /// Resize `src` to exactly `width × height`.
    ///
    /// # Errors
    /// Returns an error if the resize operation fails.
    ///
    /// # Example
    /// ```
    /// use pb_core::config::ResizeFilter;
    /// use pb_core::frame::Bitmap;
    /// use pb_source::resize::Resizer;
    /// let mut r = Resizer::new(ResizeFilter::CatmullRom);
    /// let dst = r.resize_to(&Bitmap::new(100, 100), 50, 25).unwrap();
    /// assert_eq!((dst.width(), dst.height()), (50, 25));
    /// ```
    pub fn resize_to(&mut self, src: &Bitmap, width: u32, height: u32) -> Result<Bitmap, CoreError> {
        if src.width() == width && src.height() == height {
            return Ok(src.clone());
        }

        // fast_image_resize wants an owned or mutable source buffer.
        let src_image = Image::from_vec_u8(src.width(), src.height(), src.data().to_vec(), PixelType::U8x3)
            .map_err(|e| CoreError::Resize(format!("source invalide : {e}")))?;

        let mut dst_image = Image::new(width, height, PixelType::U8x3);

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|e| CoreError::Resize(e.to_string()))?;

        Bitmap::from_raw(width, height, dst_image.into_vec())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new(ResizeFilter::default())
    }
}

impl Rescale for Resizer {
    fn rescale(&mut self, src: &Bitmap, size: CellSize) -> Result<Bitmap, CoreError> {
        let (width, height) = target_dimensions(src.width(), src.height(), size)?;
        self.resize_to(src, width, height)
    }
}
