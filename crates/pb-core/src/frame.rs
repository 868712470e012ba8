use std::fmt;

use crate::error::CoreError;

/// Image source décodée. Lue seulement une fois construite.
///
/// Stocke les pixels en RGB row-major, 3 bytes par pixel. Les champs sont
/// privés : `data.len() == width * height * 3` tient toujours.
///
/// # Example
/// ```
/// use pb_core::frame::Bitmap;
/// let bmp = Bitmap::new(10, 10);
/// assert_eq!(bmp.data().len(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Bitmap {
    /// Crée un bitmap noir aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use pb_core::frame::Bitmap;
    /// let bmp = Bitmap::new(100, 50);
    /// assert_eq!((bmp.width(), bmp.height()), (100, 50));
    /// assert_eq!(bmp.pixel(0, 0), Some((0, 0, 0)));
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, (0, 0, 0))
    }

    /// Crée un bitmap uni.
    ///
    /// # Example
    /// ```
    /// use pb_core::frame::Bitmap;
    /// let bmp = Bitmap::filled(3, 2, (255, 255, 255));
    /// assert_eq!(bmp.pixel(2, 1), Some((255, 255, 255)));
/// assert_eq!(bmp.pixel(3, 0), None);
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, rgb: (u8, u8, u8)) -> Self {
        let (r, g, b) = rgb;
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * 3);
        for _ in 0..count {
            data.extend_from_slice(&[r, g, b]);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Wrap an existing RGB24 buffer.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` if `data` does not hold exactly
    /// `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        if data.len() as u64 != u64::from(width) * u64::from(height) * 3 {
            return Err(CoreError::InvalidDimensions {
                width: u64::from(width),
                height: u64::from(height),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels RGB, row-major, 3 bytes par pixel.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Accès au pixel (x, y) → (r, g, b), ou `None` hors du cadre.
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.offset(x, y);
        Some((self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }

    /// Écrit un pixel. Réservé à la construction (tests, décodeurs).
    /// Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: (u8, u8, u8)) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.offset(x, y);
        self.data[idx..idx + 3].copy_from_slice(&[rgb.0, rgb.1, rgb.2]);
    }

    #[inline(always)]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }
}

/// Noir/blanc par pixel, mêmes dimensions que le bitmap source.
///
/// `true` = fond (blanc), `false` = encre (noir).
///
/// # Example
/// ```
/// use pb_core::frame::BinaryBitmap;
/// let bin = BinaryBitmap::new(3, 4, true);
/// assert_eq!(bin.get(2, 3), Some(true));
/// assert_eq!(bin.get(3, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryBitmap {
    /// Flat array, row-major.
    pub pixels: Vec<bool>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl BinaryBitmap {
    /// Uniform grid.
    #[must_use]
    pub fn new(width: u32, height: u32, background: bool) -> Self {
        Self {
            pixels: vec![background; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Build from row strings: `.` is background, anything else is ink.
    ///
    /// Rows shorter than the first are padded with background.
    ///
    /// # Example
    /// ```
    /// use pb_core::frame::BinaryBitmap;
    /// let bin = BinaryBitmap::from_rows(&["#.", ".#"]);
    /// assert_eq!(bin.get(0, 0), Some(false));
    /// assert_eq!(bin.get(1, 0), Some(true));
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
        let height = rows.len() as u32;
        let mut bin = Self::new(width, height, true);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(width as usize).enumerate() {
                bin.set(x as u32, y as u32, ch == '.');
            }
        }
        bin
    }

    /// Pixel state, or `None` outside the grid.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Set a pixel. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, background: bool) {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize] = background;
        }
    }
}

/// Texte Braille final, une ligne par rangée de cellules.
///
/// `Display` écrit chaque ligne suivie de `\n`.
///
/// # Example
/// ```
/// use pb_core::frame::TranscodedText;
/// let text = TranscodedText::from_lines(vec!["⠿⠿".into(), "⠀⠀".into()]);
/// assert_eq!(text.row_count(), 2);
/// assert_eq!(text.column_count(), 2);
/// assert_eq!(text.to_string(), "⠿⠿\n⠀⠀\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranscodedText {
    lines: Vec<String>,
}

impl TranscodedText {
    /// Wrap already assembled lines.
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Lines without their terminators.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of cell rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.lines.len()
    }

    /// Characters in the widest row (all rows have the same width when
    /// produced by the encoder).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// True when no row was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for TranscodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}
