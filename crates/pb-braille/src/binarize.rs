use pb_core::constants::LUMA_THRESHOLD;
use pb_core::frame::{BinaryBitmap, Bitmap};

/// Luma perceptuelle 0.30 R + 0.59 G + 0.11 B, tronquée.
///
/// Evaluated left to right in `f64` and truncated, so values sitting on an
/// integer boundary follow IEEE rounding: `luma(126, 126, 126)` is 125.
///
/// # Example
/// ```
/// use pb_braille::binarize::luma;
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(255, 0, 0), 76);
/// assert_eq!(luma(0, 0, 0), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> u32 {
    (f64::from(r) * 0.3 + f64::from(g) * 0.59 + f64::from(b) * 0.11) as u32
}

/// True when the pixel classifies as background (white).
#[inline(always)]
#[must_use]
pub fn is_background(r: u8, g: u8, b: u8) -> bool {
    luma(r, g, b) >= LUMA_THRESHOLD
}

/// Classe chaque pixel en encre ou fond selon le seuil fixe.
///
/// # Example
/// ```
/// use pb_core::frame::Bitmap;
/// use pb_braille::binarize::binarize;
///
/// let bmp = Bitmap::filled(4, 3, (200, 200, 200));
/// let bin = binarize(&bmp);
/// assert_eq!((bin.width, bin.height), (4, 3));
/// assert_eq!(bin.get(0, 0), Some(true));
/// ```
#[must_use]
pub fn binarize(bitmap: &Bitmap) -> BinaryBitmap {
    let pixels = bitmap
        .data()
        .chunks_exact(3)
        .map(|px| is_background(px[0], px[1], px[2]))
        .collect();
    BinaryBitmap {
        pixels,
        width: bitmap.width(),
        height: bitmap.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(w: u32, h: u32) -> Bitmap {
        let mut bmp = Bitmap::new(w, h);
        for y in 0..h {
            for x in 0..w {
                if (x + y) % 2 == 0 {
                    bmp.set_pixel(x, y, (255, 255, 255));
                }
            }
        }
        bmp
    }

    #[test]
    fn threshold_boundary() {
        // 127 is background, 126 is ink.
        assert!(is_background(127, 127, 127));
        assert!(!is_background(126, 126, 126));
    }

    #[test]
    fn double_precision_truncation() {
        // Sums that land just under an integer truncate downward.
        assert_eq!(luma(126, 126, 126), 125);
        assert_eq!(luma(128, 128, 128), 127);
        assert_eq!(luma(0, 172, 232), 126);
        assert!(!is_background(0, 172, 232));
        assert!(!is_background(1, 181, 181));
    }

    #[test]
    fn green_weighs_most() {
        assert!(is_background(0, 216, 0));
        assert!(!is_background(0, 215, 0));
        assert!(!is_background(0, 0, 255));
    }

    #[test]
    fn idempotent_on_black_and_white() {
        let bmp = checkerboard(5, 7);
        let first = binarize(&bmp);

        let mut rebuilt = Bitmap::new(first.width, first.height);
        for y in 0..first.height {
            for x in 0..first.width {
                if first.get(x, y) == Some(true) {
                    rebuilt.set_pixel(x, y, (255, 255, 255));
                }
            }
        }
        assert_eq!(rebuilt, bmp);
        assert_eq!(binarize(&rebuilt), first);
    }

    #[test]
    fn preserves_dimensions() {
        let bin = binarize(&Bitmap::new(3, 4));
        assert_eq!(bin.pixels.len(), 12);
        assert!(bin.pixels.iter().all(|&p| !p));
    }
}
