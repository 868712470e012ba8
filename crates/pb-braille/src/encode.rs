use pb_core::config::Polarity;
use pb_core::constants::{CELL_HEIGHT, CELL_WIDTH, DOTS_PER_CELL};
use pb_core::error::CoreError;
use pb_core::frame::{BinaryBitmap, TranscodedText};
use pb_core::pattern::DotPattern;

use crate::table::BRAILLE_TABLE;

/// Motif de la cellule dont le coin haut-gauche est (x, y).
///
/// Parcours colonne 0 puis 1, lignes 0..3 dans chaque colonne. Un pixel hors
/// grille vaut toujours 0, quelle que soit la polarité.
///
/// # Example
/// ```
/// use pb_core::config::Polarity;
/// use pb_core::frame::BinaryBitmap;
/// use pb_core::pattern::DotPattern;
/// use pb_braille::encode::cell_pattern;
///
/// let bin = BinaryBitmap::new(2, 3, true);
/// assert_eq!(cell_pattern(&bin, 0, 0, Polarity::Negative), DotPattern::FULL);
/// assert_eq!(cell_pattern(&bin, 0, 0, Polarity::Positive), DotPattern::BLANK);
/// ```
#[must_use]
pub fn cell_pattern(bin: &BinaryBitmap, x: u32, y: u32, polarity: Polarity) -> DotPattern {
    let mut dots = [false; DOTS_PER_CELL];
    let mut i = 0;
    for lx in 0..CELL_WIDTH {
        for ly in 0..CELL_HEIGHT {
            let px = x.checked_add(lx);
            let py = y.checked_add(ly);
            dots[i] = match (px, py) {
                (Some(px), Some(py)) => bin.get(px, py).is_some_and(|bg| polarity.raises(bg)),
                _ => false,
            };
            i += 1;
        }
    }
    DotPattern::from_dots(dots)
}

/// Glyphe d'un motif. Une clé absente est une erreur interne, jamais masquée.
///
/// # Errors
/// Returns `InternalTableGap` if the pattern is not in the table.
#[inline]
pub fn glyph(pattern: DotPattern) -> Result<char, CoreError> {
    BRAILLE_TABLE
        .lookup(pattern)
        .ok_or(CoreError::InternalTableGap(pattern))
}

/// Découpe la grille en cellules 2×3 et assemble le texte Braille.
///
/// The last column and row of cells may extend past the grid; their
/// out-of-bounds positions contribute no dot.
///
/// # Errors
/// Returns `InternalTableGap` if a computed pattern is missing from the
/// table.
///
/// # Example
/// ```
/// use pb_core::config::Polarity;
/// use pb_core::frame::BinaryBitmap;
/// use pb_braille::encode::encode_cells;
///
/// let bin = BinaryBitmap::new(4, 6, true);
/// let text = encode_cells(&bin, Polarity::Negative).unwrap();
/// assert_eq!(text.to_string(), "⠿⠿\n⠿⠿\n");
/// ```
pub fn encode_cells(bin: &BinaryBitmap, polarity: Polarity) -> Result<TranscodedText, CoreError> {
    let cols = bin.width.div_ceil(CELL_WIDTH) as usize;
    let rows = bin.height.div_ceil(CELL_HEIGHT) as usize;
    let mut lines = Vec::with_capacity(rows);

    for y in (0..bin.height).step_by(CELL_HEIGHT as usize) {
        // Braille glyphs are 3 bytes in UTF-8.
        let mut line = String::with_capacity(cols * 3);
        for x in (0..bin.width).step_by(CELL_WIDTH as usize) {
            line.push(glyph(cell_pattern(bin, x, y, polarity))?);
        }
        lines.push(line);
    }

    Ok(TranscodedText::from_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_extremes() {
        let white = BinaryBitmap::new(2, 3, true);
        let black = BinaryBitmap::new(2, 3, false);
        assert_eq!(cell_pattern(&white, 0, 0, Polarity::Negative), DotPattern(111_111));
        assert_eq!(cell_pattern(&black, 0, 0, Polarity::Negative), DotPattern(000_000));
        assert_eq!(encode_cells(&white, Polarity::Negative).unwrap().to_string(), "⠿\n");
        assert_eq!(encode_cells(&black, Polarity::Negative).unwrap().to_string(), "⠀\n");
    }

    #[test]
    fn column_major_digit_order() {
        // Only the top-right pixel is white: column 1, row 0 -> fourth digit.
        let bin = BinaryBitmap::from_rows(&["#.", "##", "##"]);
        assert_eq!(cell_pattern(&bin, 0, 0, Polarity::Negative), DotPattern(000_100));
        assert_eq!(encode_cells(&bin, Polarity::Negative).unwrap().to_string(), "⠈\n");

        // Only the bottom-left pixel: column 0, row 2 -> third digit.
        let bin = BinaryBitmap::from_rows(&["##", "##", ".#"]);
        assert_eq!(cell_pattern(&bin, 0, 0, Polarity::Negative), DotPattern(001_000));
    }

    #[test]
    fn ragged_edge_counts_only_in_bounds_pixels() {
        // 3×4 grid: cells at x = 0, 2 and y = 0, 3.
        let bin = BinaryBitmap::new(3, 4, true);
        assert_eq!(cell_pattern(&bin, 0, 0, Polarity::Negative), DotPattern(111_111));
        // Right column only has x = 2 in bounds.
        assert_eq!(cell_pattern(&bin, 2, 0, Polarity::Negative), DotPattern(111_000));
        // Bottom row only has y = 3 in bounds.
        assert_eq!(cell_pattern(&bin, 0, 3, Polarity::Negative), DotPattern(100_100));
        // Corner: a single in-bounds pixel.
        assert_eq!(cell_pattern(&bin, 2, 3, Polarity::Negative), DotPattern(100_000));

        let text = encode_cells(&bin, Polarity::Negative).unwrap();
        assert_eq!(text.row_count(), 2);
        assert_eq!(text.column_count(), 2);
        assert_eq!(text.to_string(), "⠿⠇\n⠉⠁\n");
    }

    #[test]
    fn out_of_bounds_stays_off_with_positive_polarity() {
        let bin = BinaryBitmap::new(3, 4, false);
        assert_eq!(cell_pattern(&bin, 2, 3, Polarity::Positive), DotPattern(100_000));
        assert_eq!(cell_pattern(&bin, 2, 3, Polarity::Negative), DotPattern::BLANK);
    }

    #[test]
    fn positive_complements_negative_inside_grid() {
        let bin = BinaryBitmap::from_rows(&["#..#", ".#.#", "..##"]);
        for x in [0, 2] {
            let neg = cell_pattern(&bin, x, 0, Polarity::Negative);
            let pos = cell_pattern(&bin, x, 0, Polarity::Positive);
            assert_eq!(neg.0 + pos.0, DotPattern::FULL.0);
        }
    }

    #[test]
    fn grid_shape_matches_ceil_division() {
        for (w, h) in [(1, 1), (2, 3), (5, 7), (8, 9), (11, 2)] {
            let text = encode_cells(&BinaryBitmap::new(w, h, false), Polarity::Negative).unwrap();
            assert_eq!(text.row_count(), h.div_ceil(3) as usize);
            assert!(
                text.lines()
                    .iter()
                    .all(|l| l.chars().count() == w.div_ceil(2) as usize)
            );
        }
    }

    #[test]
    fn empty_grid_yields_no_rows() {
        let text = encode_cells(&BinaryBitmap::new(0, 0, true), Polarity::Negative).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn malformed_pattern_is_a_table_gap() {
        let err = glyph(DotPattern(2)).unwrap_err();
        assert!(matches!(err, CoreError::InternalTableGap(DotPattern(2))));
    }
}
