//! Table Braille 6 points (U+2800..=U+283F).
//!
//! Ordre des points dans une cellule 2×3 :
//! +---+---+
//! | 1 | 4 |
//! +---+---+
//! | 2 | 5 |
//! +---+---+
//! | 3 | 6 |
//! +---+---+
//!
//! Keys are [`DotPattern`] decimal codes, digit 1 (weight 100000) being dot 1.

use pb_core::pattern::DotPattern;

/// Nombre d'entrées : un glyphe par combinaison de 6 points.
pub const TABLE_LEN: usize = 64;

/// Mapping figé `DotPattern` → glyphe, trié par clé.
///
/// Total et bijectif sur les 64 motifs bien formés.
pub struct BrailleTable {
    entries: [(DotPattern, char); TABLE_LEN],
}

impl BrailleTable {
    /// Glyphe du motif, ou `None` si la clé est absente.
    ///
    /// # Example
    /// ```
    /// use pb_braille::table::BRAILLE_TABLE;
    /// use pb_core::pattern::DotPattern;
    /// assert_eq!(BRAILLE_TABLE.lookup(DotPattern::FULL), Some('⠿'));
    /// assert_eq!(BRAILLE_TABLE.lookup(DotPattern::BLANK), Some('⠀'));
    /// assert_eq!(BRAILLE_TABLE.lookup(DotPattern(2)), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn lookup(&self, pattern: DotPattern) -> Option<char> {
        self.entries
            .binary_search_by_key(&pattern, |&(key, _)| key)
            .ok()
            .map(|i| self.entries[i].1)
    }

    /// All entries in key order.
    #[must_use]
    pub fn entries(&self) -> &[(DotPattern, char)] {
        &self.entries
    }
}

/// La table globale, en lecture seule.
#[rustfmt::skip]
#[allow(clippy::unreadable_literal)]
pub static BRAILLE_TABLE: BrailleTable = BrailleTable {
    entries: [
        (DotPattern(000000), '⠀'),
        (DotPattern(000001), '⠠'),
        (DotPattern(000010), '⠐'),
        (DotPattern(000011), '⠰'),
        (DotPattern(000100), '⠈'),
        (DotPattern(000101), '⠨'),
        (DotPattern(000110), '⠘'),
        (DotPattern(000111), '⠸'),
        (DotPattern(001000), '⠄'),
        (DotPattern(001001), '⠤'),
        (DotPattern(001010), '⠔'),
        (DotPattern(001011), '⠴'),
        (DotPattern(001100), '⠌'),
        (DotPattern(001101), '⠬'),
        (DotPattern(001110), '⠜'),
        (DotPattern(001111), '⠼'),
        (DotPattern(010000), '⠂'),
        (DotPattern(010001), '⠢'),
        (DotPattern(010010), '⠒'),
        (DotPattern(010011), '⠲'),
        (DotPattern(010100), '⠊'),
        (DotPattern(010101), '⠪'),
        (DotPattern(010110), '⠚'),
        (DotPattern(010111), '⠺'),
        (DotPattern(011000), '⠆'),
        (DotPattern(011001), '⠦'),
        (DotPattern(011010), '⠖'),
        (DotPattern(011011), '⠶'),
        (DotPattern(011100), '⠎'),
        (DotPattern(011101), '⠮'),
        (DotPattern(011110), '⠞'),
        (DotPattern(011111), '⠾'),
        (DotPattern(100000), '⠁'),
        (DotPattern(100001), '⠡'),
        (DotPattern(100010), '⠑'),
        (DotPattern(100011), '⠱'),
        (DotPattern(100100), '⠉'),
        (DotPattern(100101), '⠩'),
        (DotPattern(100110), '⠙'),
        (DotPattern(100111), '⠹'),
        (DotPattern(101000), '⠅'),
        (DotPattern(101001), '⠥'),
        (DotPattern(101010), '⠕'),
        (DotPattern(101011), '⠵'),
        (DotPattern(101100), '⠍'),
        (DotPattern(101101), '⠭'),
        (DotPattern(101110), '⠝'),
        (DotPattern(101111), '⠽'),
        (DotPattern(110000), '⠃'),
        (DotPattern(110001), '⠣'),
        (DotPattern(110010), '⠓'),
        (DotPattern(110011), '⠳'),
        (DotPattern(110100), '⠋'),
        (DotPattern(110101), '⠫'),
        (DotPattern(110110), '⠛'),
        (DotPattern(110111), '⠻'),
        (DotPattern(111000), '⠇'),
        (DotPattern(111001), '⠧'),
        (DotPattern(111010), '⠗'),
        (DotPattern(111011), '⠷'),
        (DotPattern(111100), '⠏'),
        (DotPattern(111101), '⠯'),
        (DotPattern(111110), '⠟'),
        (DotPattern(111111), '⠿'),
    ],
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Every well-formed pattern, enumerated independently of the table.
    fn all_patterns() -> Vec<DotPattern> {
        (0u8..64)
            .map(|mask| {
                let mut dots = [false; 6];
                for (i, dot) in dots.iter_mut().enumerate() {
                    *dot = mask & (1 << i) != 0;
                }
                DotPattern::from_dots(dots)
            })
            .collect()
    }

    #[test]
    fn keys_are_sorted_and_unique() {
        let entries = BRAILLE_TABLE.entries();
        assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn total_over_well_formed_patterns() {
        for p in all_patterns() {
            assert!(p.is_well_formed());
            assert!(BRAILLE_TABLE.lookup(p).is_some(), "motif {p} manquant");
        }
    }

    #[test]
    fn bijective_onto_six_dot_block() {
        let glyphs: HashSet<char> = all_patterns()
            .into_iter()
            .filter_map(|p| BRAILLE_TABLE.lookup(p))
            .collect();
        assert_eq!(glyphs.len(), TABLE_LEN);
        assert!(glyphs.iter().all(|&c| ('\u{2800}'..='\u{283F}').contains(&c)));
    }

    #[test]
    fn digit_n_is_dot_n() {
        // Dot n of the Unicode block is bit n-1 of the codepoint offset.
        for &(pattern, ch) in BRAILLE_TABLE.entries() {
            let mut offset = 0u32;
            for (i, raised) in pattern.dots().into_iter().enumerate() {
                if raised {
                    offset |= 1 << i;
                }
            }
            assert_eq!(ch as u32, 0x2800 + offset, "motif {pattern}");
        }
    }

    #[test]
    fn malformed_keys_miss() {
        assert_eq!(BRAILLE_TABLE.lookup(DotPattern(2)), None);
        assert_eq!(BRAILLE_TABLE.lookup(DotPattern(1_111_111)), None);
    }
}
