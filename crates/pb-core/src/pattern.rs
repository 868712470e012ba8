use std::fmt;

use crate::constants::DOTS_PER_CELL;

/// Six-digit decimal key describing which dots of a cell are raised.
///
/// Each digit is 0 or 1 and the digits are weighted by decimal place value
/// (100000, 10000, …, 1) in dot iteration order: column 0 rows 0..3, then
/// column 1 rows 0..3. `011101` is therefore the decimal number 11101, not a
/// bit mask.
///
/// # Example
/// ```
/// use pb_core::pattern::DotPattern;
/// let p = DotPattern::from_dots([false, true, true, true, false, true]);
/// assert_eq!(p, DotPattern(11101));
/// assert_eq!(p.to_string(), "011101");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DotPattern(pub u32);

impl DotPattern {
    /// No dot raised.
    pub const BLANK: Self = Self(0);
    /// All six dots raised.
    pub const FULL: Self = Self(111_111);

    /// Assemble a pattern from dot states in iteration order.
    ///
    /// The first entry gets weight 100000, the last weight 1.
    #[must_use]
    pub const fn from_dots(dots: [bool; DOTS_PER_CELL]) -> Self {
        let mut code = 0u32;
        let mut weight = 100_000u32;
        let mut i = 0;
        while i < DOTS_PER_CELL {
            if dots[i] {
                code += weight;
            }
            weight /= 10;
            i += 1;
        }
        Self(code)
    }

    /// Dot states in iteration order, the inverse of [`DotPattern::from_dots`].
    ///
    /// Digits other than 0 are read as raised.
    #[must_use]
    pub fn dots(self) -> [bool; DOTS_PER_CELL] {
        let mut dots = [false; DOTS_PER_CELL];
        let mut rest = self.0;
        for slot in dots.iter_mut().rev() {
            *slot = rest % 10 != 0;
            rest /= 10;
        }
        dots
    }

    /// True when the value has at most six digits, each 0 or 1.
    ///
    /// # Example
    /// ```
    /// use pb_core::pattern::DotPattern;
    /// assert!(DotPattern(101_010).is_well_formed());
    /// assert!(!DotPattern(120).is_well_formed());
    /// assert!(!DotPattern(1_000_000).is_well_formed());
    /// ```
    #[must_use]
    pub fn is_well_formed(self) -> bool {
        if self.0 > Self::FULL.0 {
            return false;
        }
        let mut rest = self.0;
        while rest > 0 {
            if rest % 10 > 1 {
                return false;
            }
            rest /= 10;
        }
        true
    }
}

impl fmt::Display for DotPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}
