use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::CoreError;

/// Number of Braille cells along the dominant axis of the output.
///
/// Always strictly positive; construct it with [`CellSize::new`] or by
/// parsing the raw size field.
///
/// # Example
/// ```
/// use pb_core::size::CellSize;
/// let size: CellSize = " 40 ".parse().unwrap();
/// assert_eq!(size.get(), 40);
/// assert!("0".parse::<CellSize>().is_err());
/// assert!("-5".parse::<CellSize>().is_err());
/// assert!("abc".parse::<CellSize>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellSize(NonZeroU32);

impl CellSize {
    /// Validate an integer size.
    ///
    /// # Errors
    /// Returns `InvalidSize` for zero, negative, or out-of-range values.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidSize {
                input: value.to_string(),
            })
    }

    /// Raw value, never zero.
    #[inline]
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl FromStr for CellSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidSize {
            input: s.to_string(),
        };
        let value: i64 = s.trim().parse().map_err(|_| invalid())?;
        Self::new(value).map_err(|_| invalid())
    }
}

impl fmt::Display for CellSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
