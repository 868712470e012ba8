//! Braille transcoding engine for pixbraille.
//!
//! Rescaled bitmap → binarized grid → 2×3 cells → Unicode Braille text.

pub mod binarize;
pub mod encode;
pub mod table;
pub mod transcoder;

pub use encode::encode_cells;
pub use table::BRAILLE_TABLE;
pub use transcoder::Transcoder;
