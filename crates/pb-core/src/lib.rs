//! Types, configuration, and shared structures for pixbraille.
//!
//! This crate contains the data model, error taxonomy, and seam traits
//! used across the pixbraille workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod pattern;
pub mod size;
pub mod traits;

pub use config::{Polarity, ResizeFilter, TranscodeConfig};
pub use error::CoreError;
pub use frame::{BinaryBitmap, Bitmap, TranscodedText};
pub use pattern::DotPattern;
pub use size::CellSize;
