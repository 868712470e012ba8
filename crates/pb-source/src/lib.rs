//! Image sources and rescaling for pixbraille.

pub mod image;
pub mod resize;
