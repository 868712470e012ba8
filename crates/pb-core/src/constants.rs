//! Géométrie des cellules et seuils fixes du pipeline.

/// Largeur d'une cellule Braille, en pixels.
pub const CELL_WIDTH: u32 = 2;
/// Hauteur d'une cellule Braille, en pixels (sous-ensemble 6 points).
pub const CELL_HEIGHT: u32 = 3;

/// Nombre de points par cellule.
pub const DOTS_PER_CELL: usize = (CELL_WIDTH * CELL_HEIGHT) as usize;

/// Luma strictement inférieure à ce seuil = encre (noir).
pub const LUMA_THRESHOLD: u32 = 127;

/// Upper bound on the pixel count of a rescaled bitmap.
///
/// Sizes that would exceed it are rejected with `InvalidDimensions`
/// instead of attempting the allocation.
pub const MAX_RESCALED_PIXELS: u64 = 1 << 26;
