use std::path::PathBuf;

use anyhow::Result;

/// Ouvre le sélecteur natif. `None` si l'utilisateur annule.
///
/// # Errors
/// Returns an error when the binary was built without the `picker` feature.
#[cfg(feature = "picker")]
pub fn pick_image() -> Result<Option<PathBuf>> {
    let picked = rfd::FileDialog::new()
        .set_title("Select Image — pixbraille")
        .add_filter("Image files", pb_source::image::SUPPORTED_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file();
    if picked.is_none() {
        log::info!("Sélection annulée");
    }
    Ok(picked)
}

/// Ouvre le sélecteur natif. `None` si l'utilisateur annule.
///
/// # Errors
/// Returns an error when the binary was built without the `picker` feature.
#[cfg(not(feature = "picker"))]
pub fn pick_image() -> Result<Option<PathBuf>> {
    anyhow::bail!("--pick requiert la feature 'picker' (cargo build --features picker).")
}
