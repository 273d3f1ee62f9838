use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use color_eyre::{
    Result,
    eyre::{WrapErr as _, eyre},
};
use log::info;

use crate::{PRODUCT_NAME, image_model::Image};

/// `ThurGPT-<unix millis>.png`
pub fn file_name(now: DateTime<Utc>) -> String {
    format!("{PRODUCT_NAME}-{}.png", now.timestamp_millis())
}

pub fn default_dir() -> Result<PathBuf> {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or(eyre!("Couldn't find a download directory"))
}

/// Writes the image bytes into `dir`, creating it if necessary
pub fn save(image: &Image, dir: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    fs::create_dir_all(dir).wrap_err_with(|| format!("creating {}", dir.display()))?;
    let path = dir.join(file_name(now));
    fs::write(&path, &image.data).wrap_err_with(|| format!("writing {}", path.display()))?;
    info!("Saved image to {}", path.display());
    Ok(path)
}
