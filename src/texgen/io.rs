//! Texture encoding to image files.

use std::path::Path;

use image::{DynamicImage, Rgba32FImage};

use crate::core::Error;

/// Write a float buffer as an 8-bit PNG. Channel values are clamped to
/// [0, 1] during quantization.
pub fn save_png(img: &Rgba32FImage, path: &Path) -> Result<(), Error> {
    let rgba8 = DynamicImage::ImageRgba32F(img.clone()).to_rgba8();
    rgba8.save(path)?;
    log::info!("Wrote PNG texture to {}", path.display());
    Ok(())
}

/// Write a float buffer as a full-precision EXR.
pub fn save_exr(img: &Rgba32FImage, path: &Path) -> Result<(), Error> {
    DynamicImage::ImageRgba32F(img.clone()).save(path)?;
    log::info!("Wrote EXR texture to {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
