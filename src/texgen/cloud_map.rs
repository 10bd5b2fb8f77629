//! Cloud coverage map generation from Perlin noise.
//!
//! A WxH texture sampled by the cloud renderer. Channels:
//! R = coverage (0-1), G = rain (0-1, affects density),
//! B = type (0 = cumulus .. 1 = cirrus), A = 1.

use image::{Rgba, Rgba32FImage};
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

/// Parameters for the coverage map. Each channel samples the same seeded
/// Perlin field at its own frequency and offset, so the three channels are
/// decorrelated while staying deterministic for a given seed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CloudMapParams {
    pub width: u32,
    pub height: u32,
    pub seed: u32,
    /// Coverage noise frequency per pixel.
    pub coverage_frequency: f64,
    /// Rain noise frequency per pixel.
    pub rain_frequency: f64,
    /// Offset applied to both rain sample coordinates.
    pub rain_offset: f64,
    /// Type noise frequency per pixel.
    pub type_frequency: f64,
    /// Offset applied to both type sample coordinates.
    pub type_offset: f64,
    /// Exponent applied to coverage to bias toward sparser cloud cover.
    pub coverage_exponent: f32,
}

impl Default for CloudMapParams {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            seed: 0,
            coverage_frequency: 0.01,
            rain_frequency: 0.02,
            rain_offset: 100.0,
            type_frequency: 0.005,
            type_offset: 200.0,
            coverage_exponent: 1.5,
        }
    }
}

/// Sample Perlin noise remapped from [-1, 1] to [0, 1].
#[inline]
fn perlin01(noise: &Perlin, x: f64, y: f64) -> f32 {
    (noise.get([x, y]) as f32 * 0.5 + 0.5).clamp(0.0, 1.0)
}

/// Generate the coverage map as a float RGBA buffer. Fully deterministic
/// given the parameters; every pixel is an independent function of its
/// coordinates.
pub fn generate_cloud_map(params: &CloudMapParams) -> Rgba32FImage {
    let noise = Perlin::new(params.seed);
    let mut img = Rgba32FImage::new(params.width, params.height);

    for y in 0..params.height {
        for x in 0..params.width {
            let xf = x as f64;
            let yf = y as f64;

            let coverage = perlin01(
                &noise,
                xf * params.coverage_frequency,
                yf * params.coverage_frequency,
            );
            let rain = perlin01(
                &noise,
                xf * params.rain_frequency + params.rain_offset,
                yf * params.rain_frequency + params.rain_offset,
            ) * 0.5;
            let cloud_type = perlin01(
                &noise,
                xf * params.type_frequency + params.type_offset,
                yf * params.type_frequency + params.type_offset,
            );

            // Bias coverage toward open sky
            let coverage = coverage.powf(params.coverage_exponent);

            img.put_pixel(x, y, Rgba([coverage, rain, cloud_type, 1.0]));
        }
    }

    img
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
