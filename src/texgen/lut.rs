//! Cloud color gradient LUT generation.
//!
//! A 1xN texture indexed by normalized cloud altitude. Channels:
//! R = profile coverage, G = erosion, B = ambient occlusion, A = 1.

use image::{Rgba, Rgba32FImage};
use serde::{Deserialize, Serialize};

use crate::daynight::curve::lerp;

/// Parameters for the gradient LUT. Each channel interpolates linearly from
/// its value at the bottom of the cloud layer (row 0) to its value at the
/// top (last row).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CloudLutParams {
    /// Number of rows in the 1xN texture.
    pub height: u32,
    /// Coverage channel endpoints (bottom, top).
    pub coverage: (f32, f32),
    /// Erosion channel endpoints (bottom, top).
    pub erosion: (f32, f32),
    /// Ambient occlusion channel endpoints (bottom, top).
    pub ambient_occlusion: (f32, f32),
}

impl Default for CloudLutParams {
    fn default() -> Self {
        Self {
            height: 64,
            // Denser coverage near the base, thinning with altitude
            coverage: (0.8, 0.4),
            erosion: (0.3, 0.7),
            ambient_occlusion: (0.1, 0.5),
        }
    }
}

/// Generate the gradient LUT as a float RGBA buffer.
pub fn generate_cloud_lut(params: &CloudLutParams) -> Rgba32FImage {
    let height = params.height.max(2);
    let mut img = Rgba32FImage::new(1, height);

    for y in 0..height {
        let t = y as f32 / (height - 1) as f32;

        let coverage = lerp(params.coverage.0, params.coverage.1, t);
        let erosion = lerp(params.erosion.0, params.erosion.1, t);
        let ambient_occlusion = lerp(params.ambient_occlusion.0, params.ambient_occlusion.1, t);

        img.put_pixel(0, y, Rgba([coverage, erosion, ambient_occlusion, 1.0]));
    }

    img
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
