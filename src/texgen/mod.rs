//! Offline procedural texture synthesis for volumetric clouds.
//!
//! Two independent generators fill float pixel buffers from closed-form
//! per-pixel formulas: a 1xN altitude gradient LUT and a WxH Perlin-noise
//! coverage map. Both are deterministic and O(W*H) with no dependency
//! between pixels. Encoding to PNG/EXR lives in [`io`].

pub mod cloud_map;
pub mod io;
pub mod lut;

pub use cloud_map::{CloudMapParams, generate_cloud_map};
pub use io::{save_exr, save_png};
pub use lut::{CloudLutParams, generate_cloud_lut};
