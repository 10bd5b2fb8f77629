//! Lighting preset: scene colors keyed on normalized time of day.

use serde::{Deserialize, Serialize};

use crate::daynight::curve::Curve;

/// Per-scene color curves, each keyed on normalized time `[0.0, 1.0)`.
///
/// Sampled once per tick by the day/night driver; the preset itself is never
/// mutated during an update.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LightingPreset {
    /// Scene-wide ambient light color (linear RGB).
    pub ambient_color: Curve<[f32; 3]>,
    /// Fog color (linear RGB).
    pub fog_color: Curve<[f32; 3]>,
    /// Directional (sun) light color (linear RGB).
    pub directional_color: Curve<[f32; 3]>,
}

impl Default for LightingPreset {
    fn default() -> Self {
        Self {
            // Night: deep blue, dawn/dusk: warm, day: near white
            ambient_color: Curve::normalized(vec![
                (0.0, [0.05, 0.05, 0.1]),   // midnight
                (0.22, [0.05, 0.05, 0.1]),  // pre-dawn
                (0.27, [0.35, 0.25, 0.2]),  // dawn
                (0.35, [0.55, 0.55, 0.6]),  // morning
                (0.5, [0.65, 0.68, 0.7]),   // noon
                (0.7, [0.55, 0.45, 0.35]),  // pre-dusk
                (0.78, [0.25, 0.15, 0.15]), // dusk
                (0.85, [0.05, 0.05, 0.1]),  // night
            ]),
            fog_color: Curve::normalized(vec![
                (0.0, [0.02, 0.02, 0.05]),  // midnight
                (0.25, [0.5, 0.4, 0.3]),    // dawn
                (0.5, [0.75, 0.8, 0.85]),   // noon
                (0.75, [0.5, 0.3, 0.2]),    // dusk
                (0.85, [0.02, 0.02, 0.05]), // night
            ]),
            directional_color: Curve::normalized(vec![
                (0.0, [0.1, 0.1, 0.2]),     // midnight
                (0.25, [1.0, 0.55, 0.3]),   // sunrise
                (0.35, [1.0, 0.9, 0.8]),    // morning
                (0.5, [1.0, 0.98, 0.95]),   // noon
                (0.7, [1.0, 0.8, 0.55]),    // afternoon
                (0.75, [0.95, 0.4, 0.2]),   // sunset
                (0.8, [0.1, 0.1, 0.2]),     // night
            ]),
        }
    }
}

impl LightingPreset {
    /// Sample all three curves at normalized time `t`.
    pub fn evaluate(&self, t: f32) -> PresetColors {
        PresetColors {
            ambient: self.ambient_color.sample(t),
            fog: self.fog_color.sample(t),
            directional: self.directional_color.sample(t),
        }
    }
}

/// Colors sampled from a [`LightingPreset`] at a single time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetColors {
    pub ambient: [f32; 3],
    pub fog: [f32; 3],
    pub directional: [f32; 3],
}
