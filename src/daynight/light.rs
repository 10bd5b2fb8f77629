//! Piecewise-linear light property interpolation over the 24-hour cycle.
//!
//! Temperature/intensity and sky tint are each driven by a fixed else-if
//! chain of linear segments. The chains are kept branch-for-branch faithful
//! to the tuned behavior they replace, including the degenerate flat
//! segments and the boundary quirks at hour 17/18 and at the midnight wrap.
//! Tests at the bottom pin those quirks so they are not "fixed" silently.

use crate::daynight::curve::{Lerp, inverse_lerp, lerp};

/// Color temperature and intensity for the directional (sun) light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunLightProperties {
    /// Color temperature in Kelvin.
    pub temperature: f32,
    /// Unitless intensity multiplier.
    pub intensity: f32,
}

/// Compute the directional light temperature and intensity at `hour`.
///
/// Segment boundaries for intensity: [6,7.5), [7.5,15), [15,16), [16,18),
/// (18,24) flat at 0.1, and a final catch-all covering [0,6] plus exactly
/// hour 18 (the source chain leaves 18 to the catch-all, which saturates its
/// inverse-lerp to 1).
pub fn sun_light_at(
    hour: f32,
    sunrise_temperature: f32,
    afternoon_temperature: f32,
    sunset_temperature: f32,
) -> SunLightProperties {
    let (temperature, intensity);

    if hour >= 6.0 && hour < 15.0 {
        let t = inverse_lerp(6.0, 15.0, hour);
        temperature = lerp(sunrise_temperature, afternoon_temperature, t);
        if hour < 7.5 {
            let t = inverse_lerp(6.0, 7.5, hour);
            intensity = lerp(0.002, 0.05, t);
        } else {
            let t = inverse_lerp(7.5, 15.0, hour);
            intensity = lerp(0.05, 1.0, t);
        }
    } else if hour >= 15.0 && hour < 18.0 {
        let t = inverse_lerp(15.0, 18.0, hour);
        temperature = lerp(afternoon_temperature, sunset_temperature, t);
        if hour < 16.0 {
            let t = inverse_lerp(15.0, 16.0, hour);
            intensity = lerp(1.0, 0.05, t);
        } else {
            let t = inverse_lerp(16.0, 18.0, hour);
            intensity = lerp(0.05, 0.001, t);
        }
    } else if hour > 18.0 && hour < 24.0 {
        let t = inverse_lerp(18.0, 24.0, hour);
        temperature = lerp(sunset_temperature, sunrise_temperature, t);
        // Degenerate segment: flat 0.1 through the evening
        intensity = lerp(0.1, 0.1, t);
    } else {
        // [0,6], plus exactly hour 18 where the saturated fraction is 1.0
        let t = inverse_lerp(0.0, 6.0, hour);
        temperature = lerp(sunset_temperature, sunrise_temperature, t);
        intensity = lerp(0.1, 0.002, t);
    }

    SunLightProperties {
        temperature,
        intensity,
    }
}

/// Compute the skybox tint color at `hour` from the three configured tints.
///
/// The branch order matters: the `[15,18)` branch shadows `[17,18)`, so the
/// `[17,23)` condition effectively starts at 18 with its fraction already at
/// 1/6. The `[15,18)` branch interpolates against a 17.0 endpoint and is
/// clamped flat at the afternoon tint from 17:00 onward.
pub fn sky_tint_at(
    hour: f32,
    morning: [f32; 3],
    afternoon: [f32; 3],
    evening: [f32; 3],
) -> [f32; 3] {
    if hour >= 6.0 && hour < 15.0 {
        // Degenerate segment: flat at the morning tint
        let t = inverse_lerp(6.0, 15.0, hour);
        morning.lerp(&morning, t)
    } else if hour >= 15.0 && hour < 18.0 {
        let t = inverse_lerp(15.0, 17.0, hour);
        morning.lerp(&afternoon, t)
    } else if hour >= 17.0 && hour < 23.0 {
        let t = inverse_lerp(17.0, 23.0, hour);
        afternoon.lerp(&evening, t)
    } else if hour >= 23.0 && hour <= 24.0 {
        let t = inverse_lerp(23.0, 24.0, hour);
        evening.lerp(&evening, t)
    } else if hour >= 0.0 && hour <= 4.0 {
        let t = inverse_lerp(0.0, 4.0, hour);
        evening.lerp(&evening, t)
    } else {
        let t = inverse_lerp(4.0, 6.0, hour);
        evening.lerp(&morning, t)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
