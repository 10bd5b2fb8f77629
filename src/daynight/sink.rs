//! Environment sink: the seam between the day/night driver and a host engine.
//!
//! The driver never touches engine globals; every per-tick output goes
//! through an [`EnvironmentSink`] passed into the update call. A host engine
//! implements the trait over its scene lighting state; [`CaptureSink`]
//! records the applied values for tests and headless tooling.

use glam::Quat;

use crate::daynight::skybox::Skybox;

/// Full set of properties applied to the directional (sun) light each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub rotation: Quat,
    /// Linear RGB color from the lighting preset.
    pub color: [f32; 3],
    /// Color temperature in Kelvin.
    pub temperature: f32,
    /// Unitless intensity multiplier.
    pub intensity: f32,
    pub enabled: bool,
}

/// Receives scene lighting state from the day/night driver.
pub trait EnvironmentSink {
    /// Scene-wide ambient light color.
    fn set_ambient_color(&mut self, color: [f32; 3]);

    /// Fog color.
    fn set_fog_color(&mut self, color: [f32; 3]);

    /// Directional sun light transform, color, temperature, intensity and
    /// enabled flag, applied together.
    fn set_sun(&mut self, light: &DirectionalLight);

    /// Secondary moon light transform and enabled flag. Only called when the
    /// configuration has a moon.
    fn set_moon(&mut self, rotation: Quat, enabled: bool);

    /// Active skybox selection.
    fn set_skybox(&mut self, skybox: Skybox);

    /// Environment lighting refresh, triggered only on a skybox transition.
    /// Potentially expensive on a real engine.
    fn refresh_environment(&mut self);

    /// Skybox tint color.
    fn set_sky_tint(&mut self, tint: [f32; 3]);

    /// Skybox exposure.
    fn set_sky_exposure(&mut self, exposure: f32);

    /// Sun disc size on the skybox material.
    fn set_sun_disc_size(&mut self, size: f32);
}

// ---------------------------------------------------------------------------
// CaptureSink
// ---------------------------------------------------------------------------

/// Sink that records the last applied values plus a refresh counter.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    pub ambient_color: [f32; 3],
    pub fog_color: [f32; 3],
    pub sun: Option<DirectionalLight>,
    pub moon_rotation: Option<Quat>,
    pub moon_enabled: bool,
    pub skybox: Option<Skybox>,
    pub sky_tint: [f32; 3],
    pub sky_exposure: f32,
    pub sun_disc_size: f32,
    /// Number of environment refreshes triggered so far.
    pub refresh_count: u32,
}

impl EnvironmentSink for CaptureSink {
    fn set_ambient_color(&mut self, color: [f32; 3]) {
        self.ambient_color = color;
    }

    fn set_fog_color(&mut self, color: [f32; 3]) {
        self.fog_color = color;
    }

    fn set_sun(&mut self, light: &DirectionalLight) {
        self.sun = Some(*light);
    }

    fn set_moon(&mut self, rotation: Quat, enabled: bool) {
        self.moon_rotation = Some(rotation);
        self.moon_enabled = enabled;
    }

    fn set_skybox(&mut self, skybox: Skybox) {
        self.skybox = Some(skybox);
    }

    fn refresh_environment(&mut self) {
        self.refresh_count += 1;
    }

    fn set_sky_tint(&mut self, tint: [f32; 3]) {
        self.sky_tint = tint;
    }

    fn set_sky_exposure(&mut self, exposure: f32) {
        self.sky_exposure = exposure;
    }

    fn set_sun_disc_size(&mut self, size: f32) {
        self.sun_disc_size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_sink_records_values() {
        let mut sink = CaptureSink::default();
        sink.set_ambient_color([0.1, 0.2, 0.3]);
        sink.set_sky_tint([0.4, 0.5, 0.6]);
        sink.refresh_environment();
        sink.refresh_environment();

        assert_eq!(sink.ambient_color, [0.1, 0.2, 0.3]);
        assert_eq!(sink.sky_tint, [0.4, 0.5, 0.6]);
        assert_eq!(sink.refresh_count, 2);
    }
}
