//! Day/night lighting control.
//!
//! A deterministic, piecewise-interpolated environmental parameter
//! controller driven by a wrapping 24-hour clock. The main entry point is
//! [`DayNightSystem`], updated once per frame with an [`EnvironmentSink`]
//! that receives sun/moon orientation, light color temperature and
//! intensity, skybox selection, and ambient/fog colors.

pub mod celestial;
pub mod config;
pub mod curve;
pub mod light;
pub mod preset;
pub mod sink;
pub mod skybox;
pub mod time;

// Re-exports
pub use celestial::{CelestialOrientation, is_daytime, moon_orientation, sun_orientation};
pub use config::DayNightConfig;
pub use curve::{Curve, Lerp, inverse_lerp, lerp};
pub use light::{SunLightProperties, sky_tint_at, sun_light_at};
pub use preset::{LightingPreset, PresetColors};
pub use sink::{CaptureSink, DirectionalLight, EnvironmentSink};
pub use skybox::{Skybox, SkyboxSelector, select_skybox};
pub use time::TimeOfDay;

// ---------------------------------------------------------------------------
// DayNightSystem
// ---------------------------------------------------------------------------

/// Main day/night driver. Call [`update`](Self::update) each frame with the
/// frame delta and an environment sink.
///
/// Without a lighting preset the update is a no-op: nothing is written to
/// the sink and time does not advance.
pub struct DayNightSystem {
    config: DayNightConfig,
    time: TimeOfDay,
    preset: Option<LightingPreset>,
    skybox: SkyboxSelector,
}

impl DayNightSystem {
    /// Create a new system from the given configuration, without a preset.
    pub fn new(config: DayNightConfig) -> Self {
        let time = TimeOfDay::new(config.start_hour);
        Self {
            config,
            time,
            preset: None,
            skybox: SkyboxSelector::new(),
        }
    }

    /// Create a new system with a lighting preset installed.
    pub fn with_preset(config: DayNightConfig, preset: LightingPreset) -> Self {
        let mut sys = Self::new(config);
        sys.preset = Some(preset);
        sys
    }

    /// Install or replace the lighting preset.
    pub fn set_preset(&mut self, preset: LightingPreset) {
        self.preset = Some(preset);
    }

    /// Advance time by `dt` real seconds and push all lighting state to the
    /// sink. Returns the hour after the tick.
    pub fn update(&mut self, dt: f32, sink: &mut dyn EnvironmentSink) -> f32 {
        let Some(preset) = &self.preset else {
            // Missing required preset: skip the whole tick
            return self.time.hour();
        };

        if !self.config.time_paused {
            self.time.advance(dt, self.config.speed_of_day);
        }

        let hour = self.time.hour();
        let t = self.time.normalized();

        // Preset-driven scene colors
        let colors = preset.evaluate(t);
        sink.set_ambient_color(colors.ambient);
        sink.set_fog_color(colors.fog);

        // Sun: orientation plus piecewise temperature/intensity
        let sun = sun_orientation(t);
        let props = sun_light_at(
            hour,
            self.config.sunrise_temperature,
            self.config.afternoon_temperature,
            self.config.sunset_temperature,
        );
        sink.set_sun(&DirectionalLight {
            rotation: sun.rotation(),
            color: colors.directional,
            temperature: props.temperature,
            intensity: props.intensity,
            enabled: sun.enabled,
        });

        // Moon is optional; skipped entirely when absent
        if self.config.has_moon {
            let moon = moon_orientation(t);
            sink.set_moon(moon.rotation(), moon.enabled);
        }

        // Skybox swap refreshes the environment only on transition
        self.skybox.apply(t, sink);

        // Skybox material attributes
        sink.set_sky_tint(sky_tint_at(
            hour,
            self.config.morning_sky_tint,
            self.config.afternoon_sky_tint,
            self.config.evening_sky_tint,
        ));
        sink.set_sky_exposure(self.config.exposure_curve.sample(hour));
        sink.set_sun_disc_size(self.config.sun_size_curve.sample(hour));

        hour
    }

    /// Set the hour directly (manual time control while paused).
    pub fn set_hour(&mut self, hour: f32) {
        self.time.set(hour);
    }

    /// Current hour in `[0.0, 24.0)`.
    #[inline]
    pub fn hour(&self) -> f32 {
        self.time.hour()
    }

    /// Number of full in-game days elapsed.
    #[inline]
    pub fn day_count(&self) -> u32 {
        self.time.day_count()
    }

    /// Whether the current time falls in the day window.
    #[inline]
    pub fn is_daytime(&self) -> bool {
        is_daytime(self.time.normalized())
    }

    /// Immutable reference to the configuration.
    #[inline]
    pub fn config(&self) -> &DayNightConfig {
        &self.config
    }

    /// Mutable reference to the configuration. Takes effect on the next
    /// update.
    #[inline]
    pub fn config_mut(&mut self) -> &mut DayNightConfig {
        &mut self.config
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
