//! Day/night configuration: author-tunable temperatures, tints and curves.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Error;
use crate::daynight::curve::Curve;

/// Full day/night configuration. Hour-keyed curves wrap over a 24-hour
/// cycle; all values are author-tunable parameters rather than algorithmic
/// constants.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DayNightConfig {
    /// Starting hour (0-24).
    pub start_hour: f32,
    /// In-game hours advanced per real second.
    pub speed_of_day: f32,
    /// Whether time advancement is paused (hour is then driven manually).
    pub time_paused: bool,
    /// Whether the scene has a secondary moon light.
    pub has_moon: bool,

    // -- Directional light temperature endpoints (Kelvin) ------------------
    pub sunrise_temperature: f32,
    pub afternoon_temperature: f32,
    pub sunset_temperature: f32,

    // -- Sky tint endpoints (linear RGB) -----------------------------------
    pub morning_sky_tint: [f32; 3],
    pub afternoon_sky_tint: [f32; 3],
    pub evening_sky_tint: [f32; 3],

    // -- Hour-keyed skybox material curves ---------------------------------
    /// Skybox exposure over the day.
    pub exposure_curve: Curve<f32>,
    /// Sun disc size over the day.
    pub sun_size_curve: Curve<f32>,
}

impl Default for DayNightConfig {
    fn default() -> Self {
        Self {
            start_hour: 10.0,
            speed_of_day: 1.0,
            time_paused: false,
            has_moon: true,

            sunrise_temperature: 4000.0,
            afternoon_temperature: 15000.0,
            sunset_temperature: 15000.0,

            morning_sky_tint: [0.6, 0.7, 0.9],
            afternoon_sky_tint: [0.9, 0.6, 0.4],
            evening_sky_tint: [0.1, 0.1, 0.25],

            // Bright through the day, dim at night
            exposure_curve: Curve::hourly(vec![
                (0.0, 0.3),  // midnight
                (5.0, 0.3),  // pre-dawn
                (7.0, 0.9),  // sunrise
                (12.0, 1.3), // noon
                (17.0, 0.9), // sunset
                (19.0, 0.3), // night
            ]),

            // Large disc at the horizon, small at noon
            sun_size_curve: Curve::hourly(vec![
                (0.0, 0.04),
                (6.0, 0.09),
                (12.0, 0.04),
                (18.0, 0.09),
                (20.0, 0.04),
            ]),
        }
    }
}

impl DayNightConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
