//! Sun and moon orientation from normalized time of day.
//!
//! Both bodies sweep a full 360° of pitch per day around a fixed yaw tilt of
//! 170°, with the moon offset half a cycle from the sun. Enablement is a hard
//! on/off switch at the day-window boundaries, not a crossfade.

use glam::{EulerRot, Quat};

/// Yaw tilt applied to both the sun and the moon, in degrees.
pub const AXIS_TILT_DEGREES: f32 = 170.0;

/// Whether the given normalized time falls inside the day window
/// (6:00-18:00, both bounds inclusive).
#[inline]
pub fn is_daytime(t: f32) -> bool {
    (0.25..=0.75).contains(&t)
}

/// Orientation and enablement of a celestial light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialOrientation {
    /// Rotation about the horizontal axis, in degrees.
    pub pitch_degrees: f32,
    /// Fixed yaw tilt, in degrees.
    pub yaw_degrees: f32,
    /// Whether the light should be on at this time.
    pub enabled: bool,
}

impl CelestialOrientation {
    /// The orientation as a rotation quaternion (yaw about Y, then pitch
    /// about X).
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw_degrees.to_radians(),
            self.pitch_degrees.to_radians(),
            0.0,
        )
    }
}

/// Sun orientation at normalized time `t`. Pitch sweeps from -90° at
/// midnight so the sun crosses the horizon at t=0.25 (6:00) and t=0.75
/// (18:00); enabled exactly within that window.
pub fn sun_orientation(t: f32) -> CelestialOrientation {
    CelestialOrientation {
        pitch_degrees: t * 360.0 - 90.0,
        yaw_degrees: AXIS_TILT_DEGREES,
        enabled: is_daytime(t),
    }
}

/// Moon orientation at normalized time `t`. Offset half a cycle from the
/// sun; enabled exactly when the sun is not. The two lights are complements,
/// including at the t=0.25/0.75 boundaries.
pub fn moon_orientation(t: f32) -> CelestialOrientation {
    CelestialOrientation {
        pitch_degrees: t * 360.0 + 90.0,
        yaw_degrees: AXIS_TILT_DEGREES,
        enabled: !is_daytime(t),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
