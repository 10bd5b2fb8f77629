//! Time of day tracking with day counting.

/// Tracks the current hour within a 24-hour cycle plus elapsed day count.
#[derive(Clone, Debug)]
pub struct TimeOfDay {
    /// Current hour, in the range `[0.0, 24.0)`.
    hour: f32,
    /// Number of full days that have elapsed.
    day_count: u32,
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl TimeOfDay {
    /// Create a new time starting at the given hour.
    pub fn new(start_hour: f32) -> Self {
        let mut t = Self {
            hour: start_hour.clamp(0.0, 24.0),
            day_count: 0,
        };
        if t.hour >= 24.0 {
            t.hour = 0.0;
        }
        t
    }

    /// Advance by `dt_seconds` scaled by `speed`, where one unit of speed
    /// means one in-game hour per real second. Returns the new hour.
    pub fn advance(&mut self, dt_seconds: f32, speed: f32) -> f32 {
        let raw = self.hour + dt_seconds * speed;

        // Closed-form wrap: stepping 24 at a time stalls once the float's
        // ulp exceeds the step, so derive the day delta by division.
        let days = (raw / 24.0).floor();
        self.hour = raw.rem_euclid(24.0);
        // rem_euclid can round up to exactly 24.0 for tiny negative inputs
        if self.hour >= 24.0 {
            self.hour = 0.0;
        }

        // Float-to-int casts saturate, matching the saturating day count
        if days >= 0.0 {
            self.day_count = self.day_count.saturating_add(days as u32);
        } else {
            self.day_count = self.day_count.saturating_sub((-days) as u32);
        }

        self.hour
    }

    /// Set the hour directly, clamping to `[0.0, 24.0]` and normalizing
    /// 24.0 to 0.0.
    pub fn set(&mut self, hour: f32) {
        self.hour = hour.clamp(0.0, 24.0);
        if self.hour >= 24.0 {
            self.hour = 0.0;
        }
    }

    /// Current hour in the range `[0.0, 24.0)`.
    #[inline]
    pub fn hour(&self) -> f32 {
        self.hour
    }

    /// Current time normalized to `[0.0, 1.0)`.
    #[inline]
    pub fn normalized(&self) -> f32 {
        self.hour / 24.0
    }

    /// Number of full days that have passed.
    #[inline]
    pub fn day_count(&self) -> u32 {
        self.day_count
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
