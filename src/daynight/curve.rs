//! Generic keyframe interpolation for lighting parameters.
//!
//! [`Curve`] provides keyed linear interpolation over a wrapping domain.
//! Hour-keyed curves (exposure, sun size) use a period of 24.0; preset color
//! curves are keyed on normalized time and use a period of 1.0.

use serde::{Deserialize, Serialize};

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse linear interpolation: the fraction of `v` within `[a, b]`,
/// clamped to `[0.0, 1.0]`.
///
/// The clamping is load-bearing: the piecewise light interpolator samples
/// outside its nominal segment ranges at a few boundary hours and relies on
/// the result saturating.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    if (b - a).abs() < f32::EPSILON {
        return 0.0;
    }
    ((v - a) / (b - a)).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Lerp trait
// ---------------------------------------------------------------------------

/// Trait for types that can be linearly interpolated.
pub trait Lerp: Clone {
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for [f32; 3] {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        [
            self[0] + (other[0] - self[0]) * t,
            self[1] + (other[1] - self[1]) * t,
            self[2] + (other[2] - self[2]) * t,
        ]
    }
}

impl Lerp for [f32; 4] {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        [
            self[0] + (other[0] - self[0]) * t,
            self[1] + (other[1] - self[1]) * t,
            self[2] + (other[2] - self[2]) * t,
            self[3] + (other[3] - self[3]) * t,
        ]
    }
}

// ---------------------------------------------------------------------------
// Curve
// ---------------------------------------------------------------------------

/// Keyframe-based value curve with wrapping support over a fixed period.
///
/// Keys are `(position, value)` pairs sorted by position. Sampling at any
/// position returns a linearly interpolated value between the surrounding
/// keys, wrapping correctly around the period boundary (period == 0.0 of the
/// next cycle).
#[derive(Clone, Debug)]
pub struct Curve<T: Lerp> {
    period: f32,
    keys: Vec<(f32, T)>,
}

impl<T: Lerp> Curve<T> {
    /// Create a new curve from unsorted keys. Keys are sorted by position.
    ///
    /// # Panics
    /// Panics on an empty key list.
    pub fn new(period: f32, mut keys: Vec<(f32, T)>) -> Self {
        assert!(!keys.is_empty(), "Curve requires at least one key");
        keys.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        Self { period, keys }
    }

    /// Curve keyed by hour of day, wrapping at 24.0.
    pub fn hourly(keys: Vec<(f32, T)>) -> Self {
        Self::new(24.0, keys)
    }

    /// Curve keyed by normalized time, wrapping at 1.0.
    pub fn normalized(keys: Vec<(f32, T)>) -> Self {
        Self::new(1.0, keys)
    }

    /// Create a constant curve that always returns the same value.
    pub fn constant(period: f32, value: T) -> Self {
        Self {
            period,
            keys: vec![(0.0, value)],
        }
    }

    /// The wrapping period of the curve domain.
    #[inline]
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Sample the curve at position `t`, with wrapping.
    pub fn sample(&self, t: f32) -> T {
        if self.keys.len() == 1 {
            return self.keys[0].1.clone();
        }

        // Wrap t into [0, period)
        let t = ((t % self.period) + self.period) % self.period;

        let n = self.keys.len();

        // Find first key with position > t
        let upper_idx = self.keys.iter().position(|k| k.0 > t);

        match upper_idx {
            Some(0) | None => {
                // t is before the first key or past the last -> wrap:
                // interpolate between last key and first key across the period
                let (t_a, ref v_a) = self.keys[n - 1];
                let (t_b, ref v_b) = self.keys[0];
                let span = (t_b + self.period) - t_a;
                if span < 1e-6 {
                    return v_a.clone();
                }
                let offset = if t < t_a { t - t_a + self.period } else { t - t_a };
                v_a.lerp(v_b, offset / span)
            }
            Some(idx) => {
                let (t_a, ref v_a) = self.keys[idx - 1];
                let (t_b, ref v_b) = self.keys[idx];
                let span = t_b - t_a;
                if span < 1e-6 {
                    return v_a.clone();
                }
                v_a.lerp(v_b, (t - t_a) / span)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Serde support
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
struct CurveRepr<T> {
    period: f32,
    keys: Vec<(f32, T)>,
}

impl<T: Lerp + Serialize> Serialize for Curve<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CurveRepr {
            period: self.period,
            keys: self.keys.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Lerp + Deserialize<'de>> Deserialize<'de> for Curve<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = CurveRepr::<T>::deserialize(deserializer)?;
        if repr.keys.is_empty() {
            return Err(serde::de::Error::custom("curve has no keys"));
        }
        Ok(Self::new(repr.period, repr.keys))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq_f32(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    fn approx_eq_3(a: [f32; 3], b: [f32; 3], eps: f32) -> bool {
        (a[0] - b[0]).abs() < eps && (a[1] - b[1]).abs() < eps && (a[2] - b[2]).abs() < eps
    }

    #[test]
    fn test_lerp_endpoints() {
        assert!(approx_eq_f32(lerp(2.0, 6.0, 0.0), 2.0, 1e-6));
        assert!(approx_eq_f32(lerp(2.0, 6.0, 1.0), 6.0, 1e-6));
        assert!(approx_eq_f32(lerp(2.0, 6.0, 0.5), 4.0, 1e-6));
    }

    #[test]
    fn test_inverse_lerp_clamps() {
        assert!(approx_eq_f32(inverse_lerp(6.0, 15.0, 6.0), 0.0, 1e-6));
        assert!(approx_eq_f32(inverse_lerp(6.0, 15.0, 15.0), 1.0, 1e-6));
        // Out-of-range samples saturate rather than extrapolate
        assert!(approx_eq_f32(inverse_lerp(0.0, 6.0, 18.0), 1.0, 1e-6));
        assert!(approx_eq_f32(inverse_lerp(15.0, 17.0, 17.9), 1.0, 1e-6));
        assert!(approx_eq_f32(inverse_lerp(4.0, 6.0, 2.0), 0.0, 1e-6));
    }

    #[test]
    fn test_inverse_lerp_degenerate_range() {
        assert!(approx_eq_f32(inverse_lerp(5.0, 5.0, 5.0), 0.0, 1e-6));
    }

    #[test]
    fn test_single_key_returns_constant() {
        let curve = Curve::constant(24.0, 0.5_f32);
        assert!(approx_eq_f32(curve.sample(0.0), 0.5, 1e-6));
        assert!(approx_eq_f32(curve.sample(12.0), 0.5, 1e-6));
        assert!(approx_eq_f32(curve.sample(23.9), 0.5, 1e-6));
    }

    #[test]
    #[should_panic(expected = "at least one key")]
    fn test_new_rejects_empty_keys() {
        let _ = Curve::<f32>::new(24.0, vec![]);
    }

    #[test]
    fn test_deserialize_rejects_empty_keys() {
        // A hand-edited config must fail at load, not on the first sample
        let result = serde_json::from_str::<Curve<f32>>(r#"{"period":24.0,"keys":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_basic_interpolation_f32() {
        let curve = Curve::hourly(vec![(0.0, 0.0_f32), (24.0, 24.0)]);
        assert!(approx_eq_f32(curve.sample(12.0), 12.0, 1e-4));
        assert!(approx_eq_f32(curve.sample(6.0), 6.0, 1e-4));
    }

    #[test]
    fn test_basic_interpolation_vec3() {
        let curve = Curve::normalized(vec![
            (0.0, [0.0_f32, 0.0, 0.0]),
            (0.5, [1.0, 1.0, 1.0]),
        ]);
        let mid = curve.sample(0.25);
        assert!(approx_eq_3(mid, [0.5, 0.5, 0.5], 1e-4));
    }

    #[test]
    fn test_wrapping_around_midnight() {
        // Key at 22:00 = 0.0, key at 4:00 = 1.0; span across midnight is 6h
        let curve = Curve::hourly(vec![(4.0, 1.0_f32), (22.0, 0.0)]);

        assert!(approx_eq_f32(curve.sample(22.0), 0.0, 1e-4));
        assert!(approx_eq_f32(curve.sample(4.0), 1.0, 1e-4));
        // 1:00 is 3 hours into the 6-hour span
        assert!(approx_eq_f32(curve.sample(1.0), 0.5, 1e-4));
        assert!(approx_eq_f32(curve.sample(23.0), 1.0 / 6.0, 1e-4));
    }

    #[test]
    fn test_wrapping_normalized_period() {
        let curve = Curve::normalized(vec![(0.9, [1.0_f32, 0.0, 0.0]), (0.1, [0.0, 0.0, 1.0])]);
        // Midpoint across the wrap at t=0.0
        let mid = curve.sample(0.0);
        assert!(approx_eq_3(mid, [0.5, 0.0, 0.5], 1e-4));
    }

    #[test]
    fn test_multi_key_curve() {
        let curve = Curve::hourly(vec![
            (0.0, 0.0_f32),
            (6.0, 0.5),
            (12.0, 1.0),
            (18.0, 0.5),
        ]);
        assert!(approx_eq_f32(curve.sample(6.0), 0.5, 1e-4));
        assert!(approx_eq_f32(curve.sample(12.0), 1.0, 1e-4));
        assert!(approx_eq_f32(curve.sample(3.0), 0.25, 1e-4));
        assert!(approx_eq_f32(curve.sample(9.0), 0.75, 1e-4));
    }

    #[test]
    fn test_negative_position_wraps() {
        let curve = Curve::hourly(vec![(0.0, 0.0_f32), (12.0, 1.0)]);
        // -1.0 wraps to 23.0: 11 hours into the 12-hour span from 12 back to 0
        let val = curve.sample(-1.0);
        let expected = 1.0 + (0.0 - 1.0) * (11.0 / 12.0);
        assert!(approx_eq_f32(val, expected, 1e-4));
    }
}
