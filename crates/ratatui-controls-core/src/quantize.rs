//! Range configuration and value quantization.
//!
//! Values are aligned with [`RangeConfig::align`], which is `clamp(snap(v))`. The step grid is
//! anchored at `min`. When `step` does not evenly divide the range, `max` is reachable only by
//! jumping to it directly (End); aligned values snap to the grid like any other.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RangeError {
    #[error("empty range: min ({min}) must be less than max ({max})")]
    EmptyRange { min: f64, max: f64 },
    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("range bounds and step must be finite")]
    NotFinite,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl RangeConfig {
    /// Builds a range without validation.
    ///
    /// Callers must guarantee `min < max` and `step > 0`; quantization results are unspecified
    /// otherwise. Use [`RangeConfig::try_new`] for configuration that comes from users.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        debug_assert!(min < max, "min must be less than max");
        debug_assert!(step > 0.0, "step must be positive");
        Self { min, max, step }
    }

    pub fn try_new(min: f64, max: f64, step: f64) -> Result<Self, RangeError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(RangeError::NotFinite);
        }
        if min >= max {
            return Err(RangeError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(RangeError::NonPositiveStep(step));
        }
        Ok(Self { min, max, step })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn snap(&self, v: f64) -> f64 {
        snap(v, self.min, self.step)
    }

    pub fn clamp(&self, v: f64) -> f64 {
        clamp(v, self.min, self.max)
    }

    /// `clamp(snap(v))`.
    ///
    /// Not idempotent at an off-grid `max`: values past the last grid point clamp to `max`,
    /// which itself snaps back down to that grid point.
    pub fn align(&self, v: f64) -> f64 {
        self.clamp(self.snap(v))
    }
}

/// Rounds `v` to the nearest point of the grid `min + k * step`, ties rounding up.
///
/// Rounding is local to each call: an off-grid value moved by `step` may land more than one
/// step away from where it started (min 1, step 2: `2 + 2` snaps to `5`, not `3`).
pub fn snap(v: f64, min: f64, step: f64) -> f64 {
    if step == 1.0 {
        return v;
    }
    let gap = (v - min).rem_euclid(step);
    if gap == 0.0 {
        return v;
    }
    if gap * 2.0 >= step {
        return v - gap + step;
    }
    v - gap
}

pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v < min {
        return min;
    }
    if v > max {
        return max;
    }
    v
}

/// Converts a pointer column into a raw (unaligned) value on a bar of the given geometry.
///
/// `bar_width` must be positive. The result is rounded to an integer and not clamped.
pub fn from_offset(page_x: f64, bar_left: f64, bar_width: f64, min: f64, max: f64) -> f64 {
    let ratio = (page_x - bar_left) / bar_width;
    ((max - min) * ratio + min).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<f64> {
        (-40..=240).map(|i| i as f64 * 0.5).collect()
    }

    #[test]
    fn clamp_is_identity_inside_range() {
        let r = RangeConfig::new(1.0, 100.0, 1.0);
        for v in sample().into_iter().filter(|v| (1.0..=100.0).contains(v)) {
            assert_eq!(r.clamp(v), v);
        }
    }

    #[test]
    fn clamp_pins_outside_values() {
        let r = RangeConfig::new(1.0, 100.0, 1.0);
        assert_eq!(r.clamp(-5.0), 1.0);
        assert_eq!(r.clamp(0.999), 1.0);
        assert_eq!(r.clamp(100.5), 100.0);
        assert_eq!(r.clamp(1e9), 100.0);
    }

    #[test]
    fn unit_step_snap_is_identity() {
        for v in sample() {
            assert_eq!(snap(v, 1.0, 1.0), v);
            assert_eq!(snap(v + 0.25, 0.0, 1.0), v + 0.25);
        }
    }

    #[test]
    fn snapped_values_sit_on_grid_anchored_at_min() {
        let (min, step) = (1.0, 5.0);
        for v in sample() {
            let s = snap(v, min, step);
            assert_eq!((s - min).rem_euclid(step), 0.0, "v={v} snapped to {s}");
        }
    }

    #[test]
    fn exact_half_step_rounds_up() {
        assert_eq!(snap(2.0, 0.0, 4.0), 4.0);
        assert_eq!(snap(1.5, 0.0, 4.0), 0.0);
        assert_eq!(snap(2.0, 1.0, 2.0), 3.0);
        assert_eq!(snap(6.0, 1.0, 10.0), 11.0);
        assert_eq!(snap(5.5, 1.0, 10.0), 1.0);
    }

    #[test]
    fn align_is_idempotent_when_max_is_on_grid() {
        for (min, max, step) in [(1.0, 100.0, 1.0), (1.0, 11.0, 2.0), (0.0, 9.0, 3.0)] {
            let r = RangeConfig::new(min, max, step);
            for v in sample() {
                let once = r.align(v);
                assert_eq!(r.align(once), once, "range {r:?} v={v}");
            }
        }
    }

    #[test]
    fn off_grid_increment_skips_an_intermediate_step() {
        // Boundary case kept on purpose: 2 is off the grid {1, 3, 5, ...}.
        let r = RangeConfig::new(1.0, 10.0, 2.0);
        assert_eq!(r.align(2.0 + 2.0), 5.0);
    }

    #[test]
    fn max_off_grid_snaps_back_inside() {
        let r = RangeConfig::new(1.0, 10.0, 2.0);
        assert_eq!(r.align(10.0 - 2.0), 9.0);
        assert_eq!(r.align(11.0), 10.0);
    }

    #[test]
    fn from_offset_maps_bar_edges_to_bounds() {
        assert_eq!(from_offset(10.0, 10.0, 50.0, 0.0, 100.0), 0.0);
        assert_eq!(from_offset(60.0, 10.0, 50.0, 0.0, 100.0), 100.0);
        assert_eq!(from_offset(35.0, 10.0, 50.0, 0.0, 100.0), 50.0);
        assert_eq!(from_offset(0.0, 10.0, 50.0, 0.0, 100.0), -20.0);
    }

    #[test]
    fn off_grid_max_snaps_like_any_value() {
        let r = RangeConfig::new(0.0, 10.0, 3.0);
        assert_eq!(r.align(10.0), clamp(snap(10.0, 0.0, 3.0), 0.0, 10.0));
        assert_eq!(r.align(10.0), 9.0);
        assert_eq!(r.align(11.0), 10.0);
        assert_eq!(r.align(9.5), 9.0);
    }

    #[test]
    fn try_new_rejects_invalid_ranges() {
        assert_eq!(
            RangeConfig::try_new(5.0, 5.0, 1.0),
            Err(RangeError::EmptyRange { min: 5.0, max: 5.0 })
        );
        assert_eq!(
            RangeConfig::try_new(0.0, 5.0, 0.0),
            Err(RangeError::NonPositiveStep(0.0))
        );
        assert_eq!(
            RangeConfig::try_new(0.0, f64::INFINITY, 1.0),
            Err(RangeError::NotFinite)
        );
        assert!(RangeConfig::try_new(1.0, 10.0, 2.0).is_ok());
    }
}
