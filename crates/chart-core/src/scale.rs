// File: crates/chart-core/src/scale.rs
// Summary: Linear data-range to screen-range transform used by both axis orientations.

/// Data coordinate (sample x or y).
pub type Value = f64;

/// Maps `[min, max]` onto `[screen_min, screen_max]`.
///
/// When `inverted` is set, larger values land closer to `screen_min`, which is what a
/// vertical axis needs because screen y grows downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub min: Value,
    pub max: Value,
    pub screen_min: f32,
    pub screen_max: f32,
    pub inverted: bool,
}

impl LinearScale {
    pub fn new(min: Value, max: Value, inverted: bool) -> Self {
        Self { min, max, screen_min: 0.0, screen_max: 1.0, inverted }
    }

    /// Pixels per data unit.
    #[inline]
    pub fn scale(&self) -> f64 {
        (self.screen_max as f64 - self.screen_min as f64) / (self.max - self.min)
    }

    /// Affine map to screen space.
    ///
    /// Evaluated as an interpolation between the two screen bounds so the data bounds
    /// land on the screen bounds exactly.
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let t = (v - self.min) / (self.max - self.min);
        let (from, to) = if self.inverted {
            (self.screen_max as f64, self.screen_min as f64)
        } else {
            (self.screen_min as f64, self.screen_max as f64)
        };
        (from * (1.0 - t) + to * t) as f32
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> Value {
        let span = self.screen_max as f64 - self.screen_min as f64;
        if span == 0.0 {
            return self.min;
        }
        let t = if self.inverted {
            (self.screen_max as f64 - px as f64) / span
        } else {
            (px as f64 - self.screen_min as f64) / span
        };
        self.min + t * (self.max - self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_points_follow_the_affine_formula() {
        let mut s = LinearScale::new(-2.0, 6.0, false);
        s.screen_min = 10.0;
        s.screen_max = 410.0;
        assert_eq!(s.scale(), 50.0);
        assert!((s.to_px(0.0) - 110.0).abs() < 1e-4);
        assert!((s.from_px(110.0) - 0.0).abs() < 1e-9);

        s.inverted = true;
        assert!((s.to_px(0.0) - (410.0 - 100.0)).abs() < 1e-4);
        assert!((s.from_px(310.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_are_exact() {
        let mut s = LinearScale::new(0.1, 0.7, false);
        s.screen_min = 3.3;
        s.screen_max = 97.1;
        assert_eq!(s.to_px(0.1), 3.3);
        assert_eq!(s.to_px(0.7), 97.1);
        s.inverted = true;
        assert_eq!(s.to_px(0.1), 97.1);
        assert_eq!(s.to_px(0.7), 3.3);
    }
}
