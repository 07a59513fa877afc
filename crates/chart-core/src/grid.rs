// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers for spacing-generated axis labels.

use crate::types::MAX_GENERATED_LABELS;

/// First tick of a spacing-aligned run: `min + |min mod spacing|`.
#[inline]
pub fn first_tick(min: f64, spacing: f64) -> f64 {
    (min % spacing).abs() + min
}

/// Ticks from [`first_tick`] up to and including `max`, `spacing` apart.
///
/// Spacing `<= 0` (or non-finite) yields no ticks. Values are accumulated by repeated
/// addition and capped at [`MAX_GENERATED_LABELS`].
pub fn aligned_ticks(min: f64, max: f64, spacing: f64) -> Vec<f64> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut v = first_tick(min, spacing);
    while v <= max && out.len() < MAX_GENERATED_LABELS {
        out.push(v);
        v += spacing;
    }
    out
}
