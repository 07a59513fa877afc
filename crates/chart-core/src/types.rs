// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (default sizes, paddings, label margins).

/// Default surface width in pixels.
pub const WIDTH: i32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 320;

/// Label offset from the chart border, as a fraction of the label font size.
pub const LABEL_MARGIN_FACTOR: f32 = 0.3;

/// Upper bound on spacing-generated labels per axis.
pub const MAX_GENERATED_LABELS: usize = 1_000;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Build insets from measured float extents, truncating toward zero.
    pub fn from_extents(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        let px = |v: f32| if v.is_finite() && v > 0.0 { v as u32 } else { 0 };
        Self::new(px(left), px(right), px(top), px(bottom))
    }

    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}
