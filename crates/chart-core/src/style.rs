// File: crates/chart-core/src/style.rs
// Summary: Immutable value-type style descriptors (colour, stroke, fill, text).

/// Straight RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const TRANSPARENT: Color = Color::argb(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Stroke descriptor for grid lines and series polylines.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
    /// On/off interval lengths in pixels; `None` draws solid.
    pub dash: Option<Vec<f32>>,
}

impl LineStyle {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Color, width: f32, intervals: Vec<f32>) -> Self {
        Self { color, width, dash: Some(intervals) }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(Color::LIGHT_GRAY, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStyle {
    pub color: Color,
}

impl FillStyle {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
    pub bold: bool,
}

impl TextStyle {
    pub const fn new(color: Color, size: f32) -> Self {
        Self { color, size, bold: false }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, 12.0)
    }
}
