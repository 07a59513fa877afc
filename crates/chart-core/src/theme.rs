// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark colour presets for charts and monitor widgets.

use crate::style::{Color, LineStyle, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub label: Color,
    pub header: Color,
    /// Series colours in the order monitors hand them out.
    pub palette: [Color; 3],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            grid: Color::LIGHT_GRAY,
            label: Color::BLACK,
            header: Color::BLACK,
            palette: [
                Color::rgb(0, 123, 255),
                Color::rgb(220, 60, 60),
                Color::rgb(20, 160, 90),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            grid: Color::rgb(60, 60, 66),
            label: Color::rgb(235, 235, 245),
            header: Color::rgb(235, 235, 245),
            palette: [
                Color::rgb(64, 160, 255),
                Color::rgb(255, 110, 90),
                Color::rgb(40, 200, 120),
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::BLACK,
            grid: Color::rgb(0x44, 0x44, 0x44),
            label: Color::WHITE,
            header: Color::WHITE,
            palette: [
                Color::rgb(0x00, 0xff, 0xff),
                Color::rgb(0xff, 0x00, 0xff),
                Color::rgb(0x00, 0xff, 0x00),
            ],
        }
    }

    pub fn grid_style(&self) -> LineStyle {
        LineStyle::solid(self.grid, 1.0)
    }

    pub fn label_style(&self, size: f32) -> TextStyle {
        TextStyle::new(self.label, size)
    }

    pub fn header_style(&self, size: f32) -> TextStyle {
        TextStyle::new(self.header, size).bold()
    }

    /// Palette colour `i`, wrapping around.
    pub fn series_color(&self, i: usize) -> Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
