// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; measures and paints label/header paragraphs.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use livechart_core::{Size, TextMeasure};

use crate::to_skia_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(style: &livechart_core::TextStyle) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(to_skia_color(style.color));
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if style.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, style: &livechart_core::TextStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width of the longest line and total paragraph height.
    pub fn measure(&self, text: &str, style: &livechart_core::TextStyle) -> Size {
        let p = self.layout(text, style);
        Size::new(p.longest_line(), p.height())
    }

    /// Paragraphs paint from their top-left corner, which is the anchor the core uses.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &livechart_core::TextStyle) {
        let mut p = self.layout(text, style);
        p.paint(canvas, (x, y));
    }
}

impl TextMeasure for TextShaper {
    fn measure_text(&self, text: &str, style: &livechart_core::TextStyle) -> Size {
        self.measure(text, style)
    }
}
