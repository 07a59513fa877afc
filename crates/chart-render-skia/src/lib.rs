// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: Surface implementation plus PNG and RGBA export of charts.

use anyhow::{Context, Result};
use skia_safe as skia;

use livechart_core::types::{HEIGHT, WIDTH};
use livechart_core::{Chart, Color, FillStyle, LineStyle, Point, Rect, Size, Surface, TextMeasure, TextStyle};

mod text;
pub use text::TextShaper;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Cleared before the chart paints; the chart's own background (if any) goes on top.
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, background: Color::WHITE }
    }
}

pub(crate) fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_point(p: Point) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

/// [`Surface`] over a borrowed Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper }
    }

    fn stroke_paint(style: &LineStyle) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.width);
        paint.set_color(to_skia_color(style.color));
        if let Some(intervals) = style.dash.as_deref() {
            paint.set_path_effect(skia::PathEffect::dash(intervals, 0.0));
        }
        paint
    }

    fn fill_paint(color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia_color(color));
        paint
    }
}

fn path_through(points: &[Point]) -> Option<skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut path = skia::Path::new();
    path.move_to(to_skia_point(*first));
    for p in rest {
        path.line_to(to_skia_point(*p));
    }
    Some(path)
}

impl TextMeasure for SkiaSurface<'_> {
    fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        self.shaper.measure(text, style)
    }
}

impl Surface for SkiaSurface<'_> {
    fn draw_line(&mut self, from: Point, to: Point, style: &LineStyle) {
        self.canvas.draw_line(to_skia_point(from), to_skia_point(to), &Self::stroke_paint(style));
    }

    fn draw_polyline(&mut self, points: &[Point], style: &LineStyle) {
        if let Some(path) = path_through(points) {
            self.canvas.draw_path(&path, &Self::stroke_paint(style));
        }
    }

    fn fill_polygon(&mut self, points: &[Point], style: &FillStyle) {
        if let Some(mut path) = path_through(points) {
            path.close();
            self.canvas.draw_path(&path, &Self::fill_paint(style.color));
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = skia::Rect::from_xywh(rect.left, rect.top, rect.width, rect.height);
        self.canvas.draw_rect(r, &Self::fill_paint(color));
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.shaper.draw_top_left(self.canvas, text, origin.x, origin.y, style);
    }
}

fn draw(chart: &mut Chart, opts: &RenderOptions) -> Result<skia::Surface> {
    // Create raster surface
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let shaper = TextShaper::new();
    {
        let canvas = surface.canvas();
        canvas.clear(to_skia_color(opts.background));
        let mut target = SkiaSurface::new(canvas, &shaper);
        let bounds = Rect::from_ltwh(0.0, 0.0, opts.width as f32, opts.height as f32);
        chart.render(&mut target, bounds).context("chart render failed")?;
    }
    tracing::trace!(width = opts.width, height = opts.height, "rasterised chart");
    Ok(surface)
}

/// Render the chart into an in-memory PNG.
pub fn render_to_png_bytes(chart: &mut Chart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = draw(chart, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
pub fn render_to_png(chart: &mut Chart, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(chart, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Render into an unpremultiplied RGBA8 buffer: `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(chart: &mut Chart, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = draw(chart, opts)?;
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let row_bytes = opts.width.max(0) as usize * 4;
    let mut pixels = vec![0u8; row_bytes * opts.height.max(0) as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("reading back {}x{} pixels failed", opts.width, opts.height);
    }
    Ok((pixels, opts.width, opts.height, row_bytes))
}
