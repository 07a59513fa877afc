// File: crates/chart-core/src/surface.rs
// Summary: Immediate-mode drawing surface the paint pipeline targets, plus a recording
// implementation used by tests and benches.

use crate::geometry::{Point, Rect, Size};
use crate::style::{Color, FillStyle, LineStyle, TextStyle};

/// Text metrics provider. Split from [`Surface`] so layout can run without a canvas.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, style: &TextStyle) -> Size;
}

/// 2-D drawing target. Coordinates are pixels, origin top-left, y down.
pub trait Surface: TextMeasure {
    fn draw_line(&mut self, from: Point, to: Point, style: &LineStyle);

    /// Open polyline through `points`. Backends with path support should override this
    /// so joins are stroked properly.
    fn draw_polyline(&mut self, points: &[Point], style: &LineStyle) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], style);
        }
    }

    /// Closed, filled polygon.
    fn fill_polygon(&mut self, points: &[Point], style: &FillStyle);

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_polygon(&rect.corners(), &FillStyle::new(color));
    }

    /// Draw `text` with its bounding box's top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: Point, to: Point, style: LineStyle },
    Polyline { points: Vec<Point>, style: LineStyle },
    Polygon { points: Vec<Point>, style: FillStyle },
    Rect { rect: Rect, color: Color },
    Text { text: String, origin: Point, style: TextStyle },
}

/// Fixed-pitch metrics: each char is `0.5 × size` wide, a line is `1.25 × size` high.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospaceMetrics;

impl TextMeasure for MonospaceMetrics {
    fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        let chars = text.chars().count() as f32;
        Size::new(chars * style.size * 0.5, style.size * 1.25)
    }
}

/// Surface that stores every call instead of rasterising it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &[Point]> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        MonospaceMetrics.measure_text(text, style)
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, from: Point, to: Point, style: &LineStyle) {
        self.commands.push(DrawCommand::Line { from, to, style: style.clone() });
    }

    fn draw_polyline(&mut self, points: &[Point], style: &LineStyle) {
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), style: style.clone() });
    }

    fn fill_polygon(&mut self, points: &[Point], style: &FillStyle) {
        self.commands.push(DrawCommand::Polygon { points: points.to_vec(), style: *style });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), origin, style: *style });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SegmentsOnly(Vec<(Point, Point)>);

    impl TextMeasure for SegmentsOnly {
        fn measure_text(&self, _: &str, _: &TextStyle) -> Size {
            Size::ZERO
        }
    }

    impl Surface for SegmentsOnly {
        fn draw_line(&mut self, from: Point, to: Point, _: &LineStyle) {
            self.0.push((from, to));
        }
        fn fill_polygon(&mut self, _: &[Point], _: &FillStyle) {}
        fn draw_text(&mut self, _: &str, _: Point, _: &TextStyle) {}
    }

    #[test]
    fn default_polyline_splits_into_segments() {
        let mut s = SegmentsOnly(Vec::new());
        let pts = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
        s.draw_polyline(&pts, &LineStyle::default());
        assert_eq!(s.0, vec![(pts[0], pts[1]), (pts[1], pts[2])]);
    }

    #[test]
    fn monospace_metrics() {
        let size = MonospaceMetrics.measure_text("100%", &TextStyle::new(Color::BLACK, 10.0));
        assert_eq!(size, Size::new(20.0, 12.5));
    }
}
