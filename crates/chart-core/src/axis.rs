// File: crates/chart-core/src/axis.rs
// Summary: Axis model: linear data/screen mapping, label generation, grid and label painting.

use std::borrow::Cow;
use std::f64::consts::PI;

use crate::error::{ChartError, Result};
use crate::format::LabelFormat;
use crate::geometry::{clamp_to_span, Point, Rect, Size};
use crate::grid::aligned_ticks;
use crate::scale::LinearScale;
use crate::style::{LineStyle, TextStyle};
use crate::surface::{Surface, TextMeasure};
use crate::types::LABEL_MARGIN_FACTOR;

/// Which side of the chart a vertical axis puts its labels on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Data x to screen x, left to right.
    Horizontal,
    /// Data y to screen y, inverted (larger values are higher up).
    Vertical(LabelSide),
}

/// Construction parameters for [`Axis::new`].
#[derive(Clone, Debug)]
pub struct AxisConfig {
    pub min: f64,
    pub max: f64,
    /// Distance between generated labels; `0` disables generation.
    pub label_spacing: f64,
    pub paint_grid: bool,
    pub paint_labels: bool,
    pub grid_style: Option<LineStyle>,
    pub label_style: Option<TextStyle>,
    pub format: LabelFormat,
}

impl AxisConfig {
    /// Bounds only; nothing is painted.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            label_spacing: 0.0,
            paint_grid: false,
            paint_labels: false,
            grid_style: None,
            label_style: None,
            format: LabelFormat::default(),
        }
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.label_spacing = spacing;
        self
    }

    pub fn grid(mut self, style: LineStyle) -> Self {
        self.paint_grid = true;
        self.grid_style = Some(style);
        self
    }

    pub fn labels(mut self, style: TextStyle, format: LabelFormat) -> Self {
        self.paint_labels = true;
        self.label_style = Some(style);
        self.format = format;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub value: f64,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    orientation: Orientation,
    scale: LinearScale,
    label_spacing: f64,
    paint_grid: bool,
    paint_labels: bool,
    grid_style: Option<LineStyle>,
    label_style: Option<TextStyle>,
    format: LabelFormat,
    /// Explicit labels; when present they replace spacing-generated ones.
    overrides: Option<Vec<Label>>,
}

fn check_bounds(min: f64, max: f64) -> Result<()> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(ChartError::InvalidBounds { min, max })
    }
}

impl Axis {
    pub fn new(orientation: Orientation, config: AxisConfig) -> Result<Self> {
        check_bounds(config.min, config.max)?;
        if config.label_spacing.is_nan() || config.label_spacing < 0.0 {
            return Err(ChartError::InvalidLabelSpacing(config.label_spacing));
        }
        if config.paint_grid && config.grid_style.is_none() {
            return Err(ChartError::MissingStyle("grid"));
        }
        if config.paint_labels && config.label_style.is_none() {
            return Err(ChartError::MissingStyle("label"));
        }
        Ok(Self::from_config(orientation, config))
    }

    pub fn horizontal(config: AxisConfig) -> Result<Self> {
        Self::new(Orientation::Horizontal, config)
    }

    pub fn vertical(config: AxisConfig, side: LabelSide) -> Result<Self> {
        Self::new(Orientation::Vertical(side), config)
    }

    fn from_config(orientation: Orientation, config: AxisConfig) -> Self {
        let inverted = matches!(orientation, Orientation::Vertical(_));
        Self {
            orientation,
            scale: LinearScale::new(config.min, config.max, inverted),
            label_spacing: config.label_spacing,
            paint_grid: config.paint_grid,
            paint_labels: config.paint_labels,
            grid_style: config.grid_style,
            label_style: config.label_style,
            format: config.format,
            overrides: None,
        }
    }

    /// Horizontal axis over one period: `0`, `π`, `2π`.
    pub fn trigonometric_x(grid: LineStyle, text: TextStyle) -> Self {
        let config = AxisConfig::new(0.0, 2.0 * PI).grid(grid).labels(text, LabelFormat::default());
        let mut axis = Self::from_config(Orientation::Horizontal, config);
        axis.add_label(0.0, "0");
        axis.add_label(PI, "π");
        axis.add_label(2.0 * PI, "2π");
        axis
    }

    /// Vertical axis over the sine range: `-1`, `0`, `1`.
    pub fn trigonometric_y(grid: LineStyle, text: TextStyle, side: LabelSide) -> Self {
        let config = AxisConfig::new(-1.0, 1.0).grid(grid).labels(text, LabelFormat::default());
        let mut axis = Self::from_config(Orientation::Vertical(side), config);
        axis.add_label(-1.0, "-1");
        axis.add_label(0.0, "0");
        axis.add_label(1.0, "1");
        axis
    }

    /// Vertical `0..100` axis with percent labels.
    pub fn percent(spacing: f64, grid: LineStyle, text: TextStyle, side: LabelSide) -> Result<Self> {
        let config = AxisConfig::new(0.0, 100.0)
            .spacing(spacing)
            .grid(grid)
            .labels(text, LabelFormat::Percent);
        Self::vertical(config, side)
    }

    pub fn orientation(&self) -> Orientation { self.orientation }

    pub fn label_side(&self) -> Option<LabelSide> {
        match self.orientation {
            Orientation::Horizontal => None,
            Orientation::Vertical(side) => Some(side),
        }
    }

    pub fn min(&self) -> f64 { self.scale.min }
    pub fn max(&self) -> f64 { self.scale.max }
    pub fn screen_min(&self) -> f32 { self.scale.screen_min }
    pub fn screen_max(&self) -> f32 { self.scale.screen_max }

    /// Pixels per data unit.
    pub fn scale(&self) -> f64 { self.scale.scale() }

    /// Replace the data bounds; rejected unless `min < max`.
    pub fn set_bounds(&mut self, min: f64, max: f64) -> Result<()> {
        check_bounds(min, max)?;
        self.scale.min = min;
        self.scale.max = max;
        Ok(())
    }

    pub fn set_screen_range(&mut self, screen_min: f32, screen_max: f32) {
        self.scale.screen_min = screen_min;
        self.scale.screen_max = screen_max;
    }

    /// Data value to screen coordinate along this axis.
    #[inline]
    pub fn map(&self, value: f64) -> f32 {
        self.scale.to_px(value)
    }

    /// Screen coordinate back to a data value.
    #[inline]
    pub fn unmap(&self, px: f32) -> f64 {
        self.scale.from_px(px)
    }

    pub fn label_spacing(&self) -> f64 { self.label_spacing }

    pub fn set_label_spacing(&mut self, spacing: f64) -> Result<()> {
        if spacing.is_nan() || spacing < 0.0 {
            return Err(ChartError::InvalidLabelSpacing(spacing));
        }
        self.label_spacing = spacing;
        Ok(())
    }

    pub fn format(&self) -> &LabelFormat { &self.format }

    pub fn set_format(&mut self, format: LabelFormat) {
        self.format = format;
    }

    pub fn paints_grid(&self) -> bool { self.paint_grid }
    pub fn paints_labels(&self) -> bool { self.paint_labels }
    pub fn grid_style(&self) -> Option<&LineStyle> { self.grid_style.as_ref() }
    pub fn label_style(&self) -> Option<&TextStyle> { self.label_style.as_ref() }

    pub fn set_paint_grid(&mut self, on: bool) -> Result<()> {
        if on && self.grid_style.is_none() {
            return Err(ChartError::MissingStyle("grid"));
        }
        self.paint_grid = on;
        Ok(())
    }

    pub fn set_paint_labels(&mut self, on: bool) -> Result<()> {
        if on && self.label_style.is_none() {
            return Err(ChartError::MissingStyle("label"));
        }
        self.paint_labels = on;
        Ok(())
    }

    /// Insert or overwrite one explicit label.
    pub fn add_label(&mut self, value: f64, text: impl Into<String>) {
        let text = text.into();
        let labels = self.overrides.get_or_insert_with(Vec::new);
        match labels.iter_mut().find(|l| l.value == value) {
            Some(existing) => existing.text = text,
            None => labels.push(Label { value, text }),
        }
    }

    /// Drop explicit labels and go back to spacing-based generation.
    pub fn clear_labels(&mut self) {
        self.overrides = None;
    }

    pub fn has_explicit_labels(&self) -> bool {
        self.overrides.is_some()
    }

    /// Evenly spaced labels from `min + |min mod spacing|` up to `max`.
    pub fn generate_labels(&self) -> Vec<Label> {
        aligned_ticks(self.scale.min, self.scale.max, self.label_spacing)
            .into_iter()
            .map(|value| Label { value, text: self.format.apply(value) })
            .collect()
    }

    /// Explicit labels if any were added, otherwise generated ones.
    pub fn labels(&self) -> Cow<'_, [Label]> {
        match &self.overrides {
            Some(labels) => Cow::Borrowed(labels.as_slice()),
            None => Cow::Owned(self.generate_labels()),
        }
    }

    /// Gap between the chart border and label text.
    pub fn label_margin(&self) -> f32 {
        self.label_style.map_or(0.0, |s| s.size * LABEL_MARGIN_FACTOR)
    }

    /// Largest label box plus margin; what the chart reserves as padding for this axis.
    pub fn measure_extent<M: TextMeasure + ?Sized>(&self, measurer: &M) -> Size {
        let style = match (&self.label_style, self.paint_labels) {
            (Some(style), true) => style,
            _ => return Size::ZERO,
        };
        let margin = self.label_margin();
        self.labels().iter().fold(Size::ZERO, |acc, label| {
            let size = measurer.measure_text(&label.text, style);
            acc.max(Size::new(size.width + margin, size.height + margin))
        })
    }

    /// Take the screen range from `chart_area`, then draw grid lines and labels.
    pub fn paint<S: Surface + ?Sized>(&mut self, surface: &mut S, chart_area: Rect) {
        match self.orientation {
            Orientation::Horizontal => self.set_screen_range(chart_area.left, chart_area.right()),
            Orientation::Vertical(_) => self.set_screen_range(chart_area.top, chart_area.bottom()),
        }

        let labels = self.labels();
        tracing::trace!(count = labels.len(), orientation = ?self.orientation, "painting axis");

        for label in labels.iter() {
            let at = self.map(label.value);
            if self.paint_grid {
                if let Some(grid) = &self.grid_style {
                    let (from, to) = match self.orientation {
                        Orientation::Horizontal => {
                            (Point::new(at, chart_area.top), Point::new(at, chart_area.bottom()))
                        }
                        Orientation::Vertical(_) => {
                            (Point::new(chart_area.left, at), Point::new(chart_area.right(), at))
                        }
                    };
                    surface.draw_line(from, to, grid);
                }
            }
            if self.paint_labels {
                if let Some(style) = &self.label_style {
                    let origin = self.label_origin(&*surface, &label.text, style, at, chart_area);
                    surface.draw_text(&label.text, origin, style);
                }
            }
        }
    }

    fn label_origin<M: TextMeasure + ?Sized>(
        &self,
        measurer: &M,
        text: &str,
        style: &TextStyle,
        at: f32,
        chart_area: Rect,
    ) -> Point {
        let size = measurer.measure_text(text, style);
        let margin = self.label_margin();
        match self.orientation {
            Orientation::Horizontal => {
                let x = clamp_to_span(at - size.width / 2.0, self.screen_min(), self.screen_max() - size.width);
                Point::new(x, chart_area.bottom() + margin)
            }
            Orientation::Vertical(side) => {
                let x = match side {
                    LabelSide::Left => chart_area.left - size.width - margin,
                    LabelSide::Right => chart_area.right() + margin,
                };
                let y = clamp_to_span(at - size.height / 2.0, self.screen_min(), self.screen_max() - size.height);
                Point::new(x, y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use crate::surface::RecordingSurface;

    fn text() -> TextStyle {
        TextStyle::new(Color::BLACK, 10.0)
    }

    #[test]
    fn overrides_replace_generation_until_cleared() {
        let mut axis = Axis::horizontal(AxisConfig::new(0.0, 10.0).spacing(5.0)).unwrap();
        assert_eq!(axis.labels().len(), 3);

        axis.add_label(2.0, "two");
        axis.add_label(2.0, "TWO");
        axis.add_label(7.0, "seven");
        let labels = axis.labels();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0], Label { value: 2.0, text: "TWO".into() });

        axis.clear_labels();
        assert!(!axis.has_explicit_labels());
        assert_eq!(axis.labels().len(), 3);
    }

    #[test]
    fn paint_flags_need_styles() {
        let mut axis = Axis::horizontal(AxisConfig::new(0.0, 1.0)).unwrap();
        assert!(matches!(axis.set_paint_grid(true), Err(ChartError::MissingStyle("grid"))));
        assert!(matches!(axis.set_paint_labels(true), Err(ChartError::MissingStyle("label"))));
        assert!(axis.set_paint_grid(false).is_ok());
    }

    #[test]
    fn extent_is_zero_without_labels() {
        let axis = Axis::horizontal(AxisConfig::new(0.0, 10.0).spacing(1.0)).unwrap();
        assert_eq!(axis.measure_extent(&RecordingSurface::new()), Size::ZERO);
    }

    #[test]
    fn extent_takes_widest_label_plus_margin() {
        let config = AxisConfig::new(0.0, 100.0).spacing(50.0).labels(text(), LabelFormat::Percent);
        let axis = Axis::vertical(config, LabelSide::Right).unwrap();
        // "100%" is 4 chars at 5px each, margin is 3px
        let extent = axis.measure_extent(&RecordingSurface::new());
        assert_eq!(extent, Size::new(23.0, 15.5));
    }

    #[test]
    fn vertical_labels_sit_beside_the_chart() {
        let area = Rect::from_ltwh(20.0, 0.0, 100.0, 100.0);
        for (side, expected_x) in [(LabelSide::Right, 123.0), (LabelSide::Left, 20.0 - 10.0 - 3.0)] {
            let mut axis = Axis::trigonometric_y(LineStyle::default(), text(), side);
            let mut surface = RecordingSurface::new();
            axis.paint(&mut surface, area);
            let texts: Vec<_> = surface.texts().map(|(t, p)| (t.to_string(), p)).collect();
            assert_eq!(texts.len(), 3);
            let (_, zero_origin) = texts.iter().find(|(t, _)| t == "0").unwrap();
            assert_eq!(zero_origin.y, 50.0 - 6.25);
            assert_eq!(texts.iter().find(|(t, _)| t == "-1").unwrap().1.x, expected_x);
            // top label is clamped into the axis span
            assert_eq!(texts.iter().find(|(t, _)| t == "1").unwrap().1.y, 0.0);
            // bottom label is pulled up so its box stays inside
            assert_eq!(texts.iter().find(|(t, _)| t == "-1").unwrap().1.y, 100.0 - 12.5);
        }
    }

    #[test]
    fn horizontal_grid_spans_the_chart_height() {
        let mut axis = Axis::trigonometric_x(LineStyle::default(), text());
        let mut surface = RecordingSurface::new();
        let area = Rect::from_ltwh(0.0, 10.0, 200.0, 50.0);
        axis.paint(&mut surface, area);
        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(lines.len(), 3);
        for (from, to) in &lines {
            assert_eq!(from.y, 10.0);
            assert_eq!(to.y, 60.0);
            assert_eq!(from.x, to.x);
        }
        assert_eq!(lines[0].0.x, 0.0);
        assert_eq!(lines[2].0.x, 200.0);
        let labels: Vec<_> = surface.texts().collect();
        // "0" clamped to the left edge, "2π" clamped to the right edge
        assert_eq!(labels[0].1, Point::new(0.0, 63.0));
        assert_eq!(labels[2].1.x, 200.0 - 10.0);
    }
}
