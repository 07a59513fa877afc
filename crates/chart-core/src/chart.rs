// File: crates/chart-core/src/chart.rs
// Summary: Chart surface: axes, series list, auto-zoom, padding layout and the paint pipeline.

use crate::axis::{Axis, LabelSide, Orientation};
use crate::continuous::ContinuousSeries;
use crate::error::{ChartError, Result};
use crate::geometry::{Point, Rect};
use crate::series::Series;
use crate::style::{Color, TextStyle};
use crate::surface::{Surface, TextMeasure};
use crate::types::Insets;

/// Data-to-screen mapping through a chart's two axes.
#[derive(Clone, Copy, Debug)]
pub struct Projection<'a> {
    pub x: &'a Axis,
    pub y: &'a Axis,
}

impl<'a> Projection<'a> {
    pub fn new(x: &'a Axis, y: &'a Axis) -> Self {
        Self { x, y }
    }

    pub fn map(&self, x: f64, y: f64) -> Point {
        Point::new(self.x.map(x), self.y.map(y))
    }

    /// Value area fills close against: `0`, or the y bound nearest to it when zero is
    /// outside the axis range.
    pub fn baseline(&self) -> f64 {
        if self.y.min() > 0.0 {
            self.y.min()
        } else if self.y.max() < 0.0 {
            self.y.max()
        } else {
            0.0
        }
    }

    pub fn baseline_px(&self) -> f32 {
        self.y.map(self.baseline())
    }
}

/// Handle returned by [`Chart::add_series`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(u32);

#[derive(Clone, Debug)]
pub enum ChartSeries {
    Plain(Series),
    Continuous(ContinuousSeries),
}

impl ChartSeries {
    pub fn series(&self) -> &Series {
        match self {
            ChartSeries::Plain(s) => s,
            ChartSeries::Continuous(c) => c,
        }
    }

    pub fn as_plain_mut(&mut self) -> Option<&mut Series> {
        match self {
            ChartSeries::Plain(s) => Some(s),
            ChartSeries::Continuous(_) => None,
        }
    }

    pub fn as_continuous_mut(&mut self) -> Option<&mut ContinuousSeries> {
        match self {
            ChartSeries::Continuous(c) => Some(c),
            ChartSeries::Plain(_) => None,
        }
    }
}

impl From<Series> for ChartSeries {
    fn from(s: Series) -> Self {
        ChartSeries::Plain(s)
    }
}

impl From<ContinuousSeries> for ChartSeries {
    fn from(c: ContinuousSeries) -> Self {
        ChartSeries::Continuous(c)
    }
}

/// Which axes [`Chart::render`] fits to the data before painting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoZoom {
    pub x: bool,
    pub y: bool,
}

pub struct Chart {
    x_axis: Axis,
    y_axis: Axis,
    entries: Vec<(SeriesId, ChartSeries)>,
    next_id: u32,
    auto_zoom: AutoZoom,
    header: String,
    header_style: TextStyle,
    background: Option<Color>,
    /// Set by widgets that own their series; blocks add/clear.
    series_locked: bool,
}

impl Chart {
    pub fn new(x_axis: Axis, y_axis: Axis) -> Self {
        Self {
            x_axis,
            y_axis,
            entries: Vec::new(),
            next_id: 0,
            auto_zoom: AutoZoom::default(),
            header: String::new(),
            header_style: TextStyle::default().bold(),
            background: None,
            series_locked: false,
        }
    }

    pub fn with_header(mut self, header: impl Into<String>, style: TextStyle) -> Self {
        self.set_header(header, style);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_auto_zoom(mut self, auto_zoom: AutoZoom) -> Self {
        self.auto_zoom = auto_zoom;
        self
    }

    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn x_axis_mut(&mut self) -> &mut Axis { &mut self.x_axis }
    pub fn y_axis_mut(&mut self) -> &mut Axis { &mut self.y_axis }

    pub fn set_x_axis(&mut self, axis: Axis) {
        self.x_axis = axis;
    }

    pub fn set_y_axis(&mut self, axis: Axis) {
        self.y_axis = axis;
    }

    pub fn projection(&self) -> Projection<'_> {
        Projection::new(&self.x_axis, &self.y_axis)
    }

    pub fn header(&self) -> &str { &self.header }

    pub fn set_header(&mut self, header: impl Into<String>, style: TextStyle) {
        self.header = header.into();
        self.header_style = style;
    }

    pub fn background(&self) -> Option<Color> { self.background }

    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    pub fn auto_zoom(&self) -> AutoZoom { self.auto_zoom }

    pub fn set_auto_zoom(&mut self, auto_zoom: AutoZoom) {
        self.auto_zoom = auto_zoom;
    }

    pub fn is_series_locked(&self) -> bool { self.series_locked }

    pub(crate) fn lock_series(&mut self) {
        self.series_locked = true;
    }

    pub fn add_series(&mut self, series: impl Into<ChartSeries>) -> Result<SeriesId> {
        if self.series_locked {
            return Err(ChartError::SeriesLocked);
        }
        Ok(self.insert_series(series.into()))
    }

    pub(crate) fn insert_series(&mut self, series: ChartSeries) -> SeriesId {
        let id = SeriesId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, series));
        id
    }

    pub fn clear_series(&mut self) -> Result<()> {
        if self.series_locked {
            return Err(ChartError::SeriesLocked);
        }
        self.entries.clear();
        Ok(())
    }

    pub fn series(&self, id: SeriesId) -> Option<&ChartSeries> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, s)| s)
    }

    /// Mutable access to one entry. Locked charts refuse, so their series stay as built.
    pub fn series_mut(&mut self, id: SeriesId) -> Result<&mut ChartSeries> {
        if self.series_locked {
            return Err(ChartError::SeriesLocked);
        }
        self.entry_mut(id)
    }

    pub(crate) fn entry_mut(&mut self, id: SeriesId) -> Result<&mut ChartSeries> {
        self.entries
            .iter_mut()
            .find(|(i, _)| *i == id)
            .map(|(_, s)| s)
            .ok_or(ChartError::UnknownSeries(id))
    }

    /// Series in paint order (as of the last render).
    pub fn iter_series(&self) -> impl Iterator<Item = (SeriesId, &Series)> {
        self.entries.iter().map(|(id, s)| (*id, s.series()))
    }

    pub fn series_count(&self) -> usize {
        self.entries.len()
    }

    fn data_range(&self, bounds: impl Fn(&Series) -> Option<(f64, f64)>) -> (f64, f64) {
        let (lo, hi) = self
            .entries
            .iter()
            .filter_map(|(_, s)| bounds(s.series()))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| (lo.min(a), hi.max(b)));
        if lo > hi {
            return (0.0, 1.0);
        }
        if lo == hi {
            (lo, hi + 1.0)
        } else {
            (lo, hi)
        }
    }

    /// Fit the x axis to all non-empty series.
    pub fn auto_zoom_x(&mut self) -> Result<()> {
        let (min, max) = self.data_range(Series::bounds_x);
        tracing::debug!(min, max, "auto-zoom x");
        self.x_axis.set_bounds(min, max)
    }

    /// Fit the y axis to all non-empty series.
    pub fn auto_zoom_y(&mut self) -> Result<()> {
        let (min, max) = self.data_range(Series::bounds_y);
        tracing::debug!(min, max, "auto-zoom y");
        self.y_axis.set_bounds(min, max)
    }

    fn header_visible(&self) -> bool {
        !self.header.trim().is_empty()
    }

    /// Chart area inside `bounds` after reserving room for axis labels and the header.
    pub fn layout<M: TextMeasure + ?Sized>(&self, measurer: &M, bounds: Rect) -> Rect {
        let y_extent = self.y_axis.measure_extent(measurer);
        let x_extent = self.x_axis.measure_extent(measurer);
        let (left, right) = match self.y_axis.orientation() {
            Orientation::Vertical(LabelSide::Left) => (y_extent.width, 0.0),
            Orientation::Vertical(LabelSide::Right) => (0.0, y_extent.width),
            Orientation::Horizontal => (0.0, 0.0),
        };
        let top = if self.header_visible() {
            measurer.measure_text(&self.header, &self.header_style).height
        } else {
            0.0
        };
        let pad = Insets::from_extents(left, right, top, x_extent.height);
        Rect::from_ltwh(
            bounds.left + pad.left as f32,
            bounds.top + pad.top as f32,
            (bounds.width - pad.hsum() as f32 - 1.0).max(1.0),
            (bounds.height - pad.vsum() as f32 - 1.0).max(1.0),
        )
    }

    /// Paint everything into `bounds`: background, header, axes, then series in stable
    /// ascending order of their average.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, bounds: Rect) -> Result<()> {
        if self.auto_zoom.x {
            self.auto_zoom_x()?;
        }
        if self.auto_zoom.y {
            self.auto_zoom_y()?;
        }

        let area = self.layout(&*surface, bounds);
        tracing::trace!(?area, series = self.entries.len(), "rendering chart");

        if let Some(bg) = self.background {
            surface.fill_rect(bounds, bg);
        }
        if self.header_visible() {
            surface.draw_text(&self.header, Point::new(bounds.left, bounds.top), &self.header_style);
        }

        self.y_axis.paint(surface, area);
        self.x_axis.paint(surface, area);

        self.entries.sort_by(|(_, a), (_, b)| {
            let a = a.series().average().unwrap_or(f64::NEG_INFINITY);
            let b = b.series().average().unwrap_or(f64::NEG_INFINITY);
            a.total_cmp(&b)
        });

        let projection = Projection::new(&self.x_axis, &self.y_axis);
        for (id, entry) in &self.entries {
            let series = entry.series();
            if series.is_empty() {
                tracing::warn!(?id, "skipping empty series");
                continue;
            }
            series.paint(surface, &projection);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisConfig;
    use crate::surface::RecordingSurface;

    fn bare_chart() -> Chart {
        let x = Axis::horizontal(AxisConfig::new(0.0, 2.0)).unwrap();
        let y = Axis::vertical(AxisConfig::new(0.0, 3.0), LabelSide::Left).unwrap();
        Chart::new(x, y)
    }

    #[test]
    fn baseline_follows_visible_range() {
        let x = Axis::horizontal(AxisConfig::new(0.0, 1.0)).unwrap();
        let above = Axis::vertical(AxisConfig::new(2.0, 5.0), LabelSide::Left).unwrap();
        let below = Axis::vertical(AxisConfig::new(-5.0, -2.0), LabelSide::Left).unwrap();
        let across = Axis::vertical(AxisConfig::new(-1.0, 1.0), LabelSide::Left).unwrap();
        assert_eq!(Projection::new(&x, &above).baseline(), 2.0);
        assert_eq!(Projection::new(&x, &below).baseline(), -2.0);
        assert_eq!(Projection::new(&x, &across).baseline(), 0.0);
    }

    #[test]
    fn layout_without_labels_leaves_one_pixel() {
        let chart = bare_chart();
        let area = chart.layout(&RecordingSurface::new(), Rect::from_ltwh(0.0, 0.0, 401.0, 301.0));
        assert_eq!(area, Rect::from_ltwh(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn layout_reserves_header_height() {
        let chart = bare_chart().with_header("CPU", TextStyle::default().bold());
        let area = chart.layout(&RecordingSurface::new(), Rect::from_ltwh(0.0, 0.0, 401.0, 301.0));
        // 12pt header is 15px high
        assert_eq!(area.top, 15.0);
        assert_eq!(area.height, 285.0);
    }

    #[test]
    fn blank_header_is_not_drawn() {
        let mut chart = bare_chart().with_header("   ", TextStyle::default());
        let mut surface = RecordingSurface::new();
        chart.render(&mut surface, Rect::from_ltwh(0.0, 0.0, 100.0, 100.0)).unwrap();
        assert_eq!(surface.texts().count(), 0);
    }

    #[test]
    fn ids_stay_valid_across_renders() {
        let mut chart = bare_chart();
        let high = chart.add_series(Series::from_y(&[3.0, 3.0])).unwrap();
        let low = chart.add_series(Series::from_y(&[1.0, 1.0])).unwrap();
        chart.render(&mut RecordingSurface::new(), Rect::from_ltwh(0.0, 0.0, 50.0, 50.0)).unwrap();
        assert_eq!(chart.series(high).map(|s| s.series().average()), Some(Some(3.0)));
        assert_eq!(chart.iter_series().next().map(|(id, _)| id), Some(low));
    }
}
