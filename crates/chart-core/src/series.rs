// File: crates/chart-core/src/series.rs
// Summary: Sample series with incremental extrema, cached average, and line/area painting.
// Notes:
// - x values are optional; without them the sample index is the x coordinate.
// - Extrema are kept up to date on append in O(1). Removal can skip the O(n)
//   rescan when the caller knows the removed sample was not an extremum.

use std::cell::Cell;

use crate::chart::Projection;
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::style::{Color, FillStyle, LineStyle};
use crate::surface::Surface;

/// Default series colour.
pub const SERIES_BLUE: Color = Color::rgb(0, 123, 255);

#[derive(Clone, Debug)]
pub struct Series {
    /// `None` while the series is index-based.
    pub(crate) x_values: Option<Vec<f64>>,
    pub(crate) y_values: Vec<f64>,
    min_x: f64,
    max_x: f64,
    pub(crate) min_y: f64,
    pub(crate) max_y: f64,
    /// Mean of `y_values`; `None` means stale.
    average: Cell<Option<f64>>,
    line: Option<LineStyle>,
    fill: Option<FillStyle>,
}

impl Default for Series {
    fn default() -> Self {
        Self::new()
    }
}

impl Series {
    /// Empty series with the default blue line and fill.
    pub fn new() -> Self {
        Self::with_styles(Some(LineStyle::solid(SERIES_BLUE, 1.0)), Some(FillStyle::new(SERIES_BLUE)))
    }

    pub fn with_styles(line: Option<LineStyle>, fill: Option<FillStyle>) -> Self {
        Self {
            x_values: None,
            y_values: Vec::new(),
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            average: Cell::new(None),
            line,
            fill,
        }
    }

    /// Index-based series pre-seeded with `ys`.
    pub fn from_y(ys: &[f64]) -> Self {
        let mut s = Self::new();
        s.append_many_y(ys);
        s
    }

    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self> {
        let mut s = Self::new();
        s.append_many_xy(xs, ys)?;
        Ok(s)
    }

    pub fn line_style(&self) -> Option<&LineStyle> { self.line.as_ref() }
    pub fn fill_style(&self) -> Option<&FillStyle> { self.fill.as_ref() }

    pub fn set_line_style(&mut self, line: Option<LineStyle>) {
        self.line = line;
    }

    pub fn set_fill_style(&mut self, fill: Option<FillStyle>) {
        self.fill = fill;
    }

    pub fn len(&self) -> usize { self.y_values.len() }
    pub fn is_empty(&self) -> bool { self.y_values.is_empty() }
    pub fn has_x_values(&self) -> bool { self.x_values.is_some() }
    pub fn y_values(&self) -> &[f64] { &self.y_values }
    pub fn x_values(&self) -> Option<&[f64]> { self.x_values.as_deref() }

    /// x coordinate of sample `i` (the index itself for index-based series).
    /// `None` past the last sample.
    pub fn x_at(&self, i: usize) -> Option<f64> {
        match &self.x_values {
            Some(xs) => xs.get(i).copied(),
            None => (i < self.len()).then_some(i as f64),
        }
    }

    /// Smallest x, or `+∞` when empty.
    pub fn min_x(&self) -> f64 {
        match (&self.x_values, self.is_empty()) {
            (_, true) => f64::INFINITY,
            (None, false) => 0.0,
            (Some(_), false) => self.min_x,
        }
    }

    /// Largest x, or `-∞` when empty.
    pub fn max_x(&self) -> f64 {
        match (&self.x_values, self.is_empty()) {
            (_, true) => f64::NEG_INFINITY,
            (None, false) => (self.len() - 1) as f64,
            (Some(_), false) => self.max_x,
        }
    }

    /// Smallest y, or `+∞` when empty.
    pub fn min_y(&self) -> f64 { self.min_y }
    /// Largest y, or `-∞` when empty.
    pub fn max_y(&self) -> f64 { self.max_y }

    pub fn bounds_x(&self) -> Option<(f64, f64)> {
        (!self.is_empty()).then(|| (self.min_x(), self.max_x()))
    }

    pub fn bounds_y(&self) -> Option<(f64, f64)> {
        (!self.is_empty()).then_some((self.min_y, self.max_y))
    }

    /// Arithmetic mean of the y values, recomputed only after a mutation.
    /// `None` for an empty series.
    pub fn average(&self) -> Option<f64> {
        if let Some(avg) = self.average.get() {
            return Some(avg);
        }
        if self.y_values.is_empty() {
            return None;
        }
        let avg = self.y_values.iter().sum::<f64>() / self.y_values.len() as f64;
        self.average.set(Some(avg));
        Some(avg)
    }

    #[inline]
    pub(crate) fn invalidate_average(&self) {
        self.average.set(None);
    }

    #[inline]
    fn track_y(&mut self, y: f64) {
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    #[inline]
    fn track_x(&mut self, x: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
    }

    /// Switch an index-based series to explicit x values.
    fn materialize_x(&mut self) -> &mut Vec<f64> {
        if self.x_values.is_none() {
            let xs: Vec<f64> = (0..self.y_values.len()).map(|i| i as f64).collect();
            if !xs.is_empty() {
                self.min_x = 0.0;
                self.max_x = (xs.len() - 1) as f64;
            }
            self.x_values = Some(xs);
        }
        self.x_values.get_or_insert_with(Vec::new)
    }

    /// Append one sample. Series with explicit x values use the sample index as x.
    pub fn append_y(&mut self, y: f64) {
        let index = self.y_values.len() as f64;
        if let Some(xs) = &mut self.x_values {
            xs.push(index);
            self.track_x(index);
        }
        self.y_values.push(y);
        self.track_y(y);
        self.invalidate_average();
    }

    pub fn append_xy(&mut self, x: f64, y: f64) {
        self.materialize_x().push(x);
        self.track_x(x);
        self.y_values.push(y);
        self.track_y(y);
        self.invalidate_average();
    }

    pub fn append_many_y(&mut self, ys: &[f64]) {
        for &y in ys {
            let index = self.y_values.len() as f64;
            if let Some(xs) = &mut self.x_values {
                xs.push(index);
                self.track_x(index);
            }
            self.y_values.push(y);
            self.track_y(y);
        }
        self.invalidate_average();
    }

    pub fn append_many_xy(&mut self, xs: &[f64], ys: &[f64]) -> Result<()> {
        if xs.len() != ys.len() {
            return Err(ChartError::LengthMismatch { x: xs.len(), y: ys.len() });
        }
        self.materialize_x().extend_from_slice(xs);
        for &x in xs {
            self.track_x(x);
        }
        self.y_values.extend_from_slice(ys);
        for &y in ys {
            self.track_y(y);
        }
        self.invalidate_average();
        Ok(())
    }

    /// Remove sample `index`, returning its `(x, y)`.
    ///
    /// With `recompute_extrema = false` the cached extrema are left as they were; pass
    /// `false` only when the removed sample is known not to be an extremum.
    pub fn remove_at(&mut self, index: usize, recompute_extrema: bool) -> Option<(f64, f64)> {
        if index >= self.y_values.len() {
            return None;
        }
        let x = match &mut self.x_values {
            Some(xs) => xs.remove(index),
            None => index as f64,
        };
        let y = self.y_values.remove(index);
        self.invalidate_average();
        if recompute_extrema || self.y_values.is_empty() {
            self.rescan_extrema();
        }
        Some((x, y))
    }

    /// Empty the series and reset the extrema sentinels.
    pub fn clear(&mut self) {
        if let Some(xs) = &mut self.x_values {
            xs.clear();
        }
        self.y_values.clear();
        self.min_x = f64::INFINITY;
        self.max_x = f64::NEG_INFINITY;
        self.min_y = f64::INFINITY;
        self.max_y = f64::NEG_INFINITY;
        self.invalidate_average();
    }

    /// Full O(n) rescan of both extrema pairs.
    pub fn rescan_extrema(&mut self) {
        self.rescan_y();
        self.min_x = f64::INFINITY;
        self.max_x = f64::NEG_INFINITY;
        if let Some(xs) = &self.x_values {
            let (lo, hi) = min_max(xs);
            self.min_x = lo;
            self.max_x = hi;
        }
    }

    pub(crate) fn set_x_extrema(&mut self, min: f64, max: f64) {
        self.min_x = min;
        self.max_x = max;
    }

    pub(crate) fn rescan_y(&mut self) {
        let (lo, hi) = min_max(&self.y_values);
        self.min_y = lo;
        self.max_y = hi;
    }

    /// Screen points of the polyline, in sample order.
    pub fn line_points(&self, projection: &Projection<'_>) -> Vec<Point> {
        match &self.x_values {
            Some(xs) => xs.iter().zip(&self.y_values).map(|(&x, &y)| projection.map(x, y)).collect(),
            None => self
                .y_values
                .iter()
                .enumerate()
                .map(|(i, &y)| projection.map(i as f64, y))
                .collect(),
        }
    }

    /// Closed fill polygon: the polyline followed by `(last.x, base)` and `(first.x, base)`.
    pub fn area_polygon(&self, projection: &Projection<'_>, line: &[Point]) -> Vec<Point> {
        let (first, last) = match (line.first(), line.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Vec::new(),
        };
        let base = projection.baseline_px();
        let mut area = Vec::with_capacity(line.len() + 2);
        area.extend_from_slice(line);
        area.push(Point::new(last.x, base));
        area.push(Point::new(first.x, base));
        area
    }

    /// Fill the area under the line, then stroke the line on top.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, projection: &Projection<'_>) {
        if self.is_empty() {
            return;
        }
        let line = self.line_points(projection);
        if let Some(fill) = &self.fill {
            let area = self.area_polygon(projection, &line);
            surface.fill_polygon(&area, fill);
        }
        if let Some(style) = &self.line {
            if line.len() >= 2 {
                surface.draw_polyline(&line, style);
            }
        }
    }
}

/// `(min, max)` of `values`, `(+∞, -∞)` when empty.
pub(crate) fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
