// File: crates/chart-core/src/continuous.rs
// Summary: Fixed-length sliding window over a Series (FIFO shift-and-append).

use std::ops::Deref;

use crate::error::{ChartError, Result};
use crate::style::{FillStyle, LineStyle};
use crate::series::{min_max, Series};

/// A [`Series`] whose length never changes after construction.
///
/// Read access goes through `Deref<Target = Series>`; the only mutations are the
/// shift-append operations and style setters, so the window length is invariant.
#[derive(Clone, Debug)]
pub struct ContinuousSeries {
    inner: Series,
}

impl ContinuousSeries {
    /// Wrap a pre-seeded series. The window is `series.len()` samples wide.
    pub fn new(series: Series) -> Result<Self> {
        if series.is_empty() {
            return Err(ChartError::EmptyWindow);
        }
        Ok(Self { inner: series })
    }

    /// `count + 1` zero samples at `x = i·step` for `i` in `-count..=0`.
    pub fn zeroed_window(count: usize, step: f64) -> Self {
        let n = count as i64;
        let xs: Vec<f64> = (-n..=0).map(|i| i as f64 * step).collect();
        let ys = vec![0.0; xs.len()];
        let mut inner = Series::new();
        inner.x_values = Some(xs);
        inner.y_values = ys;
        inner.rescan_extrema();
        Self { inner }
    }

    pub fn with_styles(mut self, line: Option<LineStyle>, fill: Option<FillStyle>) -> Self {
        self.set_styles(line, fill);
        self
    }

    pub fn set_styles(&mut self, line: Option<LineStyle>, fill: Option<FillStyle>) {
        self.inner.set_line_style(line);
        self.inner.set_fill_style(fill);
    }

    /// Drop the oldest y value, append `y` at the end and return the dropped value.
    /// x values stay where they are.
    pub fn shift_append_y(&mut self, y: f64) -> f64 {
        let ys = &mut self.inner.y_values;
        let evicted = ys[0];
        ys.copy_within(1.., 0);
        let last = ys.len() - 1;
        ys[last] = y;
        self.inner.rescan_y();
        self.inner.invalidate_average();
        evicted
    }

    /// Shift both x and y by one sample. Fails on an index-based window.
    pub fn shift_append_xy(&mut self, x: f64, y: f64) -> Result<(f64, f64)> {
        let xs = self.inner.x_values.as_mut().ok_or(ChartError::MissingXValues)?;
        let evicted_x = xs[0];
        xs.copy_within(1.., 0);
        let last = xs.len() - 1;
        xs[last] = x;
        let (lo, hi) = min_max(xs);
        self.inner.set_x_extrema(lo, hi);
        let evicted_y = self.shift_append_y(y);
        Ok((evicted_x, evicted_y))
    }

    pub fn as_series(&self) -> &Series {
        &self.inner
    }

    pub fn into_series(self) -> Series {
        self.inner
    }
}

impl Deref for ContinuousSeries {
    type Target = Series;

    fn deref(&self) -> &Series {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_is_rejected() {
        assert!(matches!(ContinuousSeries::new(Series::new()), Err(ChartError::EmptyWindow)));
    }

    #[test]
    fn zeroed_window_spans_past_to_now() {
        let w = ContinuousSeries::zeroed_window(4, 0.5);
        assert_eq!(w.len(), 5);
        assert_eq!(w.x_values(), Some(&[-2.0, -1.5, -1.0, -0.5, 0.0][..]));
        assert_eq!(w.bounds_y(), Some((0.0, 0.0)));
        assert_eq!(w.bounds_x(), Some((-2.0, 0.0)));
        assert_eq!(w.average(), Some(0.0));
    }

    #[test]
    fn zero_count_window_keeps_one_sample() {
        let w = ContinuousSeries::zeroed_window(0, 1.0);
        assert_eq!(w.x_values(), Some(&[0.0][..]));
        assert_eq!(w.bounds_x(), Some((0.0, 0.0)));
    }

    #[test]
    fn shift_append_y_is_fifo() {
        let mut w = ContinuousSeries::new(Series::from_y(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(w.shift_append_y(9.0), 1.0);
        assert_eq!(w.y_values(), &[2.0, 3.0, 9.0]);
        assert_eq!(w.bounds_y(), Some((2.0, 9.0)));
        assert_eq!(w.average(), Some(14.0 / 3.0));
    }

    #[test]
    fn shift_append_xy_needs_x_values() {
        let mut w = ContinuousSeries::new(Series::from_y(&[1.0])).unwrap();
        assert!(matches!(w.shift_append_xy(1.0, 1.0), Err(ChartError::MissingXValues)));
        assert_eq!(w.y_values(), &[1.0]);
    }

    #[test]
    fn shift_append_xy_moves_x_extrema() {
        let mut w = ContinuousSeries::zeroed_window(2, 1.0);
        assert_eq!(w.shift_append_xy(1.0, 5.0).unwrap(), (-2.0, 0.0));
        assert_eq!(w.x_values(), Some(&[-1.0, 0.0, 1.0][..]));
        assert_eq!(w.bounds_x(), Some((-1.0, 1.0)));
    }
}
