// File: crates/chart-core/src/monitor.rs
// Summary: Ready-made live monitors (CPU, RAM, network) built on locked charts and sliding windows.
// Notes:
// - Monitors never own a timer. The host calls `tick` every `interval()` with a sampler
//   that reads the metric, or feeds values directly through `record*`.

use std::time::Duration;

use crate::axis::{Axis, AxisConfig, LabelSide};
use crate::chart::{Chart, SeriesId};
use crate::continuous::ContinuousSeries;
use crate::error::{ChartError, Result};
use crate::format::{one_decimal, LabelFormat};
use crate::geometry::Rect;
use crate::style::{Color, FillStyle, LineStyle};
use crate::surface::Surface;
use crate::theme::Theme;

/// Source of one metric reading per tick.
pub trait Sampler<R> {
    fn sample(&mut self) -> anyhow::Result<R>;
}

impl<R, F> Sampler<R> for F
where
    F: FnMut() -> anyhow::Result<R>,
{
    fn sample(&mut self) -> anyhow::Result<R> {
        self()
    }
}

/// Shared monitor settings.
#[derive(Clone, Debug)]
pub struct MonitorConfig {
    /// Samples kept in the window (plus the `now` sample).
    pub number_of_values: usize,
    pub time_step: Duration,
    pub header: String,
    pub theme: Theme,
    pub font_size: f32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            number_of_values: 60,
            time_step: Duration::from_secs(1),
            header: String::new(),
            theme: Theme::light(),
            font_size: 12.0,
        }
    }
}

impl MonitorConfig {
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn step_secs(&self) -> f64 {
        self.time_step.as_secs_f64()
    }

    /// `[-n·step, 0]` with roughly three labels counting seconds into the past.
    fn time_axis(&self) -> Result<Axis> {
        let x_min = -(self.number_of_values as f64) * self.step_secs();
        let config = AxisConfig::new(x_min, 0.0)
            .spacing((x_min / 3.0).abs().round())
            .grid(self.theme.grid_style())
            .labels(self.theme.label_style(self.font_size), LabelFormat::seconds_ago());
        Axis::horizontal(config)
    }

    fn percent_axis(&self) -> Result<Axis> {
        Axis::percent(
            50.0,
            self.theme.grid_style(),
            self.theme.label_style(self.font_size),
            LabelSide::Right,
        )
    }

    fn window(&self, color: Color) -> ContinuousSeries {
        ContinuousSeries::zeroed_window(self.number_of_values, self.step_secs()).with_styles(
            Some(LineStyle::solid(color, 2.0)),
            Some(FillStyle::new(color.with_alpha(125))),
        )
    }

    fn chart(&self, y_axis: Axis) -> Result<Chart> {
        Ok(Chart::new(self.time_axis()?, y_axis)
            .with_header(self.header.clone(), self.theme.header_style(self.font_size))
            .with_background(self.theme.background))
    }
}

fn shift(chart: &mut Chart, id: SeriesId, y: f64) -> Result<()> {
    let window = chart
        .entry_mut(id)?
        .as_continuous_mut()
        .ok_or(ChartError::UnknownSeries(id))?;
    window.shift_append_y(y);
    Ok(())
}

fn take_sample<R, S: Sampler<R> + ?Sized>(sampler: &mut S, what: &'static str) -> Result<R> {
    sampler.sample().map_err(|e| {
        tracing::warn!(monitor = what, error = %e, "sample failed");
        ChartError::Sample(e)
    })
}

/// CPU utilisation in percent.
pub struct CpuMonitor {
    chart: Chart,
    series: SeriesId,
    interval: Duration,
}

impl CpuMonitor {
    pub fn new(config: MonitorConfig) -> Result<Self> {
        let mut chart = config.chart(config.percent_axis()?)?;
        let series = chart.insert_series(config.window(config.theme.series_color(0)).into());
        chart.lock_series();
        Ok(Self { chart, series, interval: config.time_step })
    }

    pub fn record(&mut self, percent: f64) -> Result<()> {
        shift(&mut self.chart, self.series, percent)
    }

    /// Read one value and record it. A failed read leaves the window untouched.
    pub fn tick<S: Sampler<f64> + ?Sized>(&mut self, sampler: &mut S) -> Result<()> {
        let percent = take_sample(sampler, "cpu")?;
        self.record(percent)
    }

    pub fn interval(&self) -> Duration { self.interval }
    pub fn series_id(&self) -> SeriesId { self.series }
    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn chart_mut(&mut self) -> &mut Chart { &mut self.chart }

    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, bounds: Rect) -> Result<()> {
        self.chart.render(surface, bounds)
    }
}

/// Used physical memory in percent of `total_mb`.
pub struct RamMonitor {
    chart: Chart,
    series: SeriesId,
    interval: Duration,
    total_mb: f64,
}

impl RamMonitor {
    pub fn new(config: MonitorConfig, total_mb: f64) -> Result<Self> {
        if !total_mb.is_finite() || total_mb <= 0.0 {
            return Err(ChartError::InvalidBounds { min: 0.0, max: total_mb });
        }
        let mut chart = config.chart(config.percent_axis()?)?;
        let series = chart.insert_series(config.window(config.theme.series_color(0)).into());
        chart.lock_series();
        Ok(Self { chart, series, interval: config.time_step, total_mb })
    }

    pub fn total_mb(&self) -> f64 { self.total_mb }

    /// Record the currently available memory; the window stores the used share.
    pub fn record_available(&mut self, available_mb: f64) -> Result<()> {
        let used = (self.total_mb - available_mb) / self.total_mb * 100.0;
        shift(&mut self.chart, self.series, used)
    }

    /// `sampler` yields available MB.
    pub fn tick<S: Sampler<f64> + ?Sized>(&mut self, sampler: &mut S) -> Result<()> {
        let available = take_sample(sampler, "ram")?;
        self.record_available(available)
    }

    pub fn interval(&self) -> Duration { self.interval }
    pub fn series_id(&self) -> SeriesId { self.series }
    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn chart_mut(&mut self) -> &mut Chart { &mut self.chart }

    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, bounds: Rect) -> Result<()> {
        self.chart.render(surface, bounds)
    }
}

/// Throughput unit chosen for the current y-axis maximum (in KBit).
fn throughput_unit(max_kbit: f64) -> (&'static str, f64) {
    const K: f64 = 1024.0;
    if max_kbit < K {
        ("KBit", 1.0)
    } else if max_kbit < K * K {
        ("MBit", K)
    } else {
        ("GBit", K * K)
    }
}

/// Counter delta in KBit, `0` when the counter went backwards.
fn delta_kbit(now: u64, prev: u64) -> f64 {
    (now.saturating_sub(prev) / 1024 * 8) as f64
}

/// Sent and received throughput per tick, in KBit.
pub struct NetworkMonitor {
    chart: Chart,
    sent: SeriesId,
    received: SeriesId,
    interval: Duration,
    /// Byte counters from the previous reading.
    last_totals: Option<(u64, u64)>,
}

impl NetworkMonitor {
    pub fn new(config: MonitorConfig) -> Result<Self> {
        let y_axis = Axis::vertical(
            AxisConfig::new(0.0, 1.0)
                .grid(config.theme.grid_style())
                .labels(config.theme.label_style(config.font_size), LabelFormat::integer()),
            LabelSide::Right,
        )?;
        let mut chart = config.chart(y_axis)?;
        let sent = chart.insert_series(config.window(config.theme.series_color(0)).into());
        let received = chart.insert_series(config.window(config.theme.series_color(1)).into());
        chart.lock_series();
        let mut monitor = Self { chart, sent, received, interval: config.time_step, last_totals: None };
        monitor.relabel()?;
        Ok(monitor)
    }

    /// Feed cumulative byte counters. The first reading only primes the deltas.
    pub fn record_totals(&mut self, sent_bytes: u64, received_bytes: u64) -> Result<()> {
        let (sent, received) = match self.last_totals {
            Some((prev_sent, prev_received)) => {
                (delta_kbit(sent_bytes, prev_sent), delta_kbit(received_bytes, prev_received))
            }
            None => (0.0, 0.0),
        };
        shift(&mut self.chart, self.sent, sent)?;
        shift(&mut self.chart, self.received, received)?;
        self.last_totals = Some((sent_bytes, received_bytes));
        self.relabel()
    }

    /// `sampler` yields cumulative `(sent, received)` byte counters.
    pub fn tick<S: Sampler<(u64, u64)> + ?Sized>(&mut self, sampler: &mut S) -> Result<()> {
        let (sent, received) = take_sample(sampler, "network")?;
        self.record_totals(sent, received)
    }

    /// Fit the y axis to the windows and label `0`, `max/2` and `max` in a readable unit.
    fn relabel(&mut self) -> Result<()> {
        self.chart.auto_zoom_y()?;
        let max = self.chart.y_axis().max();
        let (unit, divisor) = throughput_unit(max);
        tracing::debug!(max, unit, "relabelling network axis");

        let axis = self.chart.y_axis_mut();
        axis.clear_labels();
        axis.add_label(0.0, "0");
        axis.add_label(max / 2.0, format!("{} {unit}", one_decimal(max / divisor / 2.0)));
        axis.add_label(max, format!("{} {unit}", one_decimal(max / divisor)));
        Ok(())
    }

    pub fn interval(&self) -> Duration { self.interval }
    pub fn sent_id(&self) -> SeriesId { self.sent }
    pub fn received_id(&self) -> SeriesId { self.received }
    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn chart_mut(&mut self) -> &mut Chart { &mut self.chart }

    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, bounds: Rect) -> Result<()> {
        self.chart.render(surface, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_thresholds() {
        assert_eq!(throughput_unit(1023.0).0, "KBit");
        assert_eq!(throughput_unit(1024.0).0, "MBit");
        assert_eq!(throughput_unit(1024.0 * 1024.0), ("GBit", 1024.0 * 1024.0));
    }

    #[test]
    fn delta_uses_integer_division() {
        assert_eq!(delta_kbit(3000, 0), 16.0);
        assert_eq!(delta_kbit(1023, 0), 0.0);
        assert_eq!(delta_kbit(5, 10), 0.0);
    }

    #[test]
    fn time_axis_spacing_is_a_third_of_the_window() {
        let config = MonitorConfig::default();
        let axis = config.time_axis().unwrap();
        assert_eq!((axis.min(), axis.max()), (-60.0, 0.0));
        assert_eq!(axis.label_spacing(), 20.0);
        let texts: Vec<_> = axis.labels().iter().map(|l| l.text.clone()).collect();
        assert_eq!(texts, ["60s", "40s", "20s", "0"]);
    }
}
