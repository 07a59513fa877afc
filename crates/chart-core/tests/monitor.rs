// File: crates/chart-core/tests/monitor.rs
// Purpose: CPU/RAM/network monitor wiring, sampling and network relabelling.

use std::time::Duration;

use livechart_core::{
    ChartError, Color, CpuMonitor, LabelSide, MonitorConfig, NetworkMonitor, RamMonitor, Rect,
    RecordingSurface, Series,
};

fn y_label_texts(monitor: &NetworkMonitor) -> Vec<String> {
    monitor.chart().y_axis().labels().iter().map(|l| l.text.clone()).collect()
}

#[test]
fn cpu_monitor_layout() {
    let monitor = CpuMonitor::new(MonitorConfig::default().with_header("CPU")).unwrap();
    let chart = monitor.chart();
    assert!(chart.is_series_locked());
    assert_eq!(chart.series_count(), 1);
    assert_eq!(monitor.interval(), Duration::from_secs(1));
    assert_eq!((chart.x_axis().min(), chart.x_axis().max()), (-60.0, 0.0));
    assert_eq!((chart.y_axis().min(), chart.y_axis().max()), (0.0, 100.0));
    assert_eq!(chart.y_axis().label_side(), Some(LabelSide::Right));

    let (_, series) = chart.iter_series().next().unwrap();
    assert_eq!(series.len(), 61);
    assert_eq!(series.bounds_y(), Some((0.0, 0.0)));
    let line = series.line_style().unwrap();
    assert_eq!(line.width, 2.0);
    assert_eq!(series.fill_style().unwrap().color, line.color.with_alpha(125));
}

#[test]
fn locked_chart_rejects_series_changes() {
    let mut monitor = CpuMonitor::new(MonitorConfig::default()).unwrap();
    let chart = monitor.chart_mut();
    assert!(matches!(chart.add_series(Series::new()), Err(ChartError::SeriesLocked)));
    assert!(matches!(chart.clear_series(), Err(ChartError::SeriesLocked)));
    assert_eq!(chart.series_count(), 1);
}

#[test]
fn locked_window_cannot_be_replaced() {
    let mut monitor = CpuMonitor::new(MonitorConfig { number_of_values: 2, ..Default::default() }).unwrap();
    let id = monitor.series_id();
    assert!(matches!(monitor.chart_mut().series_mut(id), Err(ChartError::SeriesLocked)));

    monitor.record(42.0).unwrap();
    let series = monitor.chart().series(id).unwrap().series();
    assert_eq!(series.y_values(), &[0.0, 0.0, 42.0]);
}

#[test]
fn cpu_tick_shifts_sample_in() {
    let mut monitor = CpuMonitor::new(MonitorConfig { number_of_values: 4, ..Default::default() }).unwrap();
    let mut readings = vec![10.0, 20.0].into_iter();
    let mut sampler = move || anyhow::Ok(readings.next().unwrap_or(0.0));
    monitor.tick(&mut sampler).unwrap();
    monitor.tick(&mut sampler).unwrap();

    let series = monitor.chart().series(monitor.series_id()).unwrap().series();
    assert_eq!(series.y_values(), &[0.0, 0.0, 0.0, 10.0, 20.0]);
}

#[test]
fn failed_sample_leaves_window_untouched() {
    let mut monitor = CpuMonitor::new(MonitorConfig { number_of_values: 2, ..Default::default() }).unwrap();
    monitor.record(50.0).unwrap();
    let mut broken = || -> anyhow::Result<f64> { Err(anyhow::anyhow!("counter unavailable")) };
    let err = monitor.tick(&mut broken).unwrap_err();
    assert!(matches!(err, ChartError::Sample(_)));

    let series = monitor.chart().series(monitor.series_id()).unwrap().series();
    assert_eq!(series.y_values(), &[0.0, 0.0, 50.0]);
}

#[test]
fn ram_monitor_records_used_share() {
    let mut monitor = RamMonitor::new(MonitorConfig { number_of_values: 1, ..Default::default() }, 8192.0).unwrap();
    monitor.record_available(2048.0).unwrap();
    let series = monitor.chart().series(monitor.series_id()).unwrap().series();
    assert_eq!(series.y_values(), &[0.0, 75.0]);
}

#[test]
fn ram_monitor_needs_positive_total() {
    assert!(RamMonitor::new(MonitorConfig::default(), 0.0).is_err());
}

#[test]
fn zero_length_window_is_rejected() {
    let config = MonitorConfig { number_of_values: 0, ..Default::default() };
    assert!(matches!(CpuMonitor::new(config), Err(ChartError::InvalidBounds { .. })));
}

#[test]
fn network_first_reading_is_zero() {
    let mut monitor = NetworkMonitor::new(MonitorConfig { number_of_values: 3, ..Default::default() }).unwrap();
    assert_eq!(y_label_texts(&monitor), ["0", "0.5 KBit", "1 KBit"]);

    monitor.record_totals(1_000_000, 2_000_000).unwrap();
    let sent = monitor.chart().series(monitor.sent_id()).unwrap().series();
    assert_eq!(sent.y_values(), &[0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn network_deltas_are_kbit_per_tick() {
    let mut monitor = NetworkMonitor::new(MonitorConfig { number_of_values: 3, ..Default::default() }).unwrap();
    monitor.record_totals(0, 0).unwrap();
    monitor.record_totals(3_000, 10_240).unwrap();

    let chart = monitor.chart();
    let sent = chart.series(monitor.sent_id()).unwrap().series();
    let received = chart.series(monitor.received_id()).unwrap().series();
    assert_eq!(sent.y_values().last(), Some(&16.0));
    assert_eq!(received.y_values().last(), Some(&80.0));
    assert_eq!((chart.y_axis().min(), chart.y_axis().max()), (0.0, 80.0));
    assert_eq!(y_label_texts(&monitor), ["0", "40 KBit", "80 KBit"]);
}

#[test]
fn network_switches_to_larger_units() {
    let mut monitor = NetworkMonitor::new(MonitorConfig { number_of_values: 2, ..Default::default() }).unwrap();
    monitor.record_totals(0, 0).unwrap();
    // 192 MiB in one tick is 1_572_864 KBit, 1.5 GBit
    monitor.tick(&mut || anyhow::Ok((0u64, 192 * 1024 * 1024u64))).unwrap();
    assert_eq!(y_label_texts(&monitor), ["0", "0.8 GBit", "1.5 GBit"]);

    // 2 MiB: 16384 KBit, 16 MBit
    let mut monitor = NetworkMonitor::new(MonitorConfig { number_of_values: 2, ..Default::default() }).unwrap();
    monitor.record_totals(0, 0).unwrap();
    monitor.record_totals(2 * 1024 * 1024, 0).unwrap();
    assert_eq!(y_label_texts(&monitor), ["0", "8 MBit", "16 MBit"]);
}

#[test]
fn monitor_renders_header_and_labels() {
    let theme = livechart_core::theme::find("dark");
    let mut monitor = CpuMonitor::new(MonitorConfig::default().with_header("CPU").with_theme(theme)).unwrap();
    monitor.record(42.0).unwrap();

    let mut surface = RecordingSurface::new();
    monitor.render(&mut surface, Rect::from_ltwh(0.0, 0.0, 320.0, 160.0)).unwrap();
    let texts: Vec<&str> = surface.texts().map(|(t, _)| t).collect();
    assert_eq!(texts[0], "CPU");
    assert!(texts.contains(&"100%"));
    assert!(texts.contains(&"60s"));
    assert_eq!(surface.polygons().count(), 1);
    assert!(matches!(
        surface.commands[0],
        livechart_core::DrawCommand::Rect { color, .. } if color == theme.background
    ));
    assert_ne!(theme.background, Color::WHITE);
}
