// File: crates/demo/src/main.rs
// Summary: Demo drives CPU/RAM/network monitors with synthetic samplers and plots an optional
// CSV, rendering PNG frames to target/out.
// Usage: livechart-demo [frames] [theme] [csv]

use anyhow::{Context, Result};
use livechart_core::theme::{self, Theme};
use livechart_core::{
    AutoZoom, Axis, AxisConfig, Chart, CpuMonitor, FillStyle, LabelFormat, LabelSide, LineStyle,
    MonitorConfig, NetworkMonitor, RamMonitor, Series,
};
use livechart_render_skia::{render_to_png, RenderOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const TOTAL_RAM_MB: f64 = 16_384.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let frames = match args.next() {
        Some(raw) => raw.parse::<usize>().with_context(|| format!("invalid frame count '{raw}'"))?,
        None => 5,
    };
    let theme = theme::find(&args.next().unwrap_or_else(|| "light".to_string()));
    let csv_path = args.next();
    tracing::info!(frames, theme = theme.name, "starting demo");

    run_monitors(frames, theme)?;

    if let Some(raw) = csv_path {
        let path = resolve_path(&raw)?;
        plot_csv(&path, theme)?;
    }
    Ok(())
}

fn run_monitors(frames: usize, theme: Theme) -> Result<()> {
    let base = MonitorConfig {
        number_of_values: 30,
        time_step: Duration::from_millis(250),
        theme,
        ..Default::default()
    };
    let mut cpu = CpuMonitor::new(base.clone().with_header("CPU"))?;
    let mut ram = RamMonitor::new(base.clone().with_header("RAM"), TOTAL_RAM_MB)?;
    let mut net = NetworkMonitor::new(base.with_header("Network"))?;

    // Synthetic metric sources standing in for OS counters.
    let mut tick = 0u32;
    let mut cpu_sampler = move || {
        tick += 1;
        let t = tick as f64 * 0.4;
        anyhow::Ok((50.0 + 40.0 * t.sin()).clamp(0.0, 100.0))
    };
    let mut ram_tick = 0u32;
    let mut ram_sampler = move || {
        ram_tick += 1;
        let used = 0.55 + 0.15 * (ram_tick as f64 * 0.25).cos();
        anyhow::Ok(TOTAL_RAM_MB * (1.0 - used))
    };
    let (mut sent, mut received) = (0u64, 0u64);
    let mut net_tick = 0u64;
    let mut net_sampler = move || {
        net_tick += 1;
        sent += 40_000 + (net_tick % 7) * 25_000;
        received += 250_000 + (net_tick % 5) * 400_000;
        anyhow::Ok((sent, received))
    };

    let opts = RenderOptions { background: theme.background, ..Default::default() };
    let out_dir = PathBuf::from("target/out");
    for frame in 0..frames {
        cpu.tick(&mut cpu_sampler)?;
        ram.tick(&mut ram_sampler)?;
        net.tick(&mut net_sampler)?;

        render_to_png(cpu.chart_mut(), &opts, out_dir.join(format!("cpu_{frame:03}.png")))?;
        render_to_png(ram.chart_mut(), &opts, out_dir.join(format!("ram_{frame:03}.png")))?;
        render_to_png(net.chart_mut(), &opts, out_dir.join(format!("net_{frame:03}.png")))?;
        tracing::info!(frame, dir = %out_dir.display(), "wrote monitor frames");

        if frame + 1 < frames {
            std::thread::sleep(cpu.interval());
        }
    }
    Ok(())
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Roughly four labels across `[min, max]`, rounded to a whole number when the span allows.
fn label_spacing(min: f64, max: f64) -> f64 {
    let raw = (max - min) / 4.0;
    if raw >= 1.0 { raw.round() } else { raw }
}

fn plot_csv(path: &Path, theme: Theme) -> Result<()> {
    let (xs, ys) = load_xy_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if ys.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }
    tracing::info!(rows = ys.len(), "loaded CSV");

    let color = theme.series_color(0);
    let mut series = Series::with_styles(
        Some(LineStyle::solid(color, 2.0)),
        Some(FillStyle::new(color.with_alpha(125))),
    );
    match xs {
        Some(xs) => series.append_many_xy(&xs, &ys)?,
        None => series.append_many_y(&ys),
    }

    let (x_min, x_max) = series.bounds_x().unwrap_or((0.0, 1.0));
    let (y_min, y_max) = series.bounds_y().unwrap_or((0.0, 1.0));
    let label = theme.label_style(12.0);
    let mut chart = Chart::new(
        Axis::horizontal(AxisConfig::new(0.0, 1.0).grid(theme.grid_style()).labels(label, LabelFormat::integer()))?,
        Axis::vertical(
            AxisConfig::new(0.0, 1.0).grid(theme.grid_style()).labels(label, LabelFormat::numeric(1, "")),
            LabelSide::Left,
        )?,
    )
    .with_header(path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default(), theme.header_style(12.0))
    .with_background(theme.background)
    .with_auto_zoom(AutoZoom { x: true, y: true });
    chart.x_axis_mut().set_label_spacing(label_spacing(x_min, x_max))?;
    chart.y_axis_mut().set_label_spacing(label_spacing(y_min, y_max))?;
    chart.add_series(series)?;

    let out = out_name_for(path);
    render_to_png(&mut chart, &RenderOptions { background: theme.background, ..Default::default() }, &out)?;
    tracing::info!(out = %out.display(), "wrote CSV chart");
    Ok(())
}

/// Produce output file name like target/out/csv_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("csv_{stem}.png"))
}

/// Load an `x,y` (or single `y`) CSV. Without an `x`/`time` column samples are index-based.
fn load_xy_csv(path: &Path) -> Result<(Option<Vec<f64>>, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "CSV headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "timestamp", "t"]);
    let i_y = idx(&["y", "value", "close"])
        .or_else(|| (0..headers.len()).find(|&i| Some(i) != i_x));
    let Some(i_y) = i_y else {
        anyhow::bail!("no value column in {}", path.display());
    };

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let Some(y) = parse(i_y) else {
            tracing::warn!(line = ?rec.position().map(|p| p.line()), "skipping row without a numeric value");
            continue;
        };
        match i_x {
            Some(ix) => match parse(ix) {
                Some(x) => {
                    xs.push(x);
                    ys.push(y);
                }
                None => tracing::warn!(line = ?rec.position().map(|p| p.line()), "skipping row without a numeric x"),
            },
            None => ys.push(y),
        }
    }
    Ok((i_x.map(|_| xs), ys))
}
