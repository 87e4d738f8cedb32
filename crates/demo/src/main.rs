// File: crates/demo/src/main.rs
// Summary: Demo renders bar, cartesian, fillbetween, logging, scatter, and map charts to PPMs.

use anyhow::{Context, Result};
use pixelplot_core::{
    AxesStyle, Bar, BarConfig, Canvas, CanvasOptions, Cartesian, CartesianConfig, Fillbetween,
    FillbetweenConfig, IndexedDisplay, Logging, LoggingConfig, Map, Pointer, Radius, Rgb,
    Scatter, ScatterConfig, TickParams,
};
use std::path::{Path, PathBuf};

const WIDTH: i32 = 480;
const HEIGHT: i32 = 320;

fn main() -> Result<()> {
    let out_dir = PathBuf::from("target/demo_out");

    // Optional CSV with `x,y` columns feeds the cartesian demo.
    let (x, y) = match std::env::args().nth(1) {
        Some(path) => load_xy_csv(Path::new(&path))
            .with_context(|| format!("failed to load CSV '{path}'"))?,
        None => sample_wave(40),
    };
    println!("Rendering with {} data points", x.len());

    render_cartesian(&x, &y, &out_dir.join("cartesian.ppm"))?;
    render_scatter(&out_dir.join("scatter.ppm"))?;
    render_bar(&out_dir.join("bar.ppm"))?;
    render_fillbetween(&out_dir.join("fillbetween.ppm"))?;
    render_logging(&out_dir.join("logging.ppm"))?;
    render_map(&out_dir.join("map.ppm"))?;

    println!("Wrote charts to {}", out_dir.display());
    Ok(())
}

fn new_canvas() -> Result<Canvas<IndexedDisplay>> {
    let surface = IndexedDisplay::new(WIDTH, HEIGHT);
    let opts = CanvasOptions {
        width: WIDTH,
        height: HEIGHT,
        padding: 25,
        box_color: Rgb::WHITE,
        ..CanvasOptions::default()
    };
    Ok(Canvas::new(surface, opts)?)
}

fn render_cartesian(x: &[f64], y: &[f64], out: &Path) -> Result<()> {
    let mut canvas = new_canvas()?;
    canvas.set_axes_style(AxesStyle::Box);
    canvas.tick_params(TickParams {
        grid: true,
        show_text: true,
        decimal_points: 1,
        ..TickParams::default()
    })?;
    Cartesian::new(
        &mut canvas,
        x,
        y,
        CartesianConfig {
            line_color: Rgb::new(0, 255, 255),
            fill: true,
            ..CartesianConfig::default()
        },
    )?;
    canvas.write_ppm(out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn render_scatter(out: &Path) -> Result<()> {
    let mut canvas = new_canvas()?;
    canvas.tick_params(TickParams::default())?;
    let x: Vec<f64> = (0..30).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| (v * 0.4).sin() * 20.0 + 30.0).collect();
    let radii: Vec<i32> = (0..30).map(|i| 2 + (i % 4)).collect();
    Scatter::new(
        &mut canvas,
        &x,
        &y,
        ScatterConfig {
            radius: Radius::PerPoint(radii),
            pointer_color: Rgb::new(255, 125, 125),
            ..ScatterConfig::default()
        },
    )?;
    let y2: Vec<f64> = x.iter().map(|&v| (v * 0.4).cos() * 15.0 + 30.0).collect();
    Scatter::new(
        &mut canvas,
        &x,
        &y2,
        ScatterConfig {
            pointer: Pointer::Diamond,
            pointer_color: Rgb::new(0, 255, 255),
            ..ScatterConfig::default()
        },
    )?;
    canvas.write_ppm(out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn render_bar(out: &Path) -> Result<()> {
    let mut canvas = new_canvas()?;
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [3.0, 5.0, 1.0, 7.0];
    Bar::new(
        &mut canvas,
        &x,
        &y,
        BarConfig { bar_space: 20, xstart: 8, ..BarConfig::default() },
    )?;
    canvas.write_ppm(out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn render_fillbetween(out: &Path) -> Result<()> {
    let mut canvas = new_canvas()?;
    let x: Vec<f64> = (0..50).map(|i| i as f64 / 10.0).collect();
    let y1: Vec<f64> = x.iter().map(|&v| v * v).collect();
    let y2: Vec<f64> = x.iter().map(|&v| v * v + 6.0).collect();
    Fillbetween::new(&mut canvas, &x, &y1, &y2, FillbetweenConfig::default())?;
    canvas.write_ppm(out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn render_logging(out: &Path) -> Result<()> {
    let mut canvas = new_canvas()?;
    canvas.tick_params(TickParams {
        tick_height_x: 4,
        tick_height_y: 4,
        color: Rgb::new(255, 125, 125),
        show_text: true,
        ..TickParams::default()
    })?;
    let x: Vec<f64> = (0..19).map(|i| (i as f64 + 1.0) * 10.0).collect();
    let y = [
        26.0, 22.0, 24.0, 30.0, 28.0, 35.0, 26.0, 25.0, 24.0, 23.0, 20.0, 27.0, 26.0, 33.0,
        24.0, 23.0, 19.0, 27.0, 26.0,
    ];
    let mut config = LoggingConfig::new([0.0, 210.0], [0.0, 110.0]);
    config.ticks_x = vec![25.0, 50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0];
    config.ticks_y = vec![25.0, 50.0, 75.0, 100.0];
    let chart = Logging::new(&mut canvas, &x[..1], &y[..1], config)?;

    // Strip-chart style: grow the window and redraw the interior only.
    for window in 2..=x.len() {
        chart.draw_points(&mut canvas, &x[..window], &y[..window], false)?;
    }
    canvas.write_ppm(out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn render_map(out: &Path) -> Result<()> {
    let mut canvas = new_canvas()?;
    let (cols, rows) = (10, 10);
    let mut data = Vec::with_capacity(cols * rows);
    for i in 0..rows {
        for j in 0..cols {
            let d = (i as f64 - 4.5).hypot(j as f64 - 4.5);
            data.push((-d * d / 8.0).exp());
        }
    }
    let max = data.iter().copied().fold(f64::MIN, f64::max);
    Map::new(
        &mut canvas,
        &data,
        (cols, rows),
        max,
        Rgb::new(255, 0, 68),
        Rgb::new(68, 0, 255),
    )?;
    canvas.write_ppm(out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn sample_wave(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| (v * 0.3).sin() * 10.0 + 15.0).collect();
    (x, y)
}

fn load_xy_csv(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let xi = find("x").context("missing `x` column")?;
    let yi = find("y").context("missing `y` column")?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    for record in reader.records() {
        let record = record?;
        x.push(record.get(xi).context("short row")?.trim().parse::<f64>()?);
        y.push(record.get(yi).context("short row")?.trim().parse::<f64>()?);
    }
    Ok((x, y))
}
