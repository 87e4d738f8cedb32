// File: crates/pixelplot-core/src/chart/logging.rs
// Summary: Strip-chart renderer for live data: fixed ranges, incremental redraw.

use crate::canvas::{Canvas, ChartFamily, TextAxis};
use crate::color::{ColorHandle, Rgb};
use crate::error::PlotError;
use crate::surface::DisplaySurface;

/// Default tick positions in data space, both axes.
const DEFAULT_TICKS: [f64; 6] = [0.0, 10.0, 30.0, 50.0, 70.0, 90.0];

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Fixed x range; live displays never auto-range.
    pub range_x: [f64; 2],
    pub range_y: [f64; 2],
    pub line_color: Rgb,
    /// Tick positions in data space (not percentages).
    pub ticks_x: Vec<f64>,
    pub ticks_y: Vec<f64>,
    /// Shift ticks outward by the tick height instead of sitting on the axis.
    pub tick_pos: bool,
    /// Drop a vertical to the baseline from every point.
    pub fill: bool,
}

impl LoggingConfig {
    pub fn new(range_x: [f64; 2], range_y: [f64; 2]) -> Self {
        Self {
            range_x,
            range_y,
            line_color: Rgb::GREEN,
            ticks_x: DEFAULT_TICKS.to_vec(),
            ticks_y: DEFAULT_TICKS.to_vec(),
            tick_pos: false,
            fill: false,
        }
    }
}

/// Strip-chart renderer. Unlike the other chart types it is built for
/// repeated calls: [`draw_points`](Logging::draw_points) clears only the
/// plot interior and redraws the latest data window, leaving box, ticks,
/// and labels untouched.
#[derive(Debug)]
pub struct Logging {
    color: ColorHandle,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    ticks_x: Vec<f64>,
    ticks_y: Vec<f64>,
    tick_off_x: i32,
    tick_off_y: i32,
}

impl Logging {
    pub fn new<S: DisplaySurface>(
        canvas: &mut Canvas<S>,
        x: &[f64],
        y: &[f64],
        config: LoggingConfig,
    ) -> Result<Self, PlotError> {
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch { x: x.len(), y: y.len() });
        }
        let [x_lo, x_hi] = config.range_x;
        if x_lo == x_hi {
            return Err(PlotError::DegenerateRange(x_lo));
        }
        let [y_lo, y_hi] = config.range_y;
        if y_lo == y_hi {
            return Err(PlotError::DegenerateRange(y_lo));
        }

        let color = canvas.allocate_chart_color(None, config.line_color);
        let (tick_off_x, tick_off_y) = if config.tick_pos {
            (canvas.tick_height_x(), canvas.tick_height_y())
        } else {
            (0, 0)
        };

        let chart = Self {
            color,
            x_min: x_lo.min(x_hi),
            x_max: x_lo.max(x_hi),
            y_min: y_lo.min(y_hi),
            y_max: y_lo.max(y_hi),
            ticks_x: config.ticks_x,
            ticks_y: config.ticks_y,
            tick_off_x,
            tick_off_y,
        };

        chart.draw_points(canvas, x, y, config.fill)?;
        if canvas.take_family_ticks(ChartFamily::Logging) {
            chart.draw_ticks(canvas);
        }
        Ok(chart)
    }

    /// Redraw with the current data window: clears the plot interior, then
    /// draws the new points. Call repeatedly as the window grows or slides.
    pub fn draw_points<S: DisplaySurface>(
        &self,
        canvas: &mut Canvas<S>,
        x: &[f64],
        y: &[f64],
        fill: bool,
    ) -> Result<(), PlotError> {
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch { x: x.len(), y: y.len() });
        }
        self.clear_plot(canvas);
        self.draw_new_lines(canvas, x, y, fill);
        Ok(())
    }

    /// Blank the interior rectangle only; box, ticks, and labels survive.
    fn clear_plot<S: DisplaySurface>(&self, canvas: &mut Canvas<S>) {
        let x = canvas.x_min() + 1 + canvas.tick_height_x();
        let y = canvas.y_max() + 1;
        let width = canvas.plot_width() - 2 - 2 * canvas.padding() - canvas.tick_height_x();
        let height = canvas.plot_height() - 2 - 2 * canvas.padding() - canvas.tick_height_y();
        let background = canvas.background();
        canvas.surface_mut().rect(x, y, width, height, background, true);
    }

    fn draw_new_lines<S: DisplaySurface>(
        &self,
        canvas: &mut Canvas<S>,
        x: &[f64],
        y: &[f64],
        fill: bool,
    ) {
        let x_norm: Vec<i32> = x
            .iter()
            .map(|&v| canvas.to_pixel_x(self.x_min, self.x_max, v))
            .collect();
        let y_norm: Vec<i32> = y
            .iter()
            .map(|&v| canvas.to_pixel_y(self.y_min, self.y_max, v))
            .collect();

        if x_norm.len() == 1 {
            canvas.surface_mut().pixel(x_norm[0], y_norm[0], self.color);
            return;
        }

        for index in 0..x_norm.len().saturating_sub(1) {
            // Same data-space clipping rule as the cartesian renderer.
            if y[index] >= self.y_max || y[index + 1] >= self.y_max {
                continue;
            }
            canvas.surface_mut().line(
                x_norm[index],
                y_norm[index],
                x_norm[index + 1],
                y_norm[index + 1],
                self.color,
            );
        }

        if fill {
            let baseline = canvas.y_min();
            for index in 0..x_norm.len() {
                canvas
                    .surface_mut()
                    .line(x_norm[index], y_norm[index], x_norm[index], baseline, self.color);
            }
        }
    }

    /// Logging ticks are fixed data-space positions mapped straight into
    /// pixels (no percentage stage) so the scale stays put while data moves.
    fn draw_ticks<S: DisplaySurface>(&self, canvas: &mut Canvas<S>) {
        let ticks_x_px: Vec<i32> = self
            .ticks_x
            .iter()
            .map(|&t| canvas.to_pixel_x(self.x_min, self.x_max, t))
            .collect();
        let ticks_y_px: Vec<i32> = self
            .ticks_y
            .iter()
            .map(|&t| canvas.to_pixel_y(self.y_min, self.y_max, t))
            .collect();

        let tick_color = canvas.tick_color();
        let base_x = canvas.y_min() + self.tick_off_x;
        let height_x = canvas.tick_height_x();
        for (i, &tick) in ticks_x_px.iter().enumerate() {
            canvas
                .surface_mut()
                .line(tick, base_x, tick, base_x - height_x, tick_color);
            let label = format!("{:.*}", canvas.decimal_points(), self.ticks_x[i]);
            let y = canvas.y_min();
            canvas.show_text(&label, tick, y, None, false, Some(TextAxis::X));
        }

        let base_y = canvas.x_min() - self.tick_off_y;
        let height_y = canvas.tick_height_y();
        for (i, &tick) in ticks_y_px.iter().enumerate() {
            canvas
                .surface_mut()
                .line(base_y, tick, base_y + height_y, tick, tick_color);
            let label = format!("{:.*}", canvas.decimal_points(), self.ticks_y[i]);
            let x = canvas.x_min();
            canvas.show_text(&label, x, tick, None, false, Some(TextAxis::Y));
        }
    }

    pub fn color(&self) -> ColorHandle {
        self.color
    }
}
