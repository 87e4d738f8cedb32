// File: crates/pixelplot-core/src/chart/cartesian.rs
// Summary: Cartesian line chart with four line styles, optional baseline fill, and redraw.

use std::str::FromStr;

use crate::canvas::{Canvas, ChartFamily};
use crate::color::{ColorHandle, Rgb};
use crate::error::PlotError;
use crate::surface::DisplaySurface;
use crate::transform::resolve_range;

/// How consecutive points are joined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineStyle {
    /// Every segment drawn.
    #[default]
    Solid,
    /// Points only, no segments.
    Dotted,
    /// Segments at even indices only.
    Dashed,
    /// A segment every third index, single points in between.
    DashDot,
}

impl FromStr for LineStyle {
    type Err = PlotError;

    /// Accepts the compact spellings `"-"`, `"."`, `"- -"`, and `"-.-"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(LineStyle::Solid),
            "." => Ok(LineStyle::Dotted),
            "- -" => Ok(LineStyle::Dashed),
            "-.-" => Ok(LineStyle::DashDot),
            other => Err(PlotError::UnknownLineStyle(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CartesianConfig {
    /// Explicit x range; padded data extent when `None`.
    pub range_x: Option<[f64; 2]>,
    pub range_y: Option<[f64; 2]>,
    pub line_color: Rgb,
    pub line_style: LineStyle,
    /// Major tick positions in 0-100 percentage space.
    pub ticks_x: Option<Vec<f64>>,
    pub ticks_y: Option<Vec<f64>>,
    /// Fill the area between the curve and the bottom axis.
    pub fill: bool,
    /// Explicit palette index for the line color.
    pub color_index: Option<u8>,
}

impl Default for CartesianConfig {
    fn default() -> Self {
        Self {
            range_x: None,
            range_y: None,
            line_color: Rgb::GREEN,
            line_style: LineStyle::Solid,
            ticks_x: None,
            ticks_y: None,
            fill: false,
            color_index: None,
        }
    }
}

/// Cartesian line renderer. Construction resolves ranges, normalizes the
/// data, and draws; [`update`](Cartesian::update) redraws in place with new
/// data against the same ranges.
#[derive(Debug)]
pub struct Cartesian {
    color: ColorHandle,
    style: LineStyle,
    fill: bool,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Cartesian {
    pub fn new<S: DisplaySurface>(
        canvas: &mut Canvas<S>,
        x: &[f64],
        y: &[f64],
        config: CartesianConfig,
    ) -> Result<Self, PlotError> {
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch { x: x.len(), y: y.len() });
        }

        let color = canvas.allocate_chart_color(config.color_index, config.line_color);
        let x_range = resolve_range(config.range_x, x)?;
        let y_range = resolve_range(config.range_y, y)?;

        let chart = Self {
            color,
            style: config.line_style,
            fill: config.fill,
            x_range,
            y_range,
        };
        chart.draw_series(canvas, x, y);

        if canvas.take_family_ticks(ChartFamily::Cartesian) {
            canvas.draw_ticks(x, y, config.ticks_x.as_deref(), config.ticks_y.as_deref())?;
        }
        Ok(chart)
    }

    /// Clear the surface to the background, redraw the box, and draw the new
    /// data against the ranges resolved at construction.
    pub fn update<S: DisplaySurface>(
        &self,
        canvas: &mut Canvas<S>,
        x: &[f64],
        y: &[f64],
    ) -> Result<(), PlotError> {
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch { x: x.len(), y: y.len() });
        }
        canvas.clear();
        self.draw_series(canvas, x, y);
        Ok(())
    }

    fn draw_series<S: DisplaySurface>(&self, canvas: &mut Canvas<S>, x: &[f64], y: &[f64]) {
        let (x_min, x_max) = self.x_range;
        let (y_min, y_max) = self.y_range;
        let x_norm: Vec<i32> = x.iter().map(|&v| canvas.to_pixel_x(x_min, x_max, v)).collect();
        let y_norm: Vec<i32> = y.iter().map(|&v| canvas.to_pixel_y(y_min, y_max, v)).collect();

        if self.fill {
            if let (Some(&first), Some(&last)) = (x_norm.first(), x_norm.last()) {
                // Baseline-to-curve outline: first point down, along the
                // curve, last point down, and back along the baseline.
                let baseline = canvas.y_min();
                let mut points: Vec<(i32, i32)> = Vec::with_capacity(x_norm.len() + 3);
                points.push((first, baseline));
                points.extend(x_norm.iter().copied().zip(y_norm.iter().copied()));
                points.push((last, baseline));
                points.push((first, baseline));
                canvas.surface_mut().poly(0, 0, &points, self.color, true);
            }
        }

        for index in 0..x_norm.len().saturating_sub(1) {
            // Clipping happens in data space against the resolved y maximum:
            // a point at or above it is skipped along with its segments.
            if y[index] >= y_max {
                continue;
            }
            let next_in_range = y[index + 1] < y_max;
            self.draw_segment(canvas, index, next_in_range, &x_norm, &y_norm);
        }
    }

    fn draw_segment<S: DisplaySurface>(
        &self,
        canvas: &mut Canvas<S>,
        index: usize,
        next_in_range: bool,
        x_norm: &[i32],
        y_norm: &[i32],
    ) {
        let surface = canvas.surface_mut();
        match self.style {
            LineStyle::Solid => {
                if next_in_range {
                    self.segment(surface, index, x_norm, y_norm);
                }
            }
            LineStyle::Dotted => surface.pixel(x_norm[index], y_norm[index], self.color),
            LineStyle::Dashed => {
                if index % 2 == 0 && next_in_range {
                    self.segment(surface, index, x_norm, y_norm);
                }
            }
            LineStyle::DashDot => {
                if index % 3 == 0 && next_in_range {
                    self.segment(surface, index, x_norm, y_norm);
                } else {
                    surface.pixel(x_norm[index], y_norm[index], self.color);
                }
            }
        }
    }

    fn segment<S: DisplaySurface>(&self, surface: &mut S, index: usize, x_norm: &[i32], y_norm: &[i32]) {
        surface.line(
            x_norm[index],
            y_norm[index],
            x_norm[index + 1],
            y_norm[index + 1],
            self.color,
        );
    }

    pub fn color(&self) -> ColorHandle {
        self.color
    }
}
