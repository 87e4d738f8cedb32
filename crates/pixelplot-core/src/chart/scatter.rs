// File: crates/pixelplot-core/src/chart/scatter.rs
// Summary: Scatter chart with circle/triangle/square/diamond pointers.

use std::str::FromStr;

use crate::canvas::{Canvas, ChartFamily};
use crate::color::{ColorHandle, Rgb};
use crate::error::PlotError;
use crate::surface::DisplaySurface;
use crate::transform::resolve_range;

// Pointer outlines as local offsets from the normalized point.
const TRIANGLE: [(i32, i32); 3] = [(0, 0), (8, 0), (4, -7)];
const SQUARE: [(i32, i32); 4] = [(0, 0), (6, 0), (6, -6), (0, -6)];
const DIAMOND: [(i32, i32); 4] = [(0, 0), (3, -4), (6, 0), (3, 4)];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pointer {
    #[default]
    Circle,
    Triangle,
    Square,
    Diamond,
}

impl Pointer {
    fn name(self) -> &'static str {
        match self {
            Pointer::Circle => "circle",
            Pointer::Triangle => "triangle",
            Pointer::Square => "square",
            Pointer::Diamond => "diamond",
        }
    }
}

impl FromStr for Pointer {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Pointer::Circle),
            "triangle" => Ok(Pointer::Triangle),
            "square" => Ok(Pointer::Square),
            "diamond" => Ok(Pointer::Diamond),
            other => Err(PlotError::UnknownPointer(other.to_string())),
        }
    }
}

/// Circle radius: one value for every point, or one per point.
#[derive(Clone, Debug)]
pub enum Radius {
    Fixed(i32),
    PerPoint(Vec<i32>),
}

impl Default for Radius {
    fn default() -> Self {
        Radius::Fixed(3)
    }
}

#[derive(Clone, Debug)]
pub struct ScatterConfig {
    pub range_x: Option<[f64; 2]>,
    pub range_y: Option<[f64; 2]>,
    /// Only [`Pointer::Circle`] accepts [`Radius::PerPoint`].
    pub radius: Radius,
    pub pointer_color: Rgb,
    pub pointer: Pointer,
    pub color_index: Option<u8>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            range_x: None,
            range_y: None,
            radius: Radius::default(),
            pointer_color: Rgb::GREEN,
            pointer: Pointer::default(),
            color_index: None,
        }
    }
}

/// Scatter renderer: a filled pointer shape replicated at every normalized
/// point.
#[derive(Debug)]
pub struct Scatter {
    color: ColorHandle,
    pointer: Pointer,
    radius: Radius,
    x_norm: Vec<i32>,
    y_norm: Vec<i32>,
}

impl Scatter {
    pub fn new<S: DisplaySurface>(
        canvas: &mut Canvas<S>,
        x: &[f64],
        y: &[f64],
        config: ScatterConfig,
    ) -> Result<Self, PlotError> {
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch { x: x.len(), y: y.len() });
        }
        // Validate before anything touches the surface or the palette.
        if let Radius::PerPoint(radii) = &config.radius {
            if config.pointer != Pointer::Circle {
                return Err(PlotError::VariableRadius(config.pointer.name()));
            }
            if radii.len() != x.len() {
                return Err(PlotError::LengthMismatch { x: x.len(), y: radii.len() });
            }
        }

        let color = canvas.allocate_chart_color(config.color_index, config.pointer_color);
        let (x_min, x_max) = resolve_range(config.range_x, x)?;
        let (y_min, y_max) = resolve_range(config.range_y, y)?;

        let x_norm: Vec<i32> = x.iter().map(|&v| canvas.to_pixel_x(x_min, x_max, v)).collect();
        let y_norm: Vec<i32> = y.iter().map(|&v| canvas.to_pixel_y(y_min, y_max, v)).collect();

        let chart = Self {
            color,
            pointer: config.pointer,
            radius: config.radius,
            x_norm,
            y_norm,
        };
        chart.draw_pointers(canvas);

        if canvas.take_family_ticks(ChartFamily::Scatter) {
            canvas.draw_ticks(x, y, None, None)?;
        }
        Ok(chart)
    }

    fn draw_pointers<S: DisplaySurface>(&self, canvas: &mut Canvas<S>) {
        let surface = canvas.surface_mut();
        for (i, (&px, &py)) in self.x_norm.iter().zip(self.y_norm.iter()).enumerate() {
            match (&self.radius, self.pointer) {
                (Radius::PerPoint(radii), _) => {
                    surface.ellipse(px, py, radii[i], radii[i], self.color, true);
                }
                (Radius::Fixed(r), Pointer::Circle) => {
                    surface.ellipse(px, py, *r, *r, self.color, true);
                }
                (_, Pointer::Triangle) => surface.poly(px, py, &TRIANGLE, self.color, true),
                (_, Pointer::Square) => surface.poly(px, py, &SQUARE, self.color, true),
                (_, Pointer::Diamond) => surface.poly(px, py, &DIAMOND, self.color, true),
            }
        }
    }

    pub fn color(&self) -> ColorHandle {
        self.color
    }
}
