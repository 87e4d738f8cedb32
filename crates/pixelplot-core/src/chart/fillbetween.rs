// File: crates/pixelplot-core/src/chart/fillbetween.rs
// Summary: Filled area between two curves sharing one x series.

use crate::canvas::Canvas;
use crate::color::{ColorHandle, Rgb};
use crate::error::PlotError;
use crate::surface::DisplaySurface;
use crate::transform::resolve_range;

#[derive(Clone, Debug)]
pub struct FillbetweenConfig {
    pub range_x: Option<[f64; 2]>,
    /// Explicit y range; otherwise the padded extent of both series combined.
    pub range_y: Option<[f64; 2]>,
    pub fill_color: Rgb,
    pub color_index: Option<u8>,
}

impl Default for FillbetweenConfig {
    fn default() -> Self {
        Self {
            range_x: None,
            range_y: None,
            fill_color: Rgb::GREEN,
            color_index: None,
        }
    }
}

/// Fill-between renderer: one closed polygon tracing the first curve forward
/// and the second curve backward.
#[derive(Debug)]
pub struct Fillbetween {
    color: ColorHandle,
}

impl Fillbetween {
    pub fn new<S: DisplaySurface>(
        canvas: &mut Canvas<S>,
        x: &[f64],
        y1: &[f64],
        y2: &[f64],
        config: FillbetweenConfig,
    ) -> Result<Self, PlotError> {
        if x.len() != y1.len() {
            return Err(PlotError::LengthMismatch { x: x.len(), y: y1.len() });
        }
        if x.len() != y2.len() {
            return Err(PlotError::LengthMismatch { x: x.len(), y: y2.len() });
        }

        let color = canvas.allocate_chart_color(config.color_index, config.fill_color);

        let (x_min, x_max) = resolve_range(config.range_x, x)?;
        let combined: Vec<f64> = y1.iter().chain(y2.iter()).copied().collect();
        let (y_min, y_max) = resolve_range(config.range_y, &combined)?;

        let x_norm: Vec<i32> = x.iter().map(|&v| canvas.to_pixel_x(x_min, x_max, v)).collect();
        let y1_norm: Vec<i32> = y1.iter().map(|&v| canvas.to_pixel_y(y_min, y_max, v)).collect();
        let y2_norm: Vec<i32> = y2.iter().map(|&v| canvas.to_pixel_y(y_min, y_max, v)).collect();

        let mut points: Vec<(i32, i32)> = Vec::with_capacity(2 * x_norm.len());
        points.extend(x_norm.iter().copied().zip(y1_norm.iter().copied()));
        points.extend(
            x_norm
                .iter()
                .rev()
                .copied()
                .zip(y2_norm.iter().rev().copied()),
        );
        canvas.surface_mut().poly(0, 0, &points, color, true);

        Ok(Self { color })
    }

    pub fn color(&self) -> ColorHandle {
        self.color
    }
}
