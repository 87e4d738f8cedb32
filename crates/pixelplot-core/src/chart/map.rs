// File: crates/pixelplot-core/src/chart/map.rs
// Summary: Heat-map renderer: a 10-color gradient over a rectangular cell grid.

use crate::canvas::Canvas;
use crate::color::{color_fade, ColorHandle, Rgb};
use crate::error::PlotError;
use crate::surface::DisplaySurface;

/// Gradient resolution; small LUT drivers cap the map at ten colors.
const BINS: usize = 10;

/// Palette slot the gradient grows from; entries land at `BASE_INDEX + 1`
/// through `BASE_INDEX + BINS`.
const BASE_INDEX: u8 = 3;

/// Heat-map renderer. Cell values bin into a fixed 10-step gradient between
/// two colors; each cell draws as a filled rectangle, row-major from the
/// top-left of the inner box.
#[derive(Debug)]
pub struct Map {
    gradient: Vec<ColorHandle>,
    step: f64,
}

impl Map {
    /// `data` is row-major with `shape = (cols, rows)`; `data_max` fixes the
    /// top of the bin scale (values above it clamp into the last bin).
    pub fn new<S: DisplaySurface>(
        canvas: &mut Canvas<S>,
        data: &[f64],
        shape: (usize, usize),
        data_max: f64,
        initial_color: Rgb,
        final_color: Rgb,
    ) -> Result<Self, PlotError> {
        let (cols, rows) = shape;
        if cols == 0 || rows == 0 || data.is_empty() {
            return Err(PlotError::EmptyData);
        }
        if data.len() != cols * rows {
            return Err(PlotError::LengthMismatch { x: cols * rows, y: data.len() });
        }
        if data_max == 0.0 {
            return Err(PlotError::DegenerateRange(0.0));
        }

        let mut gradient = Vec::with_capacity(BINS);
        for i in 1..=BINS {
            let color = color_fade(initial_color, final_color, i as f64 / BINS as f64);
            gradient.push(canvas.allocate_color_at(BASE_INDEX + i as u8, color));
        }

        let chart = Self { gradient, step: data_max / BINS as f64 };

        let cell_width = (canvas.x_max() - canvas.x_min()) / cols as i32;
        let cell_height = (canvas.y_min() - canvas.y_max()) / rows as i32;

        let x0 = canvas.x_min();
        let mut y = canvas.y_max();
        for row in data.chunks(cols) {
            let mut x = x0;
            for &value in row {
                let color = chart.gradient[chart.bin(value)];
                canvas.surface_mut().rect(x, y, cell_width, cell_height, color, true);
                x += cell_width;
            }
            y += cell_height;
        }
        Ok(chart)
    }

    /// Bin index for a value, clamped to the last bin.
    fn bin(&self, value: f64) -> usize {
        ((value / self.step).floor() as usize).min(BINS - 1)
    }
}
