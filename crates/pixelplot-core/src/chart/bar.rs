// File: crates/pixelplot-core/src/chart/bar.rs
// Summary: Bar chart over categorical x positions with palette cycling.

use crate::canvas::Canvas;
use crate::color::{ColorHandle, Rgb, BAR_PALETTE};
use crate::error::PlotError;
use crate::surface::DisplaySurface;

#[derive(Clone, Debug)]
pub struct BarConfig {
    pub fill: bool,
    /// Horizontal gap advanced per bar, in pixels.
    pub bar_space: i32,
    /// Offset of the first bar from the left inner edge.
    pub xstart: i32,
    /// One color per bar; the builtin 6-entry palette cycles when `None`.
    pub color_palette: Option<Vec<Rgb>>,
    /// Overrides the data-derived maximum so streaming redraws keep a stable
    /// height scale.
    pub max_value: Option<f64>,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            fill: true,
            bar_space: 16,
            xstart: 50,
            color_palette: None,
            max_value: None,
        }
    }
}

/// Bar renderer. The x series is categorical: only its length matters, bars
/// are laid out left to right at fixed spacing.
#[derive(Debug)]
pub struct Bar {
    colors: Vec<ColorHandle>,
    bar_width: i32,
    height_scale: f64,
    fill: bool,
}

impl Bar {
    pub fn new<S: DisplaySurface>(
        canvas: &mut Canvas<S>,
        x: &[f64],
        y: &[f64],
        config: BarConfig,
    ) -> Result<Self, PlotError> {
        if x.is_empty() || y.is_empty() {
            return Err(PlotError::EmptyData);
        }
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch { x: x.len(), y: y.len() });
        }

        let colors: Vec<ColorHandle> = match &config.color_palette {
            Some(palette) => {
                if config.fill && palette.len() < x.len() {
                    return Err(PlotError::PaletteMismatch {
                        palette: palette.len(),
                        bars: x.len(),
                    });
                }
                palette.iter().map(|&c| canvas.allocate_color(c)).collect()
            }
            None => BAR_PALETTE.iter().map(|&c| canvas.allocate_color(c)).collect(),
        };

        let y_top = match config.max_value {
            Some(v) => v,
            None => y.iter().copied().fold(f64::MIN, f64::max),
        };

        let inner_width = (canvas.x_max() - canvas.x_min()).abs();
        let inner_height = (canvas.y_max() - canvas.y_min()).abs();
        let bar_width = (inner_width as f64 / (x.len() as f64 + 4.0)).ceil() as i32;
        let height_scale = inner_height as f64 / (y_top + 2.0);

        let chart = Self {
            colors,
            bar_width,
            height_scale,
            fill: config.fill,
        };

        let xstart = canvas.x_min() + config.xstart + config.bar_space;
        for (i, &value) in y.iter().enumerate() {
            chart.draw_bar(canvas, xstart + config.bar_space * i as i32, i, value);
        }
        Ok(chart)
    }

    fn draw_bar<S: DisplaySurface>(&self, canvas: &mut Canvas<S>, xstart: i32, index: usize, value: f64) {
        let color = self.colors[index % self.colors.len()];
        let top = (canvas.y_min() as f64 - self.height_scale * value) as i32;
        let height = (self.height_scale * value).ceil() as i32;
        canvas.surface_mut().rect(
            xstart + index as i32 * self.bar_width,
            top,
            self.bar_width,
            height,
            color,
            self.fill,
        );
    }

    pub fn bar_width(&self) -> i32 {
        self.bar_width
    }
}
