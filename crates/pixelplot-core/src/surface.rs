// File: crates/pixelplot-core/src/surface.rs
// Summary: Display surface capability consumed by the canvas and chart renderers.

use crate::color::{ColorHandle, Rgb};

/// Drawing capability of a pixel display.
///
/// The canvas and renderers issue every primitive through this trait; the
/// physical driver (pins, buses, flushing) stays outside the core. Whether a
/// surface is palette-indexed or direct-color is decided by the concrete type
/// implementing this trait, not probed at runtime: see
/// [`allocate_color`](DisplaySurface::allocate_color).
///
/// Coordinates are in pixels with the origin at the top-left, y growing
/// downward. Out-of-bounds pixels are ignored.
pub trait DisplaySurface {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Make an RGB triple drawable and return its handle.
    ///
    /// Indexed surfaces store the RGB565 encoding in their lookup table —
    /// low byte at `2 * index`, high byte at `2 * index + 1` — and return
    /// `index` as the handle. Direct-color surfaces return the encoding
    /// itself and ignore `index`. Re-allocating an index silently
    /// overwrites the previous entry.
    fn allocate_color(&mut self, index: u8, color: Rgb) -> ColorHandle;

    fn pixel(&mut self, x: i32, y: i32, color: ColorHandle);

    /// Read back the stored color handle of a pixel.
    fn pixel_at(&self, x: i32, y: i32) -> ColorHandle;

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: ColorHandle);

    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: ColorHandle, filled: bool);

    fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: ColorHandle, filled: bool);

    /// Draw a polygon whose vertices are offsets relative to `(ox, oy)`.
    fn poly(&mut self, ox: i32, oy: i32, points: &[(i32, i32)], color: ColorHandle, filled: bool);

    /// Render `text` with the surface's glyph facility at `(x, y)` (top-left).
    fn text(&mut self, text: &str, x: i32, y: i32, color: ColorHandle);

    /// Flood the whole surface with one color.
    fn fill(&mut self, color: ColorHandle);
}
