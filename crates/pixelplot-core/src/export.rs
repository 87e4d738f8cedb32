// File: crates/pixelplot-core/src/export.rs
// Summary: Binary portable-pixmap (P6) export of a display surface.

use std::io::Write;

use crate::color::{ColorHandle, Rgb};
use crate::error::PlotError;
use crate::surface::DisplaySurface;

/// Fixed raster size of an export, independent of the logical plot geometry.
pub const DEFAULT_WIDTH: i32 = 480;
pub const DEFAULT_HEIGHT: i32 = 320;

/// Serialize `width * height` pixels of `surface` as a binary portable
/// pixmap: `P6`, a `#MicroPlot` comment, dimensions, maxval 255, then raw
/// RGB triples row-major from the top row.
///
/// Every handle read back from the surface must appear in `colors`; an
/// unregistered handle aborts the export with
/// [`PlotError::UnknownColor`] instead of writing undefined bytes.
pub fn write_ppm<S: DisplaySurface, W: Write>(
    surface: &S,
    colors: &[(ColorHandle, Rgb)],
    width: i32,
    height: i32,
    out: &mut W,
) -> Result<(), PlotError> {
    write!(out, "P6\n#MicroPlot\n{width} {height}\n255\n")?;

    let lookup = |handle: ColorHandle| -> Result<Rgb, PlotError> {
        colors
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|&(_, c)| c)
            .ok_or(PlotError::UnknownColor(handle))
    };

    // Pixels arrive in long runs of one color; caching the last lookup keeps
    // the table scan off the hot path.
    let mut last: Option<(ColorHandle, Rgb)> = None;
    let mut row = Vec::with_capacity(width.max(0) as usize * 3);
    for y in 0..height {
        row.clear();
        for x in 0..width {
            let handle = surface.pixel_at(x, y);
            let rgb = match last {
                Some((h, c)) if h == handle => c,
                _ => {
                    let c = lookup(handle)?;
                    last = Some((handle, c));
                    c
                }
            };
            row.extend_from_slice(&[rgb.r, rgb.g, rgb.b]);
        }
        out.write_all(&row)?;
    }
    Ok(())
}
