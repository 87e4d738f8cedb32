// File: crates/pixelplot-core/src/framebuffer.rs
// Summary: In-memory reference surfaces: generic raster core plus indexed and RGB565 displays.

use crate::color::{ColorHandle, Rgb};
use crate::surface::DisplaySurface;

/// 8x8 glyphs for the characters tick labels need: digits, minus, dot.
/// Rows top to bottom, least-significant bit is the leftmost pixel.
const GLYPH_WIDTH: i32 = 8;

fn glyph(c: char) -> Option<[u8; 8]> {
    Some(match c {
        '0' => [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00],
        '1' => [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00],
        '2' => [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00],
        '3' => [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00],
        '4' => [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00],
        '5' => [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00],
        '6' => [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00],
        '7' => [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00],
        '8' => [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00],
        '9' => [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00],
        _ => return None,
    })
}

/// Rectangular pixel buffer with the primitive set small display drivers
/// expose. Generic over the stored pixel word so the indexed (u8) and
/// direct-color (u16) surfaces share one raster core.
pub struct Framebuffer<P> {
    width: i32,
    height: i32,
    data: Vec<P>,
}

impl<P: Copy + Default> Framebuffer<P> {
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self { width, height, data: vec![P::default(); len] }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> P {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return P::default();
        }
        self.data[(y * self.width + x) as usize]
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, p: P) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.data[(y * self.width + x) as usize] = p;
    }

    pub fn fill(&mut self, p: P) {
        self.data.fill(p);
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, p: P) {
        let (a, b) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in a..=b {
            self.set(x, y, p);
        }
    }

    /// Bresenham line, endpoints inclusive.
    pub fn line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, p: P) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.set(x0, y0, p);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, p: P, filled: bool) {
        if width <= 0 || height <= 0 {
            return;
        }
        if filled {
            for row in y..y + height {
                self.hline(x, x + width - 1, row, p);
            }
        } else {
            self.hline(x, x + width - 1, y, p);
            self.hline(x, x + width - 1, y + height - 1, p);
            for row in y..y + height {
                self.set(x, row, p);
                self.set(x + width - 1, row, p);
            }
        }
    }

    pub fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, p: P, filled: bool) {
        if rx < 0 || ry < 0 {
            return;
        }
        if rx == 0 || ry == 0 {
            // Collapses to a segment through the center.
            self.line(cx - rx, cy - ry, cx + rx, cy + ry, p);
            return;
        }
        if filled {
            for dy in -ry..=ry {
                let frac = 1.0 - (dy as f64 / ry as f64).powi(2);
                let dx = (frac.max(0.0).sqrt() * rx as f64) as i32;
                self.hline(cx - dx, cx + dx, cy + dy, p);
            }
            return;
        }
        // Midpoint ellipse, two regions.
        let rx2 = (rx as f64) * (rx as f64);
        let ry2 = (ry as f64) * (ry as f64);
        let mut x = 0i32;
        let mut y = ry;
        let mut dx = 0.0;
        let mut dy = 2.0 * rx2 * y as f64;
        let mut d1 = ry2 - rx2 * ry as f64 + 0.25 * rx2;
        while dx < dy {
            self.plot4(cx, cy, x, y, p);
            x += 1;
            dx += 2.0 * ry2;
            if d1 < 0.0 {
                d1 += dx + ry2;
            } else {
                y -= 1;
                dy -= 2.0 * rx2;
                d1 += dx - dy + ry2;
            }
        }
        let mut d2 = ry2 * (x as f64 + 0.5).powi(2) + rx2 * (y as f64 - 1.0).powi(2) - rx2 * ry2;
        while y >= 0 {
            self.plot4(cx, cy, x, y, p);
            y -= 1;
            dy -= 2.0 * rx2;
            if d2 > 0.0 {
                d2 += rx2 - dy;
            } else {
                x += 1;
                dx += 2.0 * ry2;
                d2 += dx - dy + rx2;
            }
        }
    }

    #[inline]
    fn plot4(&mut self, cx: i32, cy: i32, x: i32, y: i32, p: P) {
        self.set(cx + x, cy + y, p);
        self.set(cx - x, cy + y, p);
        self.set(cx + x, cy - y, p);
        self.set(cx - x, cy - y, p);
    }

    /// Polygon with vertices relative to `(ox, oy)`. Filling uses even-odd
    /// scanline spans; the outline is stroked afterwards so edges stay crisp.
    pub fn poly(&mut self, ox: i32, oy: i32, points: &[(i32, i32)], p: P, filled: bool) {
        if points.is_empty() {
            return;
        }
        let abs: Vec<(i32, i32)> = points.iter().map(|&(x, y)| (ox + x, oy + y)).collect();
        if abs.len() == 1 {
            self.set(abs[0].0, abs[0].1, p);
            return;
        }
        if filled {
            let y_lo = abs.iter().map(|v| v.1).min().unwrap_or(0);
            let y_hi = abs.iter().map(|v| v.1).max().unwrap_or(0);
            let n = abs.len();
            let mut xs: Vec<i32> = Vec::with_capacity(n);
            for y in y_lo..=y_hi {
                xs.clear();
                for i in 0..n {
                    let (x0, y0) = abs[i];
                    let (x1, y1) = abs[(i + 1) % n];
                    if (y0 <= y && y1 > y) || (y1 <= y && y0 > y) {
                        let t = (y - y0) as f64 / (y1 - y0) as f64;
                        xs.push((x0 as f64 + t * (x1 - x0) as f64).round() as i32);
                    }
                }
                xs.sort_unstable();
                for pair in xs.chunks_exact(2) {
                    self.hline(pair[0], pair[1], y, p);
                }
            }
        }
        for i in 0..abs.len() {
            let (x0, y0) = abs[i];
            let (x1, y1) = abs[(i + 1) % abs.len()];
            self.line(x0, y0, x1, y1, p);
        }
    }

    /// Render text with the builtin numeric glyph set; characters without a
    /// glyph advance the cursor but draw nothing.
    pub fn text(&mut self, text: &str, x: i32, y: i32, p: P) {
        let mut cursor = x;
        for c in text.chars() {
            if let Some(rows) = glyph(c) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if bits & (1 << col) != 0 {
                            self.set(cursor + col, y + row as i32, p);
                        }
                    }
                }
            }
            cursor += GLYPH_WIDTH;
        }
    }
}

/// Palette-indexed display: one byte per pixel plus a 16-entry RGB565 lookup
/// table, modeling the 4-bit LUT drivers the library targets.
pub struct IndexedDisplay {
    fb: Framebuffer<u8>,
    lut: [u8; 32],
}

impl IndexedDisplay {
    pub fn new(width: i32, height: i32) -> Self {
        Self { fb: Framebuffer::new(width, height), lut: [0; 32] }
    }

    /// Raw lookup table bytes: entry `i` occupies `lut()[2*i..=2*i+1]`,
    /// low byte first.
    pub fn lut(&self) -> &[u8; 32] {
        &self.lut
    }
}

impl DisplaySurface for IndexedDisplay {
    fn width(&self) -> i32 {
        self.fb.width()
    }

    fn height(&self) -> i32 {
        self.fb.height()
    }

    /// Panics if `index` exceeds the 16-entry table; sizing palette usage to
    /// the surface is the caller's responsibility.
    fn allocate_color(&mut self, index: u8, color: Rgb) -> ColorHandle {
        let encoded = color.rgb565();
        let at = (index as usize) << 1;
        self.lut[at] = (encoded & 0xFF) as u8;
        self.lut[at + 1] = (encoded >> 8) as u8;
        ColorHandle::new(index as u16)
    }

    fn pixel(&mut self, x: i32, y: i32, color: ColorHandle) {
        self.fb.set(x, y, color.raw() as u8);
    }

    fn pixel_at(&self, x: i32, y: i32) -> ColorHandle {
        ColorHandle::new(self.fb.get(x, y) as u16)
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: ColorHandle) {
        self.fb.line(x0, y0, x1, y1, color.raw() as u8);
    }

    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: ColorHandle, filled: bool) {
        self.fb.rect(x, y, width, height, color.raw() as u8, filled);
    }

    fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: ColorHandle, filled: bool) {
        self.fb.ellipse(cx, cy, rx, ry, color.raw() as u8, filled);
    }

    fn poly(&mut self, ox: i32, oy: i32, points: &[(i32, i32)], color: ColorHandle, filled: bool) {
        self.fb.poly(ox, oy, points, color.raw() as u8, filled);
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: ColorHandle) {
        self.fb.text(text, x, y, color.raw() as u8);
    }

    fn fill(&mut self, color: ColorHandle) {
        self.fb.fill(color.raw() as u8);
    }
}

/// Direct-color display storing RGB565 words; color handles are the encoded
/// colors themselves and the allocation index is ignored.
pub struct Rgb565Display {
    fb: Framebuffer<u16>,
}

impl Rgb565Display {
    pub fn new(width: i32, height: i32) -> Self {
        Self { fb: Framebuffer::new(width, height) }
    }
}

impl DisplaySurface for Rgb565Display {
    fn width(&self) -> i32 {
        self.fb.width()
    }

    fn height(&self) -> i32 {
        self.fb.height()
    }

    fn allocate_color(&mut self, _index: u8, color: Rgb) -> ColorHandle {
        ColorHandle::new(color.rgb565())
    }

    fn pixel(&mut self, x: i32, y: i32, color: ColorHandle) {
        self.fb.set(x, y, color.raw());
    }

    fn pixel_at(&self, x: i32, y: i32) -> ColorHandle {
        ColorHandle::new(self.fb.get(x, y))
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: ColorHandle) {
        self.fb.line(x0, y0, x1, y1, color.raw());
    }

    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: ColorHandle, filled: bool) {
        self.fb.rect(x, y, width, height, color.raw(), filled);
    }

    fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: ColorHandle, filled: bool) {
        self.fb.ellipse(cx, cy, rx, ry, color.raw(), filled);
    }

    fn poly(&mut self, ox: i32, oy: i32, points: &[(i32, i32)], color: ColorHandle, filled: bool) {
        self.fb.poly(ox, oy, points, color.raw(), filled);
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: ColorHandle) {
        self.fb.text(text, x, y, color.raw());
    }

    fn fill(&mut self, color: ColorHandle) {
        self.fb.fill(color.raw());
    }
}
