// File: crates/pixelplot-core/src/color.rs
// Summary: RGB color values, opaque surface color handles, RGB565 encoding, gradient fades.

/// Opaque identity of a drawable color on a given surface.
///
/// Indexed surfaces hand back the palette index; direct-color surfaces hand
/// back the RGB565 word. Equality is only meaningful between handles issued
/// by the same surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorHandle(u16);

impl ColorHandle {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// An RGB triple with 8-bit components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the 16-bit RGB565 layout used by small display LUTs.
    pub const fn rgb565(self) -> u16 {
        ((self.r as u16 & 0xF8) << 8) | ((self.g as u16 & 0xFC) << 3) | (self.b as u16 >> 3)
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
}

/// Default bar-chart palette, cycled when the caller supplies none.
pub const BAR_PALETTE: [Rgb; 6] = [
    Rgb::new(20, 159, 20),
    Rgb::new(100, 113, 130),
    Rgb::new(116, 40, 239),
    Rgb::new(0, 94, 153),
    Rgb::new(0, 167, 109),
    Rgb::new(44, 73, 113),
];

/// Linear interpolation between two RGB colors.
///
/// Each channel moves `fraction` of the way from `start` toward `end`, with
/// truncation to whole channel values. Fractions at or outside the `[0, 1]`
/// bounds return the corresponding endpoint unchanged.
pub fn color_fade(start: Rgb, end: Rgb, fraction: f64) -> Rgb {
    if fraction >= 1.0 {
        return end;
    }
    if fraction <= 0.0 {
        return start;
    }
    let channel = |s: u8, e: u8| (s as i32 - ((s as i32 - e as i32) as f64 * fraction) as i32) as u8;
    Rgb::new(
        channel(start.r, end.r),
        channel(start.g, end.g),
        channel(start.b, end.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb565_packs_channels() {
        assert_eq!(Rgb::RED.rgb565(), 0xF800);
        assert_eq!(Rgb::GREEN.rgb565(), 0x07E0);
        assert_eq!(Rgb::BLUE.rgb565(), 0x001F);
        assert_eq!(Rgb::WHITE.rgb565(), 0xFFFF);
        assert_eq!(Rgb::BLACK.rgb565(), 0x0000);
    }

    #[test]
    fn fade_clamps_at_bounds() {
        let a = Rgb::new(255, 0, 0);
        let b = Rgb::new(0, 0, 255);
        assert_eq!(color_fade(a, b, -0.5), a);
        assert_eq!(color_fade(a, b, 0.0), a);
        assert_eq!(color_fade(a, b, 1.0), b);
        assert_eq!(color_fade(a, b, 2.0), b);
    }
}
