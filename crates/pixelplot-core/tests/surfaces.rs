// File: crates/pixelplot-core/tests/surfaces.rs
// Purpose: Color allocation on indexed and direct-color surfaces, palette counter.

use pixelplot_core::{
    color_fade, Bar, BarConfig, Canvas, CanvasOptions, Cartesian, CartesianConfig, DisplaySurface,
    IndexedDisplay, Rgb, Rgb565Display,
};

#[test]
fn indexed_allocation_writes_lut_bytes_low_first() {
    let mut display = IndexedDisplay::new(8, 8);
    let handle = display.allocate_color(2, Rgb::RED);
    assert_eq!(handle.raw(), 2);
    // RGB565 red is 0xF800: low byte at 2*index, high byte after it.
    assert_eq!(display.lut()[4], 0x00);
    assert_eq!(display.lut()[5], 0xF8);
}

#[test]
fn direct_color_allocation_ignores_the_index() {
    let mut display = Rgb565Display::new(8, 8);
    let a = display.allocate_color(2, Rgb::RED);
    let b = display.allocate_color(9, Rgb::RED);
    assert_eq!(a.raw(), 0xF800);
    assert_eq!(a, b);
}

#[test]
fn pixel_roundtrip_and_out_of_bounds_reads() {
    let mut display = IndexedDisplay::new(8, 8);
    let handle = display.allocate_color(5, Rgb::GREEN);
    display.pixel(3, 4, handle);
    assert_eq!(display.pixel_at(3, 4), handle);
    assert_eq!(display.pixel_at(-1, 0).raw(), 0);
    assert_eq!(display.pixel_at(8, 8).raw(), 0);
    // Out-of-bounds writes are dropped.
    display.pixel(100, 100, handle);
}

#[test]
fn chart_colors_start_after_the_reserved_slots() {
    let surface = IndexedDisplay::new(100, 100);
    let mut canvas = Canvas::new(surface, CanvasOptions::default()).unwrap();
    assert_eq!(canvas.next_color_index(), 3);

    let handle = canvas.allocate_color(Rgb::BLUE);
    assert_eq!(handle.raw(), 3);
    assert_eq!(canvas.next_color_index(), 4);
}

#[test]
fn explicit_color_index_still_advances_the_counter() {
    let surface = IndexedDisplay::new(100, 100);
    let mut canvas = Canvas::new(surface, CanvasOptions::default()).unwrap();
    let config = CartesianConfig {
        range_x: Some([0.0, 1.0]),
        range_y: Some([0.0, 1.0]),
        color_index: Some(7),
        ..CartesianConfig::default()
    };
    let chart = Cartesian::new(&mut canvas, &[0.0, 1.0], &[0.2, 0.8], config).unwrap();
    assert_eq!(chart.color().raw(), 7);
    assert_eq!(canvas.next_color_index(), 4);
}

#[test]
fn default_bar_palette_claims_six_slots() {
    let surface = IndexedDisplay::new(100, 100);
    let mut canvas = Canvas::new(surface, CanvasOptions::default()).unwrap();
    Bar::new(&mut canvas, &[1.0, 2.0], &[3.0, 4.0], BarConfig::default()).unwrap();
    assert_eq!(canvas.next_color_index(), 9);
}

#[test]
fn fade_truncates_toward_the_start_color() {
    let mid = color_fade(Rgb::new(255, 0, 0), Rgb::new(0, 0, 255), 0.5);
    assert_eq!(mid, Rgb::new(128, 0, 127));
}

#[test]
fn allocations_register_for_export() {
    let surface = IndexedDisplay::new(100, 100);
    let mut canvas = Canvas::new(surface, CanvasOptions::default()).unwrap();
    let handle = canvas.allocate_color(Rgb::new(10, 20, 30));
    assert_eq!(canvas.export_rgb(handle), Some(Rgb::new(10, 20, 30)));

    // Re-allocating the same slot replaces the registered RGB value.
    let handle2 = canvas.allocate_color_at(handle.raw() as u8, Rgb::new(1, 2, 3));
    assert_eq!(handle2, handle);
    assert_eq!(canvas.export_rgb(handle), Some(Rgb::new(1, 2, 3)));
}
