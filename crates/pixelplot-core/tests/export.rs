// File: crates/pixelplot-core/tests/export.rs
// Purpose: Portable-pixmap export: header layout, payload bytes, unknown handles.

use pixelplot_core::{
    export, Canvas, CanvasOptions, ColorHandle, DisplaySurface, IndexedDisplay, PlotError, Rgb,
};

#[test]
fn ppm_header_and_payload_layout() {
    let mut display = IndexedDisplay::new(4, 3);
    let bg = display.allocate_color(0, Rgb::BLACK);
    let red = display.allocate_color(1, Rgb::RED);
    display.pixel(1, 1, red);

    let colors = [(bg, Rgb::BLACK), (red, Rgb::RED)];
    let mut buf = Vec::new();
    export::write_ppm(&display, &colors, 4, 3, &mut buf).unwrap();

    let header = b"P6\n#MicroPlot\n4 3\n255\n";
    assert!(buf.starts_with(header));
    assert_eq!(buf.len(), header.len() + 4 * 3 * 3);

    // Row-major RGB triples; (1, 1) is the only non-black pixel.
    let at = |x: usize, y: usize| &buf[header.len() + (y * 4 + x) * 3..][..3];
    assert_eq!(at(1, 1), &[255, 0, 0]);
    assert_eq!(at(0, 0), &[0, 0, 0]);
    assert_eq!(at(3, 2), &[0, 0, 0]);
}

#[test]
fn export_decodes_as_an_image() {
    let mut display = IndexedDisplay::new(16, 16);
    let bg = display.allocate_color(0, Rgb::BLACK);
    let teal = display.allocate_color(3, Rgb::new(0, 128, 128));
    display.rect(4, 4, 8, 8, teal, true);

    let colors = [(bg, Rgb::BLACK), (teal, Rgb::new(0, 128, 128))];
    let mut buf = Vec::new();
    export::write_ppm(&display, &colors, 16, 16, &mut buf).unwrap();

    let decoded = image::load_from_memory(&buf).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (16, 16));
    assert_eq!(decoded.get_pixel(8, 8).0, [0, 128, 128]);
    assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn unregistered_handles_abort_the_export() {
    let mut display = IndexedDisplay::new(4, 4);
    let bg = display.allocate_color(0, Rgb::BLACK);
    display.pixel(2, 2, ColorHandle::new(5));

    let colors = [(bg, Rgb::BLACK)];
    let mut buf = Vec::new();
    let err = export::write_ppm(&display, &colors, 4, 4, &mut buf).unwrap_err();
    assert!(matches!(err, PlotError::UnknownColor(h) if h.raw() == 5));
}

#[test]
fn canvas_export_uses_the_default_raster_size() {
    let surface = IndexedDisplay::new(480, 320);
    let opts = CanvasOptions {
        width: 480,
        height: 320,
        ..CanvasOptions::default()
    };
    let canvas = Canvas::new(surface, opts).unwrap();

    let path = std::env::temp_dir().join("pixelplot_export_default.ppm");
    canvas.write_ppm(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let header = b"P6\n#MicroPlot\n480 320\n255\n";
    assert!(bytes.starts_with(header));
    assert_eq!(bytes.len(), header.len() + 480 * 320 * 3);

    // Box corner is white, the surrounding padding black.
    let at = |x: usize, y: usize| &bytes[header.len() + (y * 480 + x) * 3..][..3];
    assert_eq!(at(25, 25), &[255, 255, 255]);
    assert_eq!(at(0, 0), &[0, 0, 0]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn sized_export_matches_the_surface() {
    let surface = IndexedDisplay::new(32, 24);
    let opts = CanvasOptions {
        width: 32,
        height: 24,
        padding: 4,
        ..CanvasOptions::default()
    };
    let canvas = Canvas::new(surface, opts).unwrap();

    let path = std::env::temp_dir().join("pixelplot_export_sized.ppm");
    canvas.write_ppm_sized(&path, 32, 24).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P6\n#MicroPlot\n32 24\n255\n"));

    std::fs::remove_file(&path).ok();
}
