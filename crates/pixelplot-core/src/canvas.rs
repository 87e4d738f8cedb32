// File: crates/pixelplot-core/src/canvas.rs
// Summary: Plot canvas: box geometry, axes styles, tick/grid/label drawing, color bookkeeping.

use std::fmt;
use std::fs;
use std::io::BufWriter;
use std::path::Path;

use crate::color::{ColorHandle, Rgb};
use crate::error::PlotError;
use crate::export;
use crate::surface::DisplaySurface;
use crate::transform::{data_extent, transform};

/// Which edges of the plot box are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxesStyle {
    /// All four edges.
    Box,
    /// Left and bottom edges.
    Cartesian,
    /// Bottom edge only.
    Line,
}

/// Axis a text label is attached to; selects the outward offset applied
/// before the glyphs are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAxis {
    X,
    Y,
}

/// Chart families that draw ticks once per canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ChartFamily {
    Cartesian,
    Logging,
    Scatter,
}

/// Canvas construction parameters.
#[derive(Clone, Copy, Debug)]
pub struct CanvasOptions {
    /// Origin of the plot box on the surface.
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Inset applied on all four sides.
    pub padding: i32,
    pub show_box: bool,
    pub background: Rgb,
    pub box_color: Rgb,
    pub tick_height_x: i32,
    pub tick_height_y: i32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            padding: 25,
            show_box: true,
            background: Rgb::BLACK,
            box_color: Rgb::WHITE,
            tick_height_x: 8,
            tick_height_y: 8,
        }
    }
}

/// Tick configuration applied through [`Canvas::tick_params`].
#[derive(Clone, Copy, Debug)]
pub struct TickParams {
    pub show_ticks: bool,
    pub tick_height_x: i32,
    pub tick_height_y: i32,
    pub color: Rgb,
    /// Draw dotted grid lines from every major tick.
    pub grid: bool,
    /// Render tick values next to the marks.
    pub show_text: bool,
    pub decimal_points: usize,
}

impl Default for TickParams {
    fn default() -> Self {
        Self {
            show_ticks: true,
            tick_height_x: 8,
            tick_height_y: 8,
            color: Rgb::WHITE,
            grid: false,
            show_text: false,
            decimal_points: 0,
        }
    }
}

// Reserved palette slots; chart colors start after them.
const INDEX_BACKGROUND: u8 = 0;
const INDEX_TICK: u8 = 1;
const INDEX_BOX: u8 = 2;
const FIRST_CHART_INDEX: u8 = 3;

// Default major/minor tick positions in 0-100 percentage space.
const MAJOR_TICKS: [f64; 5] = [10.0, 30.0, 50.0, 70.0, 90.0];
const MINOR_TICKS: [f64; 4] = [20.0, 40.0, 60.0, 80.0];

// Glyph metrics of the 8x8 surface font, used for label offsets.
const FONT_WIDTH: i32 = 8;
const FONT_HEIGHT: i32 = 8;
const LABEL_GUTTER: i32 = 5;

/// Owns the plot-box geometry and the state shared by every renderer drawn
/// onto it: tick configuration, the color-index counter, per-family tick
/// latches, and the handle-to-RGB table backing raster export.
///
/// Single-writer by design: renderers take `&mut Canvas`, so two renderers
/// can never race on the index counter or the latches.
pub struct Canvas<S: DisplaySurface> {
    surface: S,
    width: i32,
    height: i32,
    padding: i32,
    x_min: i32,
    x_max: i32,
    /// Bottom row of the inner box (larger y than `y_max`).
    y_min: i32,
    /// Top row of the inner box.
    y_max: i32,
    axes_style: AxesStyle,
    background: ColorHandle,
    box_color: ColorHandle,
    tick_color: ColorHandle,
    show_ticks: bool,
    tick_height_x: i32,
    tick_height_y: i32,
    tick_grid: bool,
    show_text: bool,
    decimal_points: usize,
    grid_space: i32,
    grid_length: i32,
    next_color_index: u8,
    cartesian_drawn: bool,
    logging_drawn: bool,
    scatter_drawn: bool,
    export_table: Vec<(ColorHandle, Rgb)>,
}

impl<S: DisplaySurface> fmt::Debug for Canvas<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("padding", &self.padding)
            .field("x_min", &self.x_min)
            .field("x_max", &self.x_max)
            .field("y_min", &self.y_min)
            .field("y_max", &self.y_max)
            .finish_non_exhaustive()
    }
}

impl<S: DisplaySurface> Canvas<S> {
    pub fn new(surface: S, opts: CanvasOptions) -> Result<Self, PlotError> {
        if opts.padding < 0 || opts.padding >= opts.width / 2 || opts.padding >= opts.height / 2 {
            return Err(PlotError::PaddingTooLarge {
                padding: opts.padding,
                width: opts.width,
                height: opts.height,
            });
        }

        let mut canvas = Self {
            surface,
            width: opts.width,
            height: opts.height,
            padding: opts.padding,
            x_min: opts.x + opts.padding,
            x_max: opts.x + opts.width - opts.padding - 1,
            y_min: opts.y + opts.height - opts.padding - 1,
            y_max: opts.y + opts.padding,
            axes_style: AxesStyle::Box,
            background: ColorHandle::new(0),
            box_color: ColorHandle::new(0),
            tick_color: ColorHandle::new(0),
            show_ticks: false,
            tick_height_x: opts.tick_height_x,
            tick_height_y: opts.tick_height_y,
            tick_grid: false,
            show_text: false,
            decimal_points: 0,
            grid_space: 2,
            grid_length: 2,
            next_color_index: FIRST_CHART_INDEX,
            cartesian_drawn: false,
            logging_drawn: false,
            scatter_drawn: false,
            export_table: Vec::new(),
        };

        canvas.background = canvas.allocate_color_at(INDEX_BACKGROUND, opts.background);
        canvas.tick_color = canvas.allocate_color_at(INDEX_TICK, Rgb::WHITE);
        canvas.box_color = canvas.allocate_color_at(INDEX_BOX, opts.box_color);

        if opts.show_box {
            canvas.draw_box();
        }
        Ok(canvas)
    }

    // --- geometry accessors --------------------------------------------------

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Left edge of the inner plot box.
    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    /// Right edge of the inner plot box.
    pub fn x_max(&self) -> i32 {
        self.x_max
    }

    /// Bottom row of the inner plot box.
    pub fn y_min(&self) -> i32 {
        self.y_min
    }

    /// Top row of the inner plot box.
    pub fn y_max(&self) -> i32 {
        self.y_max
    }

    pub fn padding(&self) -> i32 {
        self.padding
    }

    pub fn plot_width(&self) -> i32 {
        self.width
    }

    pub fn plot_height(&self) -> i32 {
        self.height
    }

    pub fn tick_height_x(&self) -> i32 {
        self.tick_height_x
    }

    pub fn tick_height_y(&self) -> i32 {
        self.tick_height_y
    }

    pub fn decimal_points(&self) -> usize {
        self.decimal_points
    }

    pub fn background(&self) -> ColorHandle {
        self.background
    }

    pub fn tick_color(&self) -> ColorHandle {
        self.tick_color
    }

    /// Map a data-space x value into inner-box pixel space (truncating).
    pub fn to_pixel_x(&self, min: f64, max: f64, value: f64) -> i32 {
        transform(min, max, self.x_min as f64, self.x_max as f64, value) as i32
    }

    /// Map a data-space y value into inner-box pixel space. The pixel range
    /// runs bottom-to-top, so larger data values land on smaller rows.
    pub fn to_pixel_y(&self, min: f64, max: f64, value: f64) -> i32 {
        transform(min, max, self.y_min as f64, self.y_max as f64, value) as i32
    }

    // --- box & axes ----------------------------------------------------------

    /// Select which box edges are drawn and redraw them. Redrawing does not
    /// clear previously drawn edges; callers clear the background first when
    /// narrowing the style.
    pub fn set_axes_style(&mut self, style: AxesStyle) {
        self.axes_style = style;
        self.draw_box();
    }

    fn draw_box(&mut self) {
        let (left, bottom, right, top) = match self.axes_style {
            AxesStyle::Box => (true, true, true, true),
            AxesStyle::Cartesian => (true, true, false, false),
            AxesStyle::Line => (false, true, false, false),
        };
        if left {
            self.surface
                .line(self.x_min, self.y_max, self.x_min, self.y_min, self.box_color);
        }
        if bottom {
            self.surface
                .line(self.x_min, self.y_min, self.x_max, self.y_min, self.box_color);
        }
        if right {
            self.surface
                .line(self.x_max, self.y_max, self.x_max, self.y_min, self.box_color);
        }
        if top {
            self.surface
                .line(self.x_min, self.y_max, self.x_max, self.y_max, self.box_color);
        }
    }

    /// Flood the surface with the background color and redraw the box.
    pub fn clear(&mut self) {
        self.surface.fill(self.background);
        self.draw_box();
    }

    // --- ticks ---------------------------------------------------------------

    pub fn tick_params(&mut self, params: TickParams) -> Result<(), PlotError> {
        if params.show_text && self.padding < 20 {
            return Err(PlotError::TextNeedsPadding(self.padding));
        }
        self.show_ticks = params.show_ticks;
        self.tick_height_x = params.tick_height_x;
        self.tick_height_y = params.tick_height_y;
        self.tick_color = self.allocate_color_at(INDEX_TICK, params.color);
        self.tick_grid = params.grid;
        self.show_text = params.show_text;
        self.decimal_points = params.decimal_points;
        Ok(())
    }

    /// Draw axis ticks for the given data.
    ///
    /// Tick positions live in a 0-100 percentage space and go through a
    /// two-stage transform: percentage into the data extent, then data into
    /// pixels. Without explicit lists the defaults `{10,30,50,70,90}` /
    /// `{20,40,60,80}` apply; explicit lists replace the majors and suppress
    /// minor ticks on that axis.
    pub fn draw_ticks(
        &mut self,
        x: &[f64],
        y: &[f64],
        ticks_x: Option<&[f64]>,
        ticks_y: Option<&[f64]>,
    ) -> Result<(), PlotError> {
        let (min_x, max_x) = data_extent(x)?;
        let (min_y, max_y) = data_extent(y)?;

        let to_data_x = |t: f64| transform(0.0, 100.0, min_x, max_x, t);
        let to_data_y = |t: f64| transform(0.0, 100.0, min_y, max_y, t);

        let major_x: Vec<f64> = ticks_x.unwrap_or(&MAJOR_TICKS).iter().map(|&t| to_data_x(t)).collect();
        let major_y: Vec<f64> = ticks_y.unwrap_or(&MAJOR_TICKS).iter().map(|&t| to_data_y(t)).collect();

        let major_x_px: Vec<i32> = major_x.iter().map(|&v| self.to_pixel_x(min_x, max_x, v)).collect();
        let major_y_px: Vec<i32> = major_y.iter().map(|&v| self.to_pixel_y(min_y, max_y, v)).collect();

        for (i, &tick) in major_x_px.iter().enumerate() {
            self.surface.line(
                tick,
                self.y_min,
                tick,
                self.y_min - self.tick_height_x,
                self.tick_color,
            );
            if self.show_text {
                let label = format!("{:.*}", self.decimal_points, major_x[i]);
                self.show_text(&label, tick, self.y_min, None, false, Some(TextAxis::X));
            }
        }

        for (i, &tick) in major_y_px.iter().enumerate() {
            self.surface.line(
                self.x_min,
                tick,
                self.x_min + self.tick_height_y,
                tick,
                self.tick_color,
            );
            if self.show_text {
                let label = format!("{:.*}", self.decimal_points, major_y[i]);
                self.show_text(&label, self.x_min, tick, None, false, Some(TextAxis::Y));
            }
        }

        if ticks_x.is_none() {
            for &t in &MINOR_TICKS {
                let tick = self.to_pixel_x(min_x, max_x, to_data_x(t));
                self.surface.line(
                    tick,
                    self.y_min,
                    tick,
                    self.y_min - self.tick_height_x / 2,
                    self.tick_color,
                );
            }
        }

        if ticks_y.is_none() {
            for &t in &MINOR_TICKS {
                let tick = self.to_pixel_y(min_y, max_y, to_data_y(t));
                self.surface.line(
                    self.x_min,
                    tick,
                    self.x_min + self.tick_height_y / 2,
                    tick,
                    self.tick_color,
                );
            }
        }

        if self.tick_grid {
            self.draw_grid_x(&major_x_px);
            self.draw_grid_y(&major_y_px);
        }
        Ok(())
    }

    /// Dotted vertical grid lines rising from every major x tick.
    fn draw_grid_x(&mut self, ticks: &[i32]) {
        for &tick in ticks {
            let mut start = self.y_min;
            while start - self.grid_length - self.grid_space >= self.y_max {
                self.surface
                    .line(tick, start, tick, start - self.grid_length, self.tick_color);
                start -= self.grid_space + self.grid_length;
            }
        }
    }

    /// Dotted horizontal grid lines crossing from every major y tick.
    fn draw_grid_y(&mut self, ticks: &[i32]) {
        for &tick in ticks {
            let mut start = self.x_min;
            while start + self.grid_length <= self.x_max {
                self.surface
                    .line(start, tick, start + self.grid_length, tick, self.tick_color);
                start += self.grid_space + self.grid_length;
            }
        }
    }

    // --- text ----------------------------------------------------------------

    /// Draw `text` near `(x, y)`, shifted outward for the given axis:
    /// x labels center below the tick, y labels right-align with a small
    /// gutter. Draws only when tick text is enabled or `force` is set.
    pub fn show_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Option<ColorHandle>,
        force: bool,
        axis: Option<TextAxis>,
    ) {
        if !self.show_text && !force {
            return;
        }
        let (mut x, mut y) = (x, y);
        match axis {
            Some(TextAxis::Y) => {
                x -= FONT_WIDTH * text.len() as i32 + LABEL_GUTTER;
                y -= FONT_HEIGHT / 2;
            }
            Some(TextAxis::X) => {
                x -= FONT_WIDTH / 2;
                y += FONT_HEIGHT;
            }
            None => {}
        }
        let color = color.unwrap_or(self.tick_color);
        self.surface.text(text, x, y, color);
    }

    // --- color bookkeeping ---------------------------------------------------

    /// Allocate a chart color at the next free palette index and advance the
    /// counter.
    pub fn allocate_color(&mut self, color: Rgb) -> ColorHandle {
        let handle = self.allocate_color_at(self.next_color_index, color);
        self.next_color_index += 1;
        handle
    }

    /// Allocate at an explicit palette index without touching the counter.
    /// Collisions silently overwrite, as on the underlying surface.
    pub fn allocate_color_at(&mut self, index: u8, color: Rgb) -> ColorHandle {
        let handle = self.surface.allocate_color(index, color);
        self.register_export_color(handle, color);
        handle
    }

    /// Color resolution used by every renderer: an explicit palette index
    /// when the caller picked one, the counter otherwise. The counter always
    /// advances so sibling renderers never collide.
    pub(crate) fn allocate_chart_color(&mut self, index: Option<u8>, color: Rgb) -> ColorHandle {
        match index {
            Some(i) => {
                let handle = self.allocate_color_at(i, color);
                self.next_color_index += 1;
                handle
            }
            None => self.allocate_color(color),
        }
    }

    pub fn next_color_index(&self) -> u8 {
        self.next_color_index
    }

    /// Record the RGB value a handle resolves to during export. Allocations
    /// made through the canvas register themselves; this is the manual hook
    /// for colors drawn behind the canvas's back.
    pub fn register_export_color(&mut self, handle: ColorHandle, color: Rgb) {
        if let Some(entry) = self.export_table.iter_mut().find(|(h, _)| *h == handle) {
            entry.1 = color;
        } else {
            self.export_table.push((handle, color));
        }
    }

    /// RGB value a handle exports as, if registered.
    pub fn export_rgb(&self, handle: ColorHandle) -> Option<Rgb> {
        self.export_table
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|&(_, c)| c)
    }

    /// One-shot tick gate per chart family: true exactly once, for the first
    /// renderer of the family while ticks are enabled. Drawing ticks
    /// disables them until the next `tick_params` call.
    pub(crate) fn take_family_ticks(&mut self, family: ChartFamily) -> bool {
        if !self.show_ticks {
            return false;
        }
        let latch = match family {
            ChartFamily::Cartesian => &mut self.cartesian_drawn,
            ChartFamily::Logging => &mut self.logging_drawn,
            ChartFamily::Scatter => &mut self.scatter_drawn,
        };
        if *latch {
            return false;
        }
        *latch = true;
        self.show_ticks = false;
        true
    }

    // --- export --------------------------------------------------------------

    /// Export the surface as a binary portable pixmap at the default
    /// 480x320 raster size.
    pub fn write_ppm(&self, path: impl AsRef<Path>) -> Result<(), PlotError> {
        self.write_ppm_sized(path, export::DEFAULT_WIDTH, export::DEFAULT_HEIGHT)
    }

    pub fn write_ppm_sized(
        &self,
        path: impl AsRef<Path>,
        width: i32,
        height: i32,
    ) -> Result<(), PlotError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        let mut out = BufWriter::new(file);
        export::write_ppm(&self.surface, &self.export_table, width, height, &mut out)
    }
}
