// File: crates/pixelplot-core/src/lib.rs
// Summary: Core library entry point; exports the canvas, chart renderers, and surfaces.

pub mod canvas;
pub mod chart;
pub mod color;
pub mod error;
pub mod export;
pub mod framebuffer;
pub mod surface;
pub mod transform;

pub use canvas::{AxesStyle, Canvas, CanvasOptions, TextAxis, TickParams};
pub use chart::{
    Bar, BarConfig, Cartesian, CartesianConfig, Fillbetween, FillbetweenConfig, LineStyle,
    Logging, LoggingConfig, Map, Pointer, Radius, Scatter, ScatterConfig,
};
pub use color::{color_fade, ColorHandle, Rgb, BAR_PALETTE};
pub use error::PlotError;
pub use framebuffer::{IndexedDisplay, Rgb565Display};
pub use surface::DisplaySurface;
pub use transform::{auto_range, linspace, resolve_range, transform};
