// File: crates/pixelplot-core/src/chart/mod.rs
// Summary: Chart renderers; each consumes a canvas and draws immediately on construction.

mod bar;
mod cartesian;
mod fillbetween;
mod logging;
mod map;
mod scatter;

pub use bar::{Bar, BarConfig};
pub use cartesian::{Cartesian, CartesianConfig, LineStyle};
pub use fillbetween::{Fillbetween, FillbetweenConfig};
pub use logging::{Logging, LoggingConfig};
pub use map::Map;
pub use scatter::{Pointer, Radius, Scatter, ScatterConfig};
