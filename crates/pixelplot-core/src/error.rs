// File: crates/pixelplot-core/src/error.rs
// Summary: Error taxonomy for canvas configuration, chart construction, and export.

use thiserror::Error;

use crate::color::ColorHandle;

/// All failures are immediate and local to the call that raised them; there
/// is no retry or recovery layer. Configuration errors carry no guarantee
/// about primitives that already reached the surface.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("padding {padding} does not fit a {width}x{height} plot box")]
    PaddingTooLarge { padding: i32, width: i32, height: i32 },

    #[error("tick text needs a padding of at least 20 pixels, got {0}")]
    TextNeedsPadding(i32),

    #[error("unknown line style `{0}`")]
    UnknownLineStyle(String),

    #[error("unknown pointer shape `{0}`")]
    UnknownPointer(String),

    #[error("pointer `{0}` does not accept per-point radii")]
    VariableRadius(&'static str),

    #[error("color palette holds {palette} entries but {bars} bars were given")]
    PaletteMismatch { palette: usize, bars: usize },

    #[error("x series holds {x} points but y series holds {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("chart data is empty")]
    EmptyData,

    #[error("degenerate range: min == max == {0}")]
    DegenerateRange(f64),

    #[error("color handle {0:?} is not registered for export")]
    UnknownColor(ColorHandle),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
