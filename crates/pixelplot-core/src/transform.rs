// File: crates/pixelplot-core/src/transform.rs
// Summary: Linear range mapping between data space and pixel space, plus range resolution.

use crate::error::PlotError;

/// Map `value` from the range `[old_min, old_max]` into `[new_min, new_max]`.
///
/// Pure linear interpolation; endpoints map exactly. A degenerate source
/// range (`old_min == old_max`) divides by zero and yields a non-finite
/// value — callers resolve ranges through [`resolve_range`] first, which
/// rejects degenerate domains.
pub fn transform(old_min: f64, old_max: f64, new_min: f64, new_max: f64, value: f64) -> f64 {
    ((value - old_min) * (new_max - new_min)) / (old_max - old_min) + new_min
}

/// Evenly spaced values from `start` to `stop` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![stop];
    }
    let delta = (stop - start) / (n as f64 - 1.0);
    (0..n).map(|i| start + delta * i as f64).collect()
}

pub(crate) fn data_extent(data: &[f64]) -> Result<(f64, f64), PlotError> {
    let first = *data.first().ok_or(PlotError::EmptyData)?;
    let mut lo = first;
    let mut hi = first;
    for &v in &data[1..] {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    Ok((lo, hi))
}

/// Data extent padded by 10% of the span on each side.
pub fn auto_range(data: &[f64]) -> Result<(f64, f64), PlotError> {
    let (lo, hi) = data_extent(data)?;
    let pad = (hi - lo).abs() / 10.0;
    Ok((lo - pad, hi + pad))
}

/// Resolve an axis range: the explicit pair when given (order-insensitive),
/// otherwise the padded data extent. Degenerate results are rejected so no
/// downstream transform divides by zero.
pub fn resolve_range(explicit: Option<[f64; 2]>, data: &[f64]) -> Result<(f64, f64), PlotError> {
    let (lo, hi) = match explicit {
        Some([a, b]) => (a.min(b), a.max(b)),
        None => auto_range(data)?,
    };
    if lo == hi {
        return Err(PlotError::DegenerateRange(lo));
    }
    Ok((lo, hi))
}
