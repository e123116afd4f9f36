use crate::error::{WindowError, WindowResult};

use super::window_resolver_config::validate_overscan_ratio;

/// Pads a visible key range by `span * ratio` on both sides.
///
/// Swapped bounds are normalized first.
pub fn expand_visible_window(range: (f64, f64), ratio: f64) -> WindowResult<(f64, f64)> {
    if !range.0.is_finite() || !range.1.is_finite() {
        return Err(WindowError::InvalidRange {
            start: range.0,
            end: range.1,
        });
    }
    validate_overscan_ratio(ratio)?;

    let (min, max) = if range.0 <= range.1 {
        range
    } else {
        (range.1, range.0)
    };
    let padding = (max - min) * ratio;
    Ok((min - padding, max + padding))
}
