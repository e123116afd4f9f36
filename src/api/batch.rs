#[cfg(feature = "parallel-resolve")]
use rayon::prelude::*;

use crate::core::windowing::resolve_visible_window_with_threshold;
use crate::core::{VisibleWindow, WindowSample};
use crate::error::WindowResult;

use super::{WindowResolverConfig, expand_visible_window};

/// Resolves the same visible key range over many independent series.
///
/// Output order matches `series`. Every series is searched from index `0`,
/// so results do not depend on call history.
pub fn resolve_visible_windows<T>(
    series: &[&[T]],
    start: f64,
    end: f64,
    config: WindowResolverConfig,
) -> WindowResult<Vec<Option<VisibleWindow>>>
where
    T: WindowSample + Sync,
{
    config.validate()?;
    let (visible_min, visible_max) = expand_visible_window((start, end), config.overscan_ratio)?;
    let threshold = config.linear_search_threshold;
    let resolve_one = |samples: &&[T]| {
        resolve_visible_window_with_threshold(
            samples,
            T::window_key,
            visible_min,
            visible_max,
            0,
            threshold,
        )
    };

    #[cfg(feature = "parallel-resolve")]
    {
        Ok(series.par_iter().map(resolve_one).collect())
    }

    #[cfg(not(feature = "parallel-resolve"))]
    {
        Ok(series.iter().map(resolve_one).collect())
    }
}
