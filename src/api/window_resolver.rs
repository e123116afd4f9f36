use tracing::{debug, trace};

use crate::core::{
    VisibleWindow, WindowSample, find_window_end_index_with_threshold,
    find_window_start_index_with_threshold,
};
use crate::error::WindowResult;

use super::{WindowResolverConfig, expand_visible_window};

/// Per-series window resolver that reuses the last start index as the next
/// search hint.
///
/// Repeated queries whose lower bound only moves forward (panning right,
/// realtime scrolling) skip the already-passed prefix of the series. When the
/// lower bound moves backwards, or the series no longer extends past the
/// cached hint, the hint falls back to `0`. Callers that rewrite existing
/// samples must call [`WindowResolver::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct WindowResolver {
    config: WindowResolverConfig,
    start_hint: usize,
    last_visible_min: Option<f64>,
}

impl WindowResolver {
    pub fn new(config: WindowResolverConfig) -> WindowResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            start_hint: 0,
            last_visible_min: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> WindowResolverConfig {
        self.config
    }

    #[must_use]
    pub fn start_hint(&self) -> usize {
        self.start_hint
    }

    pub fn reset(&mut self) {
        self.start_hint = 0;
        self.last_visible_min = None;
    }

    /// Resolves the render window of typed samples for `[start, end]`.
    pub fn resolve<T: WindowSample>(
        &mut self,
        samples: &[T],
        start: f64,
        end: f64,
    ) -> WindowResult<Option<VisibleWindow>> {
        self.resolve_by(samples, T::window_key, start, end)
    }

    /// Resolves the render window of `entries` through an explicit key accessor.
    ///
    /// The range is normalized and padded by the configured overscan before
    /// searching. Non-finite bounds are rejected.
    pub fn resolve_by<T, F>(
        &mut self,
        entries: &[T],
        key_of: F,
        start: f64,
        end: f64,
    ) -> WindowResult<Option<VisibleWindow>>
    where
        F: Fn(&T) -> Option<f64>,
    {
        let (visible_min, visible_max) =
            expand_visible_window((start, end), self.config.overscan_ratio)?;

        let moved_back = self
            .last_visible_min
            .is_some_and(|last_min| visible_min < last_min);
        if moved_back || self.start_hint >= entries.len() {
            debug!(
                hint = self.start_hint,
                series_len = entries.len(),
                visible_min,
                "reset window search hint"
            );
            self.start_hint = 0;
        }

        let threshold = self.config.linear_search_threshold;
        let window_start = find_window_start_index_with_threshold(
            entries,
            &key_of,
            visible_min,
            self.start_hint,
            threshold,
        );
        // Equal bounds over duplicate keys can put the ceiling before the
        // cached floor, so the end search only reuses the hint on a real span.
        let end_hint = if visible_min < visible_max {
            window_start.unwrap_or(self.start_hint)
        } else {
            0
        };
        let window_end = find_window_end_index_with_threshold(
            entries,
            &key_of,
            visible_max,
            end_hint,
            threshold,
        );

        if let Some(index) = window_start {
            self.start_hint = index;
        }
        self.last_visible_min = Some(visible_min);

        let window = VisibleWindow::from_bounds(window_start, window_end);
        trace!(
            series_len = entries.len(),
            visible_min,
            visible_max,
            start = ?window_start,
            end = ?window_end,
            "resolve visible window"
        );
        Ok(window)
    }
}
