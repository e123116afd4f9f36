use std::cmp::Ordering;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, OhlcBar, WindowSample};

/// Live search ranges at or below this length are scanned linearly.
pub const DEFAULT_LINEAR_SEARCH_THRESHOLD: usize = 16;

/// Inclusive index range of a series that must be traversed for a key interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisibleWindow {
    pub start: usize,
    pub end: usize,
}

impl VisibleWindow {
    /// Combines a start/end index pair.
    ///
    /// Returns `None` ("nothing in range") when either bound is missing or
    /// `start > end`.
    #[must_use]
    pub fn from_bounds(start: Option<usize>, end: Option<usize>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) if start <= end => Some(Self { start, end }),
            _ => None,
        }
    }

    /// Number of indices covered, gaps included.
    ///
    /// An inverted window built by hand or deserialized covers nothing.
    #[must_use]
    pub fn index_count(self) -> usize {
        self.end.checked_sub(self.start).map_or(0, |span| span + 1)
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    #[must_use]
    pub fn as_range(self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Returns the covered sub-slice, or an empty slice if the window no
    /// longer fits `entries`.
    #[must_use]
    pub fn slice<T>(self, entries: &[T]) -> &[T] {
        entries.get(self.as_range()).unwrap_or(&[])
    }
}

/// Floor search: greatest index `i >= hint` of a defined entry whose key is
/// `<= target`.
///
/// `key_of` returns `None` for undefined (gap) entries. Gaps keep their index
/// slot but are never compared. When `target` is at or beyond the greatest
/// defined key, the index of that entry is returned, which is not
/// necessarily the last slice index. `None` means no defined entry from
/// `hint` onward has a key `<= target`, or `target` is not comparable with
/// itself (a NaN key).
///
/// Defined keys must be non-decreasing and `hint <= entries.len()`. Both are
/// checked in debug builds only; release builds clamp the hint.
#[must_use]
pub fn find_window_start_index<T, K, F>(
    entries: &[T],
    key_of: F,
    target: K,
    hint: usize,
) -> Option<usize>
where
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    find_window_start_index_with_threshold(
        entries,
        key_of,
        target,
        hint,
        DEFAULT_LINEAR_SEARCH_THRESHOLD,
    )
}

/// Ceiling search: least index `i >= hint` of a defined entry whose key is
/// `>= target`.
///
/// Mirror of [`find_window_start_index`]. When `target` is at or below the
/// smallest defined key from `hint` onward, the index of that entry is
/// returned. `None` means every defined key is below `target`, or `target`
/// is not comparable with itself.
#[must_use]
pub fn find_window_end_index<T, K, F>(
    entries: &[T],
    key_of: F,
    target: K,
    hint: usize,
) -> Option<usize>
where
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    find_window_end_index_with_threshold(
        entries,
        key_of,
        target,
        hint,
        DEFAULT_LINEAR_SEARCH_THRESHOLD,
    )
}

/// [`find_window_start_index`] with an explicit linear-search threshold.
#[must_use]
pub fn find_window_start_index_with_threshold<T, K, F>(
    entries: &[T],
    key_of: F,
    target: K,
    hint: usize,
    linear_search_threshold: usize,
) -> Option<usize>
where
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    if target.partial_cmp(&target).is_none() {
        return None;
    }
    debug_check_preconditions(entries, &key_of, hint);
    let lo = hint.min(entries.len());
    let boundary = defined_partition_point(entries, &key_of, lo, linear_search_threshold, |key| {
        *key <= target
    });
    last_defined_in(entries, &key_of, lo, boundary)
}

/// [`find_window_end_index`] with an explicit linear-search threshold.
#[must_use]
pub fn find_window_end_index_with_threshold<T, K, F>(
    entries: &[T],
    key_of: F,
    target: K,
    hint: usize,
    linear_search_threshold: usize,
) -> Option<usize>
where
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    if target.partial_cmp(&target).is_none() {
        return None;
    }
    debug_check_preconditions(entries, &key_of, hint);
    let lo = hint.min(entries.len());
    let boundary = defined_partition_point(entries, &key_of, lo, linear_search_threshold, |key| {
        *key < target
    });
    first_defined_in(entries, &key_of, boundary, entries.len()).map(|(index, _)| index)
}

/// Resolves the render window `[floor(visible_min), ceiling(visible_max)]`.
///
/// The window includes the nearest defined neighbor outside each edge so
/// that lines can be drawn up to the plot border.
#[must_use]
pub fn resolve_visible_window<T, K, F>(
    entries: &[T],
    key_of: F,
    visible_min: K,
    visible_max: K,
    hint: usize,
) -> Option<VisibleWindow>
where
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    resolve_visible_window_with_threshold(
        entries,
        key_of,
        visible_min,
        visible_max,
        hint,
        DEFAULT_LINEAR_SEARCH_THRESHOLD,
    )
}

pub(crate) fn resolve_visible_window_with_threshold<T, K, F>(
    entries: &[T],
    key_of: F,
    visible_min: K,
    visible_max: K,
    hint: usize,
    linear_search_threshold: usize,
) -> Option<VisibleWindow>
where
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    let start = find_window_start_index_with_threshold(
        entries,
        &key_of,
        visible_min,
        hint,
        linear_search_threshold,
    );
    let end = find_window_end_index_with_threshold(
        entries,
        &key_of,
        visible_max,
        hint,
        linear_search_threshold,
    );
    VisibleWindow::from_bounds(start, end)
}

/// Returns the sub-slice of points whose keys fall inside an inclusive time
/// window. Interior gaps are kept so renderers can break lines on them.
#[must_use]
pub fn points_in_time_window(points: &[DataPoint], start: f64, end: f64) -> &[DataPoint] {
    samples_in_time_window(points, start, end)
}

/// Returns the sub-slice of candles whose times fall inside an inclusive
/// time window. Interior gaps are kept.
#[must_use]
pub fn candles_in_time_window(candles: &[OhlcBar], start: f64, end: f64) -> &[OhlcBar] {
    samples_in_time_window(candles, start, end)
}

fn samples_in_time_window<T: WindowSample>(samples: &[T], start: f64, end: f64) -> &[T] {
    if start.is_nan() || end.is_nan() {
        return &[];
    }

    let (min_t, max_t) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    let first = find_window_end_index(samples, T::window_key, min_t, 0);
    let last = find_window_start_index(samples, T::window_key, max_t, 0);
    match VisibleWindow::from_bounds(first, last) {
        Some(window) => window.slice(samples),
        None => &[],
    }
}

/// Returns `b` in `lo..=len` such that every defined entry in `lo..b`
/// satisfies `pred` and no defined entry in `b..len` does.
///
/// Each step bridges the undefined run at `mid` and the bridged run is then
/// dropped from the live range, so no index is visited twice. A single step
/// can still walk a whole gap run of length `g`, so the worst case is
/// `O(min(n, g * log n))`; gap-free series stay at `O(log n)`.
fn defined_partition_point<T, K, F, P>(
    entries: &[T],
    key_of: &F,
    lo: usize,
    linear_search_threshold: usize,
    pred: P,
) -> usize
where
    F: Fn(&T) -> Option<K>,
    P: Fn(&K) -> bool,
{
    let mut lo = lo;
    let mut hi = entries.len();

    while lo < hi {
        if hi - lo <= linear_search_threshold {
            return linear_partition_point(entries, key_of, lo, hi, &pred);
        }

        let mid = lo + (hi - lo) / 2;
        match first_defined_in(entries, key_of, mid, hi) {
            Some((index, key)) if pred(&key) => lo = index + 1,
            _ => hi = mid,
        }
    }

    lo
}

fn linear_partition_point<T, K, F, P>(
    entries: &[T],
    key_of: &F,
    lo: usize,
    hi: usize,
    pred: &P,
) -> usize
where
    F: Fn(&T) -> Option<K>,
    P: Fn(&K) -> bool,
{
    entries[lo..hi]
        .iter()
        .position(|entry| key_of(entry).is_some_and(|key| !pred(&key)))
        .map_or(hi, |offset| lo + offset)
}

fn first_defined_in<T, K, F>(
    entries: &[T],
    key_of: &F,
    from: usize,
    to: usize,
) -> Option<(usize, K)>
where
    F: Fn(&T) -> Option<K>,
{
    entries[from..to]
        .iter()
        .enumerate()
        .find_map(|(offset, entry)| key_of(entry).map(|key| (from + offset, key)))
}

fn last_defined_in<T, K, F>(entries: &[T], key_of: &F, from: usize, to: usize) -> Option<usize>
where
    F: Fn(&T) -> Option<K>,
{
    entries[from..to]
        .iter()
        .rposition(|entry| key_of(entry).is_some())
        .map(|offset| from + offset)
}

fn debug_check_preconditions<T, K, F>(entries: &[T], key_of: &F, hint: usize)
where
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    debug_assert!(
        hint <= entries.len(),
        "search hint {hint} is beyond series length {}",
        entries.len()
    );
    debug_assert!(
        defined_keys_are_sorted(entries, key_of),
        "defined series keys must be non-decreasing"
    );
}

fn defined_keys_are_sorted<T, K, F>(entries: &[T], key_of: &F) -> bool
where
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    let mut previous: Option<K> = None;
    for key in entries.iter().filter_map(key_of) {
        if let Some(prev) = &previous {
            if !matches!(prev.partial_cmp(&key), Some(Ordering::Less | Ordering::Equal)) {
                return false;
            }
        }
        previous = Some(key);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{
        defined_keys_are_sorted, defined_partition_point, first_defined_in, last_defined_in,
        linear_partition_point,
    };

    fn key(value: &Option<i32>) -> Option<i32> {
        *value
    }

    #[test]
    fn sortedness_check_ignores_gaps() {
        let entries = [Some(1), None, Some(3), None, None, Some(3), Some(9)];
        assert!(defined_keys_are_sorted(&entries, &key));

        let unsorted = [Some(4), None, Some(2)];
        assert!(!defined_keys_are_sorted(&unsorted, &key));
    }

    #[test]
    fn sortedness_check_rejects_incomparable_keys() {
        let entries = [Some(1.0), Some(f64::NAN), Some(2.0)];
        assert!(!defined_keys_are_sorted(&entries, &|value: &Option<f64>| *value));
    }

    #[test]
    fn defined_neighbor_lookups_bridge_gap_runs() {
        let entries = [None, Some(1), None, None, Some(4), None];
        assert_eq!(first_defined_in(&entries, &key, 2, 6), Some((4, 4)));
        assert_eq!(first_defined_in(&entries, &key, 5, 6), None);
        assert_eq!(last_defined_in(&entries, &key, 0, 4), Some(1));
        assert_eq!(last_defined_in(&entries, &key, 0, 1), None);
    }

    #[test]
    fn binary_and_linear_partition_points_agree() {
        let entries: Vec<Option<i32>> = (0..200)
            .map(|i| if i % 7 == 3 || i % 11 == 0 { None } else { Some(i / 2) })
            .collect();

        for target in [-5, 0, 1, 17, 50, 98, 99, 150] {
            let binary = defined_partition_point(&entries, &key, 0, 1, |k| *k <= target);
            let linear = linear_partition_point(&entries, &key, 0, entries.len(), &|k: &i32| {
                *k <= target
            });

            // Different boundaries are fine as long as they sit in the same gap run.
            let lo = binary.min(linear);
            let hi = binary.max(linear);
            assert!(
                entries[lo..hi].iter().all(Option::is_none),
                "target {target}: binary {binary} vs linear {linear}"
            );
        }
    }
}
