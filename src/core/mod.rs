pub mod candlestick;
pub mod primitives;
pub mod sample;
pub mod types;
pub mod windowing;

pub use candlestick::OhlcBar;
pub use sample::WindowSample;
pub use types::DataPoint;
pub use windowing::{
    DEFAULT_LINEAR_SEARCH_THRESHOLD, VisibleWindow, candles_in_time_window,
    find_window_end_index, find_window_end_index_with_threshold, find_window_start_index,
    find_window_start_index_with_threshold, points_in_time_window, resolve_visible_window,
};
