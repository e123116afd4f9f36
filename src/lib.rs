//! series-window: gap-aware visible-window resolution for sampled series.
//!
//! `core` holds the pure floor/ceiling index searches over caller-owned
//! slices. `api` layers configuration, overscan, hint reuse across
//! monotonic queries, and batch resolution on top.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{WindowResolver, WindowResolverConfig};
pub use crate::core::{VisibleWindow, find_window_end_index, find_window_start_index};
pub use error::{WindowError, WindowResult};
