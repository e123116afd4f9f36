use crate::core::{DataPoint, OhlcBar};

/// Key capability for series samples.
///
/// `None` marks a gap: the sample keeps its index slot but is never compared.
pub trait WindowSample {
    fn window_key(&self) -> Option<f64>;
}

impl WindowSample for DataPoint {
    fn window_key(&self) -> Option<f64> {
        self.is_defined().then_some(self.x)
    }
}

impl WindowSample for OhlcBar {
    fn window_key(&self) -> Option<f64> {
        self.is_defined().then_some(self.time)
    }
}

impl WindowSample for f64 {
    fn window_key(&self) -> Option<f64> {
        (!self.is_nan()).then_some(*self)
    }
}
