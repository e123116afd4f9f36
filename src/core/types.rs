use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::WindowResult;

/// Single `(x, y)` sample of a line-like series.
///
/// A point with a NaN coordinate is a gap. [`DataPoint::UNDEFINED`] is the
/// canonical gap sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const UNDEFINED: Self = Self {
        x: f64::NAN,
        y: f64::NAN,
    };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, price: Decimal) -> WindowResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(price, "price")?,
        })
    }

    #[must_use]
    pub fn is_defined(self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}
