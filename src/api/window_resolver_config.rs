use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_LINEAR_SEARCH_THRESHOLD;
use crate::error::{WindowError, WindowResult};

/// Tuning for [`WindowResolver`](super::WindowResolver) and batch resolution.
///
/// Serializable so hosts can persist it next to their chart setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowResolverConfig {
    /// Symmetric padding of the visible key range, as a ratio of its span.
    #[serde(default)]
    pub overscan_ratio: f64,
    #[serde(default = "default_linear_search_threshold")]
    pub linear_search_threshold: usize,
}

impl Default for WindowResolverConfig {
    fn default() -> Self {
        Self {
            overscan_ratio: 0.0,
            linear_search_threshold: default_linear_search_threshold(),
        }
    }
}

impl WindowResolverConfig {
    #[must_use]
    pub fn with_overscan_ratio(mut self, ratio: f64) -> Self {
        self.overscan_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_linear_search_threshold(mut self, threshold: usize) -> Self {
        self.linear_search_threshold = threshold;
        self
    }

    pub fn validate(self) -> WindowResult<()> {
        validate_overscan_ratio(self.overscan_ratio)?;
        if self.linear_search_threshold == 0 {
            return Err(WindowError::InvalidData(
                "linear search threshold must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config into pretty JSON.
    pub fn to_json_pretty(self) -> WindowResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| WindowError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> WindowResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| WindowError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

pub(super) fn validate_overscan_ratio(ratio: f64) -> WindowResult<()> {
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(WindowError::InvalidData(
            "overscan ratio must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

fn default_linear_search_threshold() -> usize {
    DEFAULT_LINEAR_SEARCH_THRESHOLD
}
