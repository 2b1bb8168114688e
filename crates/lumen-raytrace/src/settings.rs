//! Render settings.

use serde::{Deserialize, Serialize};

use crate::{RenderError, Result};

/// Deepest reflection bounce that still contributes color.
pub const MAX_DEPTH: u32 = 3;

/// Largest accepted `max_depth`. Reflection recurses once per level.
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// Smallest ray parameter accepted as a hit, to avoid self-intersection.
pub const MIN_T: f64 = 0.0001;

/// Hits at or beyond this ray parameter are ignored.
pub const MAX_T: f64 = 100.0;

/// Tunables for the tracer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Rays with a depth above this return black.
    pub max_depth: u32,
    /// Minimum ray parameter for an intersection to count.
    pub min_t: f64,
    /// Ray parameter beyond which surfaces are not seen.
    pub max_t: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            min_t: MIN_T,
            max_t: MAX_T,
        }
    }
}

impl RenderSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(RenderError::InvalidSettings(format!(
                "max_depth must be at most {}, got {}",
                MAX_DEPTH_LIMIT, self.max_depth
            )));
        }
        if !(self.min_t.is_finite() && self.min_t > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "min_t must be positive and finite, got {}",
                self.min_t
            )));
        }
        if self.max_t.is_nan() || self.max_t <= self.min_t {
            return Err(RenderError::InvalidSettings(format!(
                "max_t ({}) must be greater than min_t ({})",
                self.max_t, self.min_t
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = RenderSettings::default();
        assert_eq!(settings.max_depth, 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_min_t() {
        let settings = RenderSettings {
            min_t: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(RenderError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_max_depth_is_bounded() {
        let at_limit = RenderSettings {
            max_depth: MAX_DEPTH_LIMIT,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        for max_depth in [MAX_DEPTH_LIMIT + 1, 10_000_000, u32::MAX] {
            let settings = RenderSettings {
                max_depth,
                ..Default::default()
            };
            assert!(matches!(
                settings.validate(),
                Err(RenderError::InvalidSettings(_))
            ));
        }
    }

    #[test]
    fn test_rejects_max_t_below_min_t() {
        let settings = RenderSettings {
            max_t: 0.00001,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: RenderSettings = toml::from_str("max_depth = 5").unwrap();
        assert_eq!(settings.max_depth, 5);
        assert_eq!(settings.min_t, MIN_T);
        assert_eq!(settings.max_t, MAX_T);
    }
}
