//! Controller configuration.

use crate::axis::DragAxis;
use crate::gesture_constants::{DEFAULT_MIN_FLING_VELOCITY, MAX_FLING_VELOCITY};

/// Tunables a host hands to [`GestureController`](crate::GestureController).
///
/// The slop fractions are fixed; only the allowed directions and the fling
/// thresholds are configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullBackConfig {
    pub axis: DragAxis,
    /// Release speed (px/sec) above which a release counts as a fling.
    pub min_fling_velocity: f32,
    /// Cap applied to velocities estimated by the built-in tracker.
    pub max_fling_velocity: f32,
}

impl Default for PullBackConfig {
    fn default() -> Self {
        Self {
            axis: DragAxis::default(),
            min_fling_velocity: DEFAULT_MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
        }
    }
}

impl PullBackConfig {
    pub fn with_axis(mut self, axis: DragAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_min_fling_velocity(mut self, velocity: f32) -> Self {
        self.min_fling_velocity = velocity;
        self
    }

    pub fn with_max_fling_velocity(mut self, velocity: f32) -> Self {
        self.max_fling_velocity = velocity;
        self
    }

    /// Checks the fling thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = self.min_fling_velocity;
        let max = self.max_fling_velocity;
        if !min.is_finite() || min < 0.0 {
            return Err(ConfigError::InvalidMinFlingVelocity { value: min });
        }
        if !max.is_finite() || max <= 0.0 {
            return Err(ConfigError::InvalidMaxFlingVelocity { value: max });
        }
        if max < min {
            return Err(ConfigError::InvertedFlingRange { min, max });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidMinFlingVelocity { value: f32 },
    InvalidMaxFlingVelocity { value: f32 },
    InvertedFlingRange { min: f32, max: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidMinFlingVelocity { value } => {
                write!(f, "minimum fling velocity must be finite and >= 0, got {value}")
            }
            ConfigError::InvalidMaxFlingVelocity { value } => {
                write!(f, "maximum fling velocity must be finite and > 0, got {value}")
            }
            ConfigError::InvertedFlingRange { min, max } => {
                write!(f, "maximum fling velocity {max} is below minimum {min}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PullBackConfig::default();
        assert_eq!(config.axis, DragAxis::Both);
        assert_eq!(config.min_fling_velocity, DEFAULT_MIN_FLING_VELOCITY);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builder_overrides_fields() {
        let config = PullBackConfig::default()
            .with_axis(DragAxis::Down)
            .with_min_fling_velocity(120.0)
            .with_max_fling_velocity(4_000.0);

        assert_eq!(config.axis, DragAxis::Down);
        assert_eq!(config.min_fling_velocity, 120.0);
        assert_eq!(config.max_fling_velocity, 4_000.0);
    }

    #[test]
    fn rejects_bad_fling_thresholds() {
        let negative = PullBackConfig::default().with_min_fling_velocity(-1.0);
        assert_eq!(
            negative.validate(),
            Err(ConfigError::InvalidMinFlingVelocity { value: -1.0 })
        );

        let zero_cap = PullBackConfig::default().with_max_fling_velocity(0.0);
        assert_eq!(
            zero_cap.validate(),
            Err(ConfigError::InvalidMaxFlingVelocity { value: 0.0 })
        );

        let inverted = PullBackConfig::default()
            .with_min_fling_velocity(500.0)
            .with_max_fling_velocity(100.0);
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::InvertedFlingRange {
                min: 500.0,
                max: 100.0
            })
        );

        assert!(PullBackConfig::default()
            .with_min_fling_velocity(f32::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn errors_render_readably() {
        let err = ConfigError::InvertedFlingRange {
            min: 500.0,
            max: 100.0,
        };
        assert_eq!(
            err.to_string(),
            "maximum fling velocity 100 is below minimum 500"
        );
    }
}
