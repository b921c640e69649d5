use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Tunable constants for the deck, gestures and exit animation.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Profiles generated on boot and on shuffle.
    pub deck_size: usize,
    /// Minimum travel (px) for a drag to count as a swipe.
    pub swipe_threshold_px: f64,
    /// Maximum travel (px) on either axis for a release to count as a tap.
    pub tap_move_tolerance_px: f64,
    /// A tap must be released within this many ms of pointer-down.
    pub tap_max_duration_ms: f64,
    /// Two taps closer than this (ms) form a double-tap.
    pub double_tap_window_ms: f64,
    /// Fallback timer for the exit transition.
    pub exit_timeout_ms: u32,
    /// Card rotation cap while dragging, in degrees.
    pub max_rotation_deg: f64,
    /// Horizontal px per degree of rotation.
    pub rotation_divisor: f64,
    pub log_level: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            deck_size: 12,
            swipe_threshold_px: 60.0,
            tap_move_tolerance_px: 15.0,
            tap_max_duration_ms: 250.0,
            double_tap_window_ms: 400.0,
            exit_timeout_ms: 320,
            max_rotation_deg: 12.0,
            rotation_divisor: 12.0,
            log_level: "info".to_string(),
        }
    }
}

impl DeckConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let config: DeckConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        let positive = [
            ("swipe_threshold_px", self.swipe_threshold_px),
            ("tap_move_tolerance_px", self.tap_move_tolerance_px),
            ("tap_max_duration_ms", self.tap_max_duration_ms),
            ("double_tap_window_ms", self.double_tap_window_ms),
            ("rotation_divisor", self.rotation_divisor),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(DeckError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if !self.max_rotation_deg.is_finite() || self.max_rotation_deg < 0.0 {
            return Err(DeckError::InvalidConfig(format!(
                "max_rotation_deg must not be negative, got {}",
                self.max_rotation_deg
            )));
        }

        if self.exit_timeout_ms == 0 {
            return Err(DeckError::InvalidConfig(
                "exit_timeout_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
