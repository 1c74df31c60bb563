// src/error.rs - failure taxonomy for the stability model

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenient result alias for the stability model.
pub type Result<T> = std::result::Result<T, StabilityError>;

/// Axis a metacentric height belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StabilityAxis {
    /// Roll, governed by GM.
    Transverse,
    /// Pitch, governed by GML.
    Longitudinal,
}

impl fmt::Display for StabilityAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StabilityAxis::Transverse => write!(f, "transverse (GM)"),
            StabilityAxis::Longitudinal => write!(f, "longitudinal (GML)"),
        }
    }
}

/// Top-level error type for the stability model.
#[derive(Debug, Error)]
pub enum StabilityError {
    /// A hull dimension or derived volume made a computation undefined.
    #[error("invalid geometry: {quantity} = {value}")]
    InvalidGeometry { quantity: &'static str, value: f64 },

    /// Metacentric height is zero or negative, so a natural period has no real value.
    #[error("vessel unstable: {axis} metacentric height is {metacentric_height:.4} m")]
    Unstable {
        axis: StabilityAxis,
        metacentric_height: f64,
    },

    /// Speed too low for the ITTC-1957 friction line.
    #[error("degenerate speed {speed} m/s (Reynolds number {reynolds_number:.3e})")]
    DegenerateSpeed { speed: f64, reynolds_number: f64 },

    /// Hull configuration failed validation.
    #[error("invalid hull configuration: {message}")]
    InvalidConfig { message: String },

    /// Requested hull preset is not bundled.
    #[error("unknown hull preset: {name}")]
    UnknownPreset { name: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StabilityError {
    /// True for the unstable-configuration class of failures.
    pub fn is_unstable(&self) -> bool {
        matches!(self, StabilityError::Unstable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unstable_message_names_axis() {
        let err = StabilityError::Unstable {
            axis: StabilityAxis::Longitudinal,
            metacentric_height: -0.25,
        };
        let msg = err.to_string();
        assert!(msg.contains("longitudinal (GML)"), "{msg}");
        assert!(msg.contains("-0.2500"), "{msg}");
        assert!(err.is_unstable());
    }

    #[test]
    fn test_degenerate_speed_is_not_unstable() {
        let err = StabilityError::DegenerateSpeed {
            speed: 0.0,
            reynolds_number: 0.0,
        };
        assert!(!err.is_unstable());
        assert!(err.to_string().starts_with("degenerate speed"));
    }
}
