// src/hull.rs - hull particulars and their JSON configuration
//
// Geometry is immutable once a model is built. Nothing here is validated
// implicitly: a non-positive dimension only fails when a computation that
// divides by it runs. Loaders call `HullGeometry::validate` explicitly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StabilityError};

/// Principal dimensions and form coefficients of a hull.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HullGeometry {
    /// Length overall in m.
    pub length: f64,
    /// Beam in m.
    pub beam: f64,
    /// Draft in m.
    pub draft: f64,
    /// Cb
    pub block_coefficient: f64,
    /// Cwp
    pub waterplane_area_coefficient: f64,
    /// Cp
    pub prismatic_coefficient: f64,
    /// Ratio of residual to frictional resistance.
    pub hull_form_factor: f64,
}

impl HullGeometry {
    pub fn new(
        length: f64,
        beam: f64,
        draft: f64,
        block_coefficient: f64,
        waterplane_area_coefficient: f64,
        prismatic_coefficient: f64,
        hull_form_factor: f64,
    ) -> Self {
        Self {
            length,
            beam,
            draft,
            block_coefficient,
            waterplane_area_coefficient,
            prismatic_coefficient,
            hull_form_factor,
        }
    }

    /// Checks that dimensions are finite and positive and the fullness
    /// coefficients lie in (0, 1].
    pub fn validate(&self) -> Result<()> {
        let dimensions = [
            (self.length, "length"),
            (self.beam, "beam"),
            (self.draft, "draft"),
        ];
        for (value, field) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(StabilityError::InvalidConfig {
                    message: format!("{field} must be a finite positive number, got {value}"),
                });
            }
        }

        let coefficients = [
            (self.block_coefficient, "block_coefficient"),
            (self.waterplane_area_coefficient, "waterplane_area_coefficient"),
            (self.prismatic_coefficient, "prismatic_coefficient"),
        ];
        for (value, field) in coefficients {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(StabilityError::InvalidConfig {
                    message: format!("{field} must lie in (0, 1], got {value}"),
                });
            }
        }

        if !self.hull_form_factor.is_finite() || self.hull_form_factor < 0.0 {
            return Err(StabilityError::InvalidConfig {
                message: format!(
                    "hull_form_factor must be finite and non-negative, got {}",
                    self.hull_form_factor
                ),
            });
        }

        Ok(())
    }

    /// Parse and validate hull particulars from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let hull: HullGeometry = serde_json::from_str(json)?;
        hull.validate()?;
        Ok(hull)
    }

    /// Load and validate hull particulars from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }
}

/// A hull plus its lightship condition, as stored in configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselConfig {
    #[serde(flatten)]
    pub hull: HullGeometry,
    /// Lightship displacement in tonnes.
    pub displacement: f64,
    /// Lightship KG in m; defaults to half the draft.
    #[serde(default)]
    pub lightship_kg: Option<f64>,
    /// Lightship LCG in m from the longitudinal reference; defaults to 0.
    #[serde(default)]
    pub lightship_lcg: Option<f64>,
}

impl VesselConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: VesselConfig = serde_json::from_str(json)?;
        config.hull.validate()?;
        if !config.displacement.is_finite() || config.displacement <= 0.0 {
            return Err(StabilityError::InvalidConfig {
                message: format!(
                    "displacement must be a finite positive number, got {}",
                    config.displacement
                ),
            });
        }
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }
}
