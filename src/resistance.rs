// src/resistance.rs - calm-water resistance from the ITTC-1957 friction line

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    ITTC_FRICTION_NUMERATOR, ITTC_LOG_OFFSET, KINEMATIC_VISCOSITY_SEAWATER_M2S, MIN_REYNOLDS_NUMBER,
    RHO_WATER_KGM3, WATTS_PER_KILOWATT,
};
use crate::error::{Result, StabilityError};
use crate::hull::HullGeometry;

/// Breakdown of hull resistance at one speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistanceEstimate {
    /// m/s
    pub speed: f64,
    pub reynolds_number: f64,
    /// Cf
    pub friction_coefficient: f64,
    /// Approximated as `2 L T + B L`, m².
    pub wetted_surface_area: f64,
    /// N
    pub frictional_resistance: f64,
    /// Form-factor share of the frictional resistance, N.
    pub residual_resistance: f64,
    /// N
    pub total_resistance: f64,
    /// kW
    pub power_required: f64,
}

impl ResistanceEstimate {
    /// Estimate resistance and effective power at `speed` (m/s).
    ///
    /// # Errors
    /// - `InvalidGeometry` when the hull length is not positive.
    /// - `DegenerateSpeed` when the Reynolds number is at or below 100, where
    ///   the friction line divides by zero (this includes zero speed).
    pub fn compute(hull: &HullGeometry, speed: f64) -> Result<Self> {
        if !hull.length.is_finite() || hull.length <= 0.0 {
            return Err(StabilityError::InvalidGeometry {
                quantity: "length",
                value: hull.length,
            });
        }

        let reynolds_number = speed * hull.length / KINEMATIC_VISCOSITY_SEAWATER_M2S;
        if reynolds_number.is_nan() || reynolds_number <= MIN_REYNOLDS_NUMBER {
            return Err(StabilityError::DegenerateSpeed {
                speed,
                reynolds_number,
            });
        }

        let friction_coefficient =
            ITTC_FRICTION_NUMERATOR / (reynolds_number.log10() - ITTC_LOG_OFFSET).powi(2);
        let wetted_surface_area = hull.length * hull.draft * 2.0 + hull.beam * hull.length;

        let frictional_resistance =
            0.5 * RHO_WATER_KGM3 * wetted_surface_area * friction_coefficient * speed.powi(2);
        let residual_resistance = hull.hull_form_factor * frictional_resistance;
        let total_resistance = frictional_resistance + residual_resistance;
        let power_required = total_resistance * speed / WATTS_PER_KILOWATT;

        debug!(speed, reynolds_number, total_resistance, power_required, "estimated resistance");

        Ok(Self {
            speed,
            reynolds_number,
            friction_coefficient,
            wetted_surface_area,
            frictional_resistance,
            residual_resistance,
            total_resistance,
            power_required,
        })
    }
}
