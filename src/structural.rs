// src/structural.rs - hull girder stress proxy
//
// `M = 0.1 Δ L` and `σ = M / (L B)`. This is a coarse indicator for
// comparing loading conditions, not a structural assessment.

use crate::constants::BENDING_MOMENT_FACTOR;
use crate::error::{Result, StabilityError};
use crate::hull::HullGeometry;

pub fn max_bending_stress(hull: &HullGeometry, displacement: f64) -> Result<f64> {
    let section = hull.length * hull.beam;
    if !section.is_finite() || section <= 0.0 {
        return Err(StabilityError::InvalidGeometry {
            quantity: "length * beam",
            value: section,
        });
    }
    let bending_moment = BENDING_MOMENT_FACTOR * displacement * hull.length;
    Ok(bending_moment / section)
}
