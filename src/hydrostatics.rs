// src/hydrostatics.rs - hydrostatic coefficients derived from hull geometry and loading
//
// The waterplane is treated as a rectangle for its second moment of area and
// KB uses the block-coefficient approximation `Cb * T / 3`. Displacement in
// tonnes is divided directly by the water density, so absolute volumes are
// small and BM large.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{GRAVITY_MS2, RHO_WATER_KGM3};
use crate::error::{Result, StabilityError};
use crate::hull::HullGeometry;
use crate::loading::MassProperties;

/// Derived hydrostatic state. Never set directly; always produced by
/// [`Hydrostatics::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hydrostatics {
    pub volume_displaced: f64,
    pub buoyancy_force: f64,
    pub waterplane_area: f64,
    /// Transverse second moment of the waterplane, m⁴.
    pub waterplane_moment_inertia: f64,
    pub kb: f64,
    pub kg: f64,
    pub lcg: f64,
    pub bm: f64,
    pub gm: f64,
    pub kmt: f64,
    pub bml: f64,
    pub gml: f64,
}

impl Hydrostatics {
    /// Recompute every coefficient from `hull` and the current `mass` state.
    ///
    /// KG and LCG are taken from `mass` unchanged; loading owns them.
    /// Fails with [`StabilityError::InvalidGeometry`] when the displaced
    /// volume is not positive or a derived height comes out non-finite.
    pub fn compute(hull: &HullGeometry, mass: &MassProperties) -> Result<Self> {
        let volume_displaced = mass.displacement / RHO_WATER_KGM3;
        if !volume_displaced.is_finite() || volume_displaced <= 0.0 {
            return Err(StabilityError::InvalidGeometry {
                quantity: "volume_displaced",
                value: volume_displaced,
            });
        }
        let buoyancy_force = RHO_WATER_KGM3 * GRAVITY_MS2 * volume_displaced;

        let waterplane_area = hull.length * hull.beam * hull.waterplane_area_coefficient;
        let waterplane_moment_inertia = hull.beam.powi(3) * hull.length / 12.0;

        let kb = hull.block_coefficient * hull.draft / 3.0;
        let kg = mass.kg;

        let bm = waterplane_moment_inertia / volume_displaced;
        let gm = kb + bm - kg;
        let kmt = bm;

        let bml = hull.length.powi(2) / (12.0 * volume_displaced);
        let gml = kb + bml - kg;

        for (quantity, value) in [("gm", gm), ("gml", gml), ("lcg", mass.lcg)] {
            if !value.is_finite() {
                return Err(StabilityError::InvalidGeometry { quantity, value });
            }
        }

        debug!(
            displacement = mass.displacement,
            volume_displaced,
            kg,
            gm,
            gml,
            "recomputed hydrostatics"
        );

        Ok(Self {
            volume_displaced,
            buoyancy_force,
            waterplane_area,
            waterplane_moment_inertia,
            kb,
            kg,
            lcg: mass.lcg,
            bm,
            gm,
            kmt,
            bml,
            gml,
        })
    }

    /// Positive transverse metacentric height.
    pub fn is_stable(&self) -> bool {
        self.gm > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference_hull() -> HullGeometry {
        HullGeometry::new(100.0, 20.0, 10.0, 0.7, 0.85, 0.6, 1.05)
    }

    fn reference_mass() -> MassProperties {
        MassProperties {
            displacement: 20000.0,
            kg: 5.0,
            lcg: 0.0,
        }
    }

    #[test]
    fn test_reference_hull_coefficients() {
        let hydro = Hydrostatics::compute(&reference_hull(), &reference_mass()).unwrap();

        let volume = 20000.0 / 1025.0;
        assert_abs_diff_eq!(hydro.volume_displaced, volume, epsilon = 1e-12);
        assert_abs_diff_eq!(hydro.buoyancy_force, 1025.0 * 9.81 * volume, epsilon = 1e-6);
        assert_abs_diff_eq!(hydro.waterplane_area, 1700.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hydro.waterplane_moment_inertia, 8000.0 * 100.0 / 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hydro.kb, 0.7 * 10.0 / 3.0, epsilon = 1e-12);
        assert_eq!(hydro.kg, 5.0);

        let bm = (8000.0 * 100.0 / 12.0) / volume;
        assert_abs_diff_eq!(hydro.bm, bm, epsilon = 1e-9);
        assert_abs_diff_eq!(hydro.gm, hydro.kb + bm - 5.0, epsilon = 1e-9);
        assert_eq!(hydro.kmt, hydro.bm);

        let bml = 100.0_f64.powi(2) / (12.0 * volume);
        assert_abs_diff_eq!(hydro.bml, bml, epsilon = 1e-9);
        assert_abs_diff_eq!(hydro.gml, hydro.kb + bml - 5.0, epsilon = 1e-9);
        assert!(hydro.is_stable());
    }

    #[test]
    fn test_compute_is_idempotent() {
        let first = Hydrostatics::compute(&reference_hull(), &reference_mass()).unwrap();
        let second = Hydrostatics::compute(&reference_hull(), &reference_mass()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_kg_passes_through_untouched() {
        let mass = MassProperties {
            kg: 7.25,
            ..reference_mass()
        };
        let hydro = Hydrostatics::compute(&reference_hull(), &mass).unwrap();
        assert_eq!(hydro.kg, 7.25);
    }

    #[test]
    fn test_negative_gm_is_a_valid_state() {
        let mass = MassProperties {
            kg: 5000.0,
            ..reference_mass()
        };
        let hydro = Hydrostatics::compute(&reference_hull(), &mass).unwrap();
        assert!(hydro.gm < 0.0);
        assert!(!hydro.is_stable());
    }

    #[test]
    fn test_zero_displacement_is_invalid_geometry() {
        let mass = MassProperties {
            displacement: 0.0,
            kg: f64::NAN,
            lcg: f64::NAN,
        };
        let err = Hydrostatics::compute(&reference_hull(), &mass).unwrap_err();
        assert!(matches!(
            err,
            StabilityError::InvalidGeometry { quantity: "volume_displaced", .. }
        ));
    }

    #[test]
    fn test_non_finite_kg_is_invalid_geometry() {
        let mass = MassProperties {
            kg: f64::INFINITY,
            ..reference_mass()
        };
        let err = Hydrostatics::compute(&reference_hull(), &mass).unwrap_err();
        assert!(matches!(err, StabilityError::InvalidGeometry { quantity: "gm", .. }));
    }
}
