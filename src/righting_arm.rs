// src/righting_arm.rs - righting arm (GZ) at a heel angle and GZ curves over a heel sweep
//
// `GZ = GM sin(heel)`: the small-angle form, applied over the whole sweep
// without a wall-sided or cross-curve correction.

use serde::{Deserialize, Serialize};

use crate::math_utils::{inclusive_steps, is_non_decreasing};

/// Righting arm in m for `heel_deg` plus an extra wave-induced heel in radians.
pub fn righting_arm(gm: f64, heel_deg: f64, wave_heel_rad: f64) -> f64 {
    let total_heel_rad = heel_deg.to_radians() + wave_heel_rad;
    gm * total_heel_rad.sin()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GzPoint {
    pub heel_deg: f64,
    pub gz: f64,
}

/// Sampled righting-arm curve, ordered by heel angle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GzCurve {
    points: Vec<GzPoint>,
}

impl GzCurve {
    /// Sample `gz_at` over `start..=end` in `step` degree increments.
    pub fn sample<F>(start_deg: f64, end_deg: f64, step_deg: f64, mut gz_at: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        let points = inclusive_steps(start_deg, end_deg, step_deg)
            .into_iter()
            .map(|heel_deg| GzPoint {
                heel_deg,
                gz: gz_at(heel_deg),
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[GzPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest GZ on the curve, if any point was sampled.
    pub fn max_righting_arm(&self) -> Option<GzPoint> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.gz.total_cmp(&b.gz))
    }

    pub fn angle_of_max_righting_arm(&self) -> Option<f64> {
        self.max_righting_arm().map(|p| p.heel_deg)
    }

    /// True when GZ never drops as heel increases (within float noise).
    pub fn is_monotonic_non_decreasing(&self) -> bool {
        let gz: Vec<f64> = self.points.iter().map(|p| p.gz).collect();
        is_non_decreasing(&gz, 1e-12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gz_at_zero_heel_is_zero() {
        for gm in [-2.0, 0.0, 0.5, 3414.0] {
            assert_eq!(righting_arm(gm, 0.0, 0.0), 0.0);
        }
    }

    #[test]
    fn test_gz_follows_sine() {
        assert_abs_diff_eq!(righting_arm(2.0, 30.0, 0.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(righting_arm(2.0, 90.0, 0.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wave_heel_adds_to_heel() {
        let wave_heel = 10.0_f64.to_radians();
        assert_abs_diff_eq!(
            righting_arm(1.5, 20.0, wave_heel),
            righting_arm(1.5, 30.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_curve_sampling_and_peak() {
        let curve = GzCurve::sample(0.0, 90.0, 1.0, |heel| righting_arm(1.2, heel, 0.0));
        assert_eq!(curve.len(), 91);
        assert!(curve.is_monotonic_non_decreasing());

        let peak = curve.max_righting_arm().unwrap();
        assert_eq!(peak.heel_deg, 90.0);
        assert_abs_diff_eq!(peak.gz, 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_gm_curve_decreases() {
        let curve = GzCurve::sample(0.0, 90.0, 5.0, |heel| righting_arm(-0.3, heel, 0.0));
        assert!(!curve.is_monotonic_non_decreasing());
        assert_eq!(curve.angle_of_max_righting_arm(), Some(0.0));
    }

    #[test]
    fn test_empty_curve() {
        let curve = GzCurve::sample(10.0, 0.0, 1.0, |_| 1.0);
        assert!(curve.is_empty());
        assert_eq!(curve.max_righting_arm(), None);
    }
}
