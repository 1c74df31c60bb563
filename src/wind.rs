// src/wind.rs - wind heeling moment

use crate::constants::RHO_AIR_KGM3;

/// Heeling moment (N·m) from a beam-on wind component.
///
/// `F = ½ ρ_air V² A`, with the moment arm taken as the beam and scaled by
/// `sin(direction)`, so a head wind (0°) produces no heel.
pub fn wind_heeling_moment(beam: f64, wind_speed: f64, wind_area: f64, wind_direction_deg: f64) -> f64 {
    let wind_force = 0.5 * RHO_AIR_KGM3 * wind_speed.powi(2) * wind_area;
    wind_force * beam * wind_direction_deg.to_radians().sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_beam_wind_moment() {
        let moment = wind_heeling_moment(20.0, 15.0, 500.0, 90.0);
        assert_abs_diff_eq!(moment, 0.5 * 1.225 * 225.0 * 500.0 * 20.0, epsilon = 1e-6);
    }

    #[test]
    fn test_head_wind_has_no_moment() {
        assert_abs_diff_eq!(wind_heeling_moment(20.0, 15.0, 500.0, 0.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_opposite_side_flips_sign() {
        let port = wind_heeling_moment(20.0, 10.0, 300.0, 90.0);
        let starboard = wind_heeling_moment(20.0, 10.0, 300.0, 270.0);
        assert_abs_diff_eq!(port, -starboard, epsilon = 1e-6);
    }
}
