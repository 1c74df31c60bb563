// src/waves.rs - regular (linear) wave description and first-order vessel response

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{GRAVITY_MS2, RHO_WATER_KGM3};
use crate::error::{Result, StabilityError, StabilityAxis};
use crate::hull::HullGeometry;
use crate::hydrostatics::Hydrostatics;

/// A regular wave train. All zero means calm water.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveParameters {
    /// m
    pub height: f64,
    /// m
    pub length: f64,
    /// s
    pub period: f64,
}

impl WaveParameters {
    pub fn new(height: f64, length: f64, period: f64) -> Self {
        Self {
            height,
            length,
            period,
        }
    }

    /// A wave only acts on the vessel when both length and period are positive.
    pub fn is_active(&self) -> bool {
        self.length > 0.0 && self.period > 0.0
    }

    /// k = 2π / λ
    pub fn wave_number(&self) -> f64 {
        2.0 * PI / self.length
    }

    /// ω = 2π / T
    pub fn angular_frequency(&self) -> f64 {
        2.0 * PI / self.period
    }

    /// Surface elevation `H sin(kx - ωt)`; zero for an inactive wave.
    pub fn elevation(&self, x: f64, time: f64) -> f64 {
        if !self.is_active() {
            return 0.0;
        }
        self.height * (self.wave_number() * x - self.angular_frequency() * time).sin()
    }

    /// Surface slope `H k cos(kx - ωt)`; zero for an inactive wave.
    pub fn slope(&self, x: f64, time: f64) -> f64 {
        if !self.is_active() {
            return 0.0;
        }
        let k = self.wave_number();
        self.height * k * (k * x - self.angular_frequency() * time).cos()
    }

    /// Quasi-static heel in radians imposed by the wave slope at the vessel's
    /// longitudinal reference (x = 0).
    pub fn induced_heel(&self, time: f64) -> f64 {
        if !self.is_active() {
            return 0.0;
        }
        let heel = self.slope(0.0, time).atan();
        trace!(time, heel_rad = heel, "wave-induced heel");
        heel
    }
}

/// First-order response of the vessel to a regular wave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveResponse {
    pub heave: f64,
    /// Natural roll period, s.
    pub roll_period: f64,
    /// Natural pitch period, s.
    pub pitch_period: f64,
    /// Response-amplitude-operator proxy.
    pub motion_response: f64,
}

/// Natural period `2π sqrt(GM / g)` for the given axis.
///
/// A zero or negative metacentric height has no real period and is reported
/// as [`StabilityError::Unstable`].
pub fn natural_period(metacentric_height: f64, axis: StabilityAxis) -> Result<f64> {
    if metacentric_height.is_nan() || metacentric_height <= 0.0 {
        return Err(StabilityError::Unstable {
            axis,
            metacentric_height,
        });
    }
    Ok(2.0 * PI * (metacentric_height / GRAVITY_MS2).sqrt())
}

/// Heave, natural periods and motion response for `waves`.
///
/// Only the wave height enters the excitation force; length and period are
/// accepted so callers can pass a complete wave description.
pub fn wave_response(
    hull: &HullGeometry,
    displacement: f64,
    hydro: &Hydrostatics,
    waves: &WaveParameters,
) -> Result<WaveResponse> {
    let roll_period = natural_period(hydro.gm, StabilityAxis::Transverse)?;
    let pitch_period = natural_period(hydro.gml, StabilityAxis::Longitudinal)?;

    let wave_force = 0.5 * RHO_WATER_KGM3 * waves.height.powi(2) * hull.length * hull.beam;

    Ok(WaveResponse {
        heave: wave_force / displacement,
        roll_period,
        pitch_period,
        motion_response: wave_force / (displacement * GRAVITY_MS2),
    })
}
