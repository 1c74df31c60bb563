// src/model.rs - the vessel stability model: one owned value per scenario
//
// All mutation goes through `&mut self` methods and every loading mutation
// recomputes the derived hydrostatics before returning. A mutation whose
// recompute fails is rolled back, so callers never observe stale or
// half-updated derived values. Queries take `&self` and may run in parallel
// while no mutation is in flight.

use tracing::{debug, warn};

use crate::constants::{GZ_SWEEP_END_DEG, GZ_SWEEP_START_DEG, GZ_SWEEP_STEP_DEG};
use crate::error::Result;
use crate::hull::{HullGeometry, VesselConfig};
use crate::hydrostatics::Hydrostatics;
use crate::loading::{BallastTank, CargoItem, Lightship, LoadingCondition, MassProperties};
use crate::presets::hull_preset;
use crate::report::StabilityReport;
use crate::resistance::ResistanceEstimate;
use crate::righting_arm::{righting_arm, GzCurve};
use crate::structural::max_bending_stress;
use crate::waves::{wave_response, WaveParameters, WaveResponse};
use crate::wind::wind_heeling_moment;

#[derive(Debug, Clone, PartialEq)]
pub struct VesselStabilityModel {
    hull: HullGeometry,
    loading: LoadingCondition,
    mass: MassProperties,
    hydrostatics: Hydrostatics,
    waves: WaveParameters,
    time: f64,
    hull_resistance: f64,
    power_required: f64,
}

impl VesselStabilityModel {
    /// Build a model at its lightship condition, with KG at half the draft
    /// and LCG at the longitudinal reference.
    pub fn new(hull: HullGeometry, displacement: f64) -> Result<Self> {
        Self::with_lightship(
            hull,
            Lightship {
                displacement,
                kg: hull.draft / 2.0,
                lcg: 0.0,
            },
        )
    }

    pub fn with_lightship(hull: HullGeometry, lightship: Lightship) -> Result<Self> {
        let loading = LoadingCondition::new(lightship);
        let mass = loading.mass_properties();
        let hydrostatics = Hydrostatics::compute(&hull, &mass)?;

        let model = Self {
            hull,
            loading,
            mass,
            hydrostatics,
            waves: WaveParameters::default(),
            time: 0.0,
            hull_resistance: 0.0,
            power_required: 0.0,
        };
        model.warn_if_unstable("construction");
        Ok(model)
    }

    pub fn from_config(config: &VesselConfig) -> Result<Self> {
        let hull = config.hull;
        Self::with_lightship(
            hull,
            Lightship {
                displacement: config.displacement,
                kg: config.lightship_kg.unwrap_or(hull.draft / 2.0),
                lcg: config.lightship_lcg.unwrap_or(0.0),
            },
        )
    }

    pub fn from_preset(name: &str) -> Result<Self> {
        Self::from_config(&hull_preset(name)?)
    }

    /// Recompute the derived hydrostatic state from geometry and loading.
    ///
    /// Mutations already do this; calling it again with unchanged inputs
    /// yields identical values.
    pub fn calculate_hydrostatics(&mut self) -> Result<()> {
        let mass = self.loading.mass_properties();
        self.hydrostatics = Hydrostatics::compute(&self.hull, &mass)?;
        self.mass = mass;
        Ok(())
    }

    fn apply_loading<F>(&mut self, context: &'static str, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut LoadingCondition),
    {
        let mut loading = self.loading.clone();
        mutate(&mut loading);

        let mass = loading.mass_properties();
        let hydrostatics = Hydrostatics::compute(&self.hull, &mass)?;

        self.loading = loading;
        self.mass = mass;
        self.hydrostatics = hydrostatics;

        debug!(
            context,
            displacement = mass.displacement,
            kg = mass.kg,
            lcg = mass.lcg,
            gm = hydrostatics.gm,
            "loading changed"
        );
        self.warn_if_unstable(context);
        Ok(())
    }

    fn warn_if_unstable(&self, context: &'static str) {
        if !self.is_stable() {
            warn!(context, gm = self.hydrostatics.gm, "metacentric height is zero or negative");
        }
    }

    /// Load cargo on top of whatever is already aboard.
    pub fn add_cargo<I: IntoIterator<Item = CargoItem>>(&mut self, items: I) -> Result<()> {
        self.apply_loading("add_cargo", |loading| loading.add_cargo(items))
    }

    /// Replace all cargo aboard with `items`.
    pub fn set_cargo<I: IntoIterator<Item = CargoItem>>(&mut self, items: I) -> Result<()> {
        self.apply_loading("set_cargo", |loading| loading.set_cargo(items))
    }

    pub fn clear_cargo(&mut self) -> Result<()> {
        self.apply_loading("clear_cargo", LoadingCondition::clear_cargo)
    }

    pub fn add_ballast_tank(&mut self, tank: BallastTank) -> Result<()> {
        self.apply_loading("add_ballast_tank", |loading| loading.add_ballast_tank(tank))
    }

    pub fn clear_ballast(&mut self) -> Result<()> {
        self.apply_loading("clear_ballast", LoadingCondition::clear_ballast)
    }

    /// Set the wave train used by [`Self::calculate_righting_arm`].
    pub fn set_wave_parameters(&mut self, height: f64, length: f64, period: f64) {
        self.waves = WaveParameters::new(height, length, period);
    }

    /// Set the absolute simulation time in s.
    pub fn update_time(&mut self, time: f64) {
        self.time = time;
    }

    /// Move the simulation clock forward by `dt` s.
    pub fn advance_time(&mut self, dt: f64) {
        self.time += dt;
    }

    /// Righting arm GZ (m) at `heel_deg`, including any wave-induced heel at
    /// the current time. With GM ≤ 0 this silently yields a non-positive
    /// curve; check [`Self::is_stable`].
    pub fn calculate_righting_arm(&self, heel_deg: f64) -> f64 {
        righting_arm(self.hydrostatics.gm, heel_deg, self.waves.induced_heel(self.time))
    }

    pub fn righting_arm_curve(&self, start_deg: f64, end_deg: f64, step_deg: f64) -> GzCurve {
        let wave_heel = self.waves.induced_heel(self.time);
        let gm = self.hydrostatics.gm;
        GzCurve::sample(start_deg, end_deg, step_deg, |heel| righting_arm(gm, heel, wave_heel))
    }

    /// GZ from 0° to 90° in 1° steps.
    pub fn default_gz_curve(&self) -> GzCurve {
        self.righting_arm_curve(GZ_SWEEP_START_DEG, GZ_SWEEP_END_DEG, GZ_SWEEP_STEP_DEG)
    }

    /// Response to the given wave. Does not touch the stored wave train.
    pub fn calculate_wave_interaction(
        &self,
        wave_height: f64,
        wave_length: f64,
        wave_period: f64,
    ) -> Result<WaveResponse> {
        wave_response(
            &self.hull,
            self.mass.displacement,
            &self.hydrostatics,
            &WaveParameters::new(wave_height, wave_length, wave_period),
        )
    }

    /// Full resistance breakdown at `speed` without storing anything.
    pub fn estimate_resistance(&self, speed: f64) -> Result<ResistanceEstimate> {
        ResistanceEstimate::compute(&self.hull, speed)
    }

    /// Total hull resistance (N) at `speed`; stores it along with the power
    /// required. On failure the stored values are left as they were.
    pub fn calculate_resistance(&mut self, speed: f64) -> Result<f64> {
        let estimate = self.estimate_resistance(speed)?;
        self.hull_resistance = estimate.total_resistance;
        self.power_required = estimate.power_required;
        Ok(estimate.total_resistance)
    }

    pub fn calculate_wind_heeling_moment(
        &self,
        wind_speed: f64,
        wind_area: f64,
        wind_direction_deg: f64,
    ) -> f64 {
        wind_heeling_moment(self.hull.beam, wind_speed, wind_area, wind_direction_deg)
    }

    /// Coarse hull-girder stress proxy for the current displacement.
    pub fn check_structural_stress(&self) -> Result<f64> {
        max_bending_stress(&self.hull, self.mass.displacement)
    }

    pub fn stability_report(&self) -> StabilityReport {
        StabilityReport::from_model(self)
    }

    pub fn hull(&self) -> &HullGeometry {
        &self.hull
    }

    pub fn loading(&self) -> &LoadingCondition {
        &self.loading
    }

    pub fn lightship(&self) -> Lightship {
        self.loading.lightship()
    }

    pub fn cargo(&self) -> &[CargoItem] {
        self.loading.cargo()
    }

    pub fn ballast_tanks(&self) -> &[BallastTank] {
        self.loading.ballast_tanks()
    }

    pub fn hydrostatics(&self) -> &Hydrostatics {
        &self.hydrostatics
    }

    /// Total displacement in tonnes.
    pub fn displacement(&self) -> f64 {
        self.mass.displacement
    }

    pub fn kg(&self) -> f64 {
        self.mass.kg
    }

    pub fn lcg(&self) -> f64 {
        self.mass.lcg
    }

    pub fn gm(&self) -> f64 {
        self.hydrostatics.gm
    }

    pub fn gml(&self) -> f64 {
        self.hydrostatics.gml
    }

    pub fn is_stable(&self) -> bool {
        self.hydrostatics.is_stable()
    }

    pub fn wave_parameters(&self) -> WaveParameters {
        self.waves
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Resistance from the last successful [`Self::calculate_resistance`], N.
    pub fn hull_resistance(&self) -> f64 {
        self.hull_resistance
    }

    /// Power from the last successful [`Self::calculate_resistance`], kW.
    pub fn power_required(&self) -> f64 {
        self.power_required
    }
}
