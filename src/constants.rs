// src/constants.rs - physical constants shared by the stability model

// === Fluids ===
pub const RHO_WATER_KGM3: f64 = 1025.0; // seawater
pub const GRAVITY_MS2: f64 = 9.81;
pub const KINEMATIC_VISCOSITY_SEAWATER_M2S: f64 = 1.19e-6;
pub const RHO_AIR_KGM3: f64 = 1.225; // drag coefficient of ~1 folded in

// === ITTC-1957 friction line: cf = 0.075 / (log10(Re) - 2)^2 ===
pub const ITTC_FRICTION_NUMERATOR: f64 = 0.075;
pub const ITTC_LOG_OFFSET: f64 = 2.0;
/// Reynolds numbers at or below this make the friction line singular.
pub const MIN_REYNOLDS_NUMBER: f64 = 100.0;

pub const WATTS_PER_KILOWATT: f64 = 1000.0;

// hull girder bending moment ~ 0.1 * displacement * length
pub const BENDING_MOMENT_FACTOR: f64 = 0.1;

// === GZ sweep used by the dashboard ===
pub const GZ_SWEEP_START_DEG: f64 = 0.0;
pub const GZ_SWEEP_END_DEG: f64 = 90.0;
pub const GZ_SWEEP_STEP_DEG: f64 = 1.0;
