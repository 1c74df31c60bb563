// src/lib.rs - static and dynamic stability model for a surface vessel

pub mod constants;
pub mod error;
pub mod hull;
pub mod hydrostatics;
pub mod loading;
pub mod math_utils;
pub mod model;
pub mod presets;
pub mod report;
pub mod resistance;
pub mod righting_arm;
pub mod structural;
pub mod waves;
pub mod wind;

pub use error::{Result, StabilityAxis, StabilityError};
pub use hull::{HullGeometry, VesselConfig};
pub use loading::{BallastTank, CargoItem, Lightship};
pub use model::VesselStabilityModel;
