// src/report.rs - serializable stability snapshot for display layers

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hydrostatics::Hydrostatics;
use crate::model::VesselStabilityModel;
use crate::righting_arm::GzPoint;
use crate::waves::WaveParameters;

/// Everything a dashboard needs to render the current loading condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    pub displacement: f64,
    pub lightship_displacement: f64,
    pub cargo_weight: f64,
    pub ballast_weight: f64,
    pub cargo_items: usize,
    pub ballast_tanks: usize,
    pub hydrostatics: Hydrostatics,
    /// GM > 0
    pub stable: bool,
    /// Peak of the 0–90° GZ curve at the current time.
    pub max_righting_arm: Option<GzPoint>,
    pub waves: WaveParameters,
    pub time: f64,
}

impl StabilityReport {
    pub fn from_model(model: &VesselStabilityModel) -> Self {
        let loading = model.loading();
        Self {
            displacement: model.displacement(),
            lightship_displacement: loading.lightship().displacement,
            cargo_weight: loading.cargo_weight(),
            ballast_weight: loading.ballast_weight(),
            cargo_items: loading.cargo().len(),
            ballast_tanks: loading.ballast_tanks().len(),
            hydrostatics: *model.hydrostatics(),
            stable: model.is_stable(),
            max_righting_arm: model.default_gz_curve().max_righting_arm(),
            waves: model.wave_parameters(),
            time: model.time(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::HullGeometry;
    use crate::loading::{BallastTank, CargoItem};

    #[test]
    fn test_report_tallies_loading() {
        let hull = HullGeometry::new(100.0, 20.0, 10.0, 0.7, 0.85, 0.6, 1.05);
        let mut model = VesselStabilityModel::new(hull, 20000.0).unwrap();
        model
            .add_cargo([CargoItem::new(400.0, 6.0, 20.0), CargoItem::new(600.0, 4.0, -10.0)])
            .unwrap();
        model.add_ballast_tank(BallastTank::new(250.0, 0.5)).unwrap();

        let report = model.stability_report();
        assert_eq!(report.displacement, 21250.0);
        assert_eq!(report.lightship_displacement, 20000.0);
        assert_eq!(report.cargo_weight, 1000.0);
        assert_eq!(report.ballast_weight, 250.0);
        assert_eq!(report.cargo_items, 2);
        assert_eq!(report.ballast_tanks, 1);
        assert!(report.stable);
        assert_eq!(report.max_righting_arm.map(|p| p.heel_deg), Some(90.0));
    }

    #[test]
    fn test_report_json_round_trips() {
        let hull = HullGeometry::new(100.0, 20.0, 10.0, 0.7, 0.85, 0.6, 1.05);
        let report = VesselStabilityModel::new(hull, 20000.0).unwrap().stability_report();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"stable\": true"), "{json}");

        let parsed: StabilityReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.displacement, report.displacement);
        assert_eq!(parsed.stable, report.stable);
    }
}
