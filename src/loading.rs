// src/loading.rs - loading state: lightship baseline plus cargo and ballast lists
//
// Totals are always rebuilt from the lightship baseline and the full lists,
// never folded into a previous total, so repeated additions cannot double
// count earlier contributions.

use serde::{Deserialize, Serialize};

/// A cargo item placed aboard. Weights in tonnes, positions in m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    pub weight: f64,
    /// Height above keel.
    pub vertical_position: f64,
    /// Distance from the longitudinal reference.
    pub longitudinal_position: f64,
}

impl CargoItem {
    pub fn new(weight: f64, vertical_position: f64, longitudinal_position: f64) -> Self {
        Self {
            weight,
            vertical_position,
            longitudinal_position,
        }
    }
}

/// A filled ballast tank. Ballast carries no longitudinal position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallastTank {
    pub weight: f64,
    /// Height above keel.
    pub vertical_position: f64,
}

impl BallastTank {
    pub fn new(weight: f64, vertical_position: f64) -> Self {
        Self {
            weight,
            vertical_position,
        }
    }
}

/// The unloaded vessel: displacement and its centres of gravity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lightship {
    pub displacement: f64,
    pub kg: f64,
    pub lcg: f64,
}

/// Combined weight and centres of gravity of a loading condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassProperties {
    pub displacement: f64,
    pub kg: f64,
    pub lcg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingCondition {
    lightship: Lightship,
    cargo: Vec<CargoItem>,
    ballast: Vec<BallastTank>,
}

impl LoadingCondition {
    pub fn new(lightship: Lightship) -> Self {
        Self {
            lightship,
            cargo: Vec::new(),
            ballast: Vec::new(),
        }
    }

    pub fn lightship(&self) -> Lightship {
        self.lightship
    }

    pub fn cargo(&self) -> &[CargoItem] {
        &self.cargo
    }

    pub fn ballast_tanks(&self) -> &[BallastTank] {
        &self.ballast
    }

    /// Append cargo to what is already aboard.
    pub fn add_cargo<I: IntoIterator<Item = CargoItem>>(&mut self, items: I) {
        self.cargo.extend(items);
    }

    /// Replace everything aboard with `items`.
    pub fn set_cargo<I: IntoIterator<Item = CargoItem>>(&mut self, items: I) {
        self.cargo.clear();
        self.cargo.extend(items);
    }

    pub fn clear_cargo(&mut self) {
        self.cargo.clear();
    }

    pub fn add_ballast_tank(&mut self, tank: BallastTank) {
        self.ballast.push(tank);
    }

    pub fn clear_ballast(&mut self) {
        self.ballast.clear();
    }

    pub fn cargo_weight(&self) -> f64 {
        self.cargo.iter().map(|c| c.weight).sum()
    }

    pub fn ballast_weight(&self) -> f64 {
        self.ballast.iter().map(|t| t.weight).sum()
    }

    /// Total displacement, KG and LCG of lightship plus everything aboard.
    ///
    /// KG and LCG are moment-weighted means. A zero total weight yields
    /// non-finite centres, which hydrostatics then reports as invalid geometry.
    pub fn mass_properties(&self) -> MassProperties {
        let light = &self.lightship;

        let cargo_vertical_moment: f64 = self
            .cargo
            .iter()
            .map(|c| c.weight * c.vertical_position)
            .sum();
        let cargo_longitudinal_moment: f64 = self
            .cargo
            .iter()
            .map(|c| c.weight * c.longitudinal_position)
            .sum();
        let ballast_vertical_moment: f64 = self
            .ballast
            .iter()
            .map(|t| t.weight * t.vertical_position)
            .sum();

        let displacement = light.displacement + self.cargo_weight() + self.ballast_weight();
        let vertical_moment =
            light.kg * light.displacement + cargo_vertical_moment + ballast_vertical_moment;
        let longitudinal_moment = light.lcg * light.displacement + cargo_longitudinal_moment;

        MassProperties {
            displacement,
            kg: vertical_moment / displacement,
            lcg: longitudinal_moment / displacement,
        }
    }
}
