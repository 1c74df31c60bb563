// src/presets.rs - bundled hull configurations

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use crate::error::{Result, StabilityError};
use crate::hull::VesselConfig;

const PRESETS_JSON: &str = r#"{
    "reference_cargo_ship": {
        "length": 100.0,
        "beam": 20.0,
        "draft": 10.0,
        "block_coefficient": 0.7,
        "waterplane_area_coefficient": 0.85,
        "prismatic_coefficient": 0.6,
        "hull_form_factor": 1.05,
        "displacement": 20000.0
    },
    "coastal_tanker": {
        "length": 120.0,
        "beam": 18.0,
        "draft": 7.5,
        "block_coefficient": 0.8,
        "waterplane_area_coefficient": 0.9,
        "prismatic_coefficient": 0.78,
        "hull_form_factor": 1.1,
        "displacement": 12000.0
    },
    "patrol_vessel": {
        "length": 60.0,
        "beam": 9.0,
        "draft": 3.0,
        "block_coefficient": 0.5,
        "waterplane_area_coefficient": 0.75,
        "prismatic_coefficient": 0.62,
        "hull_form_factor": 0.9,
        "displacement": 800.0,
        "lightship_kg": 2.1
    }
}"#;

/// Parsed once on first access; the embedded document never changes.
static HULL_PRESETS: Lazy<std::result::Result<BTreeMap<String, VesselConfig>, String>> =
    Lazy::new(|| serde_json::from_str(PRESETS_JSON).map_err(|e| e.to_string()));

fn presets() -> Result<&'static BTreeMap<String, VesselConfig>> {
    match &*HULL_PRESETS {
        Ok(presets) => Ok(presets),
        Err(message) => Err(StabilityError::InvalidConfig {
            message: format!("bundled presets failed to parse: {message}"),
        }),
    }
}

/// Look up a bundled vessel configuration by name.
pub fn hull_preset(name: &str) -> Result<VesselConfig> {
    presets()?
        .get(name)
        .cloned()
        .ok_or_else(|| StabilityError::UnknownPreset {
            name: name.to_string(),
        })
}

/// Names of all bundled presets, sorted.
pub fn preset_names() -> Result<Vec<&'static str>> {
    Ok(presets()?.keys().map(String::as_str).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_preset_matches_dashboard_defaults() {
        let config = hull_preset("reference_cargo_ship").unwrap();
        assert_eq!(config.hull.length, 100.0);
        assert_eq!(config.hull.beam, 20.0);
        assert_eq!(config.hull.draft, 10.0);
        assert_eq!(config.hull.block_coefficient, 0.7);
        assert_eq!(config.hull.waterplane_area_coefficient, 0.85);
        assert_eq!(config.hull.prismatic_coefficient, 0.6);
        assert_eq!(config.hull.hull_form_factor, 1.05);
        assert_eq!(config.displacement, 20000.0);
    }

    #[test]
    fn test_all_presets_validate() {
        for name in preset_names().unwrap() {
            let config = hull_preset(name).unwrap();
            config.hull.validate().unwrap_or_else(|e| panic!("{name}: {e}"));
            assert!(config.displacement > 0.0, "{name}");
        }
    }

    #[test]
    fn test_preset_names_sorted() {
        assert_eq!(
            preset_names().unwrap(),
            vec!["coastal_tanker", "patrol_vessel", "reference_cargo_ship"]
        );
    }

    #[test]
    fn test_unknown_preset() {
        let err = hull_preset("flying_dutchman").unwrap_err();
        assert!(matches!(err, StabilityError::UnknownPreset { ref name } if name == "flying_dutchman"));
    }
}
