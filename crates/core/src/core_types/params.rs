//! Barrel wall parameters and named material presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::units::{
    Celsius, Density, Meters, Seconds, SpecificHeat, ThermalConductivity, ThermalDiffusivity,
};
use crate::error::ThermalModelError;

/// Physical inputs of the lumped wall model.
///
/// Immutable value object: a parameter change means building a new value and
/// re-running the pipeline. Missing fields fall back to [`Default`] when
/// deserialized, so a config file may override only what it needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThermalParameters {
    /// Ambient temperature
    pub ambient: Celsius,
    /// Barrel wall thickness (characteristic length of the decay exponent)
    pub thickness: Meters,
    /// Elapsed time since the thermal event (firing)
    pub elapsed: Seconds,
    /// Wall thermal conductivity
    pub conductivity: ThermalConductivity,
    /// Wall density
    pub density: Density,
    /// Wall specific heat capacity
    pub specific_heat: SpecificHeat,
}

impl Default for ThermalParameters {
    /// Carbon steel barrel, 15.2 mm wall, 30 s after firing at 25°C ambient.
    fn default() -> Self {
        Self {
            ambient: Celsius::new(25.0),
            thickness: Meters::new(0.0152),
            elapsed: Seconds::new(30.0),
            conductivity: ThermalConductivity::new(46.0),
            density: Density::new(7850.0),
            specific_heat: SpecificHeat::new(460.0),
        }
    }
}

impl ThermalParameters {
    /// Human-readable labels, in the order used by [`Self::labeled_values`].
    pub const LABELS: [&'static str; 6] = [
        "Ambient Temp",
        "Thickness",
        "Elapsed Time",
        "Conductivity",
        "Density",
        "Specific Heat",
    ];

    /// Build a parameter set from raw values in the documented units.
    pub fn new(
        ambient_c: f64,
        thickness_m: f64,
        elapsed_s: f64,
        conductivity: f64,
        density: f64,
        specific_heat: f64,
    ) -> Self {
        Self {
            ambient: Celsius::new(ambient_c),
            thickness: Meters::new(thickness_m),
            elapsed: Seconds::new(elapsed_s),
            conductivity: ThermalConductivity::new(conductivity),
            density: Density::new(density),
            specific_heat: SpecificHeat::new(specific_heat),
        }
    }

    /// Check every field against its valid domain.
    ///
    /// Elapsed time of exactly zero passes here: it is a valid input that makes
    /// the model singular, reported separately by the model itself.
    ///
    /// # Errors
    /// Returns `ThermalModelError::InvalidParameter` for the first field that is
    /// non-finite, non-positive (thickness, conductivity, density, specific heat)
    /// or negative (elapsed time).
    pub fn validate(&self) -> Result<(), ThermalModelError> {
        check_finite("ambient temperature", *self.ambient)?;
        check_positive("thickness", *self.thickness)?;
        check_finite("elapsed time", *self.elapsed)?;
        if *self.elapsed < 0.0 {
            return Err(ThermalModelError::invalid_parameter(
                "elapsed time",
                *self.elapsed,
                "must be >= 0",
            ));
        }
        check_positive("conductivity", *self.conductivity)?;
        check_positive("density", *self.density)?;
        check_positive("specific heat", *self.specific_heat)?;
        Ok(())
    }

    /// Thermal diffusivity α = k / (ρ·c). Not validated; call [`Self::validate`] first.
    pub fn diffusivity(&self) -> ThermalDiffusivity {
        self.conductivity / (self.density * self.specific_heat)
    }

    /// The six inputs as `(label, value)` pairs for echoing in reports.
    pub fn labeled_values(&self) -> [(&'static str, f64); 6] {
        let [ambient, thickness, elapsed, conductivity, density, specific_heat] = Self::LABELS;
        [
            (ambient, *self.ambient),
            (thickness, *self.thickness),
            (elapsed, *self.elapsed),
            (conductivity, *self.conductivity),
            (density, *self.density),
            (specific_heat, *self.specific_heat),
        ]
    }
}

fn check_finite(name: &str, value: f64) -> Result<(), ThermalModelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ThermalModelError::invalid_parameter(name, value, "must be finite"))
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), ThermalModelError> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ThermalModelError::invalid_parameter(name, value, "must be > 0"))
    }
}

/// Common barrel steels with handbook room-temperature properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialPreset {
    /// Plain carbon steel (the default parameter set)
    CarbonSteel,
    /// AISI 4140 chromoly, the usual button-rifled barrel steel
    #[serde(rename = "chromoly-4140")]
    Chromoly4140,
    /// AISI 416 martensitic stainless
    #[serde(rename = "stainless-416")]
    Stainless416,
}

impl MaterialPreset {
    /// All presets, for listing in front-ends.
    pub const ALL: [MaterialPreset; 3] = [
        MaterialPreset::CarbonSteel,
        MaterialPreset::Chromoly4140,
        MaterialPreset::Stainless416,
    ];

    /// Thermal conductivity in W/(m·K)
    pub fn conductivity(self) -> ThermalConductivity {
        match self {
            MaterialPreset::CarbonSteel => ThermalConductivity::new(46.0),
            MaterialPreset::Chromoly4140 => ThermalConductivity::new(42.6),
            MaterialPreset::Stainless416 => ThermalConductivity::new(24.9),
        }
    }

    /// Density in kg/m³
    pub fn density(self) -> Density {
        match self {
            MaterialPreset::CarbonSteel | MaterialPreset::Chromoly4140 => Density::new(7850.0),
            MaterialPreset::Stainless416 => Density::new(7800.0),
        }
    }

    /// Specific heat in J/(kg·K)
    pub fn specific_heat(self) -> SpecificHeat {
        match self {
            MaterialPreset::CarbonSteel | MaterialPreset::Stainless416 => SpecificHeat::new(460.0),
            MaterialPreset::Chromoly4140 => SpecificHeat::new(473.0),
        }
    }

    /// Config/CLI name
    pub fn name(self) -> &'static str {
        match self {
            MaterialPreset::CarbonSteel => "carbon-steel",
            MaterialPreset::Chromoly4140 => "chromoly-4140",
            MaterialPreset::Stainless416 => "stainless-416",
        }
    }

    /// Default geometry/ambient/elapsed time with this preset's material properties.
    pub fn parameters(self) -> ThermalParameters {
        self.apply(ThermalParameters::default())
    }

    /// Replace the material properties of `params`, keeping geometry, ambient and time.
    pub fn apply(self, params: ThermalParameters) -> ThermalParameters {
        ThermalParameters {
            conductivity: self.conductivity(),
            density: self.density(),
            specific_heat: self.specific_heat(),
            ..params
        }
    }
}

impl fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for MaterialPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "carbon-steel" | "carbon" | "steel" => Ok(MaterialPreset::CarbonSteel),
            "chromoly-4140" | "4140" | "chromoly" => Ok(MaterialPreset::Chromoly4140),
            "stainless-416" | "416" | "stainless" => Ok(MaterialPreset::Stainless416),
            _ => Err(format!("unknown material preset '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        let params = ThermalParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(*params.ambient, 25.0);
        assert_eq!(*params.thickness, 0.0152);
    }

    #[test]
    fn test_zero_thickness_rejected() {
        let params = ThermalParameters {
            thickness: Meters::new(0.0),
            ..ThermalParameters::default()
        };
        match params.validate() {
            Err(ThermalModelError::InvalidParameter { name, .. }) => assert_eq!(name, "thickness"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_elapsed_time_is_valid_input() {
        let params = ThermalParameters {
            elapsed: Seconds::new(0.0),
            ..ThermalParameters::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        let cases = [
            ThermalParameters::new(25.0, 0.0152, -1.0, 46.0, 7850.0, 460.0),
            ThermalParameters::new(25.0, 0.0152, 30.0, -46.0, 7850.0, 460.0),
            ThermalParameters::new(25.0, 0.0152, 30.0, 46.0, 0.0, 460.0),
            ThermalParameters::new(25.0, 0.0152, 30.0, 46.0, 7850.0, -460.0),
            ThermalParameters::new(f64::NAN, 0.0152, 30.0, 46.0, 7850.0, 460.0),
            ThermalParameters::new(25.0, f64::INFINITY, 30.0, 46.0, 7850.0, 460.0),
        ];
        for params in cases {
            assert!(
                matches!(params.validate(), Err(ThermalModelError::InvalidParameter { .. })),
                "{params:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_labeled_values_order() {
        let labeled = ThermalParameters::default().labeled_values();
        assert_eq!(labeled[0], ("Ambient Temp", 25.0));
        assert_eq!(labeled[2], ("Elapsed Time", 30.0));
        assert_eq!(labeled[5], ("Specific Heat", 460.0));
    }

    #[test]
    fn test_preset_parse_and_apply() {
        let preset: MaterialPreset = "Stainless".parse().unwrap();
        assert_eq!(preset, MaterialPreset::Stainless416);
        let params = preset.parameters();
        assert_eq!(params.conductivity, ThermalConductivity::new(24.9));
        assert_eq!(params.thickness, ThermalParameters::default().thickness);
        assert!("bronze".parse::<MaterialPreset>().is_err());
        assert_eq!(MaterialPreset::CarbonSteel.parameters(), ThermalParameters::default());
    }
}
