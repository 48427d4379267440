//! Inverse Single-Node Wall Model
//!
//! Estimates the internal (bore-side) temperature of a barrel wall from the
//! measured outer surface temperature some time after firing.
//!
//! # Model Overview
//!
//! The wall is treated as one lumped thermal node. After an elapsed time `t`
//! the fraction of the ambient-vs-surface difference that has not yet relaxed
//! through a wall of thickness `L` is the decay factor
//!
//! ```text
//! f = exp(-α·t / L²),   α = k / (ρ·c)
//! ```
//!
//! and the surface reading is the blend `Tₑ = f·T_ambient + (1 − f)·Tᵢ`.
//! Inverting that relation gives the closed form evaluated here:
//!
//! ```text
//! Tᵢ = (Tₑ − f·T_ambient) / (1 − f)
//! ```
//!
//! `Tᵢ` is affine and increasing in `Tₑ`, and `Tₑ = T_ambient` always maps back
//! to `T_ambient`. At `t = 0` the factor is exactly 1 and the model has no
//! inverse.
//!
//! # Scientific References
//!
//! - Incropera, F.P. et al. (2007). "Fundamentals of Heat and Mass Transfer"
//!   6th Edition, Chapter 5 (lumped capacitance and the Fourier number `αt/L²`)

use serde::{Deserialize, Serialize};

use crate::core_types::units::Celsius;
use crate::core_types::ThermalParameters;
use crate::error::ThermalModelError;

/// One sampled point of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Measured outer surface temperature
    pub external: Celsius,
    /// Estimated internal wall temperature (unrounded)
    pub internal: Celsius,
}

/// External → internal temperature pairs, in the order the external samples were given.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemperatureCurve {
    points: Vec<CurvePoint>,
}

impl TemperatureCurve {
    /// All points in input order
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no external temperatures were sampled
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points
    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a TemperatureCurve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Fourier number `α·t / L²` of the wall.
///
/// Dimensionless; larger values mean the wall has relaxed further toward a
/// uniform temperature.
pub fn fourier_number(params: &ThermalParameters) -> f64 {
    (params.diffusivity() * params.elapsed) / params.thickness.squared()
}

/// Decay factor `f = exp(-α·t / L²)` for a validated, invertible parameter set.
///
/// # Errors
/// - `InvalidParameter` if any field is outside its domain
/// - `SingularModel` if the elapsed time is zero
/// - `NumericOverflow` if `f` is not finite or rounds to exactly 1
pub fn decay_factor(params: &ThermalParameters) -> Result<f64, ThermalModelError> {
    params.validate()?;
    if *params.elapsed == 0.0 {
        return Err(ThermalModelError::SingularModel);
    }

    let factor = (-fourier_number(params)).exp();
    // A tiny Fourier number leaves f == 1.0 in f64 even though t > 0
    if !factor.is_finite() || factor >= 1.0 {
        return Err(ThermalModelError::NumericOverflow {
            quantity: "decay factor",
            value: factor,
        });
    }
    Ok(factor)
}

/// Invert the single-node relation for one surface reading.
#[inline]
fn invert(external: f64, ambient: f64, factor: f64) -> f64 {
    (external - factor * ambient) / (1.0 - factor)
}

/// Estimate the internal wall temperature for every external temperature.
///
/// The output has the same length and order as `external_temps`; an empty
/// input gives an empty output. Values are unrounded.
///
/// # Errors
/// Everything [`decay_factor`] reports, plus `InvalidParameter` for a
/// non-finite external temperature and `NumericOverflow` when a result is not
/// finite. No partial output is returned.
pub fn compute_internal_temperatures(
    params: &ThermalParameters,
    external_temps: &[Celsius],
) -> Result<Vec<Celsius>, ThermalModelError> {
    let factor = decay_factor(params)?;
    let ambient = *params.ambient;

    tracing::debug!(
        diffusivity = params.diffusivity().value(),
        decay_factor = factor,
        samples = external_temps.len(),
        "inverting wall model"
    );

    external_temps
        .iter()
        .enumerate()
        .map(|(i, external)| {
            if !external.is_finite() {
                return Err(ThermalModelError::invalid_parameter(
                    format!("external_temps[{i}]"),
                    **external,
                    "must be finite",
                ));
            }
            let internal = invert(**external, ambient, factor);
            if internal.is_finite() {
                Ok(Celsius::new(internal))
            } else {
                Err(ThermalModelError::NumericOverflow {
                    quantity: "internal temperature",
                    value: internal,
                })
            }
        })
        .collect()
}

/// Like [`compute_internal_temperatures`], pairing each input with its estimate.
///
/// # Errors
/// See [`compute_internal_temperatures`].
pub fn compute_curve(
    params: &ThermalParameters,
    external_temps: &[Celsius],
) -> Result<TemperatureCurve, ThermalModelError> {
    let internal = compute_internal_temperatures(params, external_temps)?;
    let points = external_temps
        .iter()
        .zip(internal)
        .map(|(&external, internal)| CurvePoint { external, internal })
        .collect();
    Ok(TemperatureCurve { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{Meters, Seconds, ThermalConductivity};
    use approx::assert_relative_eq;

    fn temps(values: &[f64]) -> Vec<Celsius> {
        values.iter().copied().map(Celsius::new).collect()
    }

    #[test]
    fn test_default_decay_factor() {
        let params = ThermalParameters::default();
        // α = 46 / (7850·460) = 1.27389e-5, Fo = α·30 / 0.0152² = 1.65411
        assert_relative_eq!(fourier_number(&params), 1.654_110, epsilon = 1e-5);
        assert_relative_eq!(decay_factor(&params).unwrap(), 0.191_262, epsilon = 1e-5);
    }

    #[test]
    fn test_ambient_maps_to_ambient() {
        let params = ThermalParameters::default();
        let out = compute_internal_temperatures(&params, &temps(&[25.0])).unwrap();
        assert_relative_eq!(*out[0], 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_known_value_at_300() {
        let params = ThermalParameters::default();
        let f = decay_factor(&params).unwrap();
        let out = compute_internal_temperatures(&params, &temps(&[300.0])).unwrap();
        assert_relative_eq!(*out[0], (300.0 - f * 25.0) / (1.0 - f), epsilon = 1e-12);
        assert_relative_eq!(*out[0], 365.036, epsilon = 0.001);
    }

    #[test]
    fn test_empty_and_unsorted_inputs() {
        let params = ThermalParameters::default();
        assert!(compute_internal_temperatures(&params, &[]).unwrap().is_empty());

        let out = compute_internal_temperatures(&params, &temps(&[200.0, 25.0, 100.0])).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out[0] > out[2] && out[2] > out[1]);
    }

    #[test]
    fn test_zero_thickness_is_invalid_parameter() {
        let params = ThermalParameters {
            thickness: Meters::new(0.0),
            ..ThermalParameters::default()
        };
        assert!(matches!(
            compute_internal_temperatures(&params, &temps(&[100.0])),
            Err(ThermalModelError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_zero_elapsed_is_singular() {
        let params = ThermalParameters {
            elapsed: Seconds::new(0.0),
            ..ThermalParameters::default()
        };
        assert_eq!(
            compute_internal_temperatures(&params, &temps(&[100.0])),
            Err(ThermalModelError::SingularModel)
        );
    }

    #[test]
    fn test_negative_elapsed_is_invalid_not_singular() {
        let params = ThermalParameters {
            elapsed: Seconds::new(-5.0),
            ..ThermalParameters::default()
        };
        assert!(matches!(
            decay_factor(&params),
            Err(ThermalModelError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_factor_rounding_to_one_overflows() {
        let params = ThermalParameters {
            elapsed: Seconds::new(1e-30),
            conductivity: ThermalConductivity::new(1e-6),
            ..ThermalParameters::default()
        };
        assert!(matches!(
            compute_internal_temperatures(&params, &temps(&[100.0])),
            Err(ThermalModelError::NumericOverflow { quantity: "decay factor", .. })
        ));
    }

    #[test]
    fn test_huge_result_overflows() {
        // f just below 1 amplifies Tₑ by ~1/(1 - f)
        let params = ThermalParameters {
            elapsed: Seconds::new(1e-13),
            ..ThermalParameters::default()
        };
        let f = decay_factor(&params).unwrap();
        assert!(f < 1.0);
        assert!(matches!(
            compute_internal_temperatures(&params, &temps(&[1e300])),
            Err(ThermalModelError::NumericOverflow { quantity: "internal temperature", .. })
        ));
    }

    #[test]
    fn test_non_finite_external_rejected_without_partial_output() {
        let params = ThermalParameters::default();
        let err = compute_curve(&params, &temps(&[25.0, f64::NAN, 50.0])).unwrap_err();
        match err {
            ThermalModelError::InvalidParameter { name, .. } => assert_eq!(name, "external_temps[1]"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_curve_preserves_order() {
        let params = ThermalParameters::default();
        let input = temps(&[25.0, 30.0, 35.0]);
        let curve = compute_curve(&params, &input).unwrap();
        assert_eq!(curve.len(), 3);
        let externals: Vec<Celsius> = curve.iter().map(|p| p.external).collect();
        assert_eq!(externals, input);
    }
}
