//! Semantic unit types for type-safe physical quantity handling
//!
//! Newtype wrappers for the quantities that feed the barrel wall model, so a
//! wall thickness can never be passed where an elapsed time is expected.
//!
//! # Design Philosophy
//! - Every quantity is f64: the decay factor `exp(-αt/L²)` sits close to 1 for
//!   short elapsed times and f32 loses the `1 - f` denominator far too early
//! - Constructors never panic; domain checks live in
//!   [`ThermalParameters::validate`](crate::ThermalParameters::validate) so bad
//!   user input surfaces as an error instead of an abort
//! - Total ordering via `Ord` (NaN handled as greater than all values)
//! - Serde support, serialized as the bare number
//!
//! # Usage
//! ```
//! use barrel_temp_core::core_types::units::{Celsius, Density, SpecificHeat, ThermalConductivity};
//!
//! let k = ThermalConductivity::new(46.0);
//! let alpha = k / (Density::new(7850.0) * SpecificHeat::new(460.0));
//! assert!((*alpha - 1.2739e-5).abs() < 1e-8);
//!
//! let t1 = Celsius::new(100.0);
//! let t2 = Celsius::new(200.0);
//! assert_eq!(t1.min(t2), Celsius::new(100.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Sub};

// ============================================================================
// HELPER FUNCTIONS FOR TOTAL ORDERING
// ============================================================================

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Celsius {
    /// Absolute zero in Celsius
    pub const ABSOLUTE_ZERO: Celsius = Celsius(-273.15);

    /// Create a new Celsius temperature.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Celsius(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Celsius {
    fn from(v: f64) -> Self {
        Celsius(v)
    }
}

impl From<Celsius> for f64 {
    fn from(c: Celsius) -> f64 {
        c.0
    }
}

impl Add<f64> for Celsius {
    type Output = Celsius;
    fn add(self, rhs: f64) -> Celsius {
        Celsius(self.0 + rhs)
    }
}

// Celsius - Celsius = raw difference in kelvin-sized degrees
impl Sub for Celsius {
    type Output = f64;
    fn sub(self, rhs: Celsius) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°C", self.0)
    }
}

// ============================================================================
// GEOMETRY, TIME AND MATERIAL PROPERTIES
// ============================================================================

/// Declares a strictly-ordered f64 newtype with the shared conversions.
macro_rules! scalar_unit {
    ($(#[$meta:meta])* $name:ident, $suffix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                f64_total_cmp(self.0, other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "` value.")]
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            /// Get the raw f64 value
            #[inline]
            #[must_use]
            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("{}", $suffix), self.0)
            }
        }
    };
}

scalar_unit!(
    /// Length in meters (wall thickness)
    Meters,
    " m"
);

scalar_unit!(
    /// Duration in seconds (elapsed time since the thermal event)
    Seconds,
    " s"
);

scalar_unit!(
    /// Thermal conductivity in W/(m·K)
    ThermalConductivity,
    " W/(m·K)"
);

scalar_unit!(
    /// Density in kg/m³
    Density,
    " kg/m³"
);

scalar_unit!(
    /// Specific heat capacity in J/(kg·K)
    SpecificHeat,
    " J/(kg·K)"
);

scalar_unit!(
    /// Thermal diffusivity in m²/s, α = k / (ρ·c)
    ThermalDiffusivity,
    " m²/s"
);

scalar_unit!(
    /// Volumetric heat capacity in J/(m³·K), ρ·c
    VolumetricHeatCapacity,
    " J/(m³·K)"
);

impl Meters {
    /// Square of the length in m², the characteristic area of the decay exponent
    #[inline]
    #[must_use]
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}

// Density * SpecificHeat = VolumetricHeatCapacity
impl Mul<SpecificHeat> for Density {
    type Output = VolumetricHeatCapacity;
    fn mul(self, rhs: SpecificHeat) -> VolumetricHeatCapacity {
        VolumetricHeatCapacity(self.0 * rhs.0)
    }
}

// ThermalConductivity / VolumetricHeatCapacity = ThermalDiffusivity
impl Div<VolumetricHeatCapacity> for ThermalConductivity {
    type Output = ThermalDiffusivity;
    fn div(self, rhs: VolumetricHeatCapacity) -> ThermalDiffusivity {
        ThermalDiffusivity(self.0 / rhs.0)
    }
}

// ThermalDiffusivity * Seconds = diffusion length squared (m²)
impl Mul<Seconds> for ThermalDiffusivity {
    type Output = f64;
    fn mul(self, rhs: Seconds) -> f64 {
        self.0 * rhs.0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffusivity_from_material_properties() {
        let alpha = ThermalConductivity::new(46.0) / (Density::new(7850.0) * SpecificHeat::new(460.0));
        assert!((alpha.value() - 46.0 / 3_611_000.0).abs() < 1e-15);
    }

    #[test]
    fn test_total_ordering_handles_nan() {
        let nan = Seconds::new(f64::NAN);
        let one = Seconds::new(1.0);
        assert_eq!(one.cmp(&nan), Ordering::Less);
        assert!(one.max(nan).value().is_nan());
    }

    #[test]
    fn test_celsius_display_two_decimals() {
        assert_eq!(Celsius::new(25.0).to_string(), "25.00°C");
        assert_eq!(Meters::new(0.0152).to_string(), "0.0152 m");
    }

    #[test]
    fn test_celsius_difference() {
        let diff = Celsius::new(300.0) - Celsius::new(25.0);
        assert_eq!(diff, 275.0);
    }

    #[test]
    fn test_serde_as_bare_number() {
        let json = serde_json::to_string(&Density::new(7850.0)).unwrap();
        assert_eq!(json, "7850.0");
        let back: Density = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Density::new(7850.0));
    }
}
