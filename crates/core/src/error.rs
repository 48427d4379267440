//! Error types for the barrel wall calculation pipeline

use std::fmt;

/// Failures raised by the thermal model at the point of computation.
#[derive(Debug, Clone, PartialEq)]
pub enum ThermalModelError {
    /// A supplied value lies outside its valid domain.
    InvalidParameter {
        /// Human-readable parameter name (e.g. `"thickness"`, `"external_temps[3]"`)
        name: String,
        /// The offending value
        value: f64,
        /// The violated constraint (e.g. `"must be > 0"`)
        constraint: &'static str,
    },
    /// Elapsed time is zero, so the decay factor is exactly 1 and the model cannot be inverted.
    SingularModel,
    /// The decay factor or a computed internal temperature is not a finite real number.
    NumericOverflow {
        /// Which quantity overflowed (e.g. `"decay factor"`, `"internal temperature"`)
        quantity: &'static str,
        /// The non-finite or degenerate value
        value: f64,
    },
}

impl ThermalModelError {
    /// Create an `InvalidParameter` error for `name`.
    pub fn invalid_parameter(name: impl Into<String>, value: f64, constraint: &'static str) -> Self {
        ThermalModelError::InvalidParameter {
            name: name.into(),
            value,
            constraint,
        }
    }
}

impl fmt::Display for ThermalModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThermalModelError::InvalidParameter {
                name,
                value,
                constraint,
            } => write!(f, "Invalid parameter {name}: {constraint}, got {value}"),
            ThermalModelError::SingularModel => write!(
                f,
                "Singular model: elapsed time must be > 0 for the wall model to be invertible"
            ),
            ThermalModelError::NumericOverflow { quantity, value } => {
                write!(f, "Numeric overflow: {quantity} is not finite ({value})")
            }
        }
    }
}

impl std::error::Error for ThermalModelError {}

/// Invalid external-temperature sweep definition.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    /// Start, end or step is NaN or infinite.
    NonFinite {
        /// Which bound (`"start"`, `"end"`, `"step"`)
        field: &'static str,
        /// The offending value
        value: f64,
    },
    /// Step must be strictly positive.
    NonPositiveStep(f64),
    /// End lies below start.
    Descending {
        /// First sample (°C)
        start: f64,
        /// Last sample (°C)
        end: f64,
    },
    /// The range and step would produce more samples than allowed.
    TooManySamples {
        /// Sample count implied by the range (may be infinite)
        requested: f64,
        /// Largest accepted sample count
        limit: usize,
    },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::NonFinite { field, value } => {
                write!(f, "Sweep {field} must be finite, got {value}")
            }
            SweepError::NonPositiveStep(step) => {
                write!(f, "Sweep step must be > 0, got {step}")
            }
            SweepError::Descending { start, end } => {
                write!(f, "Sweep end ({end}) must not be below start ({start})")
            }
            SweepError::TooManySamples { requested, limit } => {
                write!(f, "Sweep would produce {requested} samples, at most {limit} allowed")
            }
        }
    }
}

impl std::error::Error for SweepError {}

/// Anything that can stop `calculate` from producing a report.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// The sweep definition is invalid.
    Sweep(SweepError),
    /// The thermal model rejected the parameters or overflowed.
    Model(ThermalModelError),
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationError::Sweep(e) => write!(f, "{e}"),
            CalculationError::Model(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalculationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalculationError::Sweep(e) => Some(e),
            CalculationError::Model(e) => Some(e),
        }
    }
}

impl From<SweepError> for CalculationError {
    fn from(error: SweepError) -> Self {
        CalculationError::Sweep(error)
    }
}

impl From<ThermalModelError> for CalculationError {
    fn from(error: ThermalModelError) -> Self {
        CalculationError::Model(error)
    }
}
