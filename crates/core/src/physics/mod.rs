//! Physics models for barrel wall temperature estimation

pub mod lumped_inverse;

pub use lumped_inverse::{
    compute_curve, compute_internal_temperatures, decay_factor, fourier_number, CurvePoint,
    TemperatureCurve,
};
