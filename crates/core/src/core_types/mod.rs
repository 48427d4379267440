//! Core types and utilities

pub mod params;
pub mod sweep;
pub mod units;

pub use params::{MaterialPreset, ThermalParameters};
pub use sweep::TemperatureSweep;
pub use units::*;
