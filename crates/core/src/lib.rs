//! Barrel Temperature Calculator Core Library
//!
//! Estimates the internal temperature of a barrel wall from its measured
//! outer surface temperature some time after firing, using an inverse
//! single-node (lumped) transient-conduction model.
//!
//! ## Pipeline
//!
//! - [`ThermalParameters`] + [`TemperatureSweep`] describe one request
//! - [`physics::compute_internal_temperatures`] inverts the wall model
//! - [`report::build_report`] packages the curve as a table, a chart series
//!   and a two-sheet export document
//! - [`export::write_xlsx`] serializes that document (feature `xlsx`)
//!
//! ```
//! use barrel_temp_core::{calculate, TemperatureSweep, ThermalParameters};
//!
//! let report = calculate(&ThermalParameters::default(), &TemperatureSweep::reference()).unwrap();
//! assert_eq!(report.table().len(), 56);
//! assert_eq!(report.table().rows()[0].internal, 25.0);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Model, report assembly and the pipeline tying them together
pub mod calculator;
pub mod config;
pub mod physics;
pub mod report;

#[cfg(feature = "xlsx")]
pub mod export;

// Re-export core types
pub use core_types::{Celsius, MaterialPreset, TemperatureSweep, ThermalParameters};
pub use error::{CalculationError, SweepError, ThermalModelError};

// Re-export pipeline types
pub use calculator::{calculate, Calculator};
pub use config::{CalculatorConfig, ConfigError};
pub use physics::{compute_curve, compute_internal_temperatures, CurvePoint, TemperatureCurve};
pub use report::{build_report, ChartSeries, ExportDocument, Report, TemperatureTable};
