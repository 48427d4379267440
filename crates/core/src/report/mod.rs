//! Report assembly: table, chart series and export document
//!
//! The report is a pure view over a [`TemperatureCurve`] and the parameters
//! that produced it. Rounding to two decimals happens here, once, in the
//! table; the chart and the results sheet are both derived from the rounded
//! table.

pub mod chart;
pub mod document;
pub mod table;

use serde::{Deserialize, Serialize};

pub use chart::ChartSeries;
pub use document::{Cell, ExportDocument, Sheet, INPUTS_SHEET, RESULTS_SHEET};
pub use table::{TableRow, TemperatureTable};

use crate::core_types::ThermalParameters;
use crate::physics::TemperatureCurve;

/// Header of the external temperature column
pub const EXTERNAL_COLUMN: &str = "External Temperature (°C)";
/// Header of the internal temperature column
pub const INTERNAL_COLUMN: &str = "Internal Temperature (°C)";

/// Round to 0.01, ties to even.
///
/// Magnitudes where `value * 100` overflows carry no hundredths and are
/// returned unchanged.
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round_ties_even() / 100.0
    } else {
        value
    }
}

/// Everything a display or export surface needs for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    parameters: ThermalParameters,
    table: TemperatureTable,
    chart: ChartSeries,
    document: ExportDocument,
}

impl Report {
    /// Parameters the report was built from
    pub fn parameters(&self) -> &ThermalParameters {
        &self.parameters
    }

    /// Rounded tabular view
    pub fn table(&self) -> &TemperatureTable {
        &self.table
    }

    /// Line series for charting
    pub fn chart(&self) -> &ChartSeries {
        &self.chart
    }

    /// Two-sheet document for export
    pub fn document(&self) -> &ExportDocument {
        &self.document
    }
}

/// Package a computed curve for display and export. Cannot fail.
pub fn build_report(params: &ThermalParameters, curve: &TemperatureCurve) -> Report {
    let table = TemperatureTable::from_curve(curve);
    let chart = ChartSeries::from_table(&table);
    let document = ExportDocument::new(&table, params);
    tracing::debug!(rows = table.len(), sheets = document.sheets.len(), "report assembled");
    Report {
        parameters: *params,
        table,
        chart,
        document,
    }
}
