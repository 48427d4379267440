//! Two-sheet export document (results + echoed inputs)
//!
//! Container-agnostic: sheets are named tables of text/number cells. The
//! `export` module turns them into `.xlsx` bytes and back.

use serde::{Deserialize, Serialize};

use super::table::TemperatureTable;
use crate::core_types::ThermalParameters;

/// Name of the results sheet
pub const RESULTS_SHEET: &str = "Temp Calculation";
/// Name of the echoed-inputs sheet
pub const INPUTS_SHEET: &str = "Input Parameters";
/// Header of the inputs sheet label column
pub const DESCRIPTION_COLUMN: &str = "Description";
/// Header of the inputs sheet value column
pub const VALUE_COLUMN: &str = "Value";

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Literal text
    Text(String),
    /// Numeric value
    Number(f64),
}

impl Cell {
    /// The numeric value, if this is a number cell
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }

    /// The text, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Number(_) => None,
        }
    }
}

/// A named table: header row plus data rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet (tab) name
    pub name: String,
    /// Column headers
    pub columns: Vec<String>,
    /// Data rows, each `columns.len()` wide
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Results sheet mirroring the table view.
    pub fn results(table: &TemperatureTable) -> Self {
        Self {
            name: RESULTS_SHEET.to_string(),
            columns: table.columns().to_vec(),
            rows: table
                .rows()
                .iter()
                .map(|r| vec![Cell::Number(r.external), Cell::Number(r.internal)])
                .collect(),
        }
    }

    /// Inputs sheet: one `(label, value)` row per parameter.
    pub fn inputs(params: &ThermalParameters) -> Self {
        Self {
            name: INPUTS_SHEET.to_string(),
            columns: vec![DESCRIPTION_COLUMN.to_string(), VALUE_COLUMN.to_string()],
            rows: params
                .labeled_values()
                .iter()
                .map(|(label, value)| vec![Cell::Text((*label).to_string()), Cell::Number(*value)])
                .collect(),
        }
    }
}

/// Ordered collection of sheets handed to the export surface.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Sheets in tab order
    pub sheets: Vec<Sheet>,
}

impl ExportDocument {
    /// Results sheet followed by inputs sheet.
    pub fn new(table: &TemperatureTable, params: &ThermalParameters) -> Self {
        Self {
            sheets: vec![Sheet::results(table), Sheet::inputs(params)],
        }
    }

    /// Look a sheet up by name
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}
