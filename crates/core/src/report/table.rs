//! Tabular view of a temperature curve

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{round_to_hundredths, EXTERNAL_COLUMN, INTERNAL_COLUMN};
use crate::physics::TemperatureCurve;

/// One displayed row; `internal` is already rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// External temperature in °C, as sampled
    pub external: f64,
    /// Internal temperature in °C, rounded to 0.01
    pub internal: f64,
}

/// Two-column table: external temperature against estimated internal temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureTable {
    columns: [String; 2],
    rows: Vec<TableRow>,
}

impl TemperatureTable {
    /// Build the table from a curve, rounding the internal column.
    pub fn from_curve(curve: &TemperatureCurve) -> Self {
        let rows = curve
            .iter()
            .map(|point| TableRow {
                external: *point.external,
                internal: round_to_hundredths(*point.internal),
            })
            .collect();
        Self {
            columns: [EXTERNAL_COLUMN.to_string(), INTERNAL_COLUMN.to_string()],
            rows,
        }
    }

    /// Column headers, external first
    pub fn columns(&self) -> &[String; 2] {
        &self.columns
    }

    /// Rows in curve order
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TemperatureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [left, right] = &self.columns;
        let lw = left.chars().count();
        let rw = right.chars().count();
        writeln!(f, "{left}  {right}")?;
        writeln!(f, "{}  {}", "-".repeat(lw), "-".repeat(rw))?;
        for row in &self.rows {
            writeln!(f, "{:>lw$}  {:>rw$.2}", row.external, row.internal)?;
        }
        Ok(())
    }
}
