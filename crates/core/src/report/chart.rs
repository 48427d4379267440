//! Chart-ready series (x = external, y = internal)

use serde::{Deserialize, Serialize};

use super::table::TemperatureTable;

/// A single line series for a temperature profile chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Axis label for x (external temperature)
    pub x_label: String,
    /// Series/axis label for y (internal temperature)
    pub y_label: String,
    /// `(x, y)` points in curve order
    pub points: Vec<(f64, f64)>,
}

impl ChartSeries {
    /// Plot the table's rounded values, indexed by the external column.
    pub fn from_table(table: &TemperatureTable) -> Self {
        let [x_label, y_label] = table.columns().clone();
        Self {
            x_label,
            y_label,
            points: table.rows().iter().map(|r| (r.external, r.internal)).collect(),
        }
    }

    /// `(min, max)` of the x values, `None` for an empty series
    pub fn x_range(&self) -> Option<(f64, f64)> {
        range(self.points.iter().map(|p| p.0))
    }

    /// `(min, max)` of the y values, `None` for an empty series
    pub fn y_range(&self) -> Option<(f64, f64)> {
        range(self.points.iter().map(|p| p.1))
    }
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
