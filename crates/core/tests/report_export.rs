//! Report assembly and spreadsheet export round trips.
#![cfg(feature = "xlsx")]

use approx::assert_abs_diff_eq;
use barrel_temp_core::export::{read_xlsx, write_xlsx, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use barrel_temp_core::report::{Cell, INPUTS_SHEET, RESULTS_SHEET};
use barrel_temp_core::{calculate, MaterialPreset, TemperatureSweep, ThermalParameters};

#[test]
fn test_export_round_trip_preserves_table_and_inputs() {
    let params = MaterialPreset::Chromoly4140.apply(ThermalParameters::new(
        18.5, 0.0127, 45.0, 46.0, 7850.0, 460.0,
    ));
    let report = calculate(&params, &TemperatureSweep::reference()).unwrap();

    let bytes = write_xlsx(report.document()).unwrap();
    let parsed = read_xlsx(&bytes).unwrap();

    let results = parsed.sheet(RESULTS_SHEET).unwrap();
    assert_eq!(results.columns, report.table().columns().to_vec());
    assert_eq!(results.rows.len(), report.table().len());
    for (row, expected) in results.rows.iter().zip(report.table().rows()) {
        assert_eq!(row[0].as_number(), Some(expected.external));
        assert_abs_diff_eq!(row[1].as_number().unwrap(), expected.internal, epsilon = 0.005);
    }

    let inputs = parsed.sheet(INPUTS_SHEET).unwrap();
    let echoed: Vec<(String, f64)> = inputs
        .rows
        .iter()
        .map(|row| {
            (
                row[0].as_text().unwrap().to_string(),
                row[1].as_number().unwrap(),
            )
        })
        .collect();
    let expected: Vec<(String, f64)> = params
        .labeled_values()
        .iter()
        .map(|(label, value)| ((*label).to_string(), *value))
        .collect();
    assert_eq!(echoed, expected);
}

#[test]
fn test_single_sample_sweep_exports_both_sheets() {
    let report = calculate(&ThermalParameters::default(), &TemperatureSweep::new(50.0, 50.0, 1.0)).unwrap();
    let parsed = read_xlsx(&write_xlsx(report.document()).unwrap()).unwrap();

    let results = parsed.sheet(RESULTS_SHEET).unwrap();
    assert_eq!(results.rows.len(), 1);
    assert_eq!(results.rows[0][0], Cell::Number(50.0));
    assert_eq!(parsed.sheet(INPUTS_SHEET).unwrap().rows.len(), 6);
}

#[test]
fn test_export_surface_constants() {
    assert_eq!(EXPORT_FILE_NAME, "Barrel_Temperature_Calculator.xlsx");
    assert!(EXPORT_MIME_TYPE.ends_with("spreadsheetml.sheet"));
}
