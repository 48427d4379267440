//! `.xlsx` serialization of an [`ExportDocument`]
//!
//! Each sheet becomes a worksheet with a bold header row followed by the data
//! rows. Number cells are written as numbers so spreadsheet formulas work on
//! them directly.

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook};
use std::fmt;
use std::io::Cursor;

use crate::report::{Cell, ExportDocument, Sheet, INPUTS_SHEET, RESULTS_SHEET};

/// Download file name offered by front-ends
pub const EXPORT_FILE_NAME: &str = "Barrel_Temperature_Calculator.xlsx";

/// MIME type of the exported workbook
pub const EXPORT_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Errors raised while writing or reading workbooks
#[derive(Debug)]
pub enum ExportError {
    /// The workbook could not be built or serialized
    Write(String),
    /// The bytes are not a readable workbook
    Read(String),
    /// A required worksheet is absent
    MissingSheet(String),
    /// A worksheet has no header row
    MalformedSheet(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Write(msg) => write!(f, "Failed to write workbook: {msg}"),
            ExportError::Read(msg) => write!(f, "Failed to read workbook: {msg}"),
            ExportError::MissingSheet(name) => write!(f, "Workbook has no '{name}' sheet"),
            ExportError::MalformedSheet(name) => write!(f, "Sheet '{name}' has no header row"),
        }
    }
}

impl std::error::Error for ExportError {}

fn write_err(e: impl fmt::Display) -> ExportError {
    ExportError::Write(e.to_string())
}

/// Serialize the document into `.xlsx` bytes.
///
/// # Errors
/// Returns `ExportError::Write` for invalid sheet names, sheets exceeding the
/// format's row/column limits, or serialization failures.
pub fn write_xlsx(document: &ExportDocument) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for sheet in &document.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name).map_err(write_err)?;

        for (col, name) in sheet.columns.iter().enumerate() {
            let col = u16::try_from(col).map_err(write_err)?;
            worksheet
                .write_string_with_format(0, col, name, &header)
                .map_err(write_err)?;
        }

        for (row, cells) in sheet.rows.iter().enumerate() {
            let row = u32::try_from(row + 1).map_err(write_err)?;
            for (col, cell) in cells.iter().enumerate() {
                let col = u16::try_from(col).map_err(write_err)?;
                match cell {
                    Cell::Text(text) => worksheet.write_string(row, col, text),
                    Cell::Number(value) => worksheet.write_number(row, col, *value),
                }
                .map_err(write_err)?;
            }
        }
    }

    let bytes = workbook.save_to_buffer().map_err(write_err)?;
    tracing::debug!(sheets = document.sheets.len(), bytes = bytes.len(), "workbook written");
    Ok(bytes)
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Float(v) => Cell::Number(*v),
        Data::Int(v) => Cell::Number(*v as f64),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Empty => Cell::Text(String::new()),
        other => Cell::Text(other.to_string()),
    }
}

/// Parse `.xlsx` bytes back into a document, sheets in tab order.
///
/// # Errors
/// Returns `ExportError::Read` if the bytes are not a workbook,
/// `ExportError::MalformedSheet` for a worksheet without a header row and
/// `ExportError::MissingSheet` when the results or inputs sheet is absent.
pub fn read_xlsx(bytes: &[u8]) -> Result<ExportDocument, ExportError> {
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(Cursor::new(bytes)).map_err(|e: calamine::XlsxError| ExportError::Read(e.to_string()))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ExportError::Read(e.to_string()))?;
        let mut rows = range.rows();
        let columns = match rows.next() {
            Some(header) => header.iter().map(ToString::to_string).collect(),
            None => return Err(ExportError::MalformedSheet(name)),
        };
        let rows = rows.map(|row| row.iter().map(to_cell).collect()).collect();
        sheets.push(Sheet {
            name,
            columns,
            rows,
        });
    }

    let document = ExportDocument { sheets };
    for required in [RESULTS_SHEET, INPUTS_SHEET] {
        if document.sheet(required).is_none() {
            return Err(ExportError::MissingSheet(required.to_string()));
        }
    }
    Ok(document)
}
