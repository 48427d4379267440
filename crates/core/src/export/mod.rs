//! Spreadsheet export of report documents

pub mod xlsx;

pub use xlsx::{read_xlsx, write_xlsx, ExportError, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
