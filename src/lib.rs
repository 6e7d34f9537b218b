//! Address resolution and structural-mutation compilation for Google Sheets.
//!
//! Human-facing coordinates (`Sheet1!A1:D10`, column letters, hex colors) are
//! resolved into zero-based grid coordinates, and editing verbs are compiled
//! into `spreadsheets.batchUpdate` requests.

pub mod address;
pub mod cli;
pub mod client;
pub mod color;
pub mod config;
pub mod errors;
pub mod field_mask;
pub mod model;
pub mod range;
pub mod session;
pub mod tools;
pub mod values;

pub use address::{CellRef, column_letter_to_index, index_to_column_letter, parse_cell_ref};
pub use client::{HttpSheetsClient, SheetsApi};
pub use color::parse_hex_color;
pub use config::{ClientConfig, ConfigArgs, ConfigError};
pub use errors::{SheetsError, SheetsResult};
pub use field_mask::FieldMask;
pub use model::{GridRange, Request, SpreadsheetMetadata};
pub use range::{CellSpan, RangeRef, parse_cell_range, parse_range_ref, resolve_range as parse_range};
pub use session::SheetSession;
pub use values::{ValueMatrix, parse_values};
