use crate::errors::{SheetsError, SheetsResult};
use crate::model::{
    CellData, ExtendedValue, GridCoordinate, GridRange, Request, RowData, UpdateCellsRequest,
};
use crate::values::{ValueMatrix, require_values};
use serde_json::Value;

const USER_ENTERED_VALUE: &str = "userEnteredValue";

/// Writes `values` starting at the top-left cell of `range`.
///
/// The matrix must fit inside `range`; cells it does not cover are left
/// alone. Strings beginning with `=` are written as formulas and `null`
/// clears the cell.
pub fn build_update_cells_request(range: GridRange, values: ValueMatrix) -> SheetsResult<Request> {
    let values = require_values(values)?;

    let height = values.len();
    let width = values.iter().map(Vec::len).max().unwrap_or(0);
    if height > range.row_count() as usize || width > range.col_count() as usize {
        return Err(SheetsError::validation(format!(
            "values span {height}x{width} but range {} is {}x{}",
            range.to_a1(),
            range.row_count(),
            range.col_count()
        )));
    }

    let rows = values
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(cell_from_value)
                .collect::<SheetsResult<Vec<_>>>()
                .map(|values| RowData { values })
        })
        .collect::<SheetsResult<Vec<_>>>()?;

    tracing::debug!(anchor = %range.top_left(), height, width, "compiled updateCells");
    Ok(Request::UpdateCells(UpdateCellsRequest {
        start: Some(GridCoordinate {
            sheet_id: range.sheet_id,
            row_index: range.start_row,
            column_index: range.start_col,
        }),
        range: None,
        rows: Some(rows),
        fields: USER_ENTERED_VALUE.to_string(),
    }))
}

/// Clears entered values (not formatting) across `range`.
pub fn build_clear_request(range: GridRange) -> Request {
    tracing::debug!(range = %range.to_a1(), "compiled clear");
    Request::UpdateCells(UpdateCellsRequest {
        start: None,
        range: Some(range),
        rows: None,
        fields: USER_ENTERED_VALUE.to_string(),
    })
}

fn cell_from_value(value: Value) -> SheetsResult<CellData> {
    let entered = match value {
        Value::Null => None,
        Value::Bool(flag) => Some(ExtendedValue::BoolValue(flag)),
        Value::Number(number) => {
            let number = number
                .as_f64()
                .ok_or_else(|| SheetsError::format(format!("number {number} is not representable")))?;
            Some(ExtendedValue::NumberValue(number))
        }
        Value::String(text) if text.starts_with('=') => Some(ExtendedValue::FormulaValue(text)),
        Value::String(text) => Some(ExtendedValue::StringValue(text)),
        Value::Array(_) | Value::Object(_) => {
            return Err(SheetsError::format(format!(
                "cell values must be scalars, got {value}"
            )));
        }
    };
    Ok(CellData {
        user_entered_value: entered,
        user_entered_format: None,
    })
}
