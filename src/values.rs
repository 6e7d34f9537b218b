use crate::errors::{SheetsError, SheetsResult};
use serde_json::Value;

/// Row-major cell values; rows may differ in length.
pub type ValueMatrix = Vec<Vec<Value>>;

/// Parses CLI-supplied cell values.
///
/// `values_json` (an array of arrays) wins when both inputs are present and
/// keeps each scalar's JSON type. `values_text` is split into rows on `;` and
/// cells on `,`, trimmed, and always yields strings. With neither input the
/// result is an empty matrix; callers that need values check for that
/// themselves.
pub fn parse_values(values_text: &str, values_json: &str) -> SheetsResult<ValueMatrix> {
    if !values_json.trim().is_empty() {
        return parse_values_json(values_json);
    }

    if values_text.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(values_text
        .split(';')
        .map(|row| {
            row.split(',')
                .map(|cell| Value::String(cell.trim().to_string()))
                .collect()
        })
        .collect())
}

fn parse_values_json(raw: &str) -> SheetsResult<ValueMatrix> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|err| SheetsError::format(format!("invalid values JSON: {err}")))?;

    let Value::Array(rows) = parsed else {
        return Err(SheetsError::format(
            "invalid values JSON: expected an array of arrays",
        ));
    };

    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| match row {
            Value::Array(cells) => {
                if let Some(nested) = cells.iter().find(|c| c.is_array() || c.is_object()) {
                    Err(SheetsError::format(format!(
                        "invalid values JSON: row {idx} contains a non-scalar cell {nested}"
                    )))
                } else {
                    Ok(cells)
                }
            }
            other => Err(SheetsError::format(format!(
                "invalid values JSON: row {idx} is {other}, expected an array"
            ))),
        })
        .collect()
}

/// Returns the matrix or a validation error when nothing was supplied.
pub fn require_values(matrix: ValueMatrix) -> SheetsResult<ValueMatrix> {
    if matrix.is_empty() {
        return Err(SheetsError::validation(
            "values are required: pass --values or --values-json",
        ));
    }
    Ok(matrix)
}
