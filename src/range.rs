use crate::address::parse_cell_ref;
use crate::errors::{SheetsError, SheetsResult};
use crate::model::{GridRange, SheetProperties, SpreadsheetMetadata};

/// The cell part of a range, before it is bound to a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub start_row: u32,
    pub end_row: u32,
    pub start_col: u32,
    pub end_col: u32,
}

impl CellSpan {
    pub fn on_sheet(self, sheet_id: i64) -> GridRange {
        GridRange {
            sheet_id,
            start_row: self.start_row,
            end_row: self.end_row,
            start_col: self.start_col,
            end_col: self.end_col,
        }
    }
}

/// A range string split into its optional sheet qualifier and cell part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRef {
    pub sheet_name: Option<String>,
    pub cells: CellSpan,
}

/// Parses `A1:D10` into a zero-based span with exclusive end bounds.
///
/// Both endpoints are mandatory; whole-row and whole-column selectors such as
/// `A:A` or `1:1` are rejected.
pub fn parse_cell_range(cell_range: &str) -> SheetsResult<CellSpan> {
    let parts: Vec<&str> = cell_range.split(':').collect();
    if parts.len() != 2 {
        return Err(SheetsError::format(format!(
            "invalid range '{cell_range}': expected two cell references like A1:D10"
        )));
    }

    let start = parse_cell_ref(parts[0])?;
    let end = parse_cell_ref(parts[1])?;

    let exclusive = |last: u32| {
        last.checked_add(1).ok_or_else(|| {
            SheetsError::format(format!("invalid range '{cell_range}': end is out of range"))
        })
    };

    Ok(CellSpan {
        start_row: start.row.min(end.row),
        end_row: exclusive(start.row.max(end.row))?,
        start_col: start.col.min(end.col),
        end_col: exclusive(start.col.max(end.col))?,
    })
}

/// Splits `Sheet1!A1:D10` on the first `!` and parses the cell part.
///
/// Quoted names (`'Q1 Data'!A1:B2`) are unquoted, with `''` read as `'`.
pub fn parse_range_ref(range: &str) -> SheetsResult<RangeRef> {
    let (sheet_name, cell_range) = match range.split_once('!') {
        Some((sheet, cells)) => (Some(unquote_sheet_name(sheet)?), cells),
        None => (None, range),
    };

    Ok(RangeRef {
        sheet_name,
        cells: parse_cell_range(cell_range.trim())?,
    })
}

fn unquote_sheet_name(raw: &str) -> SheetsResult<String> {
    if raw.is_empty() {
        return Err(SheetsError::format("sheet name before '!' is empty"));
    }
    match raw.strip_prefix('\'') {
        Some(rest) => {
            let inner = rest.strip_suffix('\'').ok_or_else(|| {
                SheetsError::format(format!("unterminated quoted sheet name {raw}"))
            })?;
            Ok(inner.replace("''", "'"))
        }
        None => Ok(raw.to_string()),
    }
}

/// Resolves a sheet by exact title, or the first sheet when no name is given.
pub fn resolve_sheet<'a>(
    metadata: &'a SpreadsheetMetadata,
    sheet_name: Option<&str>,
) -> SheetsResult<&'a SheetProperties> {
    match sheet_name {
        Some(name) => metadata
            .sheets
            .iter()
            .map(|sheet| &sheet.properties)
            .find(|props| props.title == name)
            .ok_or_else(|| SheetsError::not_found(format!("sheet '{name}' not found"))),
        None => metadata
            .sheets
            .first()
            .map(|sheet| &sheet.properties)
            .ok_or_else(|| SheetsError::not_found("spreadsheet has no sheets")),
    }
}

/// Resolves a full range string against already-fetched metadata.
///
/// An unqualified range lands on the first sheet in the order the backend
/// returned them.
pub fn resolve_range(
    metadata: &SpreadsheetMetadata,
    range: &str,
) -> SheetsResult<(i64, GridRange)> {
    let parsed = parse_range_ref(range)?;
    bind_range(metadata, &parsed)
}

pub fn bind_range(
    metadata: &SpreadsheetMetadata,
    range: &RangeRef,
) -> SheetsResult<(i64, GridRange)> {
    let sheet = resolve_sheet(metadata, range.sheet_name.as_deref())?;
    Ok((sheet.sheet_id, range.cells.on_sheet(sheet.sheet_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn cell_range_end_bounds_are_exclusive() {
        let span = parse_cell_range("A1:D10").unwrap();
        assert_eq!(
            span,
            CellSpan {
                start_row: 0,
                end_row: 10,
                start_col: 0,
                end_col: 4,
            }
        );
    }

    #[test]
    fn single_cell_range_spans_one_cell() {
        let span = parse_cell_range("C3:C3").unwrap();
        assert_eq!((span.start_row, span.end_row), (2, 3));
        assert_eq!((span.start_col, span.end_col), (2, 3));
    }

    #[test]
    fn reversed_endpoints_are_normalized() {
        assert_eq!(
            parse_cell_range("D10:A1").unwrap(),
            parse_cell_range("A1:D10").unwrap()
        );
    }

    #[test]
    fn unbounded_and_single_token_ranges_are_rejected() {
        for bad in ["A:A", "1:1", "A1", "A1:B2:C3", "", "A1:"] {
            assert_matches!(parse_cell_range(bad), Err(SheetsError::Format(_)), "{bad}");
        }
    }

    #[test]
    fn splits_on_first_bang_and_unquotes() {
        let parsed = parse_range_ref("'Q1 ''Plan'''!B2:C3").unwrap();
        assert_eq!(parsed.sheet_name.as_deref(), Some("Q1 'Plan'"));
        assert_eq!(parsed.cells.start_col, 1);

        let plain = parse_range_ref("Data!A1:A2").unwrap();
        assert_eq!(plain.sheet_name.as_deref(), Some("Data"));

        assert_matches!(parse_range_ref("!A1:B2"), Err(SheetsError::Format(_)));
        assert_matches!(parse_range_ref("'Open!A1:B2"), Err(SheetsError::Format(_)));
    }
}
