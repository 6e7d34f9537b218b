//! Row/column insertion and deletion, merges, and sorts.

use crate::address::column_letter_to_index;
use crate::errors::{SheetsError, SheetsResult};
use crate::model::{
    DeleteDimensionRequest, DimensionRange, GridRange, InsertDimensionRequest, MergeCellsRequest,
    Request, SortRangeRequest, SortSpec, UnmergeCellsRequest,
};
use crate::tools::param_enums::{Dimension, MergeType, SortOrder};

/// Checks an insertion and returns its exclusive end index.
pub fn validate_insert_span(dimension: Dimension, at: u32, count: u32) -> SheetsResult<u32> {
    if count == 0 {
        return Err(SheetsError::validation(format!(
            "insert count must be at least 1 (got 0 {dimension})"
        )));
    }
    at.checked_add(count).ok_or_else(|| {
        SheetsError::validation(format!("cannot insert {count} {dimension} at index {at}"))
    })
}

pub fn validate_delete_span(dimension: Dimension, from: u32, to: u32) -> SheetsResult<()> {
    if to <= from {
        return Err(SheetsError::validation(format!(
            "invalid {dimension} span: end index {to} must be greater than start index {from}"
        )));
    }
    Ok(())
}

/// Inserts `count` rows or columns so the first new one lands at `at`.
///
/// New rows/columns take their formatting from the one before, except when
/// inserting at index 0 where there is nothing before.
pub fn build_insert_dimension_request(
    sheet_id: i64,
    dimension: Dimension,
    at: u32,
    count: u32,
) -> SheetsResult<Request> {
    let end_index = validate_insert_span(dimension, at, count)?;
    let inherit_from_before = at > 0;
    tracing::debug!(
        sheet_id,
        %dimension,
        at,
        count,
        inherit_from_before,
        "compiled insertDimension"
    );
    Ok(Request::InsertDimension(InsertDimensionRequest {
        range: DimensionRange {
            sheet_id,
            dimension,
            start_index: at,
            end_index,
        },
        inherit_from_before,
    }))
}

/// Deletes the half-open span `[from, to)`.
pub fn build_delete_dimension_request(
    sheet_id: i64,
    dimension: Dimension,
    from: u32,
    to: u32,
) -> SheetsResult<Request> {
    validate_delete_span(dimension, from, to)?;
    tracing::debug!(sheet_id, %dimension, from, to, "compiled deleteDimension");
    Ok(Request::DeleteDimension(DeleteDimensionRequest {
        range: DimensionRange {
            sheet_id,
            dimension,
            start_index: from,
            end_index: to,
        },
    }))
}

pub fn build_merge_request(range: GridRange, merge_type: MergeType) -> Request {
    tracing::debug!(range = %range.to_a1(), %merge_type, "compiled mergeCells");
    Request::MergeCells(MergeCellsRequest { range, merge_type })
}

pub fn build_unmerge_request(range: GridRange) -> Request {
    tracing::debug!(range = %range.to_a1(), "compiled unmergeCells");
    Request::UnmergeCells(UnmergeCellsRequest { range })
}

/// Sorts `range` by one key column.
///
/// `sort_column` is an absolute sheet column (`C` means column C, wherever
/// the range starts). With `has_header` the first row of the resolved range
/// is left in place.
pub fn build_sort_request(
    mut range: GridRange,
    sort_column: &str,
    order: SortOrder,
    has_header: bool,
) -> SheetsResult<Request> {
    let dimension_index = column_letter_to_index(sort_column.trim())?;

    if has_header {
        range.start_row += 1;
        if range.start_row >= range.end_row {
            return Err(SheetsError::validation(
                "nothing to sort: the range only contains the header row",
            ));
        }
    }

    tracing::debug!(
        range = %range.to_a1(),
        dimension_index,
        %order,
        has_header,
        "compiled sortRange"
    );
    Ok(Request::SortRange(SortRangeRequest {
        range,
        sort_specs: vec![SortSpec {
            dimension_index,
            sort_order: order,
        }],
    }))
}
