use super::{CommandContext, Target, dispatch};
use crate::address::column_letter_to_index;
use crate::errors::SheetsError;
use crate::tools::{
    build_column_width_request, build_freeze_request, build_row_height_request, freeze_field_mask,
};
use anyhow::Result;
use serde_json::Value;

pub async fn column_width(
    context: &CommandContext<'_>,
    spreadsheet_id: String,
    sheet: Option<String>,
    column: String,
    pixels: u32,
) -> Result<Value> {
    let column = column_letter_to_index(column.trim())?;
    ensure_pixels(pixels)?;

    let mut session = context.session(spreadsheet_id)?;
    let sheet_id = session.resolve_sheet(sheet.as_deref()).await?.sheet_id;
    let request = build_column_width_request(sheet_id, column, pixels)?;
    dispatch(context, &session, Target::Sheet(sheet_id), request).await
}

pub async fn row_height(
    context: &CommandContext<'_>,
    spreadsheet_id: String,
    sheet: Option<String>,
    row: u32,
    pixels: u32,
) -> Result<Value> {
    let row = row
        .checked_sub(1)
        .ok_or_else(|| SheetsError::validation("row numbers start at 1"))?;
    ensure_pixels(pixels)?;

    let mut session = context.session(spreadsheet_id)?;
    let sheet_id = session.resolve_sheet(sheet.as_deref()).await?.sheet_id;
    let request = build_row_height_request(sheet_id, row, pixels)?;
    dispatch(context, &session, Target::Sheet(sheet_id), request).await
}

pub async fn freeze(
    context: &CommandContext<'_>,
    spreadsheet_id: String,
    sheet: Option<String>,
    rows: Option<u32>,
    columns: Option<u32>,
) -> Result<Value> {
    freeze_field_mask(rows, columns).render_required("freeze rows or columns")?;

    let mut session = context.session(spreadsheet_id)?;
    let sheet_id = session.resolve_sheet(sheet.as_deref()).await?.sheet_id;
    let request = build_freeze_request(sheet_id, rows, columns)?;
    dispatch(context, &session, Target::Sheet(sheet_id), request).await
}

fn ensure_pixels(pixels: u32) -> Result<(), SheetsError> {
    if pixels == 0 {
        return Err(SheetsError::validation("pixel size must be at least 1"));
    }
    Ok(())
}
