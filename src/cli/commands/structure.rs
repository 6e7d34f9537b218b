use super::{CommandContext, Target, dispatch};
use crate::address::column_letter_to_index;
use crate::range::parse_range_ref;
use crate::tools::param_enums::{Dimension, MergeType, SortOrder};
use crate::tools::{
    build_delete_dimension_request, build_insert_dimension_request, build_merge_request,
    build_sort_request, build_unmerge_request, validate_delete_span, validate_insert_span,
};
use anyhow::Result;
use serde_json::Value;

pub async fn merge(
    context: &CommandContext<'_>,
    spreadsheet_id: String,
    range: String,
    merge_type: MergeType,
) -> Result<Value> {
    let range = parse_range_ref(&range)?;
    let mut session = context.session(spreadsheet_id)?;
    let (_, grid) = session.bind_range(&range).await?;
    let request = build_merge_request(grid, merge_type);
    dispatch(context, &session, Target::Range(grid), request).await
}

pub async fn unmerge(
    context: &CommandContext<'_>,
    spreadsheet_id: String,
    range: String,
) -> Result<Value> {
    let range = parse_range_ref(&range)?;
    let mut session = context.session(spreadsheet_id)?;
    let (_, grid) = session.bind_range(&range).await?;
    let request = build_unmerge_request(grid);
    dispatch(context, &session, Target::Range(grid), request).await
}

pub async fn sort(
    context: &CommandContext<'_>,
    spreadsheet_id: String,
    range: String,
    by: String,
    order: SortOrder,
    has_header: bool,
) -> Result<Value> {
    let range = parse_range_ref(&range)?;
    column_letter_to_index(by.trim())?;

    let mut session = context.session(spreadsheet_id)?;
    let (_, grid) = session.bind_range(&range).await?;
    let request = build_sort_request(grid, &by, order, has_header)?;
    dispatch(context, &session, Target::Range(grid), request).await
}

pub async fn insert(
    context: &CommandContext<'_>,
    spreadsheet_id: String,
    sheet: Option<String>,
    dimension: Dimension,
    at: u32,
    count: u32,
) -> Result<Value> {
    validate_insert_span(dimension, at, count)?;

    let mut session = context.session(spreadsheet_id)?;
    let sheet_id = session.resolve_sheet(sheet.as_deref()).await?.sheet_id;
    let request = build_insert_dimension_request(sheet_id, dimension, at, count)?;
    dispatch(context, &session, Target::Sheet(sheet_id), request).await
}

pub async fn delete(
    context: &CommandContext<'_>,
    spreadsheet_id: String,
    sheet: Option<String>,
    dimension: Dimension,
    from: u32,
    to: u32,
) -> Result<Value> {
    validate_delete_span(dimension, from, to)?;

    let mut session = context.session(spreadsheet_id)?;
    let sheet_id = session.resolve_sheet(sheet.as_deref()).await?.sheet_id;
    let request = build_delete_dimension_request(sheet_id, dimension, from, to)?;
    dispatch(context, &session, Target::Sheet(sheet_id), request).await
}
