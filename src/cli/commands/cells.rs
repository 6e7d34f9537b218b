use super::{CommandContext, Target, dispatch};
use crate::range::parse_range_ref;
use crate::tools::{build_clear_request, build_update_cells_request};
use crate::values::{parse_values, require_values};
use anyhow::Result;
use serde_json::Value;

pub async fn update_cells(
    context: &CommandContext<'_>,
    spreadsheet_id: String,
    range: String,
    values: Option<String>,
    values_json: Option<String>,
) -> Result<Value> {
    let range = parse_range_ref(&range)?;
    let matrix = parse_values(
        values.as_deref().unwrap_or_default(),
        values_json.as_deref().unwrap_or_default(),
    )?;
    let matrix = require_values(matrix)?;

    let mut session = context.session(spreadsheet_id)?;
    let (_, grid) = session.bind_range(&range).await?;
    let request = build_update_cells_request(grid, matrix)?;
    dispatch(context, &session, Target::Range(grid), request).await
}

pub async fn clear(context: &CommandContext<'_>, spreadsheet_id: String, range: String) -> Result<Value> {
    let range = parse_range_ref(&range)?;
    let mut session = context.session(spreadsheet_id)?;
    let (_, grid) = session.bind_range(&range).await?;
    dispatch(context, &session, Target::Range(grid), build_clear_request(grid)).await
}
