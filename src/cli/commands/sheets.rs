use super::CommandContext;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct SheetSummary {
    sheet_id: i64,
    title: String,
    index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    row_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column_count: Option<u32>,
    frozen_row_count: u32,
    frozen_column_count: u32,
}

#[derive(Debug, Serialize)]
struct ListSheetsResponse {
    spreadsheet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    sheets: Vec<SheetSummary>,
}

pub async fn list_sheets(context: &CommandContext<'_>, spreadsheet_id: String) -> Result<Value> {
    let mut session = context.session(spreadsheet_id)?;
    let spreadsheet_id = session.spreadsheet_id().to_string();
    let metadata = session.metadata().await?;

    let sheets = metadata
        .sheets
        .iter()
        .map(|sheet| {
            let props = &sheet.properties;
            let grid = props.grid_properties.as_ref();
            SheetSummary {
                sheet_id: props.sheet_id,
                title: props.title.clone(),
                index: props.index,
                row_count: grid.map(|g| g.row_count),
                column_count: grid.map(|g| g.column_count),
                frozen_row_count: grid.map_or(0, |g| g.frozen_row_count),
                frozen_column_count: grid.map_or(0, |g| g.frozen_column_count),
            }
        })
        .collect();

    Ok(serde_json::to_value(ListSheetsResponse {
        spreadsheet_id,
        title: metadata.title().map(str::to_string),
        sheets,
    })?)
}
