use super::{CommandContext, Target, dispatch};
use crate::range::parse_range_ref;
use crate::tools::FormatOptions;
use anyhow::Result;
use serde_json::Value;

pub async fn format(
    context: &CommandContext<'_>,
    spreadsheet_id: String,
    range: String,
    options: FormatOptions,
) -> Result<Value> {
    let range = parse_range_ref(&range)?;
    let patch = options.compile()?;

    let mut session = context.session(spreadsheet_id)?;
    let (_, grid) = session.bind_range(&range).await?;
    dispatch(context, &session, Target::Range(grid), patch.apply_to(grid)).await
}
