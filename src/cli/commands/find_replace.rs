use super::{CommandContext, Target, dispatch};
use crate::errors::SheetsError;
use crate::tools::param_enums::FindReplaceScope;
use crate::tools::{FindReplaceOptions, build_find_replace_request};
use anyhow::Result;
use serde_json::Value;

pub async fn find_replace(
    context: &CommandContext<'_>,
    spreadsheet_id: String,
    sheet: Option<String>,
    options: FindReplaceOptions,
) -> Result<Value> {
    if options.find.is_empty() {
        return Err(SheetsError::validation("find text must not be empty").into());
    }

    let mut session = context.session(spreadsheet_id)?;
    let (scope, target) = match sheet.as_deref() {
        Some(name) => {
            let sheet_id = session.resolve_sheet(Some(name)).await?.sheet_id;
            (FindReplaceScope::Sheet(sheet_id), Target::Sheet(sheet_id))
        }
        None => (FindReplaceScope::AllSheets, Target::Spreadsheet),
    };
    let request = build_find_replace_request(&options, scope)?;
    dispatch(context, &session, target, request).await
}
