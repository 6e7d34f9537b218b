use crate::errors::{SheetsError, SheetsResult};
use crate::model::{FindReplaceRequest, Request};
use crate::tools::param_enums::FindReplaceScope;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindReplaceOptions {
    pub find: String,
    pub replacement: String,
    pub match_case: bool,
    pub match_entire_cell: bool,
    pub search_by_regex: bool,
    pub include_formulas: bool,
}

/// Compiles a `findReplace` over the whole spreadsheet or one sheet.
pub fn build_find_replace_request(
    options: &FindReplaceOptions,
    scope: FindReplaceScope,
) -> SheetsResult<Request> {
    if options.find.is_empty() {
        return Err(SheetsError::validation("find text must not be empty"));
    }

    let (sheet_id, all_sheets) = match scope {
        FindReplaceScope::AllSheets => (None, Some(true)),
        FindReplaceScope::Sheet(id) => (Some(id), None),
    };

    tracing::debug!(?scope, regex = options.search_by_regex, "compiled findReplace");
    Ok(Request::FindReplace(FindReplaceRequest {
        find: options.find.clone(),
        replacement: options.replacement.clone(),
        match_case: options.match_case,
        match_entire_cell: options.match_entire_cell,
        search_by_regex: options.search_by_regex,
        include_formulas: options.include_formulas,
        sheet_id,
        all_sheets,
    }))
}
