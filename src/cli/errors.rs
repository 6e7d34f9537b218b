use crate::config::ConfigError;
use crate::errors::SheetsError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub try_this: Option<String>,
}

pub fn envelope_for(error: &anyhow::Error) -> ErrorEnvelope {
    let message = error.to_string();

    if let Some(sheets_error) = error.downcast_ref::<SheetsError>() {
        return ErrorEnvelope {
            code: sheets_error.code().to_string(),
            try_this: hint_for(sheets_error),
            message,
        };
    }

    if error.downcast_ref::<ConfigError>().is_some() {
        return ErrorEnvelope {
            code: "CONFIG_ERROR".to_string(),
            message,
            try_this: Some(
                "pass --access-token or set GSHEET_OPS_ACCESS_TOKEN, or point --config at a YAML/JSON file"
                    .to_string(),
            ),
        };
    }

    ErrorEnvelope {
        code: "COMMAND_FAILED".to_string(),
        message,
        try_this: None,
    }
}

fn hint_for(error: &SheetsError) -> Option<String> {
    let hint = match error {
        SheetsError::Format(_) => {
            "use A1 ranges with both endpoints, e.g. Sheet1!A1:D10 or 'My Sheet'!B2:C3"
        }
        SheetsError::NotFound(_) => "run `gsheet-ops list-sheets <id>` to inspect valid names",
        SheetsError::Validation(_) => return None,
        SheetsError::Transport { .. } => {
            "check the spreadsheet ID, token scopes, and --api-base; rerun with RUST_LOG=debug"
        }
    };
    Some(hint.to_string())
}
