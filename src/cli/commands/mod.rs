pub mod cells;
pub mod find_replace;
pub mod format;
pub mod layout;
pub mod sheets;
pub mod structure;

use crate::client::{HttpSheetsClient, SheetsApi};
use crate::config::ClientConfig;
use crate::model::{GridRange, Request};
use crate::session::SheetSession;
use anyhow::{Result, anyhow};
use serde::Serialize;
use serde_json::Value;
use std::cell::OnceCell;

/// Everything a command needs beyond its own arguments.
///
/// The HTTP client is built on first use so that argument errors are reported
/// even when no access token is configured.
pub struct CommandContext<'a> {
    backend: Backend<'a>,
    dry_run: bool,
}

enum Backend<'a> {
    Http {
        config: ClientConfig,
        client: OnceCell<HttpSheetsClient>,
    },
    Provided(&'a dyn SheetsApi),
}

impl CommandContext<'static> {
    pub fn from_config(config: ClientConfig, dry_run: bool) -> Self {
        Self {
            backend: Backend::Http {
                config,
                client: OnceCell::new(),
            },
            dry_run,
        }
    }
}

impl<'a> CommandContext<'a> {
    pub fn with_client(client: &'a dyn SheetsApi, dry_run: bool) -> Self {
        Self {
            backend: Backend::Provided(client),
            dry_run,
        }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    fn client(&self) -> Result<&dyn SheetsApi> {
        match &self.backend {
            Backend::Provided(client) => Ok(*client),
            Backend::Http { config, client } => {
                if client.get().is_none() {
                    let built = HttpSheetsClient::new(config)?;
                    let _ = client.set(built);
                }
                client
                    .get()
                    .map(|client| client as &dyn SheetsApi)
                    .ok_or_else(|| anyhow!("HTTP client was not initialised"))
            }
        }
    }

    pub fn session(&self, spreadsheet_id: impl Into<String>) -> Result<SheetSession<'_, dyn SheetsApi>> {
        Ok(SheetSession::new(self.client()?, spreadsheet_id))
    }
}

/// Output of every mutating command.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub spreadsheet_id: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    pub dry_run: bool,
    pub request: Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<Value>>,
}

/// Where a compiled request lands, echoed back to the caller.
#[derive(Debug, Clone, Copy)]
pub enum Target {
    Spreadsheet,
    Sheet(i64),
    Range(GridRange),
}

impl Target {
    fn sheet_id(self) -> Option<i64> {
        match self {
            Self::Spreadsheet => None,
            Self::Sheet(id) => Some(id),
            Self::Range(range) => Some(range.sheet_id),
        }
    }

    fn a1(self) -> Option<String> {
        match self {
            Self::Range(range) => Some(range.to_a1()),
            Self::Spreadsheet | Self::Sheet(_) => None,
        }
    }
}

/// Sends `request` in a single batch update, or only reports it on dry runs.
pub async fn dispatch(
    context: &CommandContext<'_>,
    session: &SheetSession<'_, dyn SheetsApi>,
    target: Target,
    request: Request,
) -> Result<Value> {
    let replies = if context.dry_run() {
        tracing::info!(kind = request.kind(), "dry run: request not sent");
        None
    } else {
        let response = session.apply(std::slice::from_ref(&request)).await?;
        Some(response.replies)
    };

    Ok(serde_json::to_value(MutationResponse {
        spreadsheet_id: session.spreadsheet_id().to_string(),
        kind: request.kind(),
        sheet_id: target.sheet_id(),
        range: target.a1(),
        dry_run: context.dry_run(),
        request,
        replies,
    })?)
}
