use crate::client::SheetsApi;
use crate::errors::SheetsResult;
use crate::model::{BatchUpdateResponse, GridRange, Request, SheetProperties, SpreadsheetMetadata};
use crate::range::{RangeRef, bind_range, parse_range_ref, resolve_sheet};

/// One command's view of one spreadsheet.
///
/// Metadata is fetched lazily and at most once, then reused for every sheet
/// lookup the command performs. A session never outlives the invocation that
/// created it.
pub struct SheetSession<'a, C: SheetsApi + ?Sized + 'a> {
    client: &'a C,
    spreadsheet_id: String,
    metadata: Option<SpreadsheetMetadata>,
}

impl<'a, C: SheetsApi + ?Sized + 'a> SheetSession<'a, C> {
    pub fn new(client: &'a C, spreadsheet_id: impl Into<String>) -> Self {
        Self {
            client,
            spreadsheet_id: spreadsheet_id.into(),
            metadata: None,
        }
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub async fn metadata(&mut self) -> SheetsResult<&SpreadsheetMetadata> {
        if self.metadata.is_none() {
            let fetched = self
                .client
                .get_spreadsheet_metadata(&self.spreadsheet_id)
                .await?;
            tracing::debug!(
                spreadsheet_id = %self.spreadsheet_id,
                sheets = fetched.sheets.len(),
                "loaded spreadsheet metadata"
            );
            self.metadata = Some(fetched);
        }
        Ok(&*self.metadata.get_or_insert_with(SpreadsheetMetadata::default))
    }

    /// Resolves `Sheet!A1:B2` (or an unqualified range on the first sheet).
    pub async fn resolve_range(&mut self, range: &str) -> SheetsResult<(i64, GridRange)> {
        let parsed = parse_range_ref(range)?;
        self.bind_range(&parsed).await
    }

    /// Binds an already-parsed range, so malformed input fails before any
    /// network round trip.
    pub async fn bind_range(&mut self, range: &RangeRef) -> SheetsResult<(i64, GridRange)> {
        let metadata = self.metadata().await?;
        let (sheet_id, grid) = bind_range(metadata, range)?;
        tracing::debug!(sheet_id, range = %grid.to_a1(), "resolved range");
        Ok((sheet_id, grid))
    }

    pub async fn resolve_sheet(&mut self, sheet_name: Option<&str>) -> SheetsResult<SheetProperties> {
        let metadata = self.metadata().await?;
        resolve_sheet(metadata, sheet_name).cloned()
    }

    pub async fn apply(&self, requests: &[Request]) -> SheetsResult<BatchUpdateResponse> {
        for request in requests {
            tracing::info!(
                spreadsheet_id = %self.spreadsheet_id,
                kind = request.kind(),
                "dispatching structural request"
            );
        }
        self.client
            .batch_update(&self.spreadsheet_id, requests)
            .await
    }
}
