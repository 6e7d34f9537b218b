#![allow(dead_code)]

use async_trait::async_trait;
use gsheet_ops::SheetsError;
use gsheet_ops::client::SheetsApi;
use gsheet_ops::model::{
    BatchUpdateResponse, GridProperties, Request, Sheet, SheetProperties, SpreadsheetMetadata,
    SpreadsheetProperties,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory spreadsheet backend that records every call.
pub struct FakeSheets {
    metadata: SpreadsheetMetadata,
    fail_batch_update: Option<String>,
    metadata_calls: AtomicUsize,
    batches: Mutex<Vec<Vec<Request>>>,
}

impl FakeSheets {
    pub fn with_sheets(sheets: &[(i64, &str)]) -> Self {
        let sheets = sheets
            .iter()
            .enumerate()
            .map(|(index, (sheet_id, title))| Sheet {
                properties: SheetProperties {
                    sheet_id: *sheet_id,
                    title: title.to_string(),
                    index: index as u32,
                    grid_properties: Some(GridProperties {
                        row_count: 1000,
                        column_count: 26,
                        frozen_row_count: 0,
                        frozen_column_count: 0,
                    }),
                },
            })
            .collect();
        Self {
            metadata: SpreadsheetMetadata {
                spreadsheet_id: "sheet-123".to_string(),
                properties: Some(SpreadsheetProperties {
                    title: "Budget".to_string(),
                }),
                sheets,
            },
            fail_batch_update: None,
            metadata_calls: AtomicUsize::new(0),
            batches: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_batch_update(mut self, message: &str) -> Self {
        self.fail_batch_update = Some(message.to_string());
        self
    }

    /// Metadata as the backend would return it, without counting a fetch.
    pub fn snapshot(&self) -> SpreadsheetMetadata {
        self.metadata.clone()
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    pub fn batches(&self) -> Vec<Vec<Request>> {
        self.batches.lock().expect("batches lock").clone()
    }
}

#[async_trait]
impl SheetsApi for FakeSheets {
    async fn get_spreadsheet_metadata(
        &self,
        _spreadsheet_id: &str,
    ) -> Result<SpreadsheetMetadata, SheetsError> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.metadata.clone())
    }

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: &[Request],
    ) -> Result<BatchUpdateResponse, SheetsError> {
        if let Some(message) = &self.fail_batch_update {
            return Err(SheetsError::transport("apply batch update", message.clone()));
        }
        self.batches
            .lock()
            .expect("batches lock")
            .push(requests.to_vec());
        Ok(BatchUpdateResponse {
            spreadsheet_id: Some(spreadsheet_id.to_string()),
            replies: vec![serde_json::json!({}); requests.len()],
        })
    }
}
