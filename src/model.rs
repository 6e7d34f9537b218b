//! Wire types for the Sheets v4 `batchUpdate` and metadata endpoints.
//!
//! Only the subset of the schema that the mutation compiler emits or the
//! range resolver reads is modelled here.

use crate::address::{CellRef, index_to_column_letter};
use crate::tools::param_enums::{Dimension, MergeType, SortOrder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// Zero-based, end-exclusive rectangle on one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    pub sheet_id: i64,
    #[serde(rename = "startRowIndex")]
    pub start_row: u32,
    #[serde(rename = "endRowIndex")]
    pub end_row: u32,
    #[serde(rename = "startColumnIndex")]
    pub start_col: u32,
    #[serde(rename = "endColumnIndex")]
    pub end_col: u32,
}

impl GridRange {
    pub fn top_left(&self) -> CellRef {
        CellRef::new(self.start_col, self.start_row)
    }

    pub fn row_count(&self) -> u32 {
        self.end_row.saturating_sub(self.start_row)
    }

    pub fn col_count(&self) -> u32 {
        self.end_col.saturating_sub(self.start_col)
    }

    /// Renders the range back as inclusive A1 notation, e.g. `A1:D10`.
    pub fn to_a1(&self) -> String {
        if self.row_count() == 0 || self.col_count() == 0 {
            return self.top_left().to_a1();
        }
        format!(
            "{}{}:{}{}",
            index_to_column_letter(self.start_col),
            u64::from(self.start_row) + 1,
            index_to_column_letter(self.end_col - 1),
            self.end_row
        )
    }
}

/// Zero-based, end-exclusive span of rows or columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRange {
    pub sheet_id: i64,
    pub dimension: Dimension,
    pub start_index: u32,
    pub end_index: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// One structural request inside a `batchUpdate` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    MergeCells(MergeCellsRequest),
    UnmergeCells(UnmergeCellsRequest),
    SortRange(SortRangeRequest),
    InsertDimension(InsertDimensionRequest),
    DeleteDimension(DeleteDimensionRequest),
    RepeatCell(RepeatCellRequest),
    UpdateDimensionProperties(UpdateDimensionPropertiesRequest),
    UpdateSheetProperties(UpdateSheetPropertiesRequest),
    FindReplace(FindReplaceRequest),
    UpdateCells(UpdateCellsRequest),
}

impl Request {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MergeCells(_) => "mergeCells",
            Self::UnmergeCells(_) => "unmergeCells",
            Self::SortRange(_) => "sortRange",
            Self::InsertDimension(_) => "insertDimension",
            Self::DeleteDimension(_) => "deleteDimension",
            Self::RepeatCell(_) => "repeatCell",
            Self::UpdateDimensionProperties(_) => "updateDimensionProperties",
            Self::UpdateSheetProperties(_) => "updateSheetProperties",
            Self::FindReplace(_) => "findReplace",
            Self::UpdateCells(_) => "updateCells",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeCellsRequest {
    pub range: GridRange,
    pub merge_type: MergeType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnmergeCellsRequest {
    pub range: GridRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortRangeRequest {
    pub range: GridRange,
    pub sort_specs: Vec<SortSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub dimension_index: u32,
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertDimensionRequest {
    pub range: DimensionRange,
    pub inherit_from_before: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteDimensionRequest {
    pub range: DimensionRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeatCellRequest {
    pub range: GridRange,
    pub cell: CellData,
    pub fields: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    pub user_entered_value: Option<ExtendedValue>,
    pub user_entered_format: Option<CellFormat>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    pub background_color: Option<Color>,
    pub text_format: Option<TextFormat>,
}

/// Every field is optional so an explicit `false`/`0` is still transmitted
/// when set, while unset attributes stay off the wire.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFormat {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub font_size: Option<u32>,
    pub foreground_color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtendedValue {
    StringValue(String),
    NumberValue(f64),
    BoolValue(bool),
    FormulaValue(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowData {
    pub values: Vec<CellData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateDimensionPropertiesRequest {
    pub range: DimensionRange,
    pub properties: DimensionProperties,
    pub fields: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionProperties {
    pub pixel_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateSheetPropertiesRequest {
    pub properties: SheetPropertiesPatch,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetPropertiesPatch {
    pub sheet_id: i64,
    pub grid_properties: GridPropertiesPatch,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPropertiesPatch {
    pub frozen_row_count: Option<u32>,
    pub frozen_column_count: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindReplaceRequest {
    pub find: String,
    pub replacement: String,
    pub match_case: bool,
    pub match_entire_cell: bool,
    pub search_by_regex: bool,
    pub include_formulas: bool,
    pub sheet_id: Option<i64>,
    pub all_sheets: Option<bool>,
}

/// Top-left anchor for writes that should not touch cells outside the rows
/// they carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCoordinate {
    pub sheet_id: i64,
    pub row_index: u32,
    pub column_index: u32,
}

/// Exactly one of `start` and `range` is set. With `range`, masked fields of
/// cells not covered by `rows` are cleared.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateCellsRequest {
    pub start: Option<GridCoordinate>,
    pub range: Option<GridRange>,
    pub rows: Option<Vec<RowData>>,
    pub fields: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchUpdateRequest<'a> {
    pub requests: &'a [Request],
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub spreadsheet_id: Option<String>,
    #[serde(default)]
    pub replies: Vec<Value>,
}

/// Subset of `Spreadsheet` returned by the metadata call.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadsheetMetadata {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub properties: Option<SpreadsheetProperties>,
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl SpreadsheetMetadata {
    pub fn title(&self) -> Option<&str> {
        self.properties.as_ref().map(|p| p.title.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpreadsheetProperties {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Sheet {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    #[serde(default)]
    pub sheet_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub grid_properties: Option<GridProperties>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    #[serde(default)]
    pub row_count: u32,
    #[serde(default)]
    pub column_count: u32,
    #[serde(default)]
    pub frozen_row_count: u32,
    #[serde(default)]
    pub frozen_column_count: u32,
}
