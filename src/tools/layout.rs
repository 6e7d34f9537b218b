use crate::errors::{SheetsError, SheetsResult};
use crate::field_mask::FieldMask;
use crate::model::{
    DimensionProperties, DimensionRange, GridPropertiesPatch, Request, SheetPropertiesPatch,
    UpdateDimensionPropertiesRequest, UpdateSheetPropertiesRequest,
};
use crate::tools::param_enums::Dimension;

const PIXEL_SIZE: &str = "pixelSize";
const FROZEN_ROWS: &str = "gridProperties.frozenRowCount";
const FROZEN_COLUMNS: &str = "gridProperties.frozenColumnCount";

pub fn build_column_width_request(sheet_id: i64, column: u32, pixels: u32) -> SheetsResult<Request> {
    build_dimension_size_request(sheet_id, Dimension::Columns, column, pixels)
}

pub fn build_row_height_request(sheet_id: i64, row: u32, pixels: u32) -> SheetsResult<Request> {
    build_dimension_size_request(sheet_id, Dimension::Rows, row, pixels)
}

fn build_dimension_size_request(
    sheet_id: i64,
    dimension: Dimension,
    index: u32,
    pixels: u32,
) -> SheetsResult<Request> {
    if pixels == 0 {
        return Err(SheetsError::validation("pixel size must be at least 1"));
    }
    let end_index = index.checked_add(1).ok_or_else(|| {
        SheetsError::validation(format!("{dimension} index {index} is out of range"))
    })?;

    let mut mask = FieldMask::new();
    mask.add(PIXEL_SIZE);
    let fields = mask.render();

    tracing::debug!(sheet_id, %dimension, index, pixels, "compiled updateDimensionProperties");
    Ok(Request::UpdateDimensionProperties(
        UpdateDimensionPropertiesRequest {
            range: DimensionRange {
                sheet_id,
                dimension,
                start_index: index,
                end_index,
            },
            properties: DimensionProperties {
                pixel_size: Some(pixels),
            },
            fields,
        },
    ))
}

/// Mask for a freeze update. A count of 0 is the unfreeze case and is
/// force-sent.
pub fn freeze_field_mask(rows: Option<u32>, cols: Option<u32>) -> FieldMask {
    let mut mask = FieldMask::new();
    for (path, count) in [(FROZEN_ROWS, rows), (FROZEN_COLUMNS, cols)] {
        if let Some(count) = count {
            mask.add(path);
            if count == 0 {
                mask.force_send(path);
            }
        }
    }
    mask
}

pub fn build_freeze_request(
    sheet_id: i64,
    rows: Option<u32>,
    cols: Option<u32>,
) -> SheetsResult<Request> {
    let mask = freeze_field_mask(rows, cols);
    let fields = mask.render_required("freeze rows or columns")?;

    tracing::debug!(
        sheet_id,
        fields = %fields,
        force_send = ?mask.force_send_fields().collect::<Vec<_>>(),
        "compiled updateSheetProperties"
    );
    Ok(Request::UpdateSheetProperties(UpdateSheetPropertiesRequest {
        properties: SheetPropertiesPatch {
            sheet_id,
            grid_properties: GridPropertiesPatch {
                frozen_row_count: rows,
                frozen_column_count: cols,
            },
        },
        fields,
    }))
}
