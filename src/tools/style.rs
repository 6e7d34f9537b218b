use crate::color::parse_hex_color;
use crate::errors::{SheetsError, SheetsResult};
use crate::field_mask::FieldMask;
use crate::model::{CellData, CellFormat, GridRange, RepeatCellRequest, Request, TextFormat};

const BOLD: &str = "userEnteredFormat.textFormat.bold";
const ITALIC: &str = "userEnteredFormat.textFormat.italic";
const FONT_SIZE: &str = "userEnteredFormat.textFormat.fontSize";
const TEXT_COLOR: &str = "userEnteredFormat.textFormat.foregroundColor";
const BACKGROUND_COLOR: &str = "userEnteredFormat.backgroundColor";

/// Cell formatting attributes; `None` means "leave untouched".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub font_size: Option<u32>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
}

/// Mask of the attributes that were set, with `false` booleans force-sent.
pub fn format_field_mask(options: &FormatOptions) -> FieldMask {
    let mut mask = FieldMask::new();
    if let Some(bold) = options.bold {
        mask.add(BOLD);
        if !bold {
            mask.force_send(BOLD);
        }
    }
    if let Some(italic) = options.italic {
        mask.add(ITALIC);
        if !italic {
            mask.force_send(ITALIC);
        }
    }
    if options.font_size.is_some() {
        mask.add(FONT_SIZE);
    }
    if options.text_color.is_some() {
        mask.add(TEXT_COLOR);
    }
    if options.background_color.is_some() {
        mask.add(BACKGROUND_COLOR);
    }
    mask
}

/// Validated formatting, ready to be applied to any range.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatPatch {
    pub cell: CellData,
    pub mask: FieldMask,
    pub fields: String,
}

impl FormatOptions {
    pub fn compile(&self) -> SheetsResult<FormatPatch> {
        let mask = format_field_mask(self);
        let fields = mask.render_required("formatting options")?;

        if self.font_size == Some(0) {
            return Err(SheetsError::validation("font size must be at least 1"));
        }
        let foreground_color = self
            .text_color
            .as_deref()
            .map(parse_hex_color)
            .transpose()?;
        let background_color = self
            .background_color
            .as_deref()
            .map(parse_hex_color)
            .transpose()?;

        let text_format = TextFormat {
            bold: self.bold,
            italic: self.italic,
            font_size: self.font_size,
            foreground_color,
        };
        let text_format = (text_format != TextFormat::default()).then_some(text_format);

        Ok(FormatPatch {
            cell: CellData {
                user_entered_value: None,
                user_entered_format: Some(CellFormat {
                    background_color,
                    text_format,
                }),
            },
            mask,
            fields,
        })
    }
}

impl FormatPatch {
    pub fn apply_to(self, range: GridRange) -> Request {
        tracing::debug!(
            range = %range.to_a1(),
            fields = %self.fields,
            force_send = ?self.mask.force_send_fields().collect::<Vec<_>>(),
            "compiled repeatCell"
        );
        Request::RepeatCell(RepeatCellRequest {
            range,
            cell: self.cell,
            fields: self.fields,
        })
    }
}

/// Compiles a `repeatCell` that applies only the attributes in `options`.
pub fn build_format_request(range: GridRange, options: &FormatOptions) -> SheetsResult<Request> {
    Ok(options.compile()?.apply_to(range))
}
