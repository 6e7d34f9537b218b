pub mod cells;
pub mod find_replace;
pub mod layout;
pub mod param_enums;
pub mod structure;
pub mod style;

pub use cells::{build_clear_request, build_update_cells_request};
pub use find_replace::{FindReplaceOptions, build_find_replace_request};
pub use layout::{
    build_column_width_request, build_freeze_request, build_row_height_request, freeze_field_mask,
};
pub use structure::{
    build_delete_dimension_request, build_insert_dimension_request, build_merge_request,
    build_sort_request, build_unmerge_request, validate_delete_span, validate_insert_span,
};
pub use style::{FormatOptions, FormatPatch, build_format_request, format_field_mask};
