pub mod commands;
pub mod errors;
pub mod output;

use crate::config::{ClientConfig, ConfigArgs};
use crate::tools::param_enums::{Dimension, MergeType, SortOrder};
use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::CommandContext;
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(
    name = "gsheet-ops",
    version,
    about = "Structural edits for Google Sheets from the command line",
    long_about = "Structural edits for Google Sheets from the command line.\n\nRanges use A1 notation with both endpoints, optionally qualified by a sheet name:\n  Sheet1!A1:D10   'Q1 Data'!B2:C3   A1:B2 (first sheet)\n\nWhole-column and whole-row selectors such as A:A or 1:1 are not supported.\n\nEvery command prints one JSON document on stdout. Failures print a JSON error\nenvelope on stderr and exit with status 1. Use --dry-run to print the compiled\nbatchUpdate request without sending it."
)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[arg(
        long,
        global = true,
        help = "Resolve and compile the request, print it, and skip the mutation"
    )]
    pub dry_run: bool,

    #[arg(
        long,
        global = true,
        help = "Emit compact JSON without pretty-printing"
    )]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "List sheets with their numeric IDs and grid sizes")]
    ListSheets {
        #[arg(value_name = "SPREADSHEET_ID", help = "Spreadsheet ID from the document URL")]
        spreadsheet_id: String,
    },
    #[command(about = "Merge the cells of a range")]
    Merge {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(value_name = "RANGE", help = "A1 range, e.g. Sheet1!A1:C3")]
        range: String,
        #[arg(
            long = "merge-type",
            value_enum,
            default_value_t = MergeType::All,
            help = "Merge everything, or each row/column separately"
        )]
        merge_type: MergeType,
    },
    #[command(about = "Unmerge every merged cell inside a range")]
    Unmerge {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(value_name = "RANGE", help = "A1 range, e.g. Sheet1!A1:C3")]
        range: String,
    },
    #[command(
        about = "Sort a range by one column",
        after_long_help = "Examples:\n  gsheet-ops sort <id> 'Sales!A1:F200' --by C --order desc --has-header\n\n--by names an absolute sheet column, not an offset inside the range."
    )]
    Sort {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(value_name = "RANGE", help = "A1 range to sort")]
        range: String,
        #[arg(long, value_name = "COLUMN", help = "Sort key column letter, e.g. C")]
        by: String,
        #[arg(long, value_enum, default_value_t = SortOrder::Ascending)]
        order: SortOrder,
        #[arg(long, help = "Keep the first row of the range in place")]
        has_header: bool,
    },
    #[command(about = "Insert empty rows or columns")]
    Insert {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(long, value_enum)]
        dimension: Dimension,
        #[arg(long, value_name = "INDEX", help = "Zero-based index of the first new row/column")]
        at: u32,
        #[arg(long, value_name = "N", default_value_t = 1, help = "How many to insert")]
        count: u32,
        #[arg(long, value_name = "SHEET", help = "Sheet name (default: first sheet)")]
        sheet: Option<String>,
    },
    #[command(about = "Delete a span of rows or columns")]
    Delete {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(long, value_enum)]
        dimension: Dimension,
        #[arg(long, value_name = "INDEX", help = "Zero-based start index (inclusive)")]
        from: u32,
        #[arg(long, value_name = "INDEX", help = "Zero-based end index (exclusive)")]
        to: u32,
        #[arg(long, value_name = "SHEET", help = "Sheet name (default: first sheet)")]
        sheet: Option<String>,
    },
    #[command(
        about = "Apply text and background formatting to a range",
        after_long_help = "Only the options you pass are changed. Pass --bold false to clear bold.\n\nExamples:\n  gsheet-ops format <id> 'Sheet1!A1:D1' --bold --background-color '#D9EAD3'\n  gsheet-ops format <id> A2:D20 --italic false --font-size 10"
    )]
    Format {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(value_name = "RANGE")]
        range: String,
        #[arg(
            long,
            value_name = "BOOL",
            num_args = 0..=1,
            default_missing_value = "true"
        )]
        bold: Option<bool>,
        #[arg(
            long,
            value_name = "BOOL",
            num_args = 0..=1,
            default_missing_value = "true"
        )]
        italic: Option<bool>,
        #[arg(long, value_name = "POINTS")]
        font_size: Option<u32>,
        #[arg(long, value_name = "#RRGGBB")]
        text_color: Option<String>,
        #[arg(long, value_name = "#RRGGBB")]
        background_color: Option<String>,
    },
    #[command(about = "Set the width of one column in pixels")]
    ColumnWidth {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(long, value_name = "LETTER", help = "Column letter, e.g. B")]
        column: String,
        #[arg(long, value_name = "PX")]
        pixels: u32,
        #[arg(long, value_name = "SHEET", help = "Sheet name (default: first sheet)")]
        sheet: Option<String>,
    },
    #[command(about = "Set the height of one row in pixels")]
    RowHeight {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(long, value_name = "ROW", help = "1-based row number as shown in the sheet")]
        row: u32,
        #[arg(long, value_name = "PX")]
        pixels: u32,
        #[arg(long, value_name = "SHEET", help = "Sheet name (default: first sheet)")]
        sheet: Option<String>,
    },
    #[command(
        about = "Freeze or unfreeze leading rows and columns",
        after_long_help = "Pass 0 to unfreeze. Counts that are not passed are left unchanged."
    )]
    Freeze {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(long, value_name = "N")]
        rows: Option<u32>,
        #[arg(long, value_name = "N")]
        columns: Option<u32>,
        #[arg(long, value_name = "SHEET", help = "Sheet name (default: first sheet)")]
        sheet: Option<String>,
    },
    #[command(about = "Find and replace text across the spreadsheet or one sheet")]
    FindReplace {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(long, value_name = "TEXT")]
        find: String,
        #[arg(long = "replace", value_name = "TEXT", default_value = "")]
        replacement: String,
        #[arg(long, value_name = "SHEET", help = "Limit to one sheet (default: all sheets)")]
        sheet: Option<String>,
        #[arg(long)]
        match_case: bool,
        #[arg(long)]
        match_entire_cell: bool,
        #[arg(long, help = "Treat --find as a regular expression")]
        regex: bool,
        #[arg(long)]
        include_formulas: bool,
    },
    #[command(
        about = "Write values into a range, anchored at its top-left cell",
        after_long_help = "Examples:\n  gsheet-ops update-cells <id> 'Sheet1!A1:C2' --values 'a,b,c;d,e,f'\n  gsheet-ops update-cells <id> A1:B2 --values-json '[[1, true], [\"=A1*2\", null]]'\n\n--values-json wins when both are given. Strings starting with '=' are written as formulas."
    )]
    UpdateCells {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(value_name = "RANGE")]
        range: String,
        #[arg(long, value_name = "ROWS", help = "Rows split by ';', cells by ','")]
        values: Option<String>,
        #[arg(long, value_name = "JSON", help = "JSON array of row arrays")]
        values_json: Option<String>,
    },
    #[command(about = "Clear entered values in a range, keeping formatting")]
    Clear {
        #[arg(value_name = "SPREADSHEET_ID")]
        spreadsheet_id: String,
        #[arg(value_name = "RANGE")]
        range: String,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let compact = cli.compact;
    let config = match ClientConfig::from_args(cli.config) {
        Ok(config) => config,
        Err(error) => emit_error_and_exit(error),
    };
    let context = CommandContext::from_config(config, cli.dry_run);

    match run_command(cli.command, &context).await {
        Ok(payload) => {
            if let Err(error) = output::emit_value(&payload, compact) {
                emit_error_and_exit(error);
            }
            Ok(())
        }
        Err(error) => emit_error_and_exit(error),
    }
}

pub async fn run_command(command: Commands, context: &CommandContext<'_>) -> Result<Value> {
    match command {
        Commands::ListSheets { spreadsheet_id } => {
            commands::sheets::list_sheets(context, spreadsheet_id).await
        }
        Commands::Merge {
            spreadsheet_id,
            range,
            merge_type,
        } => commands::structure::merge(context, spreadsheet_id, range, merge_type).await,
        Commands::Unmerge {
            spreadsheet_id,
            range,
        } => commands::structure::unmerge(context, spreadsheet_id, range).await,
        Commands::Sort {
            spreadsheet_id,
            range,
            by,
            order,
            has_header,
        } => commands::structure::sort(context, spreadsheet_id, range, by, order, has_header).await,
        Commands::Insert {
            spreadsheet_id,
            dimension,
            at,
            count,
            sheet,
        } => commands::structure::insert(context, spreadsheet_id, sheet, dimension, at, count).await,
        Commands::Delete {
            spreadsheet_id,
            dimension,
            from,
            to,
            sheet,
        } => commands::structure::delete(context, spreadsheet_id, sheet, dimension, from, to).await,
        Commands::Format {
            spreadsheet_id,
            range,
            bold,
            italic,
            font_size,
            text_color,
            background_color,
        } => {
            let options = crate::tools::FormatOptions {
                bold,
                italic,
                font_size,
                text_color,
                background_color,
            };
            commands::format::format(context, spreadsheet_id, range, options).await
        }
        Commands::ColumnWidth {
            spreadsheet_id,
            column,
            pixels,
            sheet,
        } => commands::layout::column_width(context, spreadsheet_id, sheet, column, pixels).await,
        Commands::RowHeight {
            spreadsheet_id,
            row,
            pixels,
            sheet,
        } => commands::layout::row_height(context, spreadsheet_id, sheet, row, pixels).await,
        Commands::Freeze {
            spreadsheet_id,
            rows,
            columns,
            sheet,
        } => commands::layout::freeze(context, spreadsheet_id, sheet, rows, columns).await,
        Commands::FindReplace {
            spreadsheet_id,
            find,
            replacement,
            sheet,
            match_case,
            match_entire_cell,
            regex,
            include_formulas,
        } => {
            let options = crate::tools::FindReplaceOptions {
                find,
                replacement,
                match_case,
                match_entire_cell,
                search_by_regex: regex,
                include_formulas,
            };
            commands::find_replace::find_replace(context, spreadsheet_id, sheet, options).await
        }
        Commands::UpdateCells {
            spreadsheet_id,
            range,
            values,
            values_json,
        } => commands::cells::update_cells(context, spreadsheet_id, range, values, values_json).await,
        Commands::Clear {
            spreadsheet_id,
            range,
        } => commands::cells::clear(context, spreadsheet_id, range).await,
    }
}

fn emit_error_and_exit(error: anyhow::Error) -> ! {
    let envelope = errors::envelope_for(&error);
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    if serde_json::to_writer(&mut handle, &envelope).is_err() {
        eprintln!("{{\"code\":\"COMMAND_FAILED\",\"message\":\"{}\"}}", error);
    } else {
        use std::io::Write;
        let _ = handle.write_all(b"\n");
    }
    std::process::exit(1)
}
