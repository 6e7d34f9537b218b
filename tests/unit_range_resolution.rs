use anyhow::Result;
use assert_matches::assert_matches;
use gsheet_ops::model::GridRange;
use gsheet_ops::{SheetSession, SheetsError, parse_range};

mod support;

#[test]
fn qualified_range_resolves_by_exact_title() -> Result<()> {
    let fake = support::FakeSheets::with_sheets(&[(0, "Sheet1")]);
    let metadata = fake.snapshot();

    let (sheet_id, grid) = parse_range(&metadata, "Sheet1!A1:D10")?;
    assert_eq!(sheet_id, 0);
    assert_eq!(
        grid,
        GridRange {
            sheet_id: 0,
            start_row: 0,
            end_row: 10,
            start_col: 0,
            end_col: 4,
        }
    );
    Ok(())
}

#[test]
fn unqualified_range_uses_first_sheet_in_returned_order() -> Result<()> {
    let fake = support::FakeSheets::with_sheets(&[(5, "Data"), (9, "Notes")]);
    let metadata = fake.snapshot();

    let (sheet_id, grid) = parse_range(&metadata, "A1:B2")?;
    assert_eq!(sheet_id, 5);
    assert_eq!((grid.end_row, grid.end_col), (2, 2));
    Ok(())
}

#[test]
fn unknown_sheet_and_empty_spreadsheet_are_not_found() {
    let fake = support::FakeSheets::with_sheets(&[(5, "Data")]);
    let metadata = fake.snapshot();
    assert_matches!(
        parse_range(&metadata, "data!A1:B2"),
        Err(SheetsError::NotFound(ref msg)) if msg.contains("'data'")
    );

    let empty = support::FakeSheets::with_sheets(&[]);
    let metadata = empty.snapshot();
    assert_matches!(parse_range(&metadata, "A1:B2"), Err(SheetsError::NotFound(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn session_fetches_metadata_once_per_command() -> Result<()> {
    let fake = support::FakeSheets::with_sheets(&[(5, "Data"), (9, "Notes")]);
    let mut session = SheetSession::new(&fake, "sheet-123");

    let (first, _) = session.resolve_range("Notes!B2:C3").await?;
    let (second, _) = session.resolve_range("A1:A1").await?;
    let notes = session.resolve_sheet(Some("Notes")).await?;

    assert_eq!((first, second, notes.sheet_id), (9, 5, 9));
    assert_eq!(fake.metadata_calls(), 1);
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn malformed_range_fails_before_metadata_fetch() {
    let fake = support::FakeSheets::with_sheets(&[(0, "Sheet1")]);
    let mut session = SheetSession::new(&fake, "sheet-123");

    for bad in ["Sheet1!A:A", "1:1", "Sheet1!A1", "A0:B2"] {
        let err = session.resolve_range(bad).await.unwrap_err();
        assert_matches!(err, SheetsError::Format(_), "{bad}");
    }
    assert_eq!(fake.metadata_calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn quoted_sheet_names_resolve() -> Result<()> {
    let fake = support::FakeSheets::with_sheets(&[(0, "Sheet1"), (3, "Q1 Data")]);
    let mut session = SheetSession::new(&fake, "sheet-123");
    let (sheet_id, grid) = session.resolve_range("'Q1 Data'!c3:b2").await?;
    assert_eq!(sheet_id, 3);
    assert_eq!(grid.to_a1(), "B2:C3");
    Ok(())
}
