use crate::errors::{SheetsError, SheetsResult};
use std::cmp::Ordering;
use std::fmt;

/// A single cell position, zero-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub col: u32,
    pub row: u32,
}

impl CellRef {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    pub fn to_a1(self) -> String {
        format!("{}{}", index_to_column_letter(self.col), u64::from(self.row) + 1)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

impl Ord for CellRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Row-major ordering
        match self.row.cmp(&other.row) {
            Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

impl PartialOrd for CellRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Converts column letters ("A", "az", "XFD") to a zero-based column index.
///
/// Letters are read as a bijective base-26 numeral (A=1 .. Z=26, AA=27), so
/// there is no zero digit and every letter sequence maps to exactly one index.
pub fn column_letter_to_index(letters: &str) -> SheetsResult<u32> {
    if letters.is_empty() {
        return Err(SheetsError::format("column letters are empty"));
    }

    let mut value: u64 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(SheetsError::format(format!(
                "invalid column letters '{letters}'"
            )));
        }
        let digit = u64::from(c.to_ascii_uppercase() as u8 - b'A') + 1;
        value = value * 26 + digit;
        if value > u64::from(u32::MAX) + 1 {
            return Err(SheetsError::format(format!(
                "column '{letters}' is out of range"
            )));
        }
    }

    Ok((value - 1) as u32)
}

/// Inverse of [`column_letter_to_index`]: 0 -> "A", 26 -> "AA".
pub fn index_to_column_letter(index: u32) -> String {
    let mut n = u64::from(index) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Parses an A1-style token into a zero-based [`CellRef`].
///
/// Letters and digits are collected into separate buffers regardless of their
/// order, so "1A" resolves to the same cell as "A1".
pub fn parse_cell_ref(reference: &str) -> SheetsResult<CellRef> {
    let upper = reference.trim().to_ascii_uppercase();

    let mut letters = String::new();
    let mut digits = String::new();
    for c in upper.chars() {
        if c.is_ascii_alphabetic() {
            letters.push(c);
        } else if c.is_ascii_digit() {
            digits.push(c);
        } else {
            return Err(SheetsError::format(format!(
                "invalid cell reference '{reference}': unexpected character '{c}'"
            )));
        }
    }

    if letters.is_empty() {
        return Err(SheetsError::format(format!(
            "invalid cell reference '{reference}': missing column letters"
        )));
    }
    if digits.is_empty() {
        return Err(SheetsError::format(format!(
            "invalid cell reference '{reference}': missing row number"
        )));
    }

    let col = column_letter_to_index(&letters)?;
    let row_number: u32 = digits.parse().map_err(|_| {
        SheetsError::format(format!(
            "invalid cell reference '{reference}': row number is out of range"
        ))
    })?;
    if row_number == 0 {
        return Err(SheetsError::format(format!(
            "invalid cell reference '{reference}': rows start at 1"
        )));
    }

    Ok(CellRef {
        col,
        row: row_number - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn column_letters_follow_bijective_base26() {
        assert_eq!(column_letter_to_index("A").unwrap(), 0);
        assert_eq!(column_letter_to_index("Z").unwrap(), 25);
        assert_eq!(column_letter_to_index("AA").unwrap(), 26);
        assert_eq!(column_letter_to_index("AZ").unwrap(), 51);
        assert_eq!(column_letter_to_index("BA").unwrap(), 52);
        assert_eq!(column_letter_to_index("xfd").unwrap(), 16_383);
    }

    #[test]
    fn column_index_roundtrips_at_digit_boundaries() {
        for index in [0, 25, 26, 51, 52, 701, 702, 16_383] {
            let letters = index_to_column_letter(index);
            assert_eq!(column_letter_to_index(&letters).unwrap(), index, "{letters}");
        }
        assert_eq!(index_to_column_letter(701), "ZZ");
        assert_eq!(index_to_column_letter(702), "AAA");
        assert_eq!(index_to_column_letter(u32::MAX), "MWLQKWV");
    }

    #[test]
    fn column_letters_reject_overflow_and_junk() {
        assert_matches!(column_letter_to_index(""), Err(SheetsError::Format(_)));
        assert_matches!(column_letter_to_index("A1"), Err(SheetsError::Format(_)));
        assert_matches!(
            column_letter_to_index("ZZZZZZZZZZ"),
            Err(SheetsError::Format(_))
        );
    }

    #[test]
    fn parses_cell_refs_zero_based() {
        assert_eq!(parse_cell_ref("A1").unwrap(), CellRef::new(0, 0));
        assert_eq!(parse_cell_ref("Z10").unwrap(), CellRef::new(25, 9));
        assert_eq!(parse_cell_ref("AA1").unwrap(), CellRef::new(26, 0));
        assert_eq!(parse_cell_ref("b3").unwrap(), CellRef::new(1, 2));
    }

    #[test]
    fn digits_before_letters_parse_like_a1() {
        assert_eq!(parse_cell_ref("1A").unwrap(), parse_cell_ref("A1").unwrap());
    }

    #[test]
    fn rejects_missing_halves_and_row_zero() {
        assert_matches!(parse_cell_ref("A"), Err(SheetsError::Format(msg)) if msg.contains("row"));
        assert_matches!(parse_cell_ref("1"), Err(SheetsError::Format(msg)) if msg.contains("column"));
        assert_matches!(parse_cell_ref("A0"), Err(SheetsError::Format(_)));
        assert_matches!(parse_cell_ref("$A$1"), Err(SheetsError::Format(_)));
        assert_matches!(parse_cell_ref("A99999999999"), Err(SheetsError::Format(_)));
    }

    #[test]
    fn test_ordering() {
        let a1 = parse_cell_ref("A1").unwrap();
        let b1 = parse_cell_ref("B1").unwrap();
        let a2 = parse_cell_ref("A2").unwrap();
        let aa1 = parse_cell_ref("AA1").unwrap();

        assert!(a1 < b1);
        assert!(b1 < aa1);
        assert!(aa1 < a2);
        assert_eq!(aa1.to_string(), "AA1");
    }
}
