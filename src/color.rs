use crate::errors::{SheetsError, SheetsResult};
use crate::model::Color;

/// Parses `#RRGGBB` (any case) into channel fractions in `[0, 1]`.
pub fn parse_hex_color(hex: &str) -> SheetsResult<Color> {
    if hex.len() != 7 {
        return Err(SheetsError::format(format!(
            "invalid color '{hex}': expected #RRGGBB"
        )));
    }
    let Some(digits) = hex.strip_prefix('#') else {
        return Err(SheetsError::format(format!(
            "invalid color '{hex}': missing leading '#'"
        )));
    };
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(SheetsError::format(format!(
            "invalid color '{hex}': '{bad}' is not a hex digit"
        )));
    }

    let channel = |offset: usize| -> SheetsResult<f64> {
        let pair = digits.get(offset..offset + 2).ok_or_else(|| {
            SheetsError::format(format!("invalid color '{hex}': expected #RRGGBB"))
        })?;
        let value = u8::from_str_radix(pair, 16).map_err(|_| {
            SheetsError::format(format!("invalid color '{hex}': '{pair}' is not hex"))
        })?;
        Ok(f64::from(value) / 255.0)
    };

    Ok(Color {
        red: channel(0)?,
        green: channel(2)?,
        blue: channel(4)?,
    })
}
