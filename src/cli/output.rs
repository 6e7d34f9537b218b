use anyhow::Result;
use serde_json::Value;
use std::io::Write;

pub fn emit_value(value: &Value, compact: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_value(&mut handle, value, compact)
}

pub fn write_value(writer: &mut impl Write, value: &Value, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *writer, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compact_output_is_one_line() {
        let mut buffer = Vec::new();
        write_value(&mut buffer, &json!({"a": [1, 2]}), true).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{\"a\":[1,2]}\n");

        let mut buffer = Vec::new();
        write_value(&mut buffer, &json!({"a": 1}), false).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{\n  \"a\": 1\n}\n");
    }
}
