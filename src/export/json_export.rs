use crate::error::{RestfulError, Result};
use serde_json::Value;
use std::io::Write;

/// Write `value` pretty-printed with two-space indentation.
pub fn write_json<W: Write>(value: &Value, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(|e| {
        if e.is_io() {
            RestfulError::Io(e.into())
        } else {
            RestfulError::Other(format!("Failed to encode JSON: {}", e))
        }
    })?;
    writer.flush()?;
    Ok(())
}
