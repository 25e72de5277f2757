pub mod csv_export;
pub mod json_export;

use crate::error::Result;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub use csv_export::{render_cell, write_csv};
pub use json_export::write_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    /// Pick a format from the path's suffix. Returns `None` for anything
    /// other than `.json` or `.csv`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".json") {
            Some(OutputFormat::Json)
        } else if name.ends_with(".csv") {
            Some(OutputFormat::Csv)
        } else {
            None
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

/// Convert `body` to `format` and write it to `path`, creating or
/// truncating the file. Returns the number of bytes written.
pub fn save_body(body: &str, format: OutputFormat, path: &Path) -> Result<u64> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Json => write_json(&value, &mut writer)?,
        OutputFormat::Csv => write_csv(&value, &mut writer)?,
    }
    writer.flush()?;

    Ok(fs::metadata(path)?.len())
}
