//! JSON output for command results.

use super::Report;
use std::error::Error;

/// Serialize a [`Report`] as a single-line JSON object.
pub fn to_json(report: &Report) -> Result<String, Box<dyn Error>> {
    let json =
        serde_json::to_string(report).map_err(|e| format!("Error serializing report: {e}"))?;
    Ok(json)
}
