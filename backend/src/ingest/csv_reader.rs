//! CSV decoding for the buoy dataset.

use std::io::Read;

use crate::error::{WaveError, WaveResult};
use crate::models::{RawRecord, REQUIRED_COLUMNS};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode the rows of a CSV body whose `Site` is in `allowed`.
///
/// The header row must carry every column in [`REQUIRED_COLUMNS`]; a missing
/// column is reported by name before any row is read. Rows for other sites
/// are skipped before typed decoding, so a malformed cell there is ignored.
/// Cells are trimmed, a blank numeric cell decodes as missing, and a leading
/// UTF-8 BOM is skipped.
pub fn parse_csv<R: Read>(reader: R, allowed: &[String]) -> WaveResult<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let names: Vec<&str> = headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}'))
        .collect();
    for column in REQUIRED_COLUMNS {
        if !names.contains(&column) {
            return Err(WaveError::Schema {
                column: column.to_string(),
            });
        }
    }
    let site_column = names.iter().position(|name| *name == "Site").ok_or_else(|| {
        WaveError::Schema {
            column: "Site".to_string(),
        }
    })?;
    // Deserialize against the BOM-free names.
    let headers = csv::StringRecord::from(names);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for result in reader.records() {
        let row = result?;
        let site = row.get(site_column).unwrap_or_default();
        if !allowed.iter().any(|s| s == site) {
            skipped += 1;
            continue;
        }
        records.push(row.deserialize::<RawRecord>(Some(&headers))?);
    }
    if skipped > 0 {
        log::debug!("Skipped {} rows for sites outside the allow-list", skipped);
    }
    Ok(records)
}

/// Decode an in-memory CSV body.
pub fn parse_csv_bytes(body: &[u8], allowed: &[String]) -> WaveResult<Vec<RawRecord>> {
    parse_csv(body.strip_prefix(UTF8_BOM).unwrap_or(body), allowed)
}
