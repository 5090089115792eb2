//! CSV header normalization.

/// Strips a UTF-8 byte-order mark. Names are otherwise kept verbatim, since
/// column matching is exact.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').to_string()
}

/// Normalizes every header cell.
pub fn normalize_headers(record: &csv::StringRecord) -> Vec<String> {
    record.iter().map(normalize_header).collect()
}
