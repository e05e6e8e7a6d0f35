//! CSV assembly for the export endpoints.

/// UTF-8 byte-order mark, prepended so spreadsheet imports detect encoding.
const BOM: &str = "\u{feff}";

/// Escape one CSV field: wrap in quotes, doubling embedded quotes.
pub fn escape(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Assemble a CSV document from a header row and pre-escaped data rows.
pub fn document(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::from(BOM);
    out.push_str(&header.join(","));
    out.push('\n');
    for row in rows {
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}
