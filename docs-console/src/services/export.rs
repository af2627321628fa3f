//! Derived exports of the document listing: a CSV download and the
//! newline-separated identifier list placed on the clipboard.

use crate::config::DisplaySettings;
use crate::error::ConsoleError;
use crate::models::DocumentRecord;
use crate::utils::format::{format_date_time, format_size};
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub const CSV_FILE_NAME: &str = "documents.csv";
pub const CSV_HEADER: [&str; 6] = ["ID", "Name", "Type", "Size", "State", "Created At"];

/// Quote a field and double any embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// CSV with CRLF rows, columns in table order. Only the name is quoted; size
/// and date go through the same formatters as the table.
///
/// Identifier, type and state are API-assigned tokens and are written as-is,
/// even if one ever carries a comma or quote.
pub fn to_csv(records: &[DocumentRecord], display: &DisplaySettings) -> Result<String, ConsoleError> {
    // Quoting is applied per field above, so the writer itself must not quote.
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.doc_id.clone(),
            quote(&record.doc_name),
            record.doc_type.clone(),
            format_size(record.file_size),
            record.state.clone(),
            format_date_time(record.create_at, display),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConsoleError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ConsoleError::Csv(e.to_string()))
}

/// Identifiers in store order, one per line.
pub fn to_identifier_list(records: &[DocumentRecord]) -> String {
    records
        .iter()
        .map(|r| r.doc_id.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
