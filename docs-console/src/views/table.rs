use crate::config::DisplaySettings;
use crate::models::DocumentRecord;
use crate::utils::format::{format_size, format_timestamp, wrap_text};

/// Column budget for the name cell.
pub const NAME_WRAP_COLUMNS: usize = 30;

pub const PLACEHOLDER: &str = "No documents available.";

/// One display row; the template adds the delete action keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRow {
    pub id: String,
    pub name_lines: Vec<String>,
    pub doc_type: String,
    pub size: String,
    pub state: String,
    /// Date, then time of day; rendered on two lines.
    pub created_lines: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DocumentTable {
    pub rows: Vec<DocumentRow>,
}

impl DocumentTable {
    /// Project the listing into display rows, preserving order.
    pub fn project(records: &[DocumentRecord], display: &DisplaySettings) -> Self {
        let rows = records
            .iter()
            .map(|record| DocumentRow {
                id: record.doc_id.clone(),
                name_lines: wrap_text(&record.doc_name, NAME_WRAP_COLUMNS),
                doc_type: record.doc_type.clone(),
                size: format_size(record.file_size),
                state: record.state.clone(),
                created_lines: match format_timestamp(record.create_at, display) {
                    Some((date, time)) => vec![date, time],
                    None => vec![record.create_at.to_string()],
                },
            })
            .collect();
        Self { rows }
    }

    /// When true the page shows [`PLACEHOLDER`] instead of a table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn placeholder(&self) -> &'static str {
        PLACEHOLDER
    }
}
