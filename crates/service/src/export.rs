//! CSV export of cached transaction records.

use csv::Writer;
use vantage_dash_core::TransactionRecord;
use vantage_dash_core::constants::EXPORT_ROW_LIMIT;

use crate::error::ServiceError;

/// Header row of the export.
pub const EXPORT_HEADER: [&str; 6] =
    ["id", "status", "pageCount", "created", "sourceFileName", "manualReview"];

/// Writes at most the first [`EXPORT_ROW_LIMIT`] records as CSV.
pub fn export_records_csv(records: &[TransactionRecord]) -> Result<String, ServiceError> {
    let mut wtr = Writer::from_writer(vec![]);
    wtr.write_record(EXPORT_HEADER)?;

    for record in records.iter().take(EXPORT_ROW_LIMIT) {
        wtr.write_record([
            record.id.as_str(),
            record.status.as_str(),
            &record.page_count.to_string(),
            record.created.as_str(),
            record.source_file_name.as_str(),
            record.manual_review_label(),
        ])?;
    }

    let data = wtr.into_inner().map_err(|e| ServiceError::ExportBuffer(e.to_string()))?;
    String::from_utf8(data).map_err(|e| ServiceError::ExportBuffer(e.to_string()))
}
