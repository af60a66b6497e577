use serde_derive::Serialize;

use crate::entities::TransactionRecord;

/// Flat serialization model for one CSV row. Field order here defines
/// the column order of the output file.
#[derive(Debug, Serialize)]
pub(crate) struct TransactionRowModel {
    transaction_id: String,
    /// ISO-8601 calendar date (YYYY-MM-DD).
    date: String,
    /// 24-hour wall-clock time (HH:MM:SS), no timezone.
    time: String,
    product_id: String,
    product_name: String,
    category: String,
    unit_price: f64,
    quantity: u32,
    total_price: f64,
    payment_method: String,
    store_location: String,
}

impl From<&TransactionRecord> for TransactionRowModel {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            transaction_id: record.transaction_id.to_string(),
            date: record.date.format("%Y-%m-%d").to_string(),
            time: record.time.format("%H:%M:%S").to_string(),
            product_id: record.product_id.clone(),
            product_name: record.product_name.clone(),
            category: record.category.label().to_string(),
            unit_price: record.unit_price,
            quantity: record.quantity,
            total_price: record.total_price,
            payment_method: record.payment_method.label().to_string(),
            store_location: record.store_location.label().to_string(),
        }
    }
}
