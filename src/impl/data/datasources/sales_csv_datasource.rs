use async_trait::async_trait;
use fractic_server_error::ServerError;
use tokio::fs;

use crate::{
    data::models::transaction_row_model::TransactionRowModel,
    entities::SalesDataset,
    errors::{CsvSerializationError, WriteError},
};

/// Output column names, in order.
pub(crate) const COLUMNS: [&str; 11] = [
    "transaction_id",
    "date",
    "time",
    "product_id",
    "product_name",
    "category",
    "unit_price",
    "quantity",
    "total_price",
    "payment_method",
    "store_location",
];

#[async_trait]
pub(crate) trait SalesCsvDatasource: Send + Sync {
    fn to_string(&self, dataset: &SalesDataset) -> Result<String, ServerError>;

    async fn to_file<P>(&self, dataset: &SalesDataset, path: P) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct SalesCsvDatasourceImpl;

impl SalesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SalesCsvDatasource for SalesCsvDatasourceImpl {
    fn to_string(&self, dataset: &SalesDataset) -> Result<String, ServerError> {
        // The header is written explicitly so an empty dataset still
        // produces a well-formed file.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(COLUMNS)
            .map_err(|e| CsvSerializationError::with_debug(&e))?;
        for record in &dataset.records {
            writer
                .serialize(TransactionRowModel::from(record))
                .map_err(|e| CsvSerializationError::with_debug(&e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CsvSerializationError::with_debug(&e))?;
        String::from_utf8(bytes).map_err(|e| CsvSerializationError::with_debug(&e))
    }

    async fn to_file<P>(&self, dataset: &SalesDataset, path: P) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let path = path.as_ref();
        let csv = self.to_string(dataset)?;

        // Write to a sibling temp path and rename on success, so a failed
        // run never leaves a truncated file at the destination.
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = std::path::PathBuf::from(tmp);
        fs::write(&tmp, csv)
            .await
            .map_err(|e| WriteError::with_debug(&path.display().to_string(), &e))?;
        fs::rename(&tmp, path)
            .await
            .map_err(|e| WriteError::with_debug(&path.display().to_string(), &e))?;
        Ok(())
    }
}

// --
