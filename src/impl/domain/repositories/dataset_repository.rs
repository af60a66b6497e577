use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::SalesDataset;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    fn to_string(&self, dataset: &SalesDataset) -> Result<String, ServerError>;

    async fn to_file<P>(&self, dataset: &SalesDataset, path: P) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
