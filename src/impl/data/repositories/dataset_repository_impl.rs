use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::sales_csv_datasource::{SalesCsvDatasource, SalesCsvDatasourceImpl},
    domain::repositories::dataset_repository::DatasetRepository,
    entities::SalesDataset,
};

pub(crate) struct DatasetRepositoryImpl<
    DS1 = SalesCsvDatasourceImpl, // Default.
> where
    DS1: SalesCsvDatasource,
{
    sales_datasource: DS1,
}

#[async_trait]
impl<DS1> DatasetRepository for DatasetRepositoryImpl<DS1>
where
    DS1: SalesCsvDatasource,
{
    fn to_string(&self, dataset: &SalesDataset) -> Result<String, ServerError> {
        self.sales_datasource.to_string(dataset)
    }

    async fn to_file<P>(&self, dataset: &SalesDataset, path: P) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.sales_datasource.to_file(dataset, path).await
    }
}

impl DatasetRepositoryImpl<SalesCsvDatasourceImpl> {
    pub(crate) fn new() -> Self {
        DatasetRepositoryImpl {
            sales_datasource: SalesCsvDatasourceImpl::new(),
        }
    }
}
