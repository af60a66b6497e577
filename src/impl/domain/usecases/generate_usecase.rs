use async_trait::async_trait;
use fractic_server_error::ServerError;
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    data::repositories::dataset_repository_impl::DatasetRepositoryImpl,
    domain::{
        logic::calendar_driver::CalendarDriver,
        repositories::dataset_repository::DatasetRepository,
    },
    entities::{GeneratorConfig, SalesDataset},
};

#[async_trait]
pub trait GenerateUsecase: Send + Sync {
    /// Synthesize and render the dataset as a CSV string.
    async fn to_string(
        &self,
        config: &GeneratorConfig,
        seed: Option<u64>,
    ) -> Result<(SalesDataset, String), ServerError>;

    /// Synthesize and persist the dataset to `path`.
    async fn to_file<P>(
        &self,
        config: &GeneratorConfig,
        seed: Option<u64>,
        path: P,
    ) -> Result<SalesDataset, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct GenerateUsecaseImpl<
    R1 = DatasetRepositoryImpl, // Default.
> where
    R1: DatasetRepository,
{
    dataset_repository: R1,
}

impl<R1> GenerateUsecaseImpl<R1>
where
    R1: DatasetRepository,
{
    fn run(&self, config: &GeneratorConfig, seed: Option<u64>) -> Result<SalesDataset, ServerError> {
        config.validate()?;
        let driver = CalendarDriver::new(config)?;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(driver.run(&mut rng))
    }
}

#[async_trait]
impl<R1> GenerateUsecase for GenerateUsecaseImpl<R1>
where
    R1: DatasetRepository,
{
    async fn to_string(
        &self,
        config: &GeneratorConfig,
        seed: Option<u64>,
    ) -> Result<(SalesDataset, String), ServerError> {
        let dataset = self.run(config, seed)?;
        let csv = self.dataset_repository.to_string(&dataset)?;
        Ok((dataset, csv))
    }

    async fn to_file<P>(
        &self,
        config: &GeneratorConfig,
        seed: Option<u64>,
        path: P,
    ) -> Result<SalesDataset, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let dataset = self.run(config, seed)?;
        self.dataset_repository.to_file(&dataset, path).await?;
        Ok(dataset)
    }
}

impl GenerateUsecaseImpl {
    pub(crate) fn new() -> Self {
        GenerateUsecaseImpl {
            dataset_repository: DatasetRepositoryImpl::new(),
        }
    }
}
