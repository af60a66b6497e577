use fractic_server_error::ServerError;

use crate::{
    domain::usecases::generate_usecase::{GenerateUsecase as _, GenerateUsecaseImpl},
    entities::{GeneratorConfig, SalesDataset},
    presentation::summary_printer::SummaryPrinter,
};

pub type Csv = String;
pub type RunSummary = String;

pub struct CoffeeSalesDatagenUtil {
    generate_usecase: GenerateUsecaseImpl,
    printer: SummaryPrinter,
}

impl CoffeeSalesDatagenUtil {
    pub fn new() -> Self {
        Self {
            generate_usecase: GenerateUsecaseImpl::new(),
            printer: SummaryPrinter::new(),
        }
    }

    /// Synthesize a dataset from OS entropy and render it as CSV text.
    pub async fn to_string(
        &self,
        config: &GeneratorConfig,
    ) -> Result<(SalesDataset, Csv, RunSummary), ServerError> {
        let (dataset, csv) = self.generate_usecase.to_string(config, None).await?;
        let summary = self.printer.print_summary(&dataset, config);
        Ok((dataset, csv, summary))
    }

    /// Same as [`Self::to_string`], but with a fixed seed for
    /// reproducible runs (transaction ids still differ between runs).
    pub async fn to_string_seeded(
        &self,
        config: &GeneratorConfig,
        seed: u64,
    ) -> Result<(SalesDataset, Csv, RunSummary), ServerError> {
        let (dataset, csv) = self.generate_usecase.to_string(config, Some(seed)).await?;
        let summary = self.printer.print_summary(&dataset, config);
        Ok((dataset, csv, summary))
    }

    /// Synthesize a dataset from OS entropy and persist it to `path`.
    pub async fn to_file<T>(
        &self,
        config: &GeneratorConfig,
        path: T,
    ) -> Result<(SalesDataset, RunSummary), ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let dataset = self.generate_usecase.to_file(config, None, path).await?;
        let summary = self.printer.print_summary(&dataset, config);
        Ok((dataset, summary))
    }

    /// Same as [`Self::to_file`], but with a fixed seed.
    pub async fn to_file_seeded<T>(
        &self,
        config: &GeneratorConfig,
        seed: u64,
        path: T,
    ) -> Result<(SalesDataset, RunSummary), ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let dataset = self
            .generate_usecase
            .to_file(config, Some(seed), path)
            .await?;
        let summary = self.printer.print_summary(&dataset, config);
        Ok((dataset, summary))
    }
}
