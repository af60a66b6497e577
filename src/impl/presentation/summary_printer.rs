use crate::entities::{GeneratorConfig, SalesDataset};

use super::utils::{format_amount, format_count};

/// Prints the human-readable summary of one generation run.
pub(crate) struct SummaryPrinter;

impl SummaryPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_summary(&self, dataset: &SalesDataset, config: &GeneratorConfig) -> String {
        format!(
            "Dataset generated with {} records ({} to {}). Total revenue: {}.",
            format_count(dataset.len()),
            config.start_date.format("%Y-%m-%d"),
            config.end_date.format("%Y-%m-%d"),
            format_amount(dataset.total_revenue()),
        )
    }
}

// --

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use crate::entities::{
        Category, PaymentMethod, StoreLocation, TransactionId, TransactionRecord,
    };

    use super::*;

    #[test]
    fn summary_reports_count_range_and_revenue() {
        let config = GeneratorConfig {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            ..GeneratorConfig::default()
        };
        let dataset = SalesDataset {
            records: vec![TransactionRecord {
                transaction_id: TransactionId::random(),
                date: config.start_date,
                time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
                product_id: "D001".to_string(),
                product_name: "Espresso".to_string(),
                category: Category::Beverage,
                unit_price: 3.00,
                quantity: 2,
                total_price: 6.00,
                payment_method: PaymentMethod::Cash,
                store_location: StoreLocation::Suburbs,
            }],
        };
        let summary = SummaryPrinter::new().print_summary(&dataset, &config);
        assert_eq!(
            summary,
            "Dataset generated with 1 records (2025-01-01 to 2025-01-02). Total revenue: $6.00."
        );
    }
}
