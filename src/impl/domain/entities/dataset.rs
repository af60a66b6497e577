use super::transaction::TransactionRecord;

/// All records of one generation run, in generation order (day by day,
/// then within-day synthesis order). Downstream consumers treat the
/// order as irrelevant.
#[derive(Debug, Default)]
pub struct SalesDataset {
    pub records: Vec<TransactionRecord>,
}

// --

impl SalesDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_revenue(&self) -> f64 {
        self.records.iter().map(|r| r.total_price).sum()
    }
}
