use chrono::{Datelike, NaiveDate, Weekday};
use fractic_server_error::ServerError;
use rand::Rng;

use crate::entities::{GeneratorConfig, SalesDataset};

use super::synthesizer::TransactionSynthesizer;

/// Walks every calendar day of the configured closed range, draws the
/// day's transaction volume (weekend days are busier), and invokes the
/// synthesizer once per transaction.
pub(crate) struct CalendarDriver<'a> {
    config: &'a GeneratorConfig,
    synthesizer: TransactionSynthesizer<'a>,
}

impl<'a> CalendarDriver<'a> {
    pub(crate) fn new(config: &'a GeneratorConfig) -> Result<Self, ServerError> {
        Ok(Self {
            config,
            synthesizer: TransactionSynthesizer::new(config)?,
        })
    }

    pub(crate) fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> SalesDataset {
        let mut records = Vec::new();
        let mut date = self.config.start_date;
        while date <= self.config.end_date {
            let volume = if is_weekend(date) {
                self.config.weekend_volume
            } else {
                self.config.weekday_volume
            };
            let daily_transactions = rng.random_range(volume.min..=volume.max);
            for _ in 0..daily_transactions {
                records.push(self.synthesizer.synthesize(date, rng));
            }
            let Some(next) = date.succ_opt() else { break };
            date = next;
        }
        SalesDataset { records }
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

// --

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn config_for_range(start: (i32, u32, u32), end: (i32, u32, u32)) -> GeneratorConfig {
        GeneratorConfig {
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn weekend_classification() {
        // 2025-06-06 is a Friday.
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 6, 8).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()));
    }

    #[test]
    fn two_day_range_row_count_within_combined_bounds() {
        // One weekday (Fri 2025-06-06) plus one weekend day (Sat 2025-06-07).
        let config = config_for_range((2025, 6, 6), (2025, 6, 7));
        let driver = CalendarDriver::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let dataset = driver.run(&mut rng);
        assert!((230..=400).contains(&dataset.len()));
        for record in &dataset.records {
            assert!(record.date == config.start_date || record.date == config.end_date);
        }
    }

    #[test]
    fn per_day_volume_respects_weekday_and_weekend_bounds() {
        // Full week: Mon 2025-06-02 through Sun 2025-06-08.
        let config = config_for_range((2025, 6, 2), (2025, 6, 8));
        let driver = CalendarDriver::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(12);
        let dataset = driver.run(&mut rng);

        let mut per_day: HashMap<NaiveDate, u32> = HashMap::new();
        for record in &dataset.records {
            *per_day.entry(record.date).or_default() += 1;
        }
        assert_eq!(per_day.len(), 7);
        for (date, count) in per_day {
            let volume = if is_weekend(date) {
                config.weekend_volume
            } else {
                config.weekday_volume
            };
            assert!(
                (volume.min..=volume.max).contains(&count),
                "{date}: {count} transactions outside [{}, {}]",
                volume.min,
                volume.max
            );
        }
    }

    #[test]
    fn single_day_range_covers_exactly_that_day() {
        let config = config_for_range((2025, 1, 1), (2025, 1, 1));
        let driver = CalendarDriver::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(13);
        let dataset = driver.run(&mut rng);
        assert!(!dataset.is_empty());
        assert!(dataset.records.iter().all(|r| r.date == config.start_date));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = config_for_range((2025, 6, 6), (2025, 6, 7));
        let driver = CalendarDriver::new(&config).unwrap();
        let a = driver.run(&mut StdRng::seed_from_u64(99));
        let b = driver.run(&mut StdRng::seed_from_u64(99));
        assert_eq!(a.len(), b.len());
        for (x, y) in a.records.iter().zip(&b.records) {
            assert_eq!(x.date, y.date);
            assert_eq!(x.time, y.time);
            assert_eq!(x.product_id, y.product_id);
            assert_eq!(x.quantity, y.quantity);
            assert_eq!(x.total_price, y.total_price);
        }
    }
}
