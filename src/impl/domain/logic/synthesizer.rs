use chrono::{Duration, NaiveDate, NaiveTime};
use fractic_server_error::ServerError;
use rand::Rng;

use crate::{
    entities::{
        GeneratorConfig, MenuItem, PaymentMethod, StoreLocation, TransactionId, TransactionRecord,
    },
    errors::{EmptyMenuCatalog, InvalidBusinessHour},
};

use super::categorical::Categorical;

/// Produces one [`TransactionRecord`] per call for a given calendar date.
///
/// All random draws go through the explicit `rng` parameter; calls are
/// stochastically independent and synthesis itself cannot fail (every
/// distribution is validated at construction).
pub(crate) struct TransactionSynthesizer<'a> {
    menu: &'a [MenuItem],
    /// Top-of-hour marks weighted by the business-hour distribution.
    hour_marks: Categorical<NaiveTime>,
    quantities: Categorical<u32>,
}

impl<'a> TransactionSynthesizer<'a> {
    pub(crate) fn new(config: &'a GeneratorConfig) -> Result<Self, ServerError> {
        if config.menu.is_empty() {
            return Err(EmptyMenuCatalog::new());
        }
        let hour_marks = Categorical::new(
            "business hours",
            config
                .hour_weights
                .iter()
                .map(|&(hour, weight)| {
                    NaiveTime::from_hms_opt(hour, 0, 0)
                        .map(|mark| (mark, weight))
                        .ok_or_else(|| InvalidBusinessHour::new(hour))
                })
                .collect::<Result<Vec<_>, ServerError>>()?,
        )?;
        let quantities = Categorical::new("quantity", config.quantity_weights.clone())?;
        Ok(Self {
            menu: &config.menu,
            hour_marks,
            quantities,
        })
    }

    pub(crate) fn synthesize<R: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        rng: &mut R,
    ) -> TransactionRecord {
        let minute: u32 = rng.random_range(0..60);
        let time = *self.hour_marks.sample(rng) + Duration::minutes(i64::from(minute));
        let item = &self.menu[rng.random_range(0..self.menu.len())];
        let quantity = *self.quantities.sample(rng);
        let payment_method = PaymentMethod::ALL[rng.random_range(0..PaymentMethod::ALL.len())];
        let store_location = StoreLocation::ALL[rng.random_range(0..StoreLocation::ALL.len())];
        TransactionRecord {
            transaction_id: TransactionId::random(),
            date,
            time,
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            category: item.category,
            unit_price: item.unit_price,
            quantity,
            total_price: item.unit_price * f64::from(quantity),
            payment_method,
            store_location,
        }
    }
}

// --

#[cfg(test)]
mod tests {
    use chrono::Timelike;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::entities::Category;

    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 17).unwrap()
    }

    #[test]
    fn records_satisfy_domain_invariants() {
        let config = GeneratorConfig::default();
        let synthesizer = TransactionSynthesizer::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..5_000 {
            let record = synthesizer.synthesize(sample_date(), &mut rng);
            assert_eq!(record.date, sample_date());
            assert!((7..=19).contains(&record.time.hour()));
            assert!([1, 2, 3].contains(&record.quantity));
            assert_eq!(
                record.total_price,
                record.unit_price * f64::from(record.quantity)
            );
            assert!(PaymentMethod::ALL.contains(&record.payment_method));
            assert!(StoreLocation::ALL.contains(&record.store_location));
        }
    }

    #[test]
    fn product_fields_match_a_catalog_entry() {
        let config = GeneratorConfig::default();
        let synthesizer = TransactionSynthesizer::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1_000 {
            let record = synthesizer.synthesize(sample_date(), &mut rng);
            let matches = config
                .menu
                .iter()
                .filter(|item| {
                    item.product_id == record.product_id
                        && item.product_name == record.product_name
                        && item.category == record.category
                        && item.unit_price == record.unit_price
                })
                .count();
            assert_eq!(matches, 1);
        }
    }

    #[test]
    fn single_item_forced_quantity_yields_fixed_total() {
        let config = GeneratorConfig {
            menu: vec![MenuItem::new("X001", "Flat White", Category::Beverage, 5.00, 1.00)],
            quantity_weights: vec![(1, 1.0)],
            ..GeneratorConfig::default()
        };
        let synthesizer = TransactionSynthesizer::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let record = synthesizer.synthesize(sample_date(), &mut rng);
            assert_eq!(record.total_price, 5.00);
            assert_eq!(record.quantity, 1);
            assert_eq!(record.product_id, "X001");
        }
    }

    #[test]
    fn out_of_range_business_hour_is_rejected() {
        let config = GeneratorConfig {
            hour_weights: vec![(24, 1.0)],
            ..GeneratorConfig::default()
        };
        assert!(TransactionSynthesizer::new(&config).is_err());
    }
}
