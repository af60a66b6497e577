use std::collections::HashSet;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::errors::{
    DuplicateProductId, EmptyMenuCatalog, InvalidDateRange, InvalidVolumeBounds,
    NonPositiveUnitPrice,
};

use super::menu_item::{Category, MenuItem};

/// Inclusive bounds for the number of transactions synthesized on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyVolume {
    pub min: u32,
    pub max: u32,
}

/// Full configuration of one generation run.
///
/// The `Default` impl carries the standard business rules: a full 2025
/// calendar year, the 12-item coffee-shop menu, morning-heavy business
/// hours 7:00-19:59, and quantity skewed heavily towards 1.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub start_date: NaiveDate,
    /// Inclusive.
    pub end_date: NaiveDate,
    pub weekday_volume: DailyVolume,
    pub weekend_volume: DailyVolume,
    pub menu: Vec<MenuItem>,
    /// (hour-of-day, probability) pairs; must sum to 1.0.
    pub hour_weights: Vec<(u32, f64)>,
    /// (quantity, probability) pairs; must sum to 1.0.
    pub quantity_weights: Vec<(u32, f64)>,
}

// --

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid calendar date"),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid calendar date"),
            weekday_volume: DailyVolume { min: 80, max: 150 },
            weekend_volume: DailyVolume { min: 150, max: 250 },
            menu: default_menu(),
            hour_weights: vec![
                (7, 0.10),
                (8, 0.20),
                (9, 0.15),
                (10, 0.10),
                (11, 0.10),
                (12, 0.05),
                (13, 0.05),
                (14, 0.05),
                (15, 0.05),
                (16, 0.05),
                (17, 0.05),
                (18, 0.025),
                (19, 0.025),
            ],
            quantity_weights: vec![(1, 0.80), (2, 0.15), (3, 0.05)],
        }
    }
}

impl GeneratorConfig {
    /// Fail-fast structural checks, run once before any generation.
    /// Weight lists are validated separately when the categorical
    /// distributions are built.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.menu.is_empty() {
            return Err(EmptyMenuCatalog::new());
        }
        let mut seen_ids = HashSet::new();
        for item in &self.menu {
            if !seen_ids.insert(item.product_id.as_str()) {
                return Err(DuplicateProductId::new(&item.product_id));
            }
            if item.unit_price <= 0.0 {
                return Err(NonPositiveUnitPrice::new(&item.product_id, item.unit_price));
            }
        }
        if self.end_date < self.start_date {
            return Err(InvalidDateRange::new(&self.start_date, &self.end_date));
        }
        for (day_class, volume) in [
            ("weekdays", self.weekday_volume),
            ("weekends", self.weekend_volume),
        ] {
            if volume.min > volume.max {
                return Err(InvalidVolumeBounds::new(day_class, volume.min, volume.max));
            }
        }
        Ok(())
    }
}

fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("D001", "Espresso", Category::Beverage, 3.00, 0.50),
        MenuItem::new("D002", "Latte", Category::Beverage, 4.50, 1.20),
        MenuItem::new("D003", "Cappuccino", Category::Beverage, 4.50, 1.10),
        MenuItem::new("D004", "Americano", Category::Beverage, 3.50, 0.60),
        MenuItem::new("D005", "Mocha", Category::Beverage, 5.00, 1.50),
        MenuItem::new("D006", "Tea", Category::Beverage, 3.00, 0.30),
        MenuItem::new("F001", "Croissant", Category::Food, 3.50, 1.00),
        MenuItem::new("F002", "Muffin", Category::Food, 3.00, 0.80),
        MenuItem::new("F003", "Bagel", Category::Food, 2.50, 0.70),
        MenuItem::new("F004", "Sandwich", Category::Food, 7.00, 2.50),
        MenuItem::new("M001", "Coffee Beans (1lb)", Category::Merch, 15.00, 8.00),
        MenuItem::new("M002", "Mug", Category::Merch, 12.00, 5.00),
    ]
}

// --
