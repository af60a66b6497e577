use chrono::NaiveDate;
use fractic_server_error::{define_client_error, define_internal_error};

// Configuration-related. All of these indicate a programming or config
// mistake and are raised before any generation happens.
define_client_error!(EmptyMenuCatalog, "Menu catalog is empty.");
define_client_error!(
    DuplicateProductId,
    "Duplicate product id in menu catalog: '{product_id}'.",
    { product_id: &str }
);
define_client_error!(
    NonPositiveUnitPrice,
    "Menu item '{product_id}' has a non-positive unit price ({unit_price}).",
    { product_id: &str, unit_price: f64 }
);
define_client_error!(
    InvalidDateRange,
    "Invalid date range: end date ({end}) is before start date ({start}).",
    { start: &NaiveDate, end: &NaiveDate }
);
define_client_error!(
    InvalidVolumeBounds,
    "Invalid daily volume bounds for {day_class}: min ({min}) exceeds max ({max}).",
    { day_class: &str, min: u32, max: u32 }
);

// Distribution-related.
define_client_error!(
    EmptyDistribution,
    "Weighted distribution '{distribution}' has no entries.",
    { distribution: &str }
);
define_client_error!(
    NegativeWeight,
    "Weighted distribution '{distribution}' contains a negative weight ({weight}).",
    { distribution: &str, weight: f64 }
);
define_client_error!(
    InvalidWeightSum,
    "Weights of distribution '{distribution}' sum to {sum}, expected 1.0.",
    { distribution: &str, sum: f64 }
);
define_client_error!(
    InvalidBusinessHour,
    "Business-hour distribution contains an out-of-range hour ({hour}).",
    { hour: u32 }
);

// IO-related.
define_client_error!(
    WriteError,
    "Error writing dataset to '{path}'.",
    { path: &str }
);
define_internal_error!(CsvSerializationError, "Error serializing dataset to CSV.");
