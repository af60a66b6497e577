use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use super::menu_item::Category;

/// Globally-unique opaque identifier for one synthesized transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId(pub(crate) Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    MobilePayment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreLocation {
    Downtown,
    Suburbs,
}

/// One row of the output table. Immutable once synthesized.
///
/// Product fields are copied out of the chosen menu item so the record is
/// self-contained; `total_price` is always `unit_price * quantity`.
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    pub transaction_id: TransactionId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub product_id: String,
    pub product_name: String,
    pub category: Category,
    pub unit_price: f64,
    pub quantity: u32,
    pub total_price: f64,
    pub payment_method: PaymentMethod,
    pub store_location: StoreLocation,
}

// --

impl TransactionId {
    /// Fresh random 128-bit identifier; collision probability across a
    /// single run is negligible.
    pub(crate) fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::MobilePayment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::MobilePayment => "Mobile Payment",
        }
    }
}

impl StoreLocation {
    pub const ALL: [StoreLocation; 2] = [StoreLocation::Downtown, StoreLocation::Suburbs];

    pub fn label(&self) -> &'static str {
        match self {
            StoreLocation::Downtown => "Downtown",
            StoreLocation::Suburbs => "Suburbs",
        }
    }
}
