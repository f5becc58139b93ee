use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The numbers behind the dashboard headlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingSummary {
    /// Currency code all amounts are in
    pub currency: String,

    /// Number of purchases recorded
    pub purchase_count: usize,

    /// Sum of `item_count` over all purchases
    pub total_items: u64,

    /// Sum of `price` over all purchases
    pub total_amount: Decimal,

    /// Month name of the purchase with the most items, if any
    pub peak_purchase_month: Option<String>,
}
