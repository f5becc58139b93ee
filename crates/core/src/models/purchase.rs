use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// Upper bound of the item-count stepper on the purchase form.
/// Informational for the form; the ledger itself accepts any positive count.
pub const MAX_FORM_ITEM_COUNT: i64 = 20;

/// Largest price accepted for one purchase, in whole currency units.
///
/// `Decimal` tops out near 7.9e28, so sums over up to 7.9e16 purchases at
/// this ceiling stay in range and the totals never overflow.
pub const MAX_PRICE: i64 = 1_000_000_000_000;

/// A single recorded purchase.
///
/// Once stored in the ledger a purchase never changes; callers only ever
/// receive clones or shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    /// Unique identifier, never reused
    pub id: Uuid,

    /// What was bought (never empty)
    pub name: String,

    /// Quantity of items in this purchase (at least 1)
    pub item_count: u32,

    /// Total price paid for the purchase, not per item (never negative)
    pub price: Decimal,

    pub category: Category,

    /// Day of the purchase (no time component)
    pub purchase_date: NaiveDate,
}

impl Purchase {
    /// Build a purchase with a fresh id. Field validation happens in the ledger service.
    pub(crate) fn new(
        name: String,
        item_count: u32,
        price: Decimal,
        category: Category,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            item_count,
            price,
            category,
            purchase_date,
        }
    }
}

/// What the purchase form hands to the ledger.
///
/// `item_count` is signed so that out-of-range form values reach validation
/// instead of being silently wrapped. `purchase_date` defaults to today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseInput {
    pub name: String,
    pub item_count: i64,
    pub price: Decimal,
    pub category: Category,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
}

impl PurchaseInput {
    pub fn new(
        name: impl Into<String>,
        item_count: i64,
        price: Decimal,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            item_count,
            price,
            category,
            purchase_date: None,
        }
    }

    /// Set an explicit purchase date instead of "today".
    #[must_use]
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.purchase_date = Some(date);
        self
    }

    /// Whether the form's save action should be enabled.
    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl Default for PurchaseInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            item_count: 1,
            price: Decimal::ZERO,
            category: Category::Other,
            purchase_date: None,
        }
    }
}
