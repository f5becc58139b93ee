use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::period::PeriodKey;
use super::purchase::Purchase;

/// Which numeric field of a purchase a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartMetric {
    #[default]
    ItemCount,
    Price,
}

impl ChartMetric {
    /// The metric's value for one purchase. Item counts are widened to `Decimal`
    /// so both metrics share an axis type.
    pub fn value_of(&self, purchase: &Purchase) -> Decimal {
        match self {
            ChartMetric::ItemCount => Decimal::from(purchase.item_count),
            ChartMetric::Price => purchase.price,
        }
    }
}

impl std::fmt::Display for ChartMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartMetric::ItemCount => write!(f, "Item Count"),
            ChartMetric::Price => write!(f, "Price"),
        }
    }
}

/// One bar of the "purchases per period" chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCount {
    pub key: PeriodKey,

    /// Axis label, e.g. "April"
    pub label: String,

    /// Sum of `item_count` over purchases in this bucket
    pub item_count: u64,
}

/// One bar of the "purchases by category" chart: a purchase and its metric value.
///
/// There is one point per purchase, coloured by `purchase.category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdownPoint {
    pub purchase: Purchase,
    pub value: Decimal,
}

/// A metric summed over every purchase of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub value: Decimal,
    pub purchase_count: usize,
}

/// One bar of the per-item spend chart (price on x, name on y).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpendPoint {
    pub name: String,
    pub price: Decimal,
    pub category: Category,
}
