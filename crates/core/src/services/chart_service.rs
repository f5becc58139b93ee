use std::collections::HashMap;

use crate::models::category::Category;
use crate::models::chart::{
    CategoryBreakdownPoint, CategoryTotal, ChartMetric, ItemSpendPoint, PeriodCount,
};
use crate::models::period::{CalendarPeriod, PeriodKey};
use crate::models::purchase::Purchase;

/// Generates chart-ready data sets from the purchase list.
///
/// The core computes all the numbers; the frontend only renders.
/// Every output keeps purchases (or buckets) in ledger order; nothing is
/// sorted by date, value or name.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// One bar per purchase: price against name, coloured by category.
    pub fn spend_by_item(&self, purchases: &[Purchase]) -> Vec<ItemSpendPoint> {
        purchases
            .iter()
            .map(|p| ItemSpendPoint {
                name: p.name.clone(),
                price: p.price,
                category: p.category,
            })
            .collect()
    }

    /// Sum item counts per calendar bucket.
    ///
    /// Buckets appear in the order their first purchase appears in the ledger.
    pub fn counts_by_period(
        &self,
        purchases: &[Purchase],
        period: CalendarPeriod,
    ) -> Vec<PeriodCount> {
        let mut buckets: Vec<PeriodCount> = Vec::new();
        // Bucket key -> index into `buckets`
        let mut index: HashMap<PeriodKey, usize> = HashMap::new();

        for purchase in purchases {
            let key = PeriodKey::of(period, purchase.purchase_date);
            let slot = *index.entry(key).or_insert_with(|| {
                buckets.push(PeriodCount {
                    key,
                    label: key.label(),
                    item_count: 0,
                });
                buckets.len() - 1
            });
            buckets[slot].item_count += u64::from(purchase.item_count);
        }

        buckets
    }

    /// Pair every purchase with its metric value, in ledger order.
    ///
    /// One entry per purchase, not per category: the chart stacks
    /// one segment per purchase and colours it by category.
    /// Use [`ChartService::category_totals`] for real per-category sums.
    pub fn breakdown_by_category(
        &self,
        purchases: &[Purchase],
        metric: ChartMetric,
    ) -> Vec<CategoryBreakdownPoint> {
        purchases
            .iter()
            .map(|p| CategoryBreakdownPoint {
                purchase: p.clone(),
                value: metric.value_of(p),
            })
            .collect()
    }

    /// Sum the metric per category. Categories appear in order of first use;
    /// categories with no purchases are omitted.
    pub fn category_totals(
        &self,
        purchases: &[Purchase],
        metric: ChartMetric,
    ) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for purchase in purchases {
            let value = metric.value_of(purchase);
            match totals.iter_mut().find(|t| t.category == purchase.category) {
                Some(total) => {
                    total.value += value;
                    total.purchase_count += 1;
                }
                None => totals.push(CategoryTotal {
                    category: purchase.category,
                    value,
                    purchase_count: 1,
                }),
            }
        }

        totals
    }

    /// Purchases of a single category, in ledger order.
    pub fn purchases_in_category<'a>(
        &self,
        purchases: &'a [Purchase],
        category: Category,
    ) -> Vec<&'a Purchase> {
        purchases.iter().filter(|p| p.category == category).collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
