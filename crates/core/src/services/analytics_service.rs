use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::period::PeriodKey;
use crate::models::purchase::Purchase;
use crate::models::session::Session;
use crate::models::summary::SpendingSummary;

/// Computes the dashboard headline numbers: total spend and busiest month.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of `price` over all purchases. Zero when there are none.
    pub fn total_amount(&self, purchases: &[Purchase]) -> Decimal {
        purchases.iter().map(|p| p.price).sum()
    }

    /// Sum of `item_count` over all purchases.
    pub fn total_items(&self, purchases: &[Purchase]) -> u64 {
        purchases.iter().map(|p| u64::from(p.item_count)).sum()
    }

    /// The purchase with the largest item count.
    ///
    /// Ties go to the earliest purchase: a later one only wins when it is
    /// strictly larger. (`Iterator::max_by_key` keeps the last maximum, so it
    /// can't be used here.)
    pub fn peak_purchase<'a>(&self, purchases: &'a [Purchase]) -> Option<&'a Purchase> {
        let mut peak: Option<&Purchase> = None;
        for purchase in purchases {
            match peak {
                Some(current) if purchase.item_count <= current.item_count => {}
                _ => peak = Some(purchase),
            }
        }
        peak
    }

    /// Full month name ("April") of the peak purchase's date.
    pub fn peak_purchase_month(&self, purchases: &[Purchase]) -> Option<String> {
        self.peak_purchase(purchases)
            .map(|p| PeriodKey::Month(p.purchase_date.month()).label())
    }

    /// Bundle the headline numbers for the whole session.
    pub fn get_summary(&self, session: &Session) -> SpendingSummary {
        let purchases = &session.purchases;
        SpendingSummary {
            currency: session.settings.currency_code.clone(),
            purchase_count: purchases.len(),
            total_items: self.total_items(purchases),
            total_amount: self.total_amount(purchases),
            peak_purchase_month: self.peak_purchase_month(purchases),
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
