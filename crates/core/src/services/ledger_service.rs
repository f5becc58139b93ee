use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::purchase::{Purchase, PurchaseInput, MAX_PRICE};
use crate::models::session::Session;

/// Validates purchase input and appends accepted purchases to the session.
///
/// Pure business logic, no I/O.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Validate `input`, stamp it with `today` if it carries no date, and
    /// append it to the end of the session's purchases.
    ///
    /// On error the session is left untouched.
    pub fn add_purchase(
        &self,
        session: &mut Session,
        input: PurchaseInput,
        today: NaiveDate,
    ) -> Result<Purchase, CoreError> {
        let item_count = match self.validate_input(&input) {
            Ok(count) => count,
            Err(e) => {
                warn!(name = %input.name, error = %e, "rejected purchase");
                return Err(e);
            }
        };

        let purchase = Purchase::new(
            input.name,
            item_count,
            input.price,
            input.category,
            input.purchase_date.unwrap_or(today),
        );
        debug!(
            id = %purchase.id,
            name = %purchase.name,
            item_count = purchase.item_count,
            price = %purchase.price,
            category = %purchase.category,
            date = %purchase.purchase_date,
            "recorded purchase"
        );
        session.purchases.push(purchase.clone());
        Ok(purchase)
    }

    /// Check the record invariants and return the item count narrowed to `u32`.
    ///
    /// Rules:
    /// - Name must not be empty (whitespace-only counts as empty)
    /// - Item count must be at least 1
    /// - Price must not be negative or above [`MAX_PRICE`]
    fn validate_input(&self, input: &PurchaseInput) -> Result<u32, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::InvalidRecord(
                "Purchase name must not be empty".into(),
            ));
        }

        if input.item_count < 1 {
            return Err(CoreError::InvalidRecord(format!(
                "Item count must be at least 1, got {}",
                input.item_count
            )));
        }
        let item_count = u32::try_from(input.item_count).map_err(|_| {
            CoreError::InvalidRecord(format!(
                "Item count {} is too large (maximum {})",
                input.item_count,
                u32::MAX
            ))
        })?;

        if input.price < Decimal::ZERO {
            return Err(CoreError::InvalidRecord(format!(
                "Price must not be negative, got {}",
                input.price
            )));
        }
        if input.price > Decimal::from(MAX_PRICE) {
            return Err(CoreError::InvalidRecord(format!(
                "Price {} exceeds maximum of {MAX_PRICE}",
                input.price
            )));
        }

        Ok(item_count)
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
