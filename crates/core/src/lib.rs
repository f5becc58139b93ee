pub mod errors;
pub mod models;
pub mod services;

use std::sync::Once;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use models::{
    category::Category,
    chart::{CategoryBreakdownPoint, CategoryTotal, ChartMetric, ItemSpendPoint, PeriodCount},
    period::CalendarPeriod,
    purchase::{Purchase, PurchaseInput},
    session::Session,
    settings::Settings,
    summary::SpendingSummary,
};
use services::{
    analytics_service::AnalyticsService, chart_service::ChartService,
    ledger_service::LedgerService,
};

use errors::CoreError;

static INIT_TRACING: Once = Once::new();

/// Install a `tracing` fmt subscriber filtered by `RUST_LOG`
/// (default `shopping_tracker_core=info`). Safe to call more than once.
///
/// The library itself never installs a subscriber; hosts opt in here.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("shopping_tracker_core=info"));

        // Another subscriber may already be installed by the host.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

/// Main entry point for the Shopping Tracker core library.
/// Holds the session's purchases and all services needed to query them.
#[must_use]
pub struct PurchaseLedger {
    session: Session,
    ledger_service: LedgerService,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
}

impl std::fmt::Debug for PurchaseLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurchaseLedger")
            .field("purchases", &self.session.purchases.len())
            .field("settings", &self.session.settings)
            .finish()
    }
}

impl Default for PurchaseLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl PurchaseLedger {
    /// Create an empty ledger with default settings.
    pub fn new() -> Self {
        Self::build(Session::default())
    }

    /// Create an empty ledger with the given settings.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(Session {
            purchases: Vec::new(),
            settings,
        }))
    }

    /// Create a ledger preloaded with the demo purchases shown on first launch.
    /// `today` anchors the one purchase dated "yesterday".
    pub fn with_sample_purchases(today: NaiveDate) -> Self {
        let yesterday = today.pred_opt().unwrap_or(today);
        let samples = [
            ("Apple Watch", 1, 18000, Category::Electronics, yesterday),
            ("Uniqlo Pants", 2, 1500, Category::Clothing, sample_date(2022, 1, 15)),
            ("Burger", 3, 18000, Category::Food, sample_date(2022, 4, 10)),
            ("Apple M1 MacBook Pro", 1, 72000, Category::Electronics, sample_date(2022, 4, 1)),
            ("Samsung TV", 1, 14000, Category::Appliance, sample_date(2022, 2, 21)),
        ];

        let purchases = samples
            .into_iter()
            .map(|(name, count, price, category, date)| {
                Purchase::new(name.to_string(), count, Decimal::from(price), category, date)
            })
            .collect();

        Self::build(Session {
            purchases,
            settings: Settings::default(),
        })
    }

    // ── Recording ───────────────────────────────────────────────────

    /// Validate and append a purchase. Returns a copy of the stored record.
    ///
    /// Purchases without an explicit date are stamped with today's local date.
    /// Fails with [`CoreError::InvalidRecord`] and leaves the ledger unchanged
    /// when the name is empty, the item count is below 1, or the price is
    /// negative or above [`models::purchase::MAX_PRICE`].
    pub fn add_purchase(&mut self, input: PurchaseInput) -> Result<Purchase, CoreError> {
        let today = Local::now().date_naive();
        self.ledger_service
            .add_purchase(&mut self.session, input, today)
    }

    // ── Reading ─────────────────────────────────────────────────────

    /// All purchases, in the order they were recorded.
    #[must_use]
    pub fn purchases(&self) -> &[Purchase] {
        &self.session.purchases
    }

    /// Get a single purchase by its ID.
    #[must_use]
    pub fn get_purchase(&self, id: Uuid) -> Option<&Purchase> {
        self.session.purchases.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn purchase_count(&self) -> usize {
        self.session.purchases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.session.purchases.is_empty()
    }

    /// Purchases of one category, in recording order.
    #[must_use]
    pub fn purchases_in_category(&self, category: Category) -> Vec<&Purchase> {
        self.chart_service
            .purchases_in_category(&self.session.purchases, category)
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// Sum of all purchase prices. Zero for an empty ledger.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.analytics_service.total_amount(&self.session.purchases)
    }

    /// Month name of the purchase with the most items (first one wins ties).
    /// `None` for an empty ledger.
    #[must_use]
    pub fn peak_purchase_month(&self) -> Option<String> {
        self.analytics_service
            .peak_purchase_month(&self.session.purchases)
    }

    /// Headline numbers for the dashboard.
    #[must_use]
    pub fn summary(&self) -> SpendingSummary {
        self.analytics_service.get_summary(&self.session)
    }

    /// e.g. "Total expenses you made is ₱37500.00"
    #[must_use]
    pub fn total_headline(&self) -> String {
        format!(
            "Total expenses you made is {}",
            self.session.settings.format_amount(self.total_amount())
        )
    }

    /// e.g. "Most Purchases is on April", or "... on None" for an empty ledger.
    #[must_use]
    pub fn peak_month_headline(&self) -> String {
        let month = self
            .peak_purchase_month()
            .unwrap_or_else(|| "None".to_string());
        format!("Most Purchases is on {month}")
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Data for the per-item spend chart.
    #[must_use]
    pub fn spend_by_item(&self) -> Vec<ItemSpendPoint> {
        self.chart_service.spend_by_item(&self.session.purchases)
    }

    /// Item counts bucketed by calendar period, buckets in first-seen order.
    #[must_use]
    pub fn counts_by_period(&self, period: CalendarPeriod) -> Vec<PeriodCount> {
        self.chart_service
            .counts_by_period(&self.session.purchases, period)
    }

    /// One entry per purchase pairing it with the chosen metric.
    #[must_use]
    pub fn breakdown_by_category(&self, metric: ChartMetric) -> Vec<CategoryBreakdownPoint> {
        self.chart_service
            .breakdown_by_category(&self.session.purchases, metric)
    }

    /// The chosen metric summed per category.
    #[must_use]
    pub fn category_totals(&self, metric: ChartMetric) -> Vec<CategoryTotal> {
        self.chart_service
            .category_totals(&self.session.purchases, metric)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.session.settings
    }

    /// Set the currency code and display symbol. The code is uppercased.
    pub fn set_currency(
        &mut self,
        code: &str,
        symbol: impl Into<String>,
    ) -> Result<(), CoreError> {
        let candidate = Settings {
            currency_code: code.trim().to_uppercase(),
            currency_symbol: symbol.into(),
            ..self.session.settings.clone()
        };
        self.replace_settings(candidate)
    }

    /// Set how many fraction digits formatted amounts show.
    pub fn set_fraction_digits(&mut self, digits: u32) -> Result<(), CoreError> {
        let candidate = Settings {
            fraction_digits: digits,
            ..self.session.settings.clone()
        };
        self.replace_settings(candidate)
    }

    /// Replace all settings from a JSON document.
    pub fn load_settings_from_json(&mut self, json: &str) -> Result<(), CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        self.replace_settings(settings)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export all purchases as a JSON array.
    pub fn export_purchases_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.session.purchases).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize purchases to JSON: {e}"))
        })
    }

    /// Export the whole session (purchases and settings) as JSON for display/debugging.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.session)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize session: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn replace_settings(&mut self, settings: Settings) -> Result<(), CoreError> {
        settings.validate()?;
        debug!(?settings, "updated settings");
        self.session.settings = settings;
        Ok(())
    }

    fn build(session: Session) -> Self {
        Self {
            session,
            ledger_service: LedgerService::new(),
            analytics_service: AnalyticsService::new(),
            chart_service: ChartService::new(),
        }
    }
}

fn sample_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
